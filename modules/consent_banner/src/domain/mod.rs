//! Domain layer - business logic and services

pub mod defaults;
pub mod display;
pub mod events;
pub mod repository;
pub mod resolve;
pub mod sanitize;
pub mod service;

pub use events::{BannerEvent, EventPublisher, NoOpEventPublisher};
pub use repository::{OptionStore, PageDirectory};
pub use service::Service;
