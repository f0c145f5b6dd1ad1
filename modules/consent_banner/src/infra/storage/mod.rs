//! Storage layer - option store implementations

pub mod file;
pub mod mapper;
pub mod memory;

pub use file::{JsonFileOptionStore, StorageError};
pub use memory::MemoryOptionStore;
