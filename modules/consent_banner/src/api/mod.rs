//! API layer - REST and native surfaces

pub mod native;
pub mod rest;
