//! Infrastructure layer - host-environment adapters

pub mod pages;
pub mod storage;
