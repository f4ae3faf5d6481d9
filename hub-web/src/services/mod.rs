//! Browser services

pub mod navigation;
pub mod timer;
