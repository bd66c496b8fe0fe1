//! Domain models for the order board

pub mod order;
pub mod summary;
