//! Common types and utilities for the order board
//!
//! This library contains the shared domain types, decimal aliases and the
//! unified error type used by the order registry, the board service and any
//! caller sitting in front of them.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt, IntoError};
pub use decimal::*;
