//! Core Module
//!
//! Shared error taxonomy and common types.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{now, Timestamp};
