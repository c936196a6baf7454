//! Common utilities module
//!
//! Shared error type and the bulk byte copy used across the matrix engine.

pub mod error;
pub(crate) mod mem_copy;

pub use error::{MatrixError, Result};
