//! Error handling utilities
//!
//! This module provides the crate error taxonomy and the shared `Result` alias.

pub mod error;

pub use error::{AccessError, Result};
