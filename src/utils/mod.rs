//! Utility modules for the policy engine

pub mod error;

pub use error::{AccessError, Result};
