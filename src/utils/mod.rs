//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Render configuration

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::RenderConfig;
pub use error::{Error, Result};
