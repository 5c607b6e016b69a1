//! Data layer - tabular input model
//!
//! This module contains the in-memory representation of tables:
//! - Typed cell values
//! - Ordered rows and columns
//! - Loading from CSV/JSON/YAML (with the `data-loading` feature)

pub mod frame;
#[cfg(feature = "data-loading")]
pub mod load;
pub mod value;

// Re-export commonly used items
pub use frame::{Row, TabularData};
#[cfg(feature = "data-loading")]
pub use load::DataFormat;
pub use value::Value;
