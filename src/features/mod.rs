//! Feature modules - LaTeX fragment renderers
//!
//! This module contains one renderer per kind of fragment:
//! - Explicit-column `tabularx` tables
//! - Frame passthrough tables (booktabs converter plus post-processing)
//! - Image figures

pub mod figures;
pub mod frames;
pub mod tables;

// Re-export commonly used types
pub use figures::{FigureOptions, DEFAULT_IMAGE_WIDTH};
pub use frames::{BooktabsRenderer, FrameFormat, FrameRenderer, FrameTableOptions};
pub use tables::TableOptions;
