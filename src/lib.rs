//! # texfrag
//!
//! Render tabular data and image paths as LaTeX fragments for generated
//! documents.
//!
//! ## Features
//!
//! - **Escaping**: single-pass escaping of LaTeX special characters
//! - **Tables**: `tabularx` tables from rows and an explicit column list
//! - **Frame Tables**: booktabs tables from a whole frame, with optional
//!   full-width flexible columns
//! - **Figures**: `\includegraphics` floats with caption and label taken
//!   from the file name
//! - **Data Loading**: CSV, JSON and YAML input (`data-loading` feature)
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Escaping
//!
//! ```rust
//! use texfrag::escape_latex;
//!
//! assert_eq!(escape_latex("a_b&c"), r"a\_b\&c");
//! ```
//!
//! ### Tables and Figures
//!
//! ```rust
//! use texfrag::{render_figure, render_table, row, DEFAULT_IMAGE_WIDTH};
//!
//! let rows = vec![
//!     row! { "Name" => "alice", "Score" => 91 },
//!     row! { "Name" => "bob", "Score" => 78 },
//! ];
//! let table = render_table(&rows, "exam_scores", "exam scores", &["Name", "Score"]).unwrap();
//! assert!(table.contains(r"\caption{Exam Scores}"));
//! assert!(table.contains(r"\label{tab:exam\_scores}"));
//!
//! let figure = render_figure("plots/cpu_usage.png", DEFAULT_IMAGE_WIDTH);
//! assert!(figure.contains(r"\label{fig:cpu_usage}"));
//! ```

/// Core text routines
pub mod core;

/// Data layer - tabular input model
pub mod data;

/// Feature modules - fragment renderers
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core routines
pub use crate::core::escape::escape_latex;
pub use crate::core::text::{display_caption, escaped_label, file_label, plain_label, title_case};

// Re-export data model
#[cfg(feature = "data-loading")]
pub use data::DataFormat;
pub use data::{Row, TabularData, Value};

// Re-export renderers
pub use features::figures::{
    normalize_width, render_figure, render_figure_with_options, FigureOptions, DEFAULT_IMAGE_WIDTH,
};
pub use features::frames::{
    render_table_from_frame, render_table_from_frame_with, render_table_from_frame_with_options,
    BooktabsRenderer, FrameFormat, FrameRenderer, FrameTableOptions,
};
pub use features::tables::{render_table, render_table_with_options, TableOptions};

// Re-export utilities
pub use utils::config::RenderConfig;
pub use utils::error::{Error, Result};
