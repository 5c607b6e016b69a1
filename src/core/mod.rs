//! Core text routines
//!
//! This module contains the string-level building blocks shared by every
//! renderer:
//! - `escape`: LaTeX special-character escaping
//! - `text`: caption and label normalization

pub mod escape;
pub mod text;

pub use escape::{escape_latex, needs_escape, LATEX_ESCAPES};
pub use text::{display_caption, escaped_label, file_label, plain_label, title_case};
