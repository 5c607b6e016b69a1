//! Figure rendering
//!
//! Produces a `figure` float around `\includegraphics`, with caption and
//! label derived from the image file name:
//!
//! ```text
//! \begin{figure}[H]
//! \centering
//! \includegraphics[width=1\textwidth]{plots/cpu_usage.png}
//! \caption{Cpu Usage}
//! \label{fig:cpu_usage}
//! \end{figure}
//! ```
//!
//! The path is used verbatim; nothing checks that it exists.

use std::fmt::Write;

use crate::core::text::{display_caption, file_label};

/// Default image width: the full text width
pub const DEFAULT_IMAGE_WIDTH: &str = "1\\textwidth";

/// Width as written into `\includegraphics`
///
/// The width is used verbatim, apart from trimming. A bare percentage such
/// as `50%` becomes the same fraction of `\textwidth` (`0.5\textwidth`); the
/// decimal point is shifted in the text, so no digits are lost.
pub fn normalize_width(width: &str) -> String {
    let width = width.trim();
    width
        .strip_suffix('%')
        .and_then(percent_to_fraction)
        .map(|fraction| format!("{}\\textwidth", fraction))
        .unwrap_or_else(|| width.to_string())
}

/// `"50"` -> `"0.5"`, `"12.5"` -> `"0.125"`, `"150"` -> `"1.5"`
fn percent_to_fraction(percent: &str) -> Option<String> {
    let percent = percent.trim_end();
    let (int_part, frac_part) = percent.split_once('.').unwrap_or((percent, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return None;
    }

    // Shift the decimal point two places left
    let digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() as isize - 2;
    let (whole, fraction) = if point <= 0 {
        ("0".to_string(), format!("{}{}", "0".repeat(point.unsigned_abs()), digits))
    } else {
        let (w, f) = digits.split_at(point as usize);
        (w.to_string(), f.to_string())
    };

    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        Some(whole.to_string())
    } else {
        Some(format!("{}.{}", whole, fraction))
    }
}

/// Options for figures
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize), serde(default))]
pub struct FigureOptions {
    /// Image width (default: "1\textwidth")
    pub width: String,
    /// Float placement specifier (default: "H")
    pub placement: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH.to_string(),
            placement: "H".to_string(),
        }
    }
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            ..Default::default()
        }
    }
}

/// Render a figure for `image_path` at the given width
pub fn render_figure(image_path: &str, width: &str) -> String {
    render_figure_with_options(image_path, &FigureOptions::with_width(width))
}

/// Render a figure with custom options
pub fn render_figure_with_options(image_path: &str, options: &FigureOptions) -> String {
    let label = file_label(image_path);
    let caption = display_caption(label);
    let width = normalize_width(&options.width);

    if label.is_empty() {
        tracing::warn!(path = image_path, "image path has no file name; label is empty");
    }
    tracing::debug!(path = image_path, label, "rendering figure");

    let mut output = String::new();
    let _ = writeln!(output);
    let _ = writeln!(output, "\\begin{{figure}}[{}]", options.placement);
    let _ = writeln!(output, "\\centering");
    let _ = writeln!(
        output,
        "\\includegraphics[width={}]{{{}}}",
        width, image_path
    );
    let _ = writeln!(output, "\\caption{{{}}}", caption);
    let _ = writeln!(output, "\\label{{fig:{}}}", label);
    let _ = writeln!(output, "\\end{{figure}}");

    output
}
