//! Frame passthrough table rendering
//!
//! The core table body comes from a [`FrameRenderer`], a whole-frame
//! tabular-to-LaTeX converter. Its output is then post-processed:
//!
//! 1. With `flex_cols`, `\begin{tabular}{..}` becomes a `tabularx` at
//!    `\textwidth` with one `X` per data column plus one for the index slot
//!    (the slot is counted even when the index is hidden).
//! 2. `\begin{table}` always gains an `[H]` placement and a `\centering`.
//!
//! [`BooktabsRenderer`] is the default converter.

use std::fmt::Write;

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::core::escape::escape_latex;
use crate::core::text::plain_label;
use crate::data::TabularData;

lazy_static! {
    static ref TABULAR_BEGIN: Regex = Regex::new(r"\\begin\{tabular\}\{").unwrap();
    static ref TABLE_BEGIN: Regex = Regex::new(r"\\begin\{table\}(\[[^\]]*\])?").unwrap();
}

/// What a [`FrameRenderer`] is asked to produce
#[derive(Debug, Clone, PartialEq)]
pub struct FrameFormat {
    /// Caption; when both caption and label are absent no `table` float is emitted
    pub caption: Option<String>,
    /// Full label, prefix included
    pub label: Option<String>,
    /// Emit the index as a leading column
    pub include_index: bool,
    /// Decimal places for float cells
    pub float_precision: usize,
    /// Escape header names, index labels and cell text
    pub escape: bool,
    /// Text for null or missing cells
    pub na_rep: String,
}

impl Default for FrameFormat {
    fn default() -> Self {
        Self {
            caption: None,
            label: None,
            include_index: true,
            float_precision: 5,
            escape: false,
            na_rep: "NaN".to_string(),
        }
    }
}

/// Whole-frame tabular-to-LaTeX converter
pub trait FrameRenderer {
    /// Render the frame; the output must contain a `\begin{tabular}{..}` ...
    /// `\end{tabular}` pair for the flexible-column rewrite to apply
    fn render(&self, data: &TabularData, format: &FrameFormat) -> String;
}

/// Booktabs-style `tabular` converter
///
/// Index and text columns are left-aligned, numeric columns right-aligned:
///
/// ```text
/// \begin{table}
/// \caption{cpu load}
/// \label{tab:cpu_load}
/// \begin{tabular}{lr}
/// \toprule
///  & load \\
/// \midrule
/// 0 & 0.50000 \\
/// \bottomrule
/// \end{tabular}
/// \end{table}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BooktabsRenderer;

impl FrameRenderer for BooktabsRenderer {
    fn render(&self, data: &TabularData, format: &FrameFormat) -> String {
        let text = |s: &str| {
            if format.escape {
                escape_latex(s)
            } else {
                s.to_string()
            }
        };

        let mut col_spec = String::new();
        if format.include_index {
            col_spec.push('l');
        }
        for column in data.columns() {
            col_spec.push(if data.is_numeric_column(column) { 'r' } else { 'l' });
        }

        let wrap = format.caption.is_some() || format.label.is_some();
        let mut output = String::new();

        if wrap {
            let _ = writeln!(output, "\\begin{{table}}");
            if let Some(ref caption) = format.caption {
                let _ = writeln!(output, "\\caption{{{}}}", caption);
            }
            if let Some(ref label) = format.label {
                let _ = writeln!(output, "\\label{{{}}}", label);
            }
        }

        let _ = writeln!(output, "\\begin{{tabular}}{{{}}}", col_spec);
        let _ = writeln!(output, "\\toprule");

        let mut header: Vec<String> = Vec::with_capacity(data.column_count() + 1);
        if format.include_index {
            header.push(String::new());
        }
        header.extend(data.columns().iter().map(|c| text(c)));
        let _ = writeln!(output, "{} \\\\", header.join(" & "));
        let _ = writeln!(output, "\\midrule");

        let index = data.index_labels();
        let mut missing = 0usize;
        for (row_idx, row) in data.rows().iter().enumerate() {
            let mut cells: Vec<String> = Vec::with_capacity(data.column_count() + 1);
            if format.include_index {
                match index.get(row_idx) {
                    Some(label) => cells.push(text(label)),
                    None => cells.push(row_idx.to_string()),
                }
            }
            for column in data.columns() {
                match row.get(column) {
                    Some(value) => cells.push(
                        text(&value.format_with_precision(format.float_precision, &format.na_rep)),
                    ),
                    None => {
                        missing += 1;
                        cells.push(format.na_rep.clone());
                    }
                }
            }
            let _ = writeln!(output, "{} \\\\", cells.join(" & "));
        }

        if missing > 0 {
            tracing::warn!(missing, "frame rows lack some columns; rendered as NA");
        }

        let _ = writeln!(output, "\\bottomrule");
        let _ = writeln!(output, "\\end{{tabular}}");
        if wrap {
            let _ = writeln!(output, "\\end{{table}}");
        }

        output
    }
}

/// Options for frame passthrough tables
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize), serde(default))]
pub struct FrameTableOptions {
    /// Emit the index as a leading column (default: true)
    pub include_index: bool,
    /// Rewrite to a full-width `tabularx` with `X` columns
    pub flex_cols: bool,
    /// Decimal places for float cells (default: 5)
    pub float_precision: usize,
    /// Escape header names, index labels and cell text (default: false)
    pub escape: bool,
    /// Text for null or missing cells (default: "NaN")
    pub na_rep: String,
    /// Float placement specifier (default: "H")
    pub placement: String,
}

impl Default for FrameTableOptions {
    fn default() -> Self {
        Self {
            include_index: true,
            flex_cols: false,
            float_precision: 5,
            escape: false,
            na_rep: "NaN".to_string(),
            placement: "H".to_string(),
        }
    }
}

impl FrameTableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus flexible-width columns
    pub fn flexible() -> Self {
        Self {
            flex_cols: true,
            ..Default::default()
        }
    }

    fn frame_format(&self, caption: &str) -> FrameFormat {
        FrameFormat {
            caption: Some(caption.to_string()),
            label: Some(format!("tab:{}", plain_label(caption))),
            include_index: self.include_index,
            float_precision: self.float_precision,
            escape: self.escape,
            na_rep: self.na_rep.clone(),
        }
    }
}

/// Render a frame through the default converter with post-processing
///
/// The label is the caption with spaces replaced by `_` (not escaped),
/// prefixed with `tab:`.
pub fn render_table_from_frame(
    data: &TabularData,
    caption: &str,
    include_index: bool,
    flex_cols: bool,
) -> String {
    let options = FrameTableOptions {
        include_index,
        flex_cols,
        ..Default::default()
    };
    render_table_from_frame_with_options(data, caption, &options)
}

/// Render a frame through the default converter with custom options
pub fn render_table_from_frame_with_options(
    data: &TabularData,
    caption: &str,
    options: &FrameTableOptions,
) -> String {
    render_table_from_frame_with(&BooktabsRenderer, data, caption, options)
}

/// Render a frame through any converter with post-processing
pub fn render_table_from_frame_with<R: FrameRenderer + ?Sized>(
    renderer: &R,
    data: &TabularData,
    caption: &str,
    options: &FrameTableOptions,
) -> String {
    if data.column_count() == 0 {
        tracing::warn!("rendering a frame with no columns");
    }
    tracing::debug!(
        rows = data.len(),
        columns = data.column_count(),
        include_index = options.include_index,
        flex_cols = options.flex_cols,
        "rendering frame table"
    );

    let mut latex = renderer.render(data, &options.frame_format(caption));

    if options.flex_cols {
        latex = to_flexible_columns(&latex, data.column_count());
    }

    let table_begin = format!("\\begin{{table}}[{}]\n\\centering", options.placement);
    TABLE_BEGIN
        .replace(&latex, NoExpand(&table_begin))
        .into_owned()
}

/// Swap a fixed `tabular` for a full-width `tabularx`
///
/// The column spec gets `column_count + 1` `X` tokens; the extra one is the
/// index slot whether or not the index is displayed. Every `tabular` in the
/// input is rewritten, begin and end alike. Column specs may nest braces
/// (`p{3cm}`, `@{}`, `>{\raggedright}`).
pub fn to_flexible_columns(latex: &str, column_count: usize) -> String {
    let tokens = vec!["X"; column_count + 1].join(" ");
    let begin = format!("\\begin{{tabularx}}{{\\textwidth}}{{{}}}", tokens);

    let mut output = String::with_capacity(latex.len() + tokens.len());
    let mut rest = latex;
    while let Some(m) = TABULAR_BEGIN.find(rest) {
        let spec = &rest[m.end()..];
        let Some(close) = closing_brace(spec) else {
            tracing::warn!("unterminated tabular column spec; table left as is");
            return latex.to_string();
        };
        output.push_str(&rest[..m.start()]);
        output.push_str(&begin);
        rest = &spec[close + 1..];
    }
    output.push_str(rest);

    output.replace("\\end{tabular}", "\\end{tabularx}")
}

/// Byte offset of the `}` closing a group whose `{` was already consumed
fn closing_brace(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = text.char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            // Escaped character, e.g. `\{`
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
