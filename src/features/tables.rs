//! Explicit-column table rendering
//!
//! Renders rows into a `tabularx` table whose columns are chosen (and
//! ordered) by the caller:
//!
//! ```text
//! \begin{table}[H]
//! \centering
//! \small
//! \caption{Cpu Load}
//! \label{tab:cpu\_load}
//! \begin{tabularx}{\textwidth}{ X X }
//! \textbf{Host} & \textbf{Load} \\
//! \toprule[0.5pt]
//! alpha & 0.5 \\
//! \midrule
//! beta & 0.7 \\
//!
//! \end{tabularx}
//! \end{table}
//! ```

use std::fmt::Write;

use crate::core::escape::escape_latex;
use crate::core::text::{display_caption, escaped_label};
use crate::data::Row;
use crate::utils::error::{Error, Result};

/// Options for explicit-column tables
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize), serde(default))]
pub struct TableOptions {
    /// Float placement specifier (default: "H")
    pub placement: String,
    /// Font size command applied to the body, without backslash (default: "small")
    pub font_size: Option<String>,
    /// Total table width (default: "\textwidth")
    pub width: String,
    /// Escape header names and cell text
    pub escape: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            placement: "H".to_string(),
            font_size: Some("small".to_string()),
            width: "\\textwidth".to_string(),
            escape: false,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus escaping of headers and cells
    pub fn escaped() -> Self {
        Self {
            escape: true,
            ..Default::default()
        }
    }
}

/// Render rows as a `tabularx` table with the given columns
///
/// The caption has underscores replaced by spaces and is title-cased; the
/// label has spaces replaced by `\_` and gets a `tab:` prefix. Works the
/// same for a [`TabularData`](crate::TabularData) and a plain slice of rows.
///
/// # Errors
/// [`Error::EmptyColumns`] when `columns` is empty, and
/// [`Error::MissingColumn`] when a row lacks one of `columns`.
pub fn render_table<D, S>(data: &D, caption: &str, label: &str, columns: &[S]) -> Result<String>
where
    D: AsRef<[Row]> + ?Sized,
    S: AsRef<str>,
{
    render_table_with_options(data, caption, label, columns, &TableOptions::default())
}

/// Render rows as a `tabularx` table with custom options
pub fn render_table_with_options<D, S>(
    data: &D,
    caption: &str,
    label: &str,
    columns: &[S],
    options: &TableOptions,
) -> Result<String>
where
    D: AsRef<[Row]> + ?Sized,
    S: AsRef<str>,
{
    if columns.is_empty() {
        return Err(Error::EmptyColumns);
    }

    let rows = data.as_ref();
    let caption = display_caption(caption);
    let label = escaped_label(label);
    let text = |s: &str| {
        if options.escape {
            escape_latex(s)
        } else {
            s.to_string()
        }
    };

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        label = %label,
        "rendering tabularx table"
    );

    let mut output = String::new();
    let _ = writeln!(output);
    let _ = writeln!(output, "\\begin{{table}}[{}]", options.placement);
    let _ = writeln!(output, "\\centering");
    if let Some(ref size) = options.font_size {
        let _ = writeln!(output, "\\{}", size);
    }
    let _ = writeln!(output, "\\caption{{{}}}", caption);
    let _ = writeln!(output, "\\label{{tab:{}}}", label);

    let col_spec = vec!["X"; columns.len()].join(" ");
    let _ = writeln!(
        output,
        "\\begin{{tabularx}}{{{}}}{{ {} }}",
        options.width, col_spec
    );

    // Header
    let header = columns
        .iter()
        .map(|name| format!("\\textbf{{{}}}", text(name.as_ref())))
        .collect::<Vec<_>>()
        .join(" & ");
    let _ = writeln!(output, "{} \\\\", header);
    let _ = writeln!(output, "\\toprule[0.5pt]");

    // Body
    for (row_idx, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        for name in columns {
            let name = name.as_ref();
            let value = row
                .get(name)
                .ok_or_else(|| Error::missing_column(name, row_idx))?;
            cells.push(text(&value.to_string()));
        }
        let _ = writeln!(output, "{} \\\\", cells.join(" & "));

        if row_idx + 1 < rows.len() {
            let _ = writeln!(output, "\\midrule");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "\\end{{tabularx}}");
    let _ = writeln!(output, "\\end{{table}}");

    Ok(output)
}
