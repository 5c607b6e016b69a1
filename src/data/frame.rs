//! Tabular data model
//!
//! A `TabularData` is an ordered list of named columns, an ordered list of
//! rows (each an insertion-ordered map from column name to value), and an
//! optional list of index labels used by the frame renderer.

use indexmap::IndexMap;

use super::value::Value;
use crate::utils::error::{Error, Result};

/// One row: column name to value, in insertion order
pub type Row = IndexMap<String, Value>;

/// Ordered rows of named-column values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularData {
    columns: Vec<String>,
    index: Option<Vec<String>>,
    rows: Vec<Row>,
}

impl TabularData {
    /// Create an empty table with the given columns
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TabularData {
            columns: columns.into_iter().map(Into::into).collect(),
            index: None,
            rows: Vec::new(),
        }
    }

    /// Build a table from row mappings
    ///
    /// Columns are collected in first-seen order across all rows.
    pub fn from_records(records: Vec<Row>) -> Self {
        let mut data = TabularData::default();
        for row in records {
            data.push_row(row);
        }
        data
    }

    /// Append a row, registering any columns not seen before
    pub fn push_row(&mut self, row: Row) {
        for key in row.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Append a row given positionally in column order
    pub fn push_values<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Row = self
            .columns
            .iter()
            .cloned()
            .zip(values.into_iter().map(Into::into))
            .collect();
        self.rows.push(row);
    }

    /// Attach explicit index labels (one per row)
    pub fn with_index<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.rows.len() {
            return Err(Error::data(format!(
                "index has {} labels but table has {} rows",
                labels.len(),
                self.rows.len()
            )));
        }
        self.index = Some(labels);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index labels: the explicit ones, or `0..n` positions
    pub fn index_labels(&self) -> Vec<String> {
        match &self.index {
            Some(labels) => labels.clone(),
            None => (0..self.rows.len()).map(|i| i.to_string()).collect(),
        }
    }

    /// Look up a cell; `None` when the row lacks the column
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Whether a column holds only numbers (nulls ignored) and at least one
    pub fn is_numeric_column(&self, column: &str) -> bool {
        let mut seen_number = false;
        for value in self.rows.iter().filter_map(|r| r.get(column)) {
            if value.is_numeric() {
                seen_number = true;
            } else if !value.is_null() {
                return false;
            }
        }
        seen_number
    }
}

impl AsRef<[Row]> for TabularData {
    fn as_ref(&self) -> &[Row] {
        &self.rows
    }
}

impl FromIterator<Row> for TabularData {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        TabularData::from_records(iter.into_iter().collect())
    }
}

/// Build a `Row` from `(column, value)` pairs
///
/// ```rust
/// use texfrag::{row, Value};
///
/// let r = row! { "Name" => "alice", "Score" => 91 };
/// assert_eq!(r["Score"], Value::Int(91));
/// ```
#[macro_export]
macro_rules! row {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut row = $crate::Row::new();
        $(row.insert(::std::string::String::from($key), $crate::Value::from($value));)*
        row
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_from_records_column_order() {
        let data = TabularData::from_records(vec![
            row! { "b" => 1, "a" => 2 },
            row! { "a" => 3, "c" => 4 },
        ]);
        assert_eq!(data.columns(), &["b", "a", "c"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.cell(1, "c"), Some(&Value::Int(4)));
        assert_eq!(data.cell(0, "c"), None);
    }

    #[test]
    fn test_push_values() {
        let mut data = TabularData::new(["x", "y"]);
        data.push_values([Value::Int(1), Value::Float(2.5)]);
        assert_eq!(data.cell(0, "y"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn test_index_labels() {
        let mut data = TabularData::new(["x"]);
        data.push_values([1]);
        data.push_values([2]);
        assert_eq!(data.index_labels(), vec!["0", "1"]);

        let data = data.with_index(["first", "second"]).unwrap();
        assert_eq!(data.index_labels(), vec!["first", "second"]);
    }

    #[test]
    fn test_index_length_mismatch() {
        let mut data = TabularData::new(["x"]);
        data.push_values([1]);
        assert!(data.with_index(["a", "b"]).is_err());
    }

    #[test]
    fn test_numeric_column() {
        let data = TabularData::from_records(vec![
            row! { "n" => 1, "f" => 0.5, "t" => "x", "e" => Value::Null },
            row! { "n" => Value::Null, "f" => 2, "t" => 3, "e" => Value::Null },
        ]);
        assert!(data.is_numeric_column("n"));
        assert!(data.is_numeric_column("f"));
        assert!(!data.is_numeric_column("t"));
        assert!(!data.is_numeric_column("e"));
    }
}
