//! Loading tabular data from CSV, JSON and YAML
//!
//! JSON and YAML inputs are sequences of records (objects/mappings); key
//! order in the document becomes column order. CSV headers name the
//! columns and cell types are inferred with [`Value::infer`].

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use super::frame::{Row, TabularData};
use super::value::Value;
use crate::utils::error::{Error, Result};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
    Yaml,
}

impl DataFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

impl TabularData {
    /// Read CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut data = TabularData::new(headers.iter().cloned());
        for record in rdr.records() {
            let record = record?;
            data.push_values(record.iter().map(Value::infer));
        }

        tracing::debug!(
            rows = data.len(),
            columns = data.column_count(),
            "loaded CSV table"
        );
        Ok(data)
    }

    pub fn from_csv_str(input: &str) -> Result<Self> {
        Self::from_csv_reader(input.as_bytes())
    }

    /// Parse a JSON array of objects
    pub fn from_json_str(input: &str) -> Result<Self> {
        let records: Vec<IndexMap<String, serde_json::Value>> = serde_json::from_str(input)?;
        let rows = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .map(|(k, v)| (k, json_to_value(v)))
                    .collect::<Row>()
            })
            .collect();

        let data = TabularData::from_records(rows);
        tracing::debug!(
            rows = data.len(),
            columns = data.column_count(),
            "loaded JSON table"
        );
        Ok(data)
    }

    /// Parse a YAML sequence of mappings
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let records: Vec<IndexMap<String, serde_yaml::Value>> = serde_yaml::from_str(input)?;
        let rows = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .map(|(k, v)| (k, yaml_to_value(v)))
                    .collect::<Row>()
            })
            .collect();

        let data = TabularData::from_records(rows);
        tracing::debug!(
            rows = data.len(),
            columns = data.column_count(),
            "loaded YAML table"
        );
        Ok(data)
    }

    /// Parse `input` in the given format
    pub fn parse(input: &str, format: DataFormat) -> Result<Self> {
        match format {
            DataFormat::Csv => Self::from_csv_str(input),
            DataFormat::Json => Self::from_json_str(input),
            DataFormat::Yaml => Self::from_yaml_str(input),
        }
    }

    /// Load a file, picking the format from its extension
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path).ok_or_else(|| {
            Error::data(format!(
                "cannot infer table format of '{}' (expected .csv, .json, .yaml)",
                path.display()
            ))
        })?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }
}

fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::Text(s),
        other => Value::Text(other.to_string()),
    }
}

fn yaml_to_value(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_yaml::Value::String(s) => Value::Text(s),
        other => Value::Text(serde_yaml::to_string(&other).unwrap_or_default().trim().to_string()),
    }
}
