//! Data reader trait and common types
//!
//! The `DataReader` trait provides a uniform interface for reading tables
//! from the supported file formats.

use crate::schema::{infer_type, parse_column, ColumnDescriptor, DataColumn, DataSchema};
use metafeat_core::TableError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Invalid table: {0}")]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e.to_string())
    }
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for reading tables from various formats
pub trait DataReader {
    /// Read the schema (column names, types, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read a single column by position
    fn read_column_at(&self, index: usize) -> IoResult<DataColumn>;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: impl AsRef<Path>) -> IoResult<BoxedReader> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        "tsv" | "tab" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_delimiter(path, b'\t')?))
        }

        #[cfg(feature = "xlsx")]
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            use crate::xlsx_reader::XlsxReader;
            Ok(Box::new(XlsxReader::open(path)?))
        }

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// A fully loaded table of raw cell text, shared by the concrete readers.
#[derive(Debug, Clone)]
pub(crate) struct CellGrid {
    schema: DataSchema,
    columns: Vec<Vec<String>>,
}

impl CellGrid {
    /// Build from a header and row-major records.
    ///
    /// Every record must have exactly one cell per header column.
    pub(crate) fn from_records(
        headers: Vec<String>,
        records: Vec<Vec<String>>,
    ) -> IoResult<Self> {
        if headers.is_empty() {
            return Err(IoError::InvalidFormat("table has no columns".to_string()));
        }

        let mut columns: Vec<Vec<String>> =
            vec![Vec::with_capacity(records.len()); headers.len()];
        for (row, record) in records.into_iter().enumerate() {
            if record.len() != headers.len() {
                return Err(IoError::InvalidFormat(format!(
                    "row {} has {} fields, expected {}",
                    row + 1,
                    record.len(),
                    headers.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(record) {
                column.push(value);
            }
        }

        let num_records = columns.first().map(Vec::len).unwrap_or(0);
        let descriptors = headers
            .into_iter()
            .zip(&columns)
            .map(|(name, values)| ColumnDescriptor::new(name, infer_type(values)))
            .collect();

        Ok(Self {
            schema: DataSchema::new(descriptors, num_records),
            columns,
        })
    }

    pub(crate) fn schema(&self) -> &DataSchema {
        &self.schema
    }

    pub(crate) fn column_at(&self, index: usize) -> IoResult<DataColumn> {
        let desc = self
            .schema
            .columns
            .get(index)
            .ok_or_else(|| IoError::ColumnNotFound(format!("#{}", index)))?;
        Ok(parse_column(&self.columns[index], desc.dtype))
    }
}
