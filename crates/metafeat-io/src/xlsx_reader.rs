//! Spreadsheet reader (XLSX, XLSM, XLSB, XLS, ODS)
//!
//! Reads the first worksheet. The first row is the header; numeric cells are
//! kept as numbers, blank cells become missing values.

use crate::reader::{CellGrid, DataReader, IoError, IoResult};
use crate::schema::{DataColumn, DataSchema};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Spreadsheet file reader
pub struct XlsxReader {
    grid: CellGrid,
}

impl XlsxReader {
    /// Open a workbook and load its first worksheet
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IoError::InvalidFormat("workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let records: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        let grid = CellGrid::from_records(headers, records)?;
        Ok(Self { grid })
    }
}

/// Render a cell as text for type inference.
///
/// Floats use the shortest representation that parses back to the same value.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

impl DataReader for XlsxReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.grid.schema().clone())
    }

    fn read_column_at(&self, index: usize) -> IoResult<DataColumn> {
        self.grid.column_at(index)
    }
}
