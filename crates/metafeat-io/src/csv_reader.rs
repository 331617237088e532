//! CSV/TSV file reader with type inference

use crate::reader::{CellGrid, DataReader, IoError, IoResult};
use crate::schema::{DataColumn, DataSchema};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Delimited text file reader
///
/// The whole file is read on open; the first record is the header.
pub struct CsvReader {
    grid: CellGrid,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file with a custom delimiter
    pub fn open_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let grid = Self::read_grid(BufReader::new(file), delimiter)?;
        Ok(Self { grid })
    }

    fn read_grid<R: Read>(source: R, delimiter: u8) -> IoResult<CellGrid> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            records.push(record.iter().map(|s| s.to_string()).collect());
        }

        CellGrid::from_records(headers, records)
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.grid.schema().clone())
    }

    fn read_column_at(&self, index: usize) -> IoResult<DataColumn> {
        self.grid.column_at(index)
    }
}
