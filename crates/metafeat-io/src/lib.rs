//! metafeat-io - Table I/O for metafeature generation
//!
//! Readers:
//!
//! - **CSV/TSV**: delimited text with a header row
//! - **Spreadsheets**: XLSX/XLSM/XLS/ODS, first worksheet (feature `xlsx`)
//!
//! Writers:
//!
//! - **CSV**: header row of column names, one line per record
//! - **`.in`**: `rows<TAB>columns` header, tab-separated values in
//!   scientific notation
//!
//! # Design
//!
//! All readers implement the `DataReader` trait. [`load_feature_table`] turns
//! any reader into a `FeatureTable` (column 0 is the target, the rest are
//! features). Writers never leave a partially written file under the final
//! name.

pub mod loader;
pub mod paths;
pub mod reader;
pub mod schema;
pub mod writer;

pub mod csv_reader;

#[cfg(feature = "xlsx")]
pub mod xlsx_reader;

pub use loader::*;
pub use paths::*;
pub use reader::*;
pub use schema::*;
pub use writer::*;
