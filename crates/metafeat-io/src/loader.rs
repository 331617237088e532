//! Loading a reader into a `FeatureTable`.

use crate::reader::{open_file, DataReader, IoError, IoResult};
use metafeat_core::FeatureTable;
use ndarray::{Array1, Array2};
use std::path::Path;

/// Open `path` and load it as a feature table.
///
/// Column 0 is the target; every other column is a feature.
pub fn load_feature_table(path: impl AsRef<Path>) -> IoResult<FeatureTable> {
    let reader = open_file(path)?;
    read_feature_table(&*reader)
}

/// Read every column of `reader` as numbers and split off the target.
pub fn read_feature_table(reader: &dyn DataReader) -> IoResult<FeatureTable> {
    let schema = reader.read_schema()?;
    if schema.num_columns() == 0 {
        return Err(IoError::InvalidFormat("table has no columns".to_string()));
    }

    let mut columns = Vec::with_capacity(schema.num_columns());
    for (index, desc) in schema.columns.iter().enumerate() {
        let column = reader.read_column_at(index)?;
        let values = match column.to_f64() {
            Some(values) => values,
            None => {
                let (row, value) = column.first_non_numeric().unwrap_or((0, ""));
                return Err(IoError::NonNumeric {
                    column: desc.name.clone(),
                    row: row + 1,
                    value: value.to_string(),
                });
            }
        };
        columns.push(values);
    }

    let num_rows = schema.num_records;
    let mut columns = columns.into_iter();
    let target = Array1::from(columns.next().unwrap_or_default());
    let features: Vec<Vec<f64>> = columns.collect();
    let matrix = Array2::from_shape_fn((num_rows, features.len()), |(r, c)| features[c][r]);

    let mut names = schema.columns.into_iter().map(|c| c.name);
    let target_name = names.next().unwrap_or_default();
    let feature_names: Vec<String> = names.collect();

    Ok(FeatureTable::new(target_name, target, feature_names, matrix)?)
}
