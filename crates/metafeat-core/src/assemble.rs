//! Output assembly.

use ndarray::{s, Array2};

use crate::config::MetafeatureConfig;
use crate::generator::generate;
use crate::table::{FeatureTable, Metafeatures, OutputTable, TableError};

/// Lay out `target | features | metafeatures` column-wise.
///
/// Values are copied unchanged. Output names are the target name, the
/// feature names, then the metafeature names, so `names.len()` always equals
/// the output column count.
pub fn assemble(
    table: &FeatureTable,
    metafeatures: Metafeatures,
) -> Result<OutputTable, TableError> {
    let num_rows = table.num_rows();
    let num_features = table.num_features();
    let Metafeatures {
        names: derived_names,
        values: derived,
    } = metafeatures;

    if derived.nrows() != num_rows {
        return Err(TableError::RowMismatch {
            target: num_rows,
            features: derived.nrows(),
        });
    }
    if derived_names.len() != derived.ncols() {
        return Err(TableError::NameMismatch {
            columns: derived.ncols(),
            names: derived_names.len(),
        });
    }

    let first_derived = 1 + num_features;
    let mut values = Array2::zeros((num_rows, first_derived + derived.ncols()));
    values.column_mut(0).assign(&table.target());
    values.slice_mut(s![.., 1..first_derived]).assign(&table.features());
    values.slice_mut(s![.., first_derived..]).assign(&derived);

    let mut names = table.column_names();
    names.extend(derived_names);

    Ok(OutputTable { names, values })
}

/// Generate metafeatures for `table` and assemble the full output.
pub fn expand(
    table: &FeatureTable,
    config: &MetafeatureConfig,
) -> Result<OutputTable, TableError> {
    let metafeatures = generate(table.features(), table.feature_names(), config)?;
    assemble(table, metafeatures)
}
