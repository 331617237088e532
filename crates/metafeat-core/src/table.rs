//! Input and output tables.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use thiserror::Error;

/// Shape errors when building a table
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Target has {target} rows but features have {features}")]
    RowMismatch { target: usize, features: usize },

    #[error("Expected {columns} feature names, got {names}")]
    NameMismatch { columns: usize, names: usize },
}

/// A target column plus the feature matrix it is paired with.
///
/// Rows are index-aligned between `target` and `features`; feature names are
/// index-aligned with feature columns.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    target_name: String,
    target: Array1<f64>,
    feature_names: Vec<String>,
    features: Array2<f64>,
}

impl FeatureTable {
    pub fn new(
        target_name: impl Into<String>,
        target: Array1<f64>,
        feature_names: Vec<String>,
        features: Array2<f64>,
    ) -> Result<Self, TableError> {
        if target.len() != features.nrows() {
            return Err(TableError::RowMismatch {
                target: target.len(),
                features: features.nrows(),
            });
        }
        if feature_names.len() != features.ncols() {
            return Err(TableError::NameMismatch {
                columns: features.ncols(),
                names: feature_names.len(),
            });
        }

        Ok(Self {
            target_name: target_name.into(),
            target,
            feature_names,
            features,
        })
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn target(&self) -> ArrayView1<'_, f64> {
        self.target.view()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    pub fn num_rows(&self) -> usize {
        self.features.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// Target name followed by feature names.
    pub fn column_names(&self) -> Vec<String> {
        std::iter::once(self.target_name.clone())
            .chain(self.feature_names.iter().cloned())
            .collect()
    }
}

/// Derived columns and their names, in generation order.
#[derive(Debug, Clone)]
pub struct Metafeatures {
    pub names: Vec<String>,
    pub values: Array2<f64>,
}

impl Metafeatures {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get a derived column by name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(self.values.column(index))
    }
}

/// The assembled result: `target | features | metafeatures`.
#[derive(Debug, Clone)]
pub struct OutputTable {
    pub names: Vec<String>,
    pub values: Array2<f64>,
}

impl OutputTable {
    pub fn num_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_columns(&self) -> usize {
        self.values.ncols()
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(self.values.column(index))
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.values.axis_iter(Axis(0))
    }
}
