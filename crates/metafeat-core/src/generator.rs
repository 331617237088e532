//! Metafeature generation.
//!
//! Column pairs `(c1, c2)` are visited with `c2 >= c1`. For each pair the
//! enabled operations run in the fixed order multiply, divide, add, subtract:
//!
//! | Operation | Columns per pair | Names | Self pair |
//! |-----------|------------------|-------|-----------|
//! | multiply  | 1 | `a*b` | yes |
//! | divide    | 2 | `a/b`, `b/a` | no |
//! | add       | 1 | `a+b` | no |
//! | subtract  | 1 | `a-b` | no |
//!
//! The output position of every derived column is fully determined by this
//! order, so it must not change.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Zip};

use crate::config::MetafeatureConfig;
use crate::ops::Operation;
use crate::planner::plan;
use crate::table::{Metafeatures, TableError};

/// Derive metafeatures from a feature matrix.
///
/// The result holds exactly [`plan`]`(features.ncols(), &config.operations)`
/// columns. `features` is only read; derived values go into a freshly
/// allocated matrix. Where a denominator is zero the quotient is replaced by
/// `config.big_m`. Non-finite inputs propagate through the arithmetic as-is.
///
/// Fails with [`TableError::NameMismatch`] unless there is exactly one name
/// per feature column.
pub fn generate(
    features: ArrayView2<'_, f64>,
    feature_names: &[String],
    config: &MetafeatureConfig,
) -> Result<Metafeatures, TableError> {
    let num_cols = features.ncols();
    if feature_names.len() != num_cols {
        return Err(TableError::NameMismatch {
            columns: num_cols,
            names: feature_names.len(),
        });
    }

    let planned = plan(num_cols, &config.operations);
    let mut sink = ColumnSink::new(features.nrows(), planned);

    for c1 in 0..num_cols {
        for c2 in c1..num_cols {
            let (a, b) = (features.column(c1), features.column(c2));
            let (name_a, name_b) = (&feature_names[c1], &feature_names[c2]);

            for op in config.operations.iter() {
                if c1 == c2 && !op.includes_self_pairs() {
                    continue;
                }

                match op {
                    Operation::Multiply => {
                        sink.push(derived_name(name_a, op, name_b), a, b, |x, y| x * y);
                    }
                    Operation::Divide => {
                        let big_m = config.big_m;
                        sink.push(derived_name(name_a, op, name_b), a, b, |x, y| {
                            guarded_div(x, y, big_m)
                        });
                        sink.push(derived_name(name_b, op, name_a), b, a, |x, y| {
                            guarded_div(x, y, big_m)
                        });
                    }
                    Operation::Add => {
                        sink.push(derived_name(name_a, op, name_b), a, b, |x, y| x + y);
                    }
                    Operation::Subtract => {
                        sink.push(derived_name(name_a, op, name_b), a, b, |x, y| x - y);
                    }
                }
            }
        }
    }

    debug_assert_eq!(sink.next, planned);
    Ok(sink.finish())
}

/// Name of a derived column, e.g. `height*width`.
pub fn derived_name(left: &str, op: Operation, right: &str) -> String {
    format!("{}{}{}", left, op.symbol(), right)
}

fn guarded_div(numerator: f64, denominator: f64, big_m: f64) -> f64 {
    if denominator == 0.0 {
        big_m
    } else {
        numerator / denominator
    }
}

/// Pre-sized output buffer filled one column at a time.
struct ColumnSink {
    names: Vec<String>,
    values: Array2<f64>,
    next: usize,
}

impl ColumnSink {
    fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            names: Vec::with_capacity(num_columns),
            values: Array2::zeros((num_rows, num_columns)),
            next: 0,
        }
    }

    fn push<F>(&mut self, name: String, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, f: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        let column: ArrayViewMut1<'_, f64> = self.values.column_mut(self.next);
        Zip::from(column)
            .and(a)
            .and(b)
            .for_each(|out, &x, &y| *out = f(x, y));
        self.names.push(name);
        self.next += 1;
    }

    fn finish(self) -> Metafeatures {
        Metafeatures {
            names: self.names,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OperationSet;
    use ndarray::{array, Array2};
    use rstest::rstest;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{}", i)).collect()
    }

    fn config(tokens: &[&str]) -> MetafeatureConfig {
        MetafeatureConfig::new(OperationSet::from_tokens(tokens))
    }

    fn subset(mask: u8) -> OperationSet {
        Operation::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, op)| *op)
            .collect()
    }

    #[rstest]
    fn generated_count_matches_plan(
        #[values(0, 1, 2, 5)] num_cols: usize,
        #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15)] mask: u8,
    ) {
        let ops = subset(mask);
        let features = Array2::from_shape_fn((3, num_cols), |(r, c)| (r * num_cols + c) as f64);
        let result = generate(
            features.view(),
            &names(num_cols),
            &MetafeatureConfig::new(ops),
        )
        .unwrap();

        let expected = plan(num_cols, &ops);
        assert_eq!(result.names.len(), expected);
        assert_eq!(result.values.ncols(), expected);
        assert_eq!(result.values.nrows(), 3);
    }

    #[test]
    fn multiply_includes_squares() {
        let features = array![[2.0, 3.0], [4.0, 5.0]];
        let result = generate(features.view(), &names(2), &config(&["mul"])).unwrap();

        assert_eq!(result.names, vec!["f0*f0", "f0*f1", "f1*f1"]);
        assert_eq!(result.column("f0*f0").unwrap(), array![4.0, 16.0]);
        assert_eq!(result.column("f0*f1").unwrap(), array![6.0, 20.0]);
        assert_eq!(result.column("f1*f1").unwrap(), array![9.0, 25.0]);
    }

    #[test]
    fn divide_substitutes_big_m_for_zero_denominator() {
        let features = array![[6.0, 3.0], [5.0, 0.0], [0.0, 4.0]];
        let result = generate(
            features.view(),
            &names(2),
            &config(&["div"]).with_big_m(1000.0),
        )
        .unwrap();

        assert_eq!(result.names, vec!["f0/f1", "f1/f0"]);
        assert_eq!(result.column("f0/f1").unwrap(), array![2.0, 1000.0, 0.0]);
        assert_eq!(result.column("f1/f0").unwrap(), array![0.5, 0.0, 1000.0]);
    }

    #[test]
    fn divide_uses_default_big_m() {
        let features = array![[1.0, 0.0]];
        let result = generate(features.view(), &names(2), &config(&["div"])).unwrap();
        assert_eq!(result.values[[0, 0]], crate::DEFAULT_BIG_M);
    }

    #[test]
    fn negative_zero_denominator_is_guarded() {
        let features = array![[1.0, -0.0]];
        let result = generate(
            features.view(),
            &names(2),
            &config(&["div"]).with_big_m(7.0),
        )
        .unwrap();
        assert_eq!(result.values[[0, 0]], 7.0);
    }

    #[test]
    fn add_and_subtract_skip_reverse_pairs() {
        let features = array![[1.0, 10.0, 100.0]];
        let result = generate(features.view(), &names(3), &config(&["sub", "add"])).unwrap();

        assert_eq!(
            result.names,
            vec!["f0+f1", "f0-f1", "f0+f2", "f0-f2", "f1+f2", "f1-f2"]
        );
        assert_eq!(
            result.values.row(0).to_vec(),
            vec![11.0, -9.0, 101.0, -99.0, 110.0, -90.0]
        );
        assert!(result.names.iter().all(|n| n != "f1-f0" && n != "f2-f0"));
    }

    #[test]
    fn per_pair_operation_order() {
        let features = array![[4.0, 2.0]];
        let ops = config(&["sub", "div", "add", "mul"]);
        let result = generate(features.view(), &names(2), &ops).unwrap();

        assert_eq!(
            result.names,
            vec!["f0*f0", "f0*f1", "f0/f1", "f1/f0", "f0+f1", "f0-f1", "f1*f1"]
        );
        assert_eq!(
            result.values.row(0).to_vec(),
            vec![16.0, 8.0, 2.0, 0.5, 6.0, 2.0, 4.0]
        );
    }

    #[test]
    fn uses_feature_names() {
        let features = array![[1.0, 2.0]];
        let names = vec!["height".to_string(), "width".to_string()];
        let result = generate(features.view(), &names, &config(&["mul"])).unwrap();
        assert_eq!(result.names[1], "height*width");
    }

    #[test]
    fn non_finite_values_propagate() {
        let features = array![[f64::NAN, 2.0], [f64::INFINITY, 1.0]];
        let result = generate(features.view(), &names(2), &config(&["add"])).unwrap();
        let sums = result.column("f0+f1").unwrap();
        assert!(sums[0].is_nan());
        assert_eq!(sums[1], f64::INFINITY);
    }

    #[test]
    fn input_is_untouched() {
        let features = array![[1.0, 0.0], [2.0, 3.0]];
        let before = features.clone();
        let ops = config(&["mul", "div", "add", "sub"]);
        generate(features.view(), &names(2), &ops).unwrap();
        assert_eq!(features, before);
    }

    #[test]
    fn name_count_must_match_columns() {
        let features = array![[1.0, 2.0, 3.0]];
        let result = generate(features.view(), &names(2), &config(&["mul"]));
        assert_eq!(
            result.unwrap_err(),
            TableError::NameMismatch {
                columns: 3,
                names: 2
            }
        );

        let result = generate(features.view(), &names(4), &config(&["mul"]));
        assert!(matches!(result, Err(TableError::NameMismatch { .. })));
    }

    #[test]
    fn no_rows() {
        let features = Array2::<f64>::zeros((0, 3));
        let result = generate(features.view(), &names(3), &config(&["mul"])).unwrap();
        assert_eq!(result.names.len(), 6);
        assert_eq!(result.values.dim(), (0, 6));
    }
}
