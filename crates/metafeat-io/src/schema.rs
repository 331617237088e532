//! Schema and column types for loaded tables

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default)]
pub struct DataSchema {
    /// Column descriptors, in file order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records (header excluded)
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
}

/// A column of data
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    String(Vec<String>),
}

impl DataColumn {
    /// Convert to f64 (for numeric types)
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            DataColumn::String(_) => None,
        }
    }

    /// Index and text of the first value that is not a number.
    pub fn first_non_numeric(&self) -> Option<(usize, &str)> {
        match self {
            DataColumn::String(v) => v
                .iter()
                .enumerate()
                .find(|(_, s)| parse_numeric(s).is_none())
                .map(|(i, s)| (i, s.as_str())),
            _ => None,
        }
    }
}

/// Parse one cell as a number.
///
/// Blank cells are missing values and read as NaN.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(f64::NAN);
    }
    cell.parse::<f64>().ok()
}

/// Infer column type from its values
pub fn infer_type(values: &[String]) -> ColumnType {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    // Blank columns read as all-NaN floats
    if non_empty.is_empty() {
        return ColumnType::Float64;
    }

    if non_empty.len() == values.len() && non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    if values.iter().all(|s| parse_numeric(s).is_some()) {
        return ColumnType::Float64;
    }

    ColumnType::String
}

/// Parse column values into a DataColumn of the given type
///
/// Values are expected to have been checked by [`infer_type`].
pub fn parse_column(values: &[String], dtype: ColumnType) -> DataColumn {
    match dtype {
        ColumnType::Int64 => DataColumn::Int64(
            values
                .iter()
                .map(|s| s.trim().parse().unwrap_or_default())
                .collect(),
        ),
        ColumnType::Float64 => DataColumn::Float64(
            values
                .iter()
                .map(|s| parse_numeric(s).unwrap_or(f64::NAN))
                .collect(),
        ),
        ColumnType::String => DataColumn::String(values.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_schema_columns() {
        let schema = DataSchema::new(
            vec![
                ColumnDescriptor::new("x", ColumnType::Float64),
                ColumnDescriptor::new("y", ColumnType::Int64),
            ],
            100,
        );

        assert_eq!(schema.num_columns(), 2);
        assert_eq!(schema.columns[1].name, "y");
        assert_eq!(schema.columns[1].dtype, ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_int() {
        assert_eq!(infer_type(&strings(&["1", "2", "-3"])), ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_float() {
        assert_eq!(infer_type(&strings(&["1.5", "2", "3e2"])), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_blank_cells_make_float() {
        assert_eq!(infer_type(&strings(&["1", "", "3"])), ColumnType::Float64);
        assert_eq!(infer_type(&strings(&["", ""])), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_string() {
        assert_eq!(infer_type(&strings(&["1.0", "two"])), ColumnType::String);
    }

    #[test]
    fn test_parse_column_with_missing() {
        let column = parse_column(&strings(&["1", " ", "2.5"]), ColumnType::Float64);
        let values = column.to_f64().unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 2.5);
    }

    #[test]
    fn test_data_column_conversion() {
        let col = DataColumn::Int64(vec![1, 2, 3]);
        assert_eq!(col.to_f64().unwrap(), vec![1.0, 2.0, 3.0]);
        assert!(DataColumn::String(strings(&["a"])).to_f64().is_none());
    }

    #[test]
    fn test_first_non_numeric() {
        let col = DataColumn::String(strings(&["1", "2", "n/a", "x"]));
        assert_eq!(col.first_non_numeric(), Some((2, "n/a")));
        assert!(col.to_f64().is_none());
        assert_eq!(DataColumn::Float64(vec![1.0]).first_non_numeric(), None);
    }
}
