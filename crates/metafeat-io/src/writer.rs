//! Table writers
//!
//! Both writers stage output in a scratch file in the destination directory
//! and rename it over the final name once complete, so a reader never sees a
//! partially written file under the final name.

use crate::reader::{IoError, IoResult};
use metafeat_core::OutputTable;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `table` as CSV: a header row of column names, then one line per row.
///
/// Values use the shortest decimal form that reads back exactly, always with
/// a fractional part or exponent (`10.0`, `0.3333333333333333`, `1e-07`).
/// Missing values are written as empty fields.
pub fn write_csv(table: &OutputTable, path: &Path) -> IoResult<()> {
    write_atomic(path, |out| {
        let mut writer = csv::Writer::from_writer(out);
        writer
            .write_record(&table.names)
            .map_err(|e| IoError::Io(e.to_string()))?;
        for row in table.rows() {
            writer
                .write_record(row.iter().map(|&v| format_decimal(v)))
                .map_err(|e| IoError::Io(e.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    })
}

/// Write `table` in the `.in` text format.
///
/// The first line is `<rows>\t<columns>`; each following line is one row of
/// tab-separated values in scientific notation with 18 fractional digits
/// (`1.000000000000000000e+00`). Column names are not written.
pub fn write_table_text(table: &OutputTable, path: &Path) -> IoResult<()> {
    write_atomic(path, |out| {
        writeln!(out, "{}\t{}", table.num_rows(), table.num_columns())?;
        for row in table.rows() {
            let line: Vec<String> = row.iter().map(|&v| format_scientific(v)).collect();
            writeln!(out, "{}", line.join("\t"))?;
        }
        Ok(())
    })
}

/// Run `write` against a scratch file next to `path`, then move it into place.
fn write_atomic<F>(path: &Path, write: F) -> IoResult<()>
where
    F: FnOnce(&mut dyn Write) -> IoResult<()>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut scratch = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(scratch.as_file_mut());
        write(&mut out)?;
        out.flush()?;
    }
    scratch.as_file().sync_all()?;
    scratch
        .persist(path)
        .map_err(|e| IoError::Io(format!("{}: {}", path.display(), e.error)))?;
    Ok(())
}

/// Shortest round-trip decimal, e.g. `10.0`, `0.5`, `1e+16`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    with_c_exponent(&format!("{:?}", value))
}

/// Scientific notation with 18 fractional digits, e.g. `2.500000000000000000e-01`.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    with_c_exponent(&format!("{:.18e}", value))
}

/// Rewrite a Rust exponent (`e-7`, `e16`) in C form (`e-07`, `e+16`).
fn with_c_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => formatted.to_string(),
        },
        None => formatted.to_string(),
    }
}
