//! Output file naming.

use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem.
pub const OUTPUT_SUFFIX: &str = "-METAFEATURES";

/// Locations of the two output files for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Comma-separated output with a header row
    pub csv: PathBuf,

    /// Tab-separated `.in` output with a `rows<TAB>columns` header
    pub table: PathBuf,
}

impl OutputPaths {
    /// Outputs next to the input: `data.xlsx` gives `data-METAFEATURES.csv`
    /// and `data-METAFEATURES.in`.
    pub fn for_input(input: &Path) -> Self {
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        Self::for_input_in(input, dir)
    }

    /// Outputs named after `input` but placed in `dir`.
    pub fn for_input_in(input: &Path, dir: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = format!("{}{}", stem, OUTPUT_SUFFIX);

        Self {
            csv: dir.join(format!("{}.csv", base)),
            table: dir.join(format!("{}.in", base)),
        }
    }

    /// Directory the outputs are written to; `.` for a bare relative input.
    pub fn directory(&self) -> &Path {
        match self.csv.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
