//! metafeat - Metafeature generator
//!
//! Reads a table whose first column is the target, derives pairwise
//! arithmetic metafeatures from the remaining columns, and writes the
//! expanded table as `<stem>-METAFEATURES.csv` and `<stem>-METAFEATURES.in`.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use metafeat_core::{
    expand, plan, ConfigError, MetafeatureConfig, Operation, OperationSet, TableError,
};
use metafeat_io::{load_feature_table, write_csv, write_table_text, IoError, OutputPaths};

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metafeat",
    version,
    about = "Expand a table with pairwise arithmetic metafeatures"
)]
pub struct Args {
    /// Input table (.xlsx, .xls, .ods, .csv, .tsv); column 0 is the target
    pub input: PathBuf,

    /// Operations to apply: mul, div, add, sub. Unrecognized tokens are ignored.
    pub operations: Vec<String>,

    /// TOML file with `big_m` and `operations` defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Value written where a quotient's denominator is zero
    #[arg(long, value_name = "VALUE")]
    pub big_m: Option<f64>,

    /// Write outputs here instead of next to the input
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Load the input and report the planned columns without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows: usize,
    pub features: usize,
    pub derived: usize,
    pub columns: usize,
    /// `None` for a dry run
    pub outputs: Option<OutputPaths>,
}

impl RunSummary {
    /// Confirmation printed to stdout once the run succeeds.
    ///
    /// Names the directory the outputs were written to, which is the
    /// `--out-dir` when one was given.
    pub fn message(&self) -> String {
        match &self.outputs {
            Some(paths) => format!(
                "\nDone! Check directory of {} for output",
                paths.directory().display()
            ),
            None => format!(
                "{} rows, {} features, {} metafeatures planned ({} output columns)",
                self.rows, self.features, self.derived, self.columns
            ),
        }
    }
}

/// Combine defaults, the optional config file and command-line overrides.
pub fn resolve_config(args: &Args) -> Result<MetafeatureConfig, CliError> {
    let base = match &args.config {
        Some(path) => {
            tracing::debug!("Loading config from {:?}", path);
            MetafeatureConfig::load(path)?
        }
        None => MetafeatureConfig::default(),
    };

    for token in &args.operations {
        if Operation::from_token(token).is_none() {
            tracing::warn!("Ignoring unrecognized operation '{}'", token);
        }
    }

    let mut config = base.with_operations(OperationSet::from_tokens(&args.operations));
    if let Some(big_m) = args.big_m {
        config = config.with_big_m(big_m);
    }
    config.validate()?;

    tracing::debug!(
        "Resolved operations {} with big_m = {}",
        config.operations,
        config.big_m
    );
    Ok(config)
}

/// Run the whole pipeline: load, plan, generate, assemble, write.
///
/// Input errors abort before any output file is created.
pub fn run(args: &Args) -> Result<RunSummary, CliError> {
    let config = resolve_config(args)?;

    let table = load_feature_table(&args.input)?;
    tracing::info!(
        "Loaded {:?}: {} rows, target '{}', {} features",
        args.input,
        table.num_rows(),
        table.target_name(),
        table.num_features()
    );

    let derived = plan(table.num_features(), &config.operations);
    let columns = 1 + table.num_features() + derived;
    tracing::info!(
        "Planned {} metafeatures ({} output columns) for {}",
        derived,
        columns,
        config.operations
    );

    if args.dry_run {
        return Ok(RunSummary {
            rows: table.num_rows(),
            features: table.num_features(),
            derived,
            columns,
            outputs: None,
        });
    }

    let output = expand(&table, &config)?;

    let paths = output_paths(&args.input, args.out_dir.as_deref());
    write_csv(&output, &paths.csv)?;
    tracing::info!("Wrote {:?}", paths.csv);
    write_table_text(&output, &paths.table)?;
    tracing::info!("Wrote {:?}", paths.table);

    Ok(RunSummary {
        rows: output.num_rows(),
        features: table.num_features(),
        derived,
        columns: output.num_columns(),
        outputs: Some(paths),
    })
}

fn output_paths(input: &Path, out_dir: Option<&Path>) -> OutputPaths {
    match out_dir {
        Some(dir) => OutputPaths::for_input_in(input, dir),
        None => OutputPaths::for_input(input),
    }
}
