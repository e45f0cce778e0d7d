//! Command execution.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use accrep_model::SeverityMap;
use accrep_transform::{ReduceReport, reduce_file};

use crate::cli::Cli;

pub fn run_reduce(cli: &Cli) -> Result<ReduceReport> {
    let severity = match &cli.severity_map {
        Some(path) => {
            debug!(path = %path.display(), "loading severity table");
            SeverityMap::from_path(path).context("load severity table")?
        }
        None => SeverityMap::quebec(),
    };

    let span = info_span!("reduce", input = %cli.input.display());
    let _guard = span.enter();
    let report = reduce_file(&cli.input, &cli.output, &severity)?;
    Ok(report)
}
