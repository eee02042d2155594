//! Subgoal tables: one header line, then one comma-separated row per subgoal.
//!
//! Empty cells and `nan` mark unconstrained axes. Infinite values, including
//! numbers too large for `f32`, are refused.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, SubgoalError};
use crate::vector::{SubgoalSequence, SubgoalVector};

/// Loads the subgoal table at `path`, expecting `n_obs` columns per row.
///
/// # Errors
///
/// Returns [`SubgoalError::Table`] if the file cannot be opened or parsed,
/// [`SubgoalError::Cell`] for a non-numeric cell and
/// [`SubgoalError::Configuration`] for a row of the wrong width.
pub fn load_path(path: &Path, n_obs: usize) -> Result<SubgoalSequence> {
    let reader = builder()
        .from_path(path)
        .map_err(|source| SubgoalError::Table { path: path.to_path_buf(), source })?;
    let subgoals = read_rows(reader, n_obs, path)?;
    tracing::debug!("Loaded {} subgoals from {}", subgoals.len(), path.display());
    Ok(subgoals)
}

/// Same as [`load_path`] for an in-memory or streamed table.
///
/// # Errors
///
/// See [`load_path`].
pub fn load_reader<R: Read>(source: R, n_obs: usize) -> Result<SubgoalSequence> {
    read_rows(builder().from_reader(source), n_obs, Path::new("<reader>"))
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Width is checked per row so the error names the subgoal.
    builder.has_headers(true).flexible(true).trim(csv::Trim::All);
    builder
}

fn read_rows<R: Read>(
    mut reader: csv::Reader<R>,
    n_obs: usize,
    origin: &Path,
) -> Result<SubgoalSequence> {
    let mut subgoals = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|source| SubgoalError::Table { path: origin.to_path_buf(), source })?;
        if record.len() != n_obs {
            return Err(SubgoalError::config(format!(
                "subgoal row {row} of {} has {} columns, expected {n_obs}",
                origin.display(),
                record.len()
            )));
        }
        let targets = record
            .iter()
            .enumerate()
            .map(|(column, cell)| parse_cell(cell, row, column))
            .collect::<Result<Vec<_>>>()?;
        subgoals.push(SubgoalVector::new(targets)?);
    }
    SubgoalSequence::new(n_obs, subgoals)
}

fn parse_cell(cell: &str, row: usize, column: usize) -> Result<Option<f32>> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| SubgoalError::Cell { row, column, value: cell.to_owned() })
}
