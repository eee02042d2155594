//! JSON description of an achiever.
//!
//! ```json
//! { "kind": "interval", "range": 0.01, "n_obs": 3, "subgoals": [[0, null, 0]] }
//! ```
//!
//! Vector kinds (`interval`, `radius`, `exact`) take their subgoals from at
//! most one of `subgoal_path` (a table, see [`crate::table`]) and `subgoals`
//! (`null` marks an unconstrained axis). With neither, `interval` and
//! `radius` fall back to the built-in pick-and-place subgoals and, unless
//! `range` is given, to [`FETCH_PICK_AND_PLACE_RANGE`]; with an explicit
//! source they require `range`. `exact` ignores `range`. The `relative` kind
//! reads `range` as its angle tolerance in radians (default
//! [`DEFAULT_ANGLE_TOLERANCE`]) and defaults to
//! [`RelativeCondition::FOLLOW_BEHIND`]. Unrecognised keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::achiever::{Achiever, VectorAchiever};
use crate::error::{Result, SubgoalError};
use crate::exact::ExactAchiever;
use crate::interval::IntervalAchiever;
use crate::pick_and_place::FETCH_PICK_AND_PLACE_RANGE;
use crate::radius::RadiusAchiever;
use crate::relative::{RelativeAchiever, RelativeCondition, DEFAULT_ANGLE_TOLERANCE};
use crate::vector::SubgoalVector;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchieverConfig {
    Interval(VectorConfig),
    Radius(VectorConfig),
    Exact(VectorConfig),
    Relative(RelativeConfig),
}

#[derive(Clone, Debug, Deserialize)]
pub struct VectorConfig {
    #[serde(default)]
    pub range: Option<f32>,
    /// Signed so that a negative width is reported as a configuration error
    /// rather than a parse error.
    pub n_obs: i64,
    #[serde(default)]
    pub subgoal_path: Option<PathBuf>,
    #[serde(default)]
    pub subgoals: Option<Vec<Vec<Option<f32>>>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelativeConfig {
    #[serde(default)]
    pub range: Option<f32>,
    #[serde(default)]
    pub subgoals: Option<Vec<RelativeCondition>>,
}

enum Source {
    Table(PathBuf),
    Literal(Vec<SubgoalVector>),
    Builtin,
}

impl VectorConfig {
    fn n_obs(&self) -> Result<usize> {
        usize::try_from(self.n_obs)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                SubgoalError::config(format!("n_obs must be positive, got {}", self.n_obs))
            })
    }

    fn range(&self, source: &Source) -> Result<f32> {
        match (self.range, source) {
            (Some(range), _) => Ok(range),
            (None, Source::Builtin) => Ok(FETCH_PICK_AND_PLACE_RANGE),
            (None, _) => Err(SubgoalError::config(
                "range is required when subgoals are given explicitly",
            )),
        }
    }

    fn source(&self, base: Option<&Path>) -> Result<Source> {
        match (&self.subgoal_path, &self.subgoals) {
            (Some(_), Some(_)) => Err(SubgoalError::config(
                "subgoal_path and subgoals are mutually exclusive",
            )),
            (Some(path), None) => Ok(Source::Table(match base {
                Some(dir) => dir.join(path),
                None => path.clone(),
            })),
            (None, Some(rows)) => rows
                .iter()
                .map(|row| SubgoalVector::new(row.clone()))
                .collect::<Result<Vec<_>>>()
                .map(Source::Literal),
            (None, None) => Ok(Source::Builtin),
        }
    }
}

impl AchieverConfig {
    /// Reads a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if the file cannot be read and
    /// [`SubgoalError::Json`] if it is not a valid config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            SubgoalError::config(format!("cannot read config {}: {e}", path.display()))
        })?;
        json.parse()
    }

    /// Reads a JSON config file and builds it, resolving a relative
    /// `subgoal_path` against the config's own directory.
    ///
    /// # Errors
    ///
    /// See [`AchieverConfig::from_path`] and [`AchieverConfig::build`].
    pub fn load(path: impl AsRef<Path>) -> Result<Achiever> {
        let path = path.as_ref();
        Self::from_path(path)?.build_in(path.parent())
    }

    /// # Errors
    ///
    /// Returns a configuration-class error for invalid parameters, an
    /// ambiguous or missing subgoal source, or an unloadable table.
    pub fn build(&self) -> Result<Achiever> {
        self.build_in(None)
    }

    /// Like [`AchieverConfig::build`], joining a relative `subgoal_path` onto
    /// `base` when one is given.
    ///
    /// # Errors
    ///
    /// See [`AchieverConfig::build`].
    pub fn build_in(&self, base: Option<&Path>) -> Result<Achiever> {
        let vector = match self {
            AchieverConfig::Interval(c) => {
                let n_obs = c.n_obs()?;
                let source = c.source(base)?;
                let range = c.range(&source)?;
                VectorAchiever::Interval(match source {
                    Source::Table(path) => IntervalAchiever::from_table(range, n_obs, path)?,
                    Source::Literal(subgoals) => {
                        IntervalAchiever::from_subgoals(range, n_obs, subgoals)?
                    }
                    Source::Builtin => IntervalAchiever::pick_and_place(range, n_obs)?,
                })
            }
            AchieverConfig::Radius(c) => {
                let n_obs = c.n_obs()?;
                let source = c.source(base)?;
                let range = c.range(&source)?;
                VectorAchiever::Radius(match source {
                    Source::Table(path) => RadiusAchiever::from_table(range, n_obs, path)?,
                    Source::Literal(subgoals) => {
                        RadiusAchiever::from_subgoals(range, n_obs, subgoals)?
                    }
                    Source::Builtin => RadiusAchiever::pick_and_place(range, n_obs)?,
                })
            }
            AchieverConfig::Exact(c) => {
                let n_obs = c.n_obs()?;
                VectorAchiever::Exact(match c.source(base)? {
                    Source::Table(path) => ExactAchiever::from_table(n_obs, path)?,
                    Source::Literal(subgoals) => ExactAchiever::from_subgoals(n_obs, subgoals)?,
                    Source::Builtin => {
                        return Err(SubgoalError::config(
                            "exact achievers need subgoal_path or subgoals",
                        ))
                    }
                })
            }
            AchieverConfig::Relative(c) => {
                let conditions = c
                    .subgoals
                    .clone()
                    .unwrap_or_else(|| vec![RelativeCondition::FOLLOW_BEHIND]);
                let tolerance = c.range.unwrap_or(DEFAULT_ANGLE_TOLERANCE);
                return Ok(Achiever::Relative(RelativeAchiever::new(tolerance, conditions)?));
            }
        };
        Ok(Achiever::Vector(vector))
    }
}

impl FromStr for AchieverConfig {
    type Err = SubgoalError;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
