//! Partial target vectors over the observation space.

use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Result, SubgoalError};

/// A target over the observation space where every axis is either a value
/// to match or unconstrained (`None`).
#[derive(Clone, Debug, PartialEq)]
pub struct SubgoalVector {
    targets: Vec<Option<f32>>,
}

impl SubgoalVector {
    /// Builds a subgoal from explicit per-axis targets.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if a target is NaN or
    /// infinite; use `None` for an unconstrained axis.
    pub fn new(targets: Vec<Option<f32>>) -> Result<Self> {
        if let Some(axis) = targets.iter().position(|t| t.is_some_and(|v| !v.is_finite())) {
            return Err(SubgoalError::config(format!(
                "subgoal target on axis {axis} is not finite"
            )));
        }
        Ok(Self { targets })
    }

    /// Builds a subgoal that constrains every axis.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if a value is not finite.
    pub fn full(values: Vec<f32>) -> Result<Self> {
        Self::new(values.into_iter().map(Some).collect())
    }

    /// A subgoal of `len` axes, none of them constrained.
    #[must_use]
    pub fn unconstrained(len: usize) -> Self {
        Self { targets: vec![None; len] }
    }

    /// Constrains the contiguous block of axes starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if the block runs past the end
    /// of the vector or a value is not finite.
    pub fn with_block(mut self, start: usize, values: &[f32]) -> Result<Self> {
        let end = start + values.len();
        if end > self.targets.len() {
            return Err(SubgoalError::config(format!(
                "block {start}..{end} does not fit in a subgoal of {} axes",
                self.targets.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SubgoalError::config("subgoal block contains a non-finite value"));
        }
        for (slot, &value) in self.targets[start..end].iter_mut().zip(values) {
            *slot = Some(value);
        }
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target on `axis`, or `None` if the axis is unconstrained or out of range.
    #[must_use]
    pub fn get(&self, axis: usize) -> Option<f32> {
        self.targets.get(axis).copied().flatten()
    }

    /// The constrained axes with their targets, in axis order.
    pub fn active_axes(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(axis, t)| t.map(|value| (axis, value)))
    }

    #[must_use]
    pub fn is_fully_constrained(&self) -> bool {
        self.targets.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn targets(&self) -> &[Option<f32>] {
        &self.targets
    }
}

/// Ordered, read-only list of subgoals shared by an achiever and its clones.
#[derive(Clone, Debug, PartialEq)]
pub struct SubgoalSequence(Arc<[SubgoalVector]>);

impl SubgoalSequence {
    /// Wraps `subgoals`, checking that each one has `n_obs` axes.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] on the first subgoal whose
    /// length disagrees with `n_obs`.
    pub fn new(n_obs: usize, subgoals: Vec<SubgoalVector>) -> Result<Self> {
        if let Some((i, s)) = subgoals.iter().enumerate().find(|(_, s)| s.len() != n_obs) {
            return Err(SubgoalError::config(format!(
                "subgoal {i} has {} axes, expected {n_obs}",
                s.len()
            )));
        }
        Ok(Self(subgoals.into()))
    }
}

impl Deref for SubgoalSequence {
    type Target = [SubgoalVector];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
