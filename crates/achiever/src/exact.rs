//! Full-state equality for discrete environments.

use std::path::Path;
use std::sync::Arc;

use crate::achiever::{Achieve, Variant, VectorCore};
use crate::error::{Result, SubgoalError};
use crate::events::AchievementObserver;
use crate::vector::{SubgoalSequence, SubgoalVector};

/// Matches only when every axis equals its target. Subgoals are complete
/// state snapshots, so unconstrained axes are refused at construction.
#[derive(Clone, Debug)]
pub struct ExactAchiever {
    pub(crate) core: VectorCore,
}

impl ExactAchiever {
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if `n_obs` is zero, a subgoal
    /// does not have `n_obs` axes or leaves an axis unconstrained.
    pub fn from_subgoals(n_obs: usize, subgoals: Vec<SubgoalVector>) -> Result<Self> {
        Self::checked(VectorCore::from_subgoals(0.0, n_obs, subgoals)?)
    }

    /// # Errors
    ///
    /// Returns a configuration-class error if the table cannot be loaded or
    /// contains empty cells.
    pub fn from_table(n_obs: usize, path: impl AsRef<Path>) -> Result<Self> {
        Self::checked(VectorCore::from_table(0.0, n_obs, path.as_ref())?)
    }

    fn checked(core: VectorCore) -> Result<Self> {
        if let Some(i) = core.subgoals.iter().position(|s| !s.is_fully_constrained()) {
            return Err(SubgoalError::config(format!(
                "exact subgoal {i} has unconstrained axes"
            )));
        }
        Ok(Self { core })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn AchievementObserver>) -> Self {
        self.core.set_observer(observer);
        self
    }

    #[must_use]
    pub fn n_obs(&self) -> usize {
        self.core.n_obs
    }

    #[must_use]
    pub fn subgoals(&self) -> &SubgoalSequence {
        &self.core.subgoals
    }
}

impl Achieve for ExactAchiever {
    type Observation = [f32];

    fn subgoal_count(&self) -> usize {
        self.core.subgoals.len()
    }

    #[allow(clippy::float_cmp)]
    fn achieved(&self, observation: &[f32], index: usize) -> Result<bool> {
        let Some(subgoal) = self.core.subgoal_for(observation, index)? else {
            return Ok(false);
        };
        let hit = subgoal
            .active_axes()
            .all(|(axis, target)| observation[axis] == target);
        Ok(self.core.settle(hit, index, Variant::Exact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_differing_axis_fails() {
        let a = ExactAchiever::from_subgoals(3, vec![SubgoalVector::full(vec![1.0, 2.0, 3.0]).unwrap()])
            .unwrap();
        assert!(a.achieved(&[1.0, 2.0, 3.0], 0).unwrap());
        assert!(!a.achieved(&[1.0, 2.0, 4.0], 0).unwrap());
        assert!(!a.achieved(&[0.0, 2.0, 3.0], 0).unwrap());
    }

    #[test]
    fn partial_subgoals_are_refused() {
        let partial = SubgoalVector::new(vec![Some(1.0), None]).unwrap();
        assert!(ExactAchiever::from_subgoals(2, vec![partial]).is_err());
    }
}
