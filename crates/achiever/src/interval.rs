//! Axis-wise band check: every constrained axis must lie within `range` of
//! its target, bounds included.

use std::path::Path;
use std::sync::Arc;

use crate::achiever::{Achieve, Variant, VectorCore};
use crate::error::Result;
use crate::events::AchievementObserver;
use crate::vector::{SubgoalSequence, SubgoalVector};

#[derive(Clone, Debug)]
pub struct IntervalAchiever {
    pub(crate) core: VectorCore,
}

impl IntervalAchiever {
    /// # Errors
    ///
    /// Returns [`crate::SubgoalError::Configuration`] if `n_obs` is zero,
    /// `range` is negative or a subgoal does not have `n_obs` axes.
    pub fn from_subgoals(range: f32, n_obs: usize, subgoals: Vec<SubgoalVector>) -> Result<Self> {
        Ok(Self { core: VectorCore::from_subgoals(range, n_obs, subgoals)? })
    }

    /// Loads the subgoals from a table file, see [`crate::table`].
    ///
    /// # Errors
    ///
    /// Returns a configuration-class error if the parameters are invalid or
    /// the table cannot be loaded.
    pub fn from_table(range: f32, n_obs: usize, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self { core: VectorCore::from_table(range, n_obs, path.as_ref())? })
    }

    /// Uses the built-in Fetch pick-and-place subgoals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SubgoalError::Configuration`] if the parameters are
    /// invalid or `n_obs` is too small for the built-in subgoals.
    pub fn pick_and_place(range: f32, n_obs: usize) -> Result<Self> {
        Ok(Self { core: VectorCore::pick_and_place(range, n_obs)? })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn AchievementObserver>) -> Self {
        self.core.set_observer(observer);
        self
    }

    #[must_use]
    pub fn range(&self) -> f32 {
        self.core.range
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

impl Achieve for IntervalAchiever {
    type Observation = [f32];

    fn subgoal_count(&self) -> usize {
        self.core.subgoals.len()
    }

    fn achieved(&self, observation: &[f32], index: usize) -> Result<bool> {
        let Some(subgoal) = self.core.subgoal_for(observation, index)? else {
            return Ok(false);
        };
        let range = self.core.range;
        let hit = subgoal.active_axes().all(|(axis, target)| {
            let value = observation[axis];
            target - range <= value && value <= target + range
        });
        Ok(self.core.settle(hit, index, Variant::Interval))
    }
}
