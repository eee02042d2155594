//! Euclidean check: the distance between the observation and the target,
//! measured over the constrained axes only, must not exceed `range`.

use std::path::Path;
use std::sync::Arc;

use crate::achiever::{Achieve, Variant, VectorCore};
use crate::error::Result;
use crate::events::AchievementObserver;
use crate::vector::{SubgoalSequence, SubgoalVector};

#[derive(Clone, Debug)]
pub struct RadiusAchiever {
    pub(crate) core: VectorCore,
}

impl RadiusAchiever {
    /// # Errors
    ///
    /// Returns [`crate::SubgoalError::Configuration`] if `n_obs` is zero,
    /// `range` is negative or a subgoal does not have `n_obs` axes.
    pub fn from_subgoals(range: f32, n_obs: usize, subgoals: Vec<SubgoalVector>) -> Result<Self> {
        Ok(Self { core: VectorCore::from_subgoals(range, n_obs, subgoals)? })
    }

    /// # Errors
    ///
    /// Returns a configuration-class error if the parameters are invalid or
    /// the table cannot be loaded.
    pub fn from_table(range: f32, n_obs: usize, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self { core: VectorCore::from_table(range, n_obs, path.as_ref())? })
    }

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

    /// Distance from `observation` to subgoal `index` over its active axes.
    ///
    /// # Errors
    ///
    /// Same contract as [`Achieve::achieved`]; `Ok(None)` past the last subgoal.
    pub fn distance(&self, observation: &[f32], index: usize) -> Result<Option<f32>> {
        let Some(subgoal) = self.core.subgoal_for(observation, index)? else {
            return Ok(None);
        };
        let squared: f32 = subgoal
            .active_axes()
            .map(|(axis, target)| (observation[axis] - target).powi(2))
            .sum();
        Ok(Some(squared.sqrt()))
    }
}

impl Achieve for RadiusAchiever {
    type Observation = [f32];

    fn subgoal_count(&self) -> usize {
        self.core.subgoals.len()
    }

    fn achieved(&self, observation: &[f32], index: usize) -> Result<bool> {
        let Some(distance) = self.distance(observation, index)? else {
            return Ok(false);
        };
        Ok(self.core.settle(distance <= self.core.range, index, Variant::Radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_distance_is_stricter_than_bands() {
        // 0.3 per axis fits a 0.4 band on each axis, but the distance is ~0.42.
        let subgoals = vec![SubgoalVector::full(vec![0.0, 0.0]).unwrap()];
        let a = RadiusAchiever::from_subgoals(0.4, 2, subgoals).unwrap();
        assert!(!a.achieved(&[0.3, 0.3], 0).unwrap());
        assert!(a.achieved(&[0.3, 0.0], 0).unwrap());
    }

    #[test]
    fn unconstrained_axes_do_not_count() {
        let subgoals = vec![SubgoalVector::new(vec![Some(1.0), None]).unwrap()];
        let a = RadiusAchiever::from_subgoals(0.5, 2, subgoals).unwrap();
        assert_eq!(a.distance(&[1.0, 1000.0], 0).unwrap(), Some(0.0));
        assert!(a.achieved(&[1.4, -1000.0], 0).unwrap());
    }

    #[test]
    fn distance_equal_to_range_is_achieved() {
        let subgoals = vec![SubgoalVector::full(vec![0.0, 0.0]).unwrap()];
        let a = RadiusAchiever::from_subgoals(5.0, 2, subgoals).unwrap();
        assert!(a.achieved(&[3.0, 4.0], 0).unwrap());
        assert!(!a.achieved(&[3.0, 4.01], 0).unwrap());
    }

    #[test]
    fn index_past_end_is_not_achieved() {
        let a = RadiusAchiever::pick_and_place(0.01, 25).unwrap();
        assert!(!a.achieved(&[0.0; 25], 2).unwrap());
        assert_eq!(a.distance(&[0.0; 25], 2).unwrap(), None);
    }
}
