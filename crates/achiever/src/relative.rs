//! Subgoals expressed as a relationship between agents rather than a target
//! vector.
//!
//! A [`RelativeCondition`] holds when, for every secondary agent of the
//! [`JointState`]:
//!
//! 1. both the primary and the secondary are moving;
//! 2. the angle between their velocities is within the tolerance of
//!    `relative_velocity_angle` (radians, `0` for parallel headings);
//! 3. the primary is behind the secondary, i.e. its offset projected on the
//!    secondary's heading is not positive;
//! 4. the primary is at least `dist` away from the secondary.
//!
//! Distances are rotation invariant, so measuring them in the secondary's
//! frame is the same as measuring them in the world frame.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::achiever::{Achieve, Variant};
use crate::error::{Result, SubgoalError};
use crate::events::{default_observer, Achievement, AchievementObserver};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AgentState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl AgentState {
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }
}

/// Kinematic snapshot of the controlled agent and the agents around it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct JointState {
    pub primary: AgentState,
    pub secondaries: Vec<AgentState>,
}

impl JointState {
    #[must_use]
    pub fn new(primary: AgentState, secondaries: Vec<AgentState>) -> Self {
        Self { primary, secondaries }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelativeCondition {
    pub relative_velocity_angle: f32,
    pub dist: f32,
}

/// Angle tolerance, in radians, used when a configuration does not give one.
pub const DEFAULT_ANGLE_TOLERANCE: f32 = 1e-3;

impl RelativeCondition {
    /// Follow a secondary agent on a parallel heading, at least two units behind.
    pub const FOLLOW_BEHIND: Self = Self { relative_velocity_angle: 0.0, dist: 2.0 };

    fn validate(&self, index: usize) -> Result<()> {
        if !self.relative_velocity_angle.is_finite() {
            return Err(SubgoalError::config(format!(
                "relative subgoal {index} has a non-finite angle"
            )));
        }
        if self.dist.is_nan() || self.dist < 0.0 {
            return Err(SubgoalError::config(format!(
                "relative subgoal {index} needs a non-negative dist, got {}",
                self.dist
            )));
        }
        Ok(())
    }

    /// Whether `primary` meets this condition with respect to `secondary`.
    #[must_use]
    pub fn holds(&self, angle_tolerance: f32, primary: &AgentState, secondary: &AgentState) -> bool {
        let (own, heading) = (primary.velocity, secondary.velocity);
        if own.length_squared() == 0.0 || heading.length_squared() == 0.0 {
            return false;
        }
        // atan2 stays accurate near 0 and pi, where acos of the dot does not.
        let angle = own.cross(heading).length().atan2(own.dot(heading));
        if (angle - self.relative_velocity_angle).abs() > angle_tolerance {
            return false;
        }
        let offset = primary.position - secondary.position;
        offset.dot(heading) <= 0.0 && offset.length() >= self.dist
    }
}

#[derive(Clone)]
pub struct RelativeAchiever {
    angle_tolerance: f32,
    conditions: Arc<[RelativeCondition]>,
    observer: Arc<dyn AchievementObserver>,
}

impl RelativeAchiever {
    /// # Errors
    ///
    /// Returns [`SubgoalError::Configuration`] if the tolerance is negative or
    /// NaN, or a condition has a non-finite angle or a negative `dist`.
    pub fn new(angle_tolerance: f32, conditions: Vec<RelativeCondition>) -> Result<Self> {
        if angle_tolerance.is_nan() || angle_tolerance < 0.0 {
            return Err(SubgoalError::config(format!(
                "angle tolerance must be a non-negative number, got {angle_tolerance}"
            )));
        }
        for (i, condition) in conditions.iter().enumerate() {
            condition.validate(i)?;
        }
        tracing::debug!(angle_tolerance, subgoals = conditions.len(), "Built relative achiever");
        Ok(Self {
            angle_tolerance,
            conditions: conditions.into(),
            observer: default_observer(),
        })
    }

    /// A single [`RelativeCondition::FOLLOW_BEHIND`] subgoal.
    ///
    /// # Errors
    ///
    /// See [`RelativeAchiever::new`].
    pub fn follow_behind(angle_tolerance: f32) -> Result<Self> {
        Self::new(angle_tolerance, vec![RelativeCondition::FOLLOW_BEHIND])
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn AchievementObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn angle_tolerance(&self) -> f32 {
        self.angle_tolerance
    }

    #[must_use]
    pub fn conditions(&self) -> &[RelativeCondition] {
        &self.conditions
    }
}

impl Achieve for RelativeAchiever {
    type Observation = JointState;

    fn subgoal_count(&self) -> usize {
        self.conditions.len()
    }

    fn achieved(&self, state: &JointState, index: usize) -> Result<bool> {
        let Some(condition) = self.conditions.get(index) else {
            return Ok(false);
        };
        let hit = !state.secondaries.is_empty()
            && state
                .secondaries
                .iter()
                .all(|s| condition.holds(self.angle_tolerance, &state.primary, s));
        if hit {
            self.observer.on_achieved(&Achievement { index, variant: Variant::Relative });
        }
        Ok(hit)
    }
}

impl fmt::Debug for RelativeAchiever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeAchiever")
            .field("angle_tolerance", &self.angle_tolerance)
            .field("conditions", &self.conditions)
            .finish_non_exhaustive()
    }
}
