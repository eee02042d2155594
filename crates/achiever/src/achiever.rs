//! The achiever capability and the closed set of variants implementing it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, SubgoalError};
use crate::events::{default_observer, Achievement, AchievementObserver};
use crate::exact::ExactAchiever;
use crate::interval::IntervalAchiever;
use crate::pick_and_place::pick_and_place_subgoals;
use crate::radius::RadiusAchiever;
use crate::relative::RelativeAchiever;
use crate::table;
use crate::vector::{SubgoalSequence, SubgoalVector};

/// Decides whether an observation satisfies one subgoal of a fixed list.
///
/// Implementations are pure: the result depends only on the achiever's
/// configuration and the arguments, so a shared achiever can be queried from
/// several threads at once.
pub trait Achieve {
    type Observation: ?Sized;

    /// Number of subgoals the achiever was built with.
    fn subgoal_count(&self) -> usize;

    /// Returns `Ok(false)` when `index` is past the last subgoal.
    ///
    /// # Errors
    ///
    /// Returns [`SubgoalError::ContractViolation`] if the observation does not
    /// have the shape the achiever was configured for.
    fn achieved(&self, observation: &Self::Observation, index: usize) -> Result<bool>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Interval,
    Radius,
    Exact,
    Relative,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Interval => "interval",
            Variant::Radius => "radius",
            Variant::Exact => "exact",
            Variant::Relative => "relative",
        })
    }
}

pub(crate) fn validate(range: f32, n_obs: usize) -> Result<()> {
    if n_obs == 0 {
        return Err(SubgoalError::config("n_obs must be positive"));
    }
    if range.is_nan() || range < 0.0 {
        return Err(SubgoalError::config(format!(
            "range must be a non-negative number, got {range}"
        )));
    }
    Ok(())
}

/// State shared by the flat-vector achievers.
#[derive(Clone)]
pub(crate) struct VectorCore {
    pub(crate) range: f32,
    pub(crate) n_obs: usize,
    pub(crate) subgoals: SubgoalSequence,
    observer: Arc<dyn AchievementObserver>,
}

impl VectorCore {
    pub(crate) fn from_subgoals(
        range: f32,
        n_obs: usize,
        subgoals: Vec<SubgoalVector>,
    ) -> Result<Self> {
        validate(range, n_obs)?;
        Ok(Self::assemble(range, n_obs, SubgoalSequence::new(n_obs, subgoals)?))
    }

    pub(crate) fn from_table(range: f32, n_obs: usize, path: &Path) -> Result<Self> {
        validate(range, n_obs)?;
        Ok(Self::assemble(range, n_obs, table::load_path(path, n_obs)?))
    }

    pub(crate) fn pick_and_place(range: f32, n_obs: usize) -> Result<Self> {
        validate(range, n_obs)?;
        Ok(Self::assemble(range, n_obs, pick_and_place_subgoals(n_obs)?))
    }

    fn assemble(range: f32, n_obs: usize, subgoals: SubgoalSequence) -> Self {
        tracing::debug!(range, n_obs, subgoals = subgoals.len(), "Built achiever");
        Self { range, n_obs, subgoals, observer: default_observer() }
    }

    pub(crate) fn set_observer(&mut self, observer: Arc<dyn AchievementObserver>) {
        self.observer = observer;
    }

    /// The subgoal at `index`, after checking the observation width.
    /// Out-of-range indices yield `None` whatever the observation.
    pub(crate) fn subgoal_for(
        &self,
        observation: &[f32],
        index: usize,
    ) -> Result<Option<&SubgoalVector>> {
        let Some(subgoal) = self.subgoals.get(index) else {
            return Ok(None);
        };
        if observation.len() != self.n_obs {
            return Err(SubgoalError::ContractViolation {
                expected: self.n_obs,
                actual: observation.len(),
            });
        }
        Ok(Some(subgoal))
    }

    pub(crate) fn settle(&self, hit: bool, index: usize, variant: Variant) -> bool {
        if hit {
            self.observer.on_achieved(&Achievement { index, variant });
        }
        hit
    }
}

impl fmt::Debug for VectorCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorCore")
            .field("range", &self.range)
            .field("n_obs", &self.n_obs)
            .field("subgoals", &self.subgoals.len())
            .finish_non_exhaustive()
    }
}

/// Achievers that compare flat observation vectors.
#[derive(Clone, Debug)]
pub enum VectorAchiever {
    Interval(IntervalAchiever),
    Radius(RadiusAchiever),
    Exact(ExactAchiever),
}

impl VectorAchiever {
    fn core(&self) -> &VectorCore {
        match self {
            VectorAchiever::Interval(a) => &a.core,
            VectorAchiever::Radius(a) => &a.core,
            VectorAchiever::Exact(a) => &a.core,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            VectorAchiever::Interval(_) => Variant::Interval,
            VectorAchiever::Radius(_) => Variant::Radius,
            VectorAchiever::Exact(_) => Variant::Exact,
        }
    }

    #[must_use]
    pub fn range(&self) -> f32 {
        self.core().range
    }

    #[must_use]
    pub fn n_obs(&self) -> usize {
        self.core().n_obs
    }

    #[must_use]
    pub fn subgoals(&self) -> &SubgoalSequence {
        &self.core().subgoals
    }

    #[must_use]
    pub fn with_observer(self, observer: Arc<dyn AchievementObserver>) -> Self {
        match self {
            VectorAchiever::Interval(a) => VectorAchiever::Interval(a.with_observer(observer)),
            VectorAchiever::Radius(a) => VectorAchiever::Radius(a.with_observer(observer)),
            VectorAchiever::Exact(a) => VectorAchiever::Exact(a.with_observer(observer)),
        }
    }
}

impl Achieve for VectorAchiever {
    type Observation = [f32];

    fn subgoal_count(&self) -> usize {
        self.core().subgoals.len()
    }

    fn achieved(&self, observation: &[f32], index: usize) -> Result<bool> {
        match self {
            VectorAchiever::Interval(a) => a.achieved(observation, index),
            VectorAchiever::Radius(a) => a.achieved(observation, index),
            VectorAchiever::Exact(a) => a.achieved(observation, index),
        }
    }
}

impl From<IntervalAchiever> for VectorAchiever {
    fn from(a: IntervalAchiever) -> Self {
        VectorAchiever::Interval(a)
    }
}

impl From<RadiusAchiever> for VectorAchiever {
    fn from(a: RadiusAchiever) -> Self {
        VectorAchiever::Radius(a)
    }
}

impl From<ExactAchiever> for VectorAchiever {
    fn from(a: ExactAchiever) -> Self {
        VectorAchiever::Exact(a)
    }
}

/// Any achiever a configuration can describe.
#[derive(Clone, Debug)]
pub enum Achiever {
    Vector(VectorAchiever),
    Relative(RelativeAchiever),
}

impl Achiever {
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Achiever::Vector(a) => a.variant(),
            Achiever::Relative(_) => Variant::Relative,
        }
    }

    #[must_use]
    pub fn subgoal_count(&self) -> usize {
        match self {
            Achiever::Vector(a) => a.subgoal_count(),
            Achiever::Relative(a) => a.subgoal_count(),
        }
    }

    #[must_use]
    pub fn as_vector(&self) -> Option<&VectorAchiever> {
        match self {
            Achiever::Vector(a) => Some(a),
            Achiever::Relative(_) => None,
        }
    }

    #[must_use]
    pub fn as_relative(&self) -> Option<&RelativeAchiever> {
        match self {
            Achiever::Relative(a) => Some(a),
            Achiever::Vector(_) => None,
        }
    }

    #[must_use]
    pub fn with_observer(self, observer: Arc<dyn AchievementObserver>) -> Self {
        match self {
            Achiever::Vector(a) => Achiever::Vector(a.with_observer(observer)),
            Achiever::Relative(a) => Achiever::Relative(a.with_observer(observer)),
        }
    }
}
