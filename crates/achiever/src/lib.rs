#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Subgoal Achievers
//!
//! Deterministic predicates that decide whether an agent's observation
//! satisfies the current subgoal of a hierarchical task decomposition. A
//! reward-shaping layer holds one achiever per run and asks it, step after
//! step, whether `subgoals[index]` has been reached.
//!
//! ## Key Components
//!
//! -   **Subgoals:** [`SubgoalVector`] is a partial target over the
//!     observation space. Axes the subgoal does not care about are
//!     unconstrained and never compared. A [`SubgoalSequence`] is the
//!     immutable, ordered list an achiever is built with.
//! -   **Vector achievers:** [`IntervalAchiever`] (axis-wise band check),
//!     [`RadiusAchiever`] (Euclidean distance over the active axes) and
//!     [`ExactAchiever`] (full-state equality for discrete environments).
//!     They are gathered in the closed [`VectorAchiever`] enum.
//! -   **Relative achiever:** [`RelativeAchiever`] checks a geometric
//!     relationship between a primary agent and the secondary agents of a
//!     [`JointState`] instead of comparing flat vectors.
//! -   **Configuration:** [`AchieverConfig`] is the JSON-facing description
//!     of an achiever and builds the matching [`Achiever`].
//! -   **Events:** every successful evaluation is reported to an
//!     [`AchievementObserver`]. The default [`TracingObserver`] emits a
//!     `tracing` event; callers can substitute a closure.
//!
//! An index past the end of the subgoal list is never an error: the
//! achiever simply reports "not achieved".
//!
//! ## Usage
//!
//! ```rust
//! use achiever::{Achieve, IntervalAchiever, SubgoalVector};
//!
//! let subgoals = vec![SubgoalVector::new(vec![Some(0.0), None, Some(0.0)])?];
//! let achiever = IntervalAchiever::from_subgoals(0.01, 3, subgoals)?;
//!
//! assert!(achiever.achieved(&[0.005, 99.0, -0.005], 0)?);
//! assert!(!achiever.achieved(&[0.02, 99.0, 0.0], 0)?);
//! assert!(!achiever.achieved(&[0.0, 0.0, 0.0], 1)?);
//! # Ok::<(), achiever::SubgoalError>(())
//! ```

pub mod achiever;
pub mod config;
pub mod error;
pub mod events;
pub mod exact;
pub mod interval;
pub mod pick_and_place;
pub mod radius;
pub mod relative;
pub mod table;
pub mod vector;

pub use achiever::{Achieve, Achiever, Variant, VectorAchiever};
pub use config::{AchieverConfig, RelativeConfig, VectorConfig};
pub use error::{Result, SubgoalError};
pub use events::{Achievement, AchievementObserver, TracingObserver};
pub use exact::ExactAchiever;
pub use interval::IntervalAchiever;
pub use pick_and_place::{
    pick_and_place_subgoals, FETCH_PICK_AND_PLACE_N_OBS, FETCH_PICK_AND_PLACE_RANGE,
};
pub use radius::RadiusAchiever;
pub use relative::{
    AgentState, JointState, RelativeAchiever, RelativeCondition, DEFAULT_ANGLE_TOLERANCE,
};
pub use vector::{SubgoalSequence, SubgoalVector};
