//! Built-in subgoals for the Fetch pick-and-place task.
//!
//! Phase one: the object sits on the target (axes 6..9 are the object's
//! offset from the goal). Phase two: the same, with both gripper fingers
//! (axes 9 and 10) closed to 0.02.

use crate::error::{Result, SubgoalError};
use crate::vector::{SubgoalSequence, SubgoalVector};

/// Observation width of the Fetch pick-and-place environment.
pub const FETCH_PICK_AND_PLACE_N_OBS: usize = 25;
/// Tolerance the pick-and-place subgoals are tuned for.
pub const FETCH_PICK_AND_PLACE_RANGE: f32 = 0.01;

const OBJECT_RELOCATED: [f32; 3] = [0.0, 0.0, 0.0];
const GRIPPER_CLOSED: [f32; 5] = [0.0, 0.0, 0.0, 0.02, 0.02];
const BLOCK_START: usize = 6;

/// # Errors
///
/// Returns [`SubgoalError::Configuration`] if `n_obs` cannot hold axes 6..11.
pub fn pick_and_place_subgoals(n_obs: usize) -> Result<SubgoalSequence> {
    let needed = BLOCK_START + GRIPPER_CLOSED.len();
    if n_obs < needed {
        return Err(SubgoalError::config(format!(
            "pick-and-place subgoals need at least {needed} observation axes, got {n_obs}"
        )));
    }
    let relocated = SubgoalVector::unconstrained(n_obs).with_block(BLOCK_START, &OBJECT_RELOCATED)?;
    let grasped = SubgoalVector::unconstrained(n_obs).with_block(BLOCK_START, &GRIPPER_CLOSED)?;
    SubgoalSequence::new(n_obs, vec![relocated, grasped])
}
