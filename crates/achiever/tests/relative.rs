use achiever::{Achieve, AchieverConfig, AgentState, JointState, RelativeCondition};
use anyhow::Result;
use glam::Vec3;
use proptest::prelude::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn configured_crossing_then_following() -> Result<()> {
    let json = r#"{
        "kind": "relative",
        "range": 0.1,
        "subgoals": [
            {"relative_velocity_angle": 1.5707964, "dist": 1.5},
            {"relative_velocity_angle": 0.0, "dist": 2.0}
        ]
    }"#;
    let achiever = json.parse::<AchieverConfig>()?.build()?;
    let relative = achiever.as_relative().expect("relative achiever");
    assert_eq!(relative.subgoal_count(), 2);
    assert_eq!(relative.conditions()[1], RelativeCondition::FOLLOW_BEHIND);
    assert!((relative.conditions()[0].relative_velocity_angle - FRAC_PI_2).abs() < 1e-6);

    let truck = AgentState::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));

    // Crossing the truck's path just behind its tail.
    let crossing = AgentState::new(Vec3::new(8.0, -0.5, 0.0), Vec3::new(0.0, 1.2, 0.0));
    let state = JointState::new(crossing, vec![truck]);
    assert!(relative.achieved(&state, 0)?);
    assert!(!relative.achieved(&state, 1)?);

    // Settled in behind it, slightly off-axis and off-heading.
    let following = AgentState::new(Vec3::new(6.0, 0.3, 0.0), Vec3::new(2.9, 0.1, 0.0));
    let state = JointState::new(following, vec![truck]);
    assert!(!relative.achieved(&state, 0)?);
    assert!(relative.achieved(&state, 1)?);

    assert!(!relative.achieved(&state, 2)?);
    Ok(())
}

#[test]
fn negative_tolerance_is_rejected() {
    let err = r#"{"kind": "relative", "range": -0.1}"#
        .parse::<AchieverConfig>()
        .and_then(|c| c.build())
        .unwrap_err();
    assert!(err.is_configuration());
}

proptest! {
    /// Property: with the default config, a follower on exactly the leader's
    /// heading and well behind it is always achieved
    #[test]
    fn prop_parallel_follower_is_achieved_by_default(
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
        z in -10.0f32..10.0,
        speed in 0.1f32..5.0,
        gap in 2.5f32..50.0,
    ) {
        let dir = Vec3::new(x, y, z);
        prop_assume!(dir.length() > 0.01);
        let achiever = r#"{"kind": "relative"}"#.parse::<AchieverConfig>().unwrap().build().unwrap();
        let relative = achiever.as_relative().unwrap();

        let leader = AgentState::new(Vec3::ZERO, dir);
        let follower = AgentState::new(-gap * dir.normalize(), dir * speed);
        prop_assert!(relative.achieved(&JointState::new(follower, vec![leader]), 0).unwrap());
    }
}
