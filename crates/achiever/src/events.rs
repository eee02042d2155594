//! Achievement notifications.
//!
//! Achievers report each successful evaluation to an [`AchievementObserver`]
//! instead of writing log lines themselves, so the reward-shaping layer can
//! count, record or ignore them.

use std::sync::Arc;

use crate::achiever::Variant;

/// A subgoal that was just found to be achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub index: usize,
    pub variant: Variant,
}

pub trait AchievementObserver: Send + Sync {
    fn on_achieved(&self, achievement: &Achievement);
}

impl<F> AchievementObserver for F
where
    F: Fn(&Achievement) + Send + Sync,
{
    fn on_achieved(&self, achievement: &Achievement) {
        self(achievement);
    }
}

/// Default observer: one `info` event per achievement.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AchievementObserver for TracingObserver {
    fn on_achieved(&self, achievement: &Achievement) {
        tracing::info!(
            index = achievement.index,
            variant = %achievement.variant,
            "Achieved subgoal {}",
            achievement.index
        );
    }
}

pub(crate) fn default_observer() -> Arc<dyn AchievementObserver> {
    Arc::new(TracingObserver)
}
