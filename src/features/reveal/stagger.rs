//! Stagger timing policy for batch entrances

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How an entering target's delay is derived from the batch stagger step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaggerPolicy {
    /// `index_in_batch × step`, regardless of what else enters
    #[default]
    ByIndex,
    /// `rank among the batch's targets entering on the same tick × step`
    WithinTick,
}

impl StaggerPolicy {
    /// Delay for a target at `index` that is the `rank`-th to enter this tick
    pub fn delay(&self, step: Duration, index: usize, rank: usize) -> Duration {
        let slot = match self {
            StaggerPolicy::ByIndex => index,
            StaggerPolicy::WithinTick => rank,
        };
        let slot = u32::try_from(slot).unwrap_or(u32::MAX);
        step.checked_mul(slot).unwrap_or(Duration::MAX)
    }
}
