//! Sequenced entrance timeline
//!
//! A small, one-shot sibling of the reveal controller: steps play one after
//! another, each optionally overlapping the end of the previous one. The
//! result is a list of ordinary enter commands whose delays encode the
//! schedule, so any [`Animator`](crate::features::reveal::Animator) can play it.

use std::time::Duration;

use crate::features::reveal::{AnimationCommand, AnimationProfile, EasingKind, TargetId};

#[derive(Debug, Clone, PartialEq)]
struct Step {
    target: TargetId,
    profile: AnimationProfile,
    start: Duration,
}

/// Ordered entrance steps sharing one easing curve
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    easing: EasingKind,
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new(easing: EasingKind) -> Self {
        Self {
            easing,
            steps: Vec::new(),
        }
    }

    /// Append a step starting when the previous one ends
    pub fn then(self, target: impl Into<TargetId>, offset_y: f32, duration: Duration) -> Self {
        self.overlapping(target, offset_y, duration, Duration::ZERO)
    }

    /// Append a step starting `overlap` before the previous one ends
    pub fn overlapping(
        mut self,
        target: impl Into<TargetId>,
        offset_y: f32,
        duration: Duration,
        overlap: Duration,
    ) -> Self {
        let start = self.total_duration().saturating_sub(overlap);
        self.steps.push(Step {
            target: target.into(),
            profile: AnimationProfile {
                offset_y,
                opacity_from: 0.0,
                duration,
                easing: self.easing,
            },
            start,
        });
        self
    }

    /// End of the latest-finishing step
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| step.start + step.profile.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Targets in play order
    pub fn targets(&self) -> impl Iterator<Item = (&TargetId, &AnimationProfile)> {
        self.steps.iter().map(|step| (&step.target, &step.profile))
    }

    /// One enter command per step, delayed to its start time
    pub fn commands(&self) -> Vec<AnimationCommand> {
        self.steps
            .iter()
            .map(|step| AnimationCommand::enter(step.target.clone(), &step.profile, step.start))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f32) -> Duration {
        Duration::from_secs_f32(value)
    }

    #[test]
    fn test_overlapping_steps() {
        let timeline = Timeline::new(EasingKind::EaseOut)
            .then("heading", 50.0, secs(1.0))
            .overlapping("subtitle", 30.0, secs(1.0), secs(0.5))
            .overlapping("cta", 20.0, secs(1.0), secs(0.5));

        let commands = timeline.commands();
        let delays: Vec<u128> = commands.iter().map(|c| c.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 500, 1000]);

        let offsets: Vec<f32> = commands.iter().map(|c| c.translate_y.0).collect();
        assert_eq!(offsets, vec![50.0, 30.0, 20.0]);
        assert!(commands.iter().all(|c| c.opacity == (0.0, 1.0)));
        assert!(commands.iter().all(|c| c.easing == EasingKind::EaseOut));

        assert_eq!(timeline.total_duration(), secs(2.0));
    }

    #[test]
    fn test_overlap_never_starts_before_zero() {
        let timeline = Timeline::new(EasingKind::Ease)
            .then("a", 10.0, secs(0.2))
            .overlapping("b", 10.0, secs(0.2), secs(5.0));

        assert_eq!(timeline.commands()[1].delay, Duration::ZERO);
        assert_eq!(timeline.total_duration(), secs(0.2));
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new(EasingKind::EaseOut);
        assert_eq!(timeline.targets().count(), 0);
        assert!(timeline.commands().is_empty());
        assert_eq!(timeline.total_duration(), Duration::ZERO);
    }
}
