//! Animation-playback capability consumed by the reveal controller

use std::time::{Duration, Instant};

use super::types::{AnimationProfile, EasingKind, TargetId};

/// Direction of a reveal animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Hidden pose → resting pose
    Enter,
    /// Resting pose → hidden pose
    Exit,
}

/// Hidden pose applied without animating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset_y: f32,
    pub opacity: f32,
}

impl Pose {
    pub fn hidden(profile: &AnimationProfile) -> Self {
        Self {
            offset_y: profile.offset_y,
            opacity: profile.opacity_from,
        }
    }
}

/// One fire-and-forget animation request
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCommand {
    pub target: TargetId,
    pub direction: Direction,
    /// Opacity (from, to)
    pub opacity: (f32, f32),
    /// Vertical offset (from, to)
    pub translate_y: (f32, f32),
    pub duration: Duration,
    /// Start offset from the moment the command is issued
    pub delay: Duration,
    pub easing: EasingKind,
}

impl AnimationCommand {
    /// Entrance: opacity `opacity_from → 1`, offset `offset_y → 0`
    pub fn enter(target: TargetId, profile: &AnimationProfile, delay: Duration) -> Self {
        Self {
            target,
            direction: Direction::Enter,
            opacity: (profile.opacity_from, 1.0),
            translate_y: (profile.offset_y, 0.0),
            duration: profile.duration,
            delay,
            easing: profile.easing,
        }
    }

    /// Exit: the entrance played backwards, always without delay
    pub fn exit(target: TargetId, profile: &AnimationProfile) -> Self {
        Self {
            target,
            direction: Direction::Exit,
            opacity: (1.0, profile.opacity_from),
            translate_y: (0.0, profile.offset_y),
            duration: profile.duration,
            delay: Duration::ZERO,
            easing: profile.easing,
        }
    }

    /// Time from issue until the animation has settled
    pub fn settles_after(&self) -> Duration {
        self.delay + self.duration
    }

    /// Offset of the hidden end of this animation
    pub fn travel(&self) -> f32 {
        match self.direction {
            Direction::Enter => self.translate_y.0,
            Direction::Exit => self.translate_y.1,
        }
    }

    /// Opacity of the hidden end of this animation
    pub fn hidden_opacity(&self) -> f32 {
        match self.direction {
            Direction::Enter => self.opacity.0,
            Direction::Exit => self.opacity.1,
        }
    }
}

/// Cancel handle returned for every issued command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(pub u64);

/// Host animation subsystem
///
/// Playback runs independently once a command is issued; the caller only
/// keeps the handle to cancel it.
pub trait Animator {
    /// Snap a target to a pose without animating
    fn place(&mut self, target: &TargetId, pose: Pose);

    /// Start (or schedule, when `command.delay` is non-zero) an animation
    fn animate(&mut self, command: AnimationCommand, now: Instant) -> AnimationHandle;

    /// Stop an animation; stale or unknown handles are ignored
    fn cancel(&mut self, handle: AnimationHandle);

    /// Forget everything about a target
    fn release(&mut self, _target: &TargetId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_exit_are_mirrored() {
        let profile = AnimationProfile::default();
        let id = TargetId::new("card");

        let enter = AnimationCommand::enter(id.clone(), &profile, Duration::from_millis(400));
        let exit = AnimationCommand::exit(id, &profile);

        assert_eq!(enter.opacity, (0.0, 1.0));
        assert_eq!(enter.translate_y, (50.0, 0.0));
        assert_eq!(exit.opacity, (1.0, 0.0));
        assert_eq!(exit.translate_y, (0.0, 50.0));
        assert_eq!(exit.delay, Duration::ZERO);
        assert_eq!(enter.travel(), exit.travel());
        assert_eq!(enter.settles_after(), Duration::from_millis(1200));
        assert_ne!(enter.direction, exit.direction);
    }
}
