//! Reveal player built on iced_anim transitions
//!
//! Every target owns one `Animated<f32>` progress value: `0.0` is the hidden
//! pose, `1.0` the resting pose. Views read [`RevealPlayer::opacity`] and
//! [`RevealPlayer::offset_y`] and map them onto colors and padding.
//!
//! Delayed commands are parked until their start instant, so a stagger delay
//! never holds a timer or a task.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::reveal::{
    AnimationCommand, AnimationHandle, Animator, Direction, EasingKind, Pose, TargetId,
};

/// Shortest transition handed to iced_anim
const MIN_DURATION: Duration = Duration::from_millis(1);

fn easing_for(kind: EasingKind, duration: Duration) -> Easing {
    let curve = match kind {
        EasingKind::Ease => Easing::EASE,
        EasingKind::EaseOut => Easing::EASE_OUT,
        EasingKind::EaseInOut => Easing::EASE_IN_OUT,
    };
    curve.with_duration(duration.max(MIN_DURATION))
}

/// Progress value that sits still until updated
fn resting(progress: f32) -> Animated<f32> {
    Animated::transition(progress, easing_for(EasingKind::EaseOut, MIN_DURATION))
}

#[derive(Debug)]
struct Parked {
    handle: AnimationHandle,
    start_at: Instant,
    command: AnimationCommand,
}

#[derive(Debug)]
struct Slot {
    progress: Animated<f32>,
    /// Offset of the hidden pose
    travel: f32,
    /// Opacity of the hidden pose
    hidden_opacity: f32,
    running: Option<AnimationHandle>,
    parked: Option<Parked>,
}

impl Slot {
    fn at(progress: f32, travel: f32, hidden_opacity: f32) -> Self {
        Self {
            progress: resting(progress),
            travel,
            hidden_opacity,
            running: None,
            parked: None,
        }
    }

    fn start(&mut self, handle: AnimationHandle, command: &AnimationCommand) {
        let target = match command.direction {
            Direction::Enter => 1.0,
            Direction::Exit => 0.0,
        };
        // Continue from wherever the previous animation left off
        let current = *self.progress.value();
        self.progress = Animated::transition(current, easing_for(command.easing, command.duration));
        self.progress.update(target.into());
        self.running = Some(handle);
    }

    fn freeze(&mut self) {
        self.progress = resting(*self.progress.value());
        self.running = None;
    }

    fn is_animating(&self) -> bool {
        self.parked.is_some() || self.progress.is_animating()
    }
}

/// [`Animator`] that renders through per-target progress values
#[derive(Debug, Default)]
pub struct RevealPlayer {
    slots: HashMap<TargetId, Slot>,
    next_handle: u64,
}

impl RevealPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start due parked commands and advance every transition
    pub fn tick(&mut self, now: Instant) {
        for slot in self.slots.values_mut() {
            if slot.parked.as_ref().is_some_and(|p| p.start_at <= now) {
                if let Some(parked) = slot.parked.take() {
                    slot.start(parked.handle, &parked.command);
                }
            }
            slot.progress.tick(now);
        }
    }

    /// Current opacity; unknown targets are fully visible
    pub fn opacity(&self, id: &TargetId) -> f32 {
        self.slots.get(id).map_or(1.0, |slot| {
            let p = slot.progress.value().clamp(0.0, 1.0);
            slot.hidden_opacity + (1.0 - slot.hidden_opacity) * p
        })
    }

    /// Current downward offset from the resting position
    pub fn offset_y(&self, id: &TargetId) -> f32 {
        self.slots.get(id).map_or(0.0, |slot| {
            let p = slot.progress.value().clamp(0.0, 1.0);
            slot.travel * (1.0 - p)
        })
    }

    /// Where the target's progress is heading, if known
    #[cfg(test)]
    pub fn target_progress(&self, id: &TargetId) -> Option<f32> {
        self.slots.get(id).map(|slot| *slot.progress.target())
    }

    pub fn is_animating(&self) -> bool {
        self.slots.values().any(Slot::is_animating)
    }

    /// Forget every target
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Animator for RevealPlayer {
    fn place(&mut self, target: &TargetId, pose: Pose) {
        self.slots
            .insert(target.clone(), Slot::at(0.0, pose.offset_y, pose.opacity));
    }

    fn animate(&mut self, command: AnimationCommand, now: Instant) -> AnimationHandle {
        self.next_handle += 1;
        let handle = AnimationHandle(self.next_handle);

        let slot = self.slots.entry(command.target.clone()).or_insert_with(|| {
            let from = match command.direction {
                Direction::Enter => 0.0,
                Direction::Exit => 1.0,
            };
            Slot::at(from, command.travel(), command.hidden_opacity())
        });
        slot.travel = command.travel();
        slot.hidden_opacity = command.hidden_opacity();
        slot.parked = None;

        if command.delay.is_zero() {
            slot.start(handle, &command);
            return handle;
        }

        match now.checked_add(command.delay) {
            Some(start_at) => {
                slot.parked = Some(Parked {
                    handle,
                    start_at,
                    command,
                });
            }
            None => {
                tracing::warn!(
                    "Dropping animation for {}: delay {:?} out of range",
                    command.target,
                    command.delay
                );
            }
        }
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) {
        for slot in self.slots.values_mut() {
            if slot.parked.as_ref().is_some_and(|p| p.handle == handle) {
                slot.parked = None;
                return;
            }
            if slot.running == Some(handle) {
                slot.freeze();
                return;
            }
        }
    }

    fn release(&mut self, target: &TargetId) {
        self.slots.remove(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reveal::AnimationProfile;

    fn id(value: &str) -> TargetId {
        TargetId::new(value)
    }

    fn hidden() -> Pose {
        Pose::hidden(&AnimationProfile::default())
    }

    #[test]
    fn test_unknown_targets_render_visible() {
        let player = RevealPlayer::new();
        assert_eq!(player.opacity(&id("card")), 1.0);
        assert_eq!(player.offset_y(&id("card")), 0.0);
        assert!(!player.is_animating());
    }

    #[test]
    fn test_place_hidden_and_release() {
        let mut player = RevealPlayer::new();
        player.place(&id("card"), hidden());

        assert_eq!(player.opacity(&id("card")), 0.0);
        assert_eq!(player.offset_y(&id("card")), 50.0);

        player.release(&id("card"));
        assert_eq!(player.opacity(&id("card")), 1.0);
    }

    #[test]
    fn test_delayed_command_waits_for_start_instant() {
        let mut player = RevealPlayer::new();
        player.place(&id("card"), hidden());

        let now = Instant::now();
        let command = AnimationCommand::enter(
            id("card"),
            &AnimationProfile::default(),
            Duration::from_millis(400),
        );
        player.animate(command, now);
        assert!(player.is_animating());

        player.tick(now + Duration::from_millis(100));
        assert_eq!(player.target_progress(&id("card")), Some(0.0));
        assert_eq!(player.opacity(&id("card")), 0.0);

        player.tick(now + Duration::from_millis(400));
        assert_eq!(player.target_progress(&id("card")), Some(1.0));
    }

    #[test]
    fn test_cancel_parked_command() {
        let mut player = RevealPlayer::new();
        player.place(&id("card"), hidden());

        let now = Instant::now();
        let command = AnimationCommand::enter(
            id("card"),
            &AnimationProfile::default(),
            Duration::from_millis(400),
        );
        let handle = player.animate(command, now);
        player.cancel(handle);
        assert!(!player.is_animating());

        player.tick(now + Duration::from_secs(2));
        assert_eq!(player.opacity(&id("card")), 0.0);
        assert_eq!(player.target_progress(&id("card")), Some(0.0));
    }

    #[test]
    fn test_cancel_running_command_freezes() {
        let mut player = RevealPlayer::new();
        player.place(&id("card"), hidden());

        let command =
            AnimationCommand::enter(id("card"), &AnimationProfile::default(), Duration::ZERO);
        let handle = player.animate(command, Instant::now());
        assert_eq!(player.target_progress(&id("card")), Some(1.0));

        player.cancel(handle);
        let frozen = player.target_progress(&id("card"));
        assert!(frozen.is_some_and(|p| p < 1.0));

        // Stale handles are ignored
        player.cancel(handle);
        player.cancel(AnimationHandle(999));
        assert_eq!(player.target_progress(&id("card")), frozen);
    }

    #[test]
    fn test_exit_heads_back_to_hidden() {
        // Exiting an unplaced target starts from the resting pose
        let mut player = RevealPlayer::new();
        let command = AnimationCommand::exit(id("card"), &AnimationProfile::default());
        player.animate(command, Instant::now());
        assert_eq!(player.target_progress(&id("card")), Some(0.0));
    }
}
