//! Fakes for the observer and animator capabilities

use std::collections::HashMap;
use std::time::Instant;

use super::animator::{AnimationCommand, AnimationHandle, Animator, Pose};
use super::observer::{PositionObserver, Viewport};
use super::types::{Bounds, TargetId};

/// Observer with synthetic bounding boxes
#[derive(Debug, Default)]
pub struct FakeObserver {
    pub viewport: Viewport,
    pub boxes: HashMap<TargetId, Bounds>,
}

impl FakeObserver {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            boxes: HashMap::new(),
        }
    }

    /// Place a target with its top edge at `top` (viewport coordinates)
    pub fn set_top(&mut self, id: &str, top: f32) {
        self.boxes
            .insert(TargetId::new(id), Bounds::new(0.0, top, 300.0, 200.0));
    }

    pub fn detach(&mut self, id: &str) {
        self.boxes.remove(&TargetId::new(id));
    }
}

impl PositionObserver for FakeObserver {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn measure(&self, target: &TargetId) -> Option<Bounds> {
        self.boxes.get(target).copied()
    }
}

/// Animator that records everything it is asked to do
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub commands: Vec<(AnimationHandle, AnimationCommand)>,
    pub cancelled: Vec<AnimationHandle>,
    pub placed: Vec<(TargetId, Pose)>,
    pub released: Vec<TargetId>,
    next: u64,
}

impl RecordingAnimator {
    /// Commands issued for one target, oldest first
    pub fn commands_for(&self, id: &str) -> Vec<&AnimationCommand> {
        self.commands
            .iter()
            .filter(|(_, c)| c.target.as_str() == id)
            .map(|(_, c)| c)
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.cancelled.clear();
        self.placed.clear();
        self.released.clear();
    }
}

impl Animator for RecordingAnimator {
    fn place(&mut self, target: &TargetId, pose: Pose) {
        self.placed.push((target.clone(), pose));
    }

    fn animate(&mut self, command: AnimationCommand, _now: Instant) -> AnimationHandle {
        self.next += 1;
        let handle = AnimationHandle(self.next);
        self.commands.push((handle, command));
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) {
        self.cancelled.push(handle);
    }

    fn release(&mut self, target: &TargetId) {
        self.released.push(target.clone());
    }
}
