//! Scroll-triggered reveal animations
//!
//! Defers the entrance animation of page elements until they scroll into the
//! viewport, and reverses it when they scroll back out.
//!
//! # Architecture
//!
//! ```text
//! RevealController<A: Animator>
//!   ├── registration table (handle → batch of tracked targets)
//!   ├── PositionObserver   (injected per tick: viewport + bounding boxes)
//!   └── Animator           (owned: plays commands, returns cancel handles)
//! ```
//!
//! The controller never touches a rendering surface. Observers and animators
//! are traits so the whole state machine runs against fakes in tests.

mod animator;
mod controller;
mod error;
mod observer;
mod stagger;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use animator::{AnimationCommand, AnimationHandle, Animator, Direction, Pose};
pub use controller::{ControllerConfig, RegistrationHandle, RevealController, TickReport};
pub use observer::{FrameCoalescer, PositionObserver, Viewport};
pub use stagger::StaggerPolicy;
pub use types::{
    AnimationProfile, Bounds, DEFAULT_OFFSET_Y, EasingKind, RevealBatch, TargetId, TriggerOffset,
};

#[cfg(test)]
pub use types::RevealState;
