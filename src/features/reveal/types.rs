//! Core reveal types: identifiers, geometry, profiles, batches and states

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default vertical travel of a revealed element, in pixels
pub const DEFAULT_OFFSET_Y: f32 = 50.0;

/// Default reveal duration (0.8s)
pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

/// Default trigger distance above the viewport bottom, in pixels
pub const DEFAULT_TRIGGER_PX: f32 = 100.0;

/// Stable identifier of a revealable element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Axis-aligned box in viewport coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// A box with no area (not laid out yet, or detached) cannot be measured
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Same box shifted vertically
    pub fn translated_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

/// Easing curves understood by the animation player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Ease,
    /// Fast start, slow settle
    #[default]
    EaseOut,
    EaseInOut,
}

/// Where the trigger line sits, measured up from the viewport bottom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum TriggerOffset {
    /// Fixed distance in pixels
    Pixels(f32),
    /// Percentage (0-100) of the viewport height
    Percent(f32),
}

impl Default for TriggerOffset {
    fn default() -> Self {
        Self::Pixels(DEFAULT_TRIGGER_PX)
    }
}

impl TriggerOffset {
    /// Distance from the viewport bottom in pixels
    pub fn resolve(&self, viewport_height: f32) -> f32 {
        match self {
            Self::Pixels(px) => px.max(0.0),
            Self::Percent(pct) => viewport_height * (pct.clamp(0.0, 100.0) / 100.0),
        }
    }

    /// Viewport-relative y of the trigger line
    pub fn line(&self, viewport_height: f32) -> f32 {
        viewport_height - self.resolve(viewport_height)
    }
}

/// How a target looks while hidden and how it travels in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProfile {
    /// Vertical offset of the hidden pose (positive = below resting place)
    pub offset_y: f32,
    /// Opacity of the hidden pose
    pub opacity_from: f32,
    pub duration: Duration,
    pub easing: EasingKind,
}

impl Default for AnimationProfile {
    fn default() -> Self {
        Self {
            offset_y: DEFAULT_OFFSET_Y,
            opacity_from: 0.0,
            duration: DEFAULT_DURATION,
            easing: EasingKind::EaseOut,
        }
    }
}

/// A registered element
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub id: TargetId,
    pub profile: AnimationProfile,
    /// Position within its batch, drives the stagger delay
    pub index: usize,
}

impl RevealTarget {
    pub fn new(id: impl Into<TargetId>, profile: AnimationProfile) -> Self {
        Self {
            id: id.into(),
            profile,
            index: 0,
        }
    }
}

/// Ordered group of targets sharing stagger sequencing
#[derive(Debug, Clone, PartialEq)]
pub struct RevealBatch {
    targets: Vec<RevealTarget>,
    stagger_step: Duration,
}

impl RevealBatch {
    pub fn new(stagger_step: Duration) -> Self {
        Self {
            targets: Vec::new(),
            stagger_step,
        }
    }

    /// Batch where every target shares one profile
    pub fn uniform<I, T>(ids: I, profile: AnimationProfile, stagger_step: Duration) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetId>,
    {
        ids.into_iter()
            .fold(Self::new(stagger_step), |batch, id| {
                batch.with_target(id, profile)
            })
    }

    /// Append a target; its order index is its position in the batch
    pub fn with_target(mut self, id: impl Into<TargetId>, profile: AnimationProfile) -> Self {
        let mut target = RevealTarget::new(id, profile);
        target.index = self.targets.len();
        self.targets.push(target);
        self
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn stagger_step(&self) -> Duration {
        self.stagger_step
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub(crate) fn into_targets(self) -> Vec<RevealTarget> {
        self.targets
    }
}

/// Per-target reveal lifecycle
///
/// ```text
/// Unseen → Entering → Visible → Exiting → Hidden → Entering → …
///             ↑___________________↓   (mid-animation reversal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealState {
    Unseen,
    Entering,
    Visible,
    Exiting,
    Hidden,
}

impl RevealState {
    /// Whether `next` is a legal successor of `self`
    pub fn can_advance_to(self, next: RevealState) -> bool {
        use RevealState::*;
        matches!(
            (self, next),
            (Unseen, Entering)
                | (Entering, Visible)
                | (Visible, Exiting)
                | (Exiting, Hidden)
                | (Hidden, Entering)
                | (Entering, Exiting)
                | (Exiting, Entering)
        )
    }

    /// An animation should be in flight in this state
    pub fn is_transitioning(self) -> bool {
        matches!(self, RevealState::Entering | RevealState::Exiting)
    }
}
