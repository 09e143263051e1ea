//! Viewport observation capability and tick coalescing

use super::types::{Bounds, TargetId};

/// Visible area of the scrolling surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Host layout primitive answering position queries
pub trait PositionObserver {
    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Viewport-relative bounding box of a target, `None` when it is not laid
    /// out (or unknown to the host)
    fn measure(&self, target: &TargetId) -> Option<Bounds>;
}

/// Leading-edge tick coalescer
///
/// Scroll, resize and layout events call [`request`](Self::request); the frame
/// loop calls [`take`](Self::take) once per frame. Any number of requests
/// between two frames yields a single tick.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
    requests: u64,
    ticks: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a tick for the next frame, returns true on the leading edge
    pub fn request(&mut self) -> bool {
        self.requests += 1;
        let leading = !self.pending;
        self.pending = true;
        leading
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            self.ticks += 1;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Requests absorbed without producing their own tick
    pub fn coalesced(&self) -> u64 {
        self.requests.saturating_sub(self.ticks + u64::from(self.pending))
    }
}
