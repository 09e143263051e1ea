//! Page layout metrics and the scroll-aware position observer
//!
//! Pages are built from fixed-height sections, so every revealable card's
//! box can be computed from the window width alone. The views use the same
//! constants, which keeps the observer and the rendered page in agreement
//! without reading layout back from the renderer.

use std::collections::HashMap;

use crate::features::reveal::{Bounds, PositionObserver, TargetId, Viewport};

/// Fixed navbar above the scrolling page
pub const NAVBAR_HEIGHT: f32 = 64.0;
/// Widest the centered page container gets
pub const MAX_CONTENT_WIDTH: f32 = 1280.0;
/// Horizontal page padding on each side
pub const PAGE_PADDING_X: f32 = 32.0;
/// Space above a page header
pub const PAGE_PADDING_TOP: f32 = 64.0;
/// Title plus subtitle block of the listing pages
pub const PAGE_HEADER_HEIGHT: f32 = 112.0;
/// Space below a page header (and below the featured blog post)
pub const SECTION_GAP: f32 = 64.0;
/// Gap between grid cells, both directions
pub const GRID_GAP: f32 = 32.0;

/// Two-column breakpoint
pub const MD_BREAKPOINT: f32 = 768.0;
/// Three-column breakpoint
pub const LG_BREAKPOINT: f32 = 1024.0;

/// Column count of the project and post grids
pub fn grid_columns(window_width: f32) -> usize {
    if window_width < MD_BREAKPOINT {
        1
    } else if window_width < LG_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Column count of the skills grid
pub fn skill_columns(window_width: f32) -> usize {
    if window_width < MD_BREAKPOINT { 2 } else { 4 }
}

/// Width of the centered page container
pub fn content_width(window_width: f32) -> f32 {
    (window_width - 2.0 * PAGE_PADDING_X).clamp(0.0, MAX_CONTENT_WIDTH)
}

/// Left edge of the centered page container
pub fn content_left(window_width: f32) -> f32 {
    ((window_width - content_width(window_width)) / 2.0).max(0.0)
}

/// Top of the first section below a listing page header
pub fn listing_body_top() -> f32 {
    PAGE_PADDING_TOP + PAGE_HEADER_HEIGHT + SECTION_GAP
}

/// Content-space boxes of a responsive grid starting at `top`
pub fn grid_rects<I>(ids: I, top: f32, window_width: f32, cell_height: f32) -> Vec<(TargetId, Bounds)>
where
    I: IntoIterator<Item = TargetId>,
{
    let columns = grid_columns(window_width);
    let width = content_width(window_width);
    let left = content_left(window_width);
    let cell_width = ((width - GRID_GAP * (columns - 1) as f32) / columns as f32).max(0.0);

    ids.into_iter()
        .enumerate()
        .map(|(i, id)| {
            let (row, col) = (i / columns, i % columns);
            let bounds = Bounds::new(
                left + col as f32 * (cell_width + GRID_GAP),
                top + row as f32 * (cell_height + GRID_GAP),
                cell_width,
                cell_height,
            );
            (id, bounds)
        })
        .collect()
}

/// Scroll-aware observer over a page's content-space boxes
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    viewport: Viewport,
    scroll_y: f32,
    rects: HashMap<TargetId, Bounds>,
}

impl PageLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll_y = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    /// Replace every box (page change or relayout)
    pub fn set_rects<I>(&mut self, rects: I)
    where
        I: IntoIterator<Item = (TargetId, Bounds)>,
    {
        self.rects = rects.into_iter().collect();
    }
}

impl PositionObserver for PageLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn measure(&self, target: &TargetId) -> Option<Bounds> {
        self.rects
            .get(target)
            .map(|bounds| bounds.translated_y(-self.scroll_y))
    }
}
