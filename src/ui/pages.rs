//! Pages module
//! Full-page views for the portfolio, plus the reveal wiring each page needs

pub mod blog;
pub mod home;
pub mod layout;
pub mod portfolio;

use std::time::Duration;

use crate::features::reveal::{AnimationProfile, Bounds, RevealBatch, TargetId};
use crate::ui::components::NavItem;

/// Batches a page registers when it mounts
pub fn reveal_batches(
    nav: NavItem,
    profile: AnimationProfile,
    stagger_step: Duration,
) -> Vec<RevealBatch> {
    match nav {
        NavItem::Home => Vec::new(),
        NavItem::Portfolio => vec![portfolio::reveal_batch(profile, stagger_step)],
        NavItem::Blog => vec![blog::reveal_batch(profile, stagger_step)],
    }
}

/// Content-space boxes of a page's reveal targets
pub fn reveal_rects(nav: NavItem, window_width: f32) -> Vec<(TargetId, Bounds)> {
    match nav {
        NavItem::Home => Vec::new(),
        NavItem::Portfolio => portfolio::reveal_rects(window_width),
        NavItem::Blog => blog::reveal_rects(window_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_batched_target_has_a_box() {
        for nav in NavItem::all() {
            let rects = reveal_rects(*nav, 1280.0);
            for batch in reveal_batches(*nav, AnimationProfile::default(), Duration::ZERO) {
                for target in batch.targets() {
                    assert!(
                        rects.iter().any(|(id, _)| *id == target.id),
                        "{} has no box",
                        target.id
                    );
                }
            }
        }
    }
}
