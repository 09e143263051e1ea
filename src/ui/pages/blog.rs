//! Blog page
//! Featured post followed by a grid of the remaining posts, all revealed on scroll

use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::layout::{
    self, GRID_GAP, MAX_CONTENT_WIDTH, PAGE_HEADER_HEIGHT, PAGE_PADDING_TOP, PAGE_PADDING_X,
    SECTION_GAP,
};
use crate::app::Message;
use crate::content::{BLOG_POSTS, BlogPost};
use crate::features::reveal::{AnimationProfile, Bounds, RevealBatch, TargetId};
use crate::ui::animation::RevealPlayer;
use crate::ui::theme::{self, BOLD};
use crate::ui::widgets::{TagSize, page, reveal_cell, section_header, tag_row};

/// Height of the full-width featured post
pub const FEATURED_POST_HEIGHT: f32 = 720.0;
/// Height of one post card in the grid
pub const POST_CARD_HEIGHT: f32 = 540.0;

const FEATURED_IMAGE_HEIGHT: f32 = 400.0;
const CARD_IMAGE_HEIGHT: f32 = 192.0;

pub fn target_id(index: usize) -> TargetId {
    TargetId::new(format!("post-{index}"))
}

/// One batch: the featured post first, then the grid
pub fn reveal_batch(profile: AnimationProfile, stagger_step: Duration) -> RevealBatch {
    RevealBatch::uniform((0..BLOG_POSTS.len()).map(target_id), profile, stagger_step)
}

/// Top of the grid below the featured post
fn grid_top() -> f32 {
    layout::listing_body_top() + FEATURED_POST_HEIGHT + SECTION_GAP
}

/// Content-space boxes of the featured post and the post cards
pub fn reveal_rects(window_width: f32) -> Vec<(TargetId, Bounds)> {
    if BLOG_POSTS.is_empty() {
        return Vec::new();
    }

    let featured = Bounds::new(
        layout::content_left(window_width),
        layout::listing_body_top(),
        layout::content_width(window_width),
        FEATURED_POST_HEIGHT,
    );

    std::iter::once((target_id(0), featured))
        .chain(layout::grid_rects(
            (1..BLOG_POSTS.len()).map(target_id),
            grid_top(),
            window_width,
            POST_CARD_HEIGHT,
        ))
        .collect()
}

fn meta_line<'a>(post: &'a BlogPost, opacity: f32) -> Element<'a, Message> {
    text(format!("{}  •  {}", post.date, post.read_time))
        .size(14)
        .style(move |t| text::Style {
            color: Some(theme::fade(theme::text_muted(t), opacity)),
        })
        .into()
}

fn image_with_badge<'a>(post: &'a BlogPost, height: f32, opacity: f32) -> Element<'a, Message> {
    let badge = container(text(post.category).size(14))
        .padding(Padding::new(6.0).left(14.0).right(14.0))
        .style(move |t| theme::category_badge(t, opacity));

    container(badge)
        .width(Fill)
        .height(height)
        .padding(16)
        .style(move |t| theme::placeholder(t, opacity))
        .into()
}

fn featured_card<'a>(post: &'a BlogPost, opacity: f32) -> Element<'a, Message> {
    let body = column![
        meta_line(post, opacity),
        Space::new().height(16),
        text(post.title).size(30).font(BOLD),
        Space::new().height(16),
        text(post.excerpt).size(16).style(move |t| text::Style {
            color: Some(theme::fade(theme::text_secondary(t), opacity)),
        }),
        Space::new().height(24),
        tag_row(post.tags, TagSize::Regular, opacity),
        Space::new().height(24),
        // Articles are teasers only
        button(
            row![text("Read More").size(15), text("→").size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .padding(Padding::new(10.0).left(20.0).right(20.0))
        .style(move |t, s| theme::fade_button(theme::primary_button(t, s), opacity)),
    ]
    .padding(32);

    container(column![
        image_with_badge(post, FEATURED_IMAGE_HEIGHT, opacity),
        body
    ])
    .width(Fill)
    .height(FEATURED_POST_HEIGHT)
    .style(move |t| theme::card(t, opacity))
    .into()
}

fn post_card<'a>(post: &'a BlogPost, opacity: f32) -> Element<'a, Message> {
    let body = column![
        meta_line(post, opacity),
        Space::new().height(12),
        text(post.title).size(20).font(BOLD),
        Space::new().height(12),
        text(post.excerpt).size(15).style(move |t| text::Style {
            color: Some(theme::fade(theme::text_secondary(t), opacity)),
        }),
        Space::new().height(16),
        tag_row(post.tags, TagSize::Small, opacity),
        Space::new().height(16),
        button(text("Read More →").size(15))
            .padding(0)
            .style(theme::card_link(opacity)),
    ]
    .padding(24);

    container(column![
        image_with_badge(post, CARD_IMAGE_HEIGHT, opacity),
        body
    ])
    .width(Fill)
    .height(POST_CARD_HEIGHT)
    .style(move |t| theme::card(t, opacity))
    .into()
}

/// Build the blog page
pub fn view<'a>(player: &RevealPlayer, window_width: f32) -> Element<'a, Message> {
    let mut content = column![
        Space::new().height(PAGE_PADDING_TOP),
        section_header::view(
            "Blog",
            Some("Thoughts, tutorials, and insights about web development"),
            PAGE_HEADER_HEIGHT,
        ),
        Space::new().height(SECTION_GAP),
    ];

    if let Some((featured, rest)) = BLOG_POSTS.split_first() {
        let id = target_id(0);
        let cells = rest
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let id = target_id(i + 1);
                reveal_cell(
                    post_card(post, player.opacity(&id)),
                    POST_CARD_HEIGHT,
                    player.offset_y(&id),
                )
            })
            .collect();

        content = content
            .push(reveal_cell(
                featured_card(featured, player.opacity(&id)),
                FEATURED_POST_HEIGHT,
                player.offset_y(&id),
            ))
            .push(Space::new().height(SECTION_GAP))
            .push(page::grid(
                cells,
                layout::grid_columns(window_width),
                POST_CARD_HEIGHT,
                GRID_GAP,
            ));
    }

    page::centered(
        content.push(Space::new().height(SECTION_GAP)),
        MAX_CONTENT_WIDTH,
        PAGE_PADDING_X,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_post_leads_the_batch() {
        let batch = reveal_batch(AnimationProfile::default(), Duration::from_millis(200));
        assert_eq!(batch.len(), BLOG_POSTS.len());
        assert_eq!(batch.targets()[0].id, TargetId::new("post-0"));
    }

    #[test]
    fn test_featured_spans_the_container_and_grid_follows() {
        let rects = reveal_rects(1400.0);
        assert_eq!(rects.len(), BLOG_POSTS.len());

        let (_, featured) = &rects[0];
        assert_eq!(featured.width, layout::content_width(1400.0));
        assert_eq!(featured.y, layout::listing_body_top());

        // All three remaining posts share the first grid row
        let grid_y = featured.bottom() + SECTION_GAP;
        assert!(rects[1..].iter().all(|(_, b)| b.y == grid_y));
    }
}
