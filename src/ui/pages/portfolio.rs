//! Portfolio page
//! Header plus a responsive grid of project cards that reveal as they scroll in

use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::layout::{
    self, GRID_GAP, MAX_CONTENT_WIDTH, PAGE_HEADER_HEIGHT, PAGE_PADDING_TOP, PAGE_PADDING_X,
    SECTION_GAP,
};
use crate::app::Message;
use crate::content::{PROJECTS, Project};
use crate::features::reveal::{AnimationProfile, Bounds, RevealBatch, TargetId};
use crate::ui::animation::RevealPlayer;
use crate::ui::theme::{self, SEMIBOLD};
use crate::ui::widgets::{TagSize, page, reveal_cell, section_header, tag_row};

/// Height of one project card
pub const PROJECT_CARD_HEIGHT: f32 = 420.0;
/// Image placeholder at the top of a card
const IMAGE_HEIGHT: f32 = 192.0;

pub fn target_id(index: usize) -> TargetId {
    TargetId::new(format!("project-{index}"))
}

/// One batch with every project card, in grid order
pub fn reveal_batch(profile: AnimationProfile, stagger_step: Duration) -> RevealBatch {
    RevealBatch::uniform((0..PROJECTS.len()).map(target_id), profile, stagger_step)
}

/// Content-space boxes of the project cards
pub fn reveal_rects(window_width: f32) -> Vec<(TargetId, Bounds)> {
    layout::grid_rects(
        (0..PROJECTS.len()).map(target_id),
        layout::listing_body_top(),
        window_width,
        PROJECT_CARD_HEIGHT,
    )
}

fn project_card<'a>(project: &'a Project, opacity: f32) -> Element<'a, Message> {
    let actions = row![
        button(text("Demo").size(14))
            .padding(Padding::new(8.0).left(16.0).right(16.0))
            .style(move |t, s| theme::fade_button(theme::primary_button(t, s), opacity))
            .on_press(Message::CopyLink(project.demo)),
        button(text("Code").size(14))
            .padding(Padding::new(8.0).left(16.0).right(16.0))
            .style(move |t, s| theme::fade_button(theme::graphite_button(t, s), opacity))
            .on_press(Message::CopyLink(project.github)),
    ]
    .spacing(16);

    let image = container(actions)
        .width(Fill)
        .height(IMAGE_HEIGHT)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |t| theme::placeholder(t, opacity));

    let info = column![
        text(project.title).size(20).font(SEMIBOLD),
        Space::new().height(8),
        text(project.description)
            .size(15)
            .style(move |t| text::Style {
                color: Some(theme::fade(theme::text_secondary(t), opacity)),
            }),
        Space::new().height(16),
        tag_row(project.tags, TagSize::Regular, opacity),
    ]
    .padding(24);

    container(column![image, info])
        .width(Fill)
        .height(PROJECT_CARD_HEIGHT)
        .style(move |t| theme::card(t, opacity))
        .into()
}

/// Build the portfolio page
pub fn view<'a>(player: &RevealPlayer, window_width: f32) -> Element<'a, Message> {
    let cells = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let id = target_id(i);
            reveal_cell(
                project_card(project, player.opacity(&id)),
                PROJECT_CARD_HEIGHT,
                player.offset_y(&id),
            )
        })
        .collect();

    let content = column![
        Space::new().height(PAGE_PADDING_TOP),
        section_header::view(
            "My Portfolio",
            Some("A collection of my recent projects and work"),
            PAGE_HEADER_HEIGHT,
        ),
        Space::new().height(SECTION_GAP),
        page::grid(
            cells,
            layout::grid_columns(window_width),
            PROJECT_CARD_HEIGHT,
            GRID_GAP
        ),
        Space::new().height(SECTION_GAP),
    ];

    page::centered(content, MAX_CONTENT_WIDTH, PAGE_PADDING_X)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_covers_every_project_in_order() {
        let batch = reveal_batch(AnimationProfile::default(), Duration::from_millis(200));
        assert_eq!(batch.len(), PROJECTS.len());
        assert_eq!(batch.targets()[0].id, target_id(0));
        assert_eq!(batch.targets()[5].index, 5);
    }

    #[test]
    fn test_rects_start_below_header() {
        let rects = reveal_rects(1400.0);
        assert_eq!(rects.len(), PROJECTS.len());
        assert_eq!(rects[0].1.y, layout::listing_body_top());
        // Three columns: the fourth card opens the second row
        assert_eq!(rects[3].1.y, rects[0].1.y + PROJECT_CARD_HEIGHT + GRID_GAP);
    }
}
