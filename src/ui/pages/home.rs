//! Home page - "Home" view
//! Hero with the entrance timeline and the spinning cube, the skills grid and
//! a preview of featured projects

use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::layout::{
    self, GRID_GAP, LG_BREAKPOINT, MAX_CONTENT_WIDTH, PAGE_PADDING_X, SECTION_GAP,
};
use crate::app::Message;
use crate::content::{FEATURED_PREVIEWS, SKILLS, Skill, profile};
use crate::features::Timeline;
use crate::features::reveal::{EasingKind, TargetId};
use crate::ui::animation::RevealPlayer;
use crate::ui::components::NavItem;
use crate::ui::primitives::{Cube, CubeState, view_cube};
use crate::ui::theme::{self, BOLD, SEMIBOLD};
use crate::ui::widgets::{page, reveal_cell, section_header};

pub const HERO_HEADING: &str = "hero-heading";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_CTA: &str = "hero-cta";

/// Shortest hero, for very short windows
const MIN_HERO_HEIGHT: f32 = 560.0;
const HEADING_HEIGHT: f32 = 180.0;
const SUBTITLE_HEIGHT: f32 = 72.0;
const CTA_HEIGHT: f32 = 64.0;
const CUBE_HEIGHT: f32 = 400.0;
const SKILL_TILE_HEIGHT: f32 = 132.0;
const PREVIEW_CARD_HEIGHT: f32 = 320.0;
const SECTION_PADDING_Y: f32 = 80.0;
const SECTION_TITLE_HEIGHT: f32 = 88.0;

/// Heading, subtitle and call-to-action sliding in one after another
///
/// Each step lasts a second and starts half a second before the previous one
/// finishes.
pub fn hero_timeline() -> Timeline {
    let step = Duration::from_secs(1);
    let overlap = Duration::from_millis(500);

    Timeline::new(EasingKind::EaseOut)
        .then(HERO_HEADING, 50.0, step)
        .overlapping(HERO_SUBTITLE, 30.0, step, overlap)
        .overlapping(HERO_CTA, 20.0, step, overlap)
}

/// Whether the hero shows the cube next to the text
pub fn shows_cube(window_width: f32) -> bool {
    window_width >= LG_BREAKPOINT
}

fn hero_text<'a>(player: &RevealPlayer, window_width: f32) -> Element<'a, Message> {
    let heading_id = TargetId::new(HERO_HEADING);
    let subtitle_id = TargetId::new(HERO_SUBTITLE);
    let cta_id = TargetId::new(HERO_CTA);

    let heading_size = if window_width >= LG_BREAKPOINT { 56.0 } else { 40.0 };
    let heading_opacity = player.opacity(&heading_id);
    let heading = column![
        row![
            text("Hi, I'm ").size(heading_size).font(BOLD),
            text(profile::NAME)
                .size(heading_size)
                .font(BOLD)
                .color(theme::fade(theme::PRIMARY, heading_opacity)),
        ],
        text(profile::ROLE).size(heading_size).font(BOLD),
    ];
    let heading = container(heading).style(move |t| container::Style {
        text_color: Some(theme::fade(theme::text_primary(t), heading_opacity)),
        ..Default::default()
    });

    let subtitle_opacity = player.opacity(&subtitle_id);
    let subtitle = text(profile::TAGLINE).size(20).style(move |t| text::Style {
        color: Some(theme::fade(theme::text_secondary(t), subtitle_opacity)),
    });

    let cta_opacity = player.opacity(&cta_id);
    let cta = row![
        button(text("View My Work").size(16))
            .padding(Padding::new(12.0).left(24.0).right(24.0))
            .style(move |t, s| theme::fade_button(theme::primary_button(t, s), cta_opacity))
            .on_press(Message::Navigate(NavItem::Portfolio)),
        button(text("GitHub").size(16))
            .padding(Padding::new(12.0).left(24.0).right(24.0))
            .style(move |t, s| theme::fade_button(theme::graphite_button(t, s), cta_opacity))
            .on_press(Message::CopyLink(profile::GITHUB)),
    ]
    .spacing(16);

    column![
        reveal_cell(heading, HEADING_HEIGHT, player.offset_y(&heading_id)),
        Space::new().height(32),
        reveal_cell(subtitle, SUBTITLE_HEIGHT, player.offset_y(&subtitle_id)),
        Space::new().height(32),
        reveal_cell(cta, CTA_HEIGHT, player.offset_y(&cta_id)),
    ]
    .width(Fill)
    .into()
}

fn hero<'a>(
    player: &RevealPlayer,
    cube: &CubeState,
    window_width: f32,
    viewport_height: f32,
) -> Element<'a, Message> {
    let text_column = hero_text(player, window_width);
    let content: Element<'a, Message> = if shows_cube(window_width) {
        row![text_column, view_cube(Cube::new(cube), CUBE_HEIGHT)]
            .spacing(48)
            .align_y(Alignment::Center)
            .into()
    } else {
        text_column
    };

    container(page::centered(content, MAX_CONTENT_WIDTH, PAGE_PADDING_X))
        .width(Fill)
        .height(viewport_height.max(MIN_HERO_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

fn skill_tile<'a>(skill: &'a Skill) -> Element<'a, Message> {
    container(
        column![
            text(skill.badge).size(36).font(BOLD).color(theme::PRIMARY),
            text(skill.name).size(16),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .height(SKILL_TILE_HEIGHT)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::skill_tile)
    .into()
}

fn skills<'a>(window_width: f32) -> Element<'a, Message> {
    let tiles = SKILLS.iter().map(skill_tile).collect();

    let content = column![
        section_header::view("Skills & Technologies", None, SECTION_TITLE_HEIGHT),
        page::grid(
            tiles,
            layout::skill_columns(window_width),
            SKILL_TILE_HEIGHT,
            GRID_GAP
        ),
    ];

    container(page::centered(content, MAX_CONTENT_WIDTH, PAGE_PADDING_X))
        .width(Fill)
        .padding(Padding::ZERO.top(SECTION_PADDING_Y).bottom(SECTION_PADDING_Y))
        .style(theme::section_band)
        .into()
}

fn preview_card<'a>(number: usize) -> Element<'a, Message> {
    let image = container(
        button(text("View Project").size(14))
            .padding(Padding::new(8.0).left(16.0).right(16.0))
            .style(theme::primary_button)
            .on_press(Message::Navigate(NavItem::Portfolio)),
    )
    .width(Fill)
    .height(192)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(|t| theme::placeholder(t, 1.0));

    let info = column![
        text(format!("Project {number}")).size(20).font(SEMIBOLD),
        text(format!(
            "A brief description of project {number} and its key features."
        ))
        .size(15)
        .style(|t| text::Style {
            color: Some(theme::text_secondary(t)),
        }),
    ]
    .spacing(8)
    .padding(24);

    container(column![image, info])
        .width(Fill)
        .height(PREVIEW_CARD_HEIGHT)
        .style(|t| theme::card(t, 1.0))
        .into()
}

fn featured<'a>(window_width: f32) -> Element<'a, Message> {
    let cards = (1..=FEATURED_PREVIEWS).map(preview_card).collect();

    let content = column![
        section_header::view("Featured Projects", None, SECTION_TITLE_HEIGHT),
        page::grid(
            cards,
            layout::grid_columns(window_width),
            PREVIEW_CARD_HEIGHT,
            GRID_GAP
        ),
        Space::new().height(SECTION_GAP - 16.0),
        container(
            button(text("View All Projects").size(16))
                .padding(Padding::new(12.0).left(24.0).right(24.0))
                .style(theme::primary_button)
                .on_press(Message::Navigate(NavItem::Portfolio)),
        )
        .center_x(Fill),
    ];

    container(page::centered(content, MAX_CONTENT_WIDTH, PAGE_PADDING_X))
        .width(Fill)
        .padding(Padding::ZERO.top(SECTION_PADDING_Y).bottom(SECTION_PADDING_Y))
        .into()
}

/// Build the home page
pub fn view<'a>(
    player: &RevealPlayer,
    cube: &CubeState,
    window_width: f32,
    viewport_height: f32,
) -> Element<'a, Message> {
    column![
        hero(player, cube, window_width, viewport_height),
        skills(window_width),
        featured(window_width),
    ]
    .width(Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_timeline_schedule() {
        let timeline = hero_timeline();
        let delays: Vec<u128> = timeline
            .commands()
            .iter()
            .map(|command| command.delay.as_millis())
            .collect();
        assert_eq!(delays, vec![0, 500, 1000]);
        assert_eq!(timeline.total_duration(), Duration::from_secs(2));

        let travels: Vec<f32> = timeline.commands().iter().map(|c| c.travel()).collect();
        assert_eq!(travels, vec![50.0, 30.0, 20.0]);
    }

    #[test]
    fn test_cube_only_on_wide_windows() {
        assert!(!shows_cube(900.0));
        assert!(shows_cube(1280.0));
    }
}
