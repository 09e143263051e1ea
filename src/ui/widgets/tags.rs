//! Tag chips
//!
//! Rounded accent chips that wrap onto new lines when they run out of room.

use iced::widget::{Row, container, text};
use iced::{Element, Padding};

use crate::ui::theme;

/// Chip size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSize {
    Small,
    Regular,
}

impl TagSize {
    fn text_size(self) -> f32 {
        match self {
            TagSize::Small => 12.0,
            TagSize::Regular => 14.0,
        }
    }

    fn padding(self) -> Padding {
        match self {
            TagSize::Small => Padding::new(4.0).left(8.0).right(8.0),
            TagSize::Regular => Padding::new(4.0).left(12.0).right(12.0),
        }
    }
}

/// Wrapping row of tag chips at the given reveal opacity
pub fn tag_row<'a, Message: 'a>(
    tags: &'a [&'a str],
    size: TagSize,
    opacity: f32,
) -> Element<'a, Message> {
    let chips = tags.iter().map(|tag| {
        container(text(*tag).size(size.text_size()))
            .padding(size.padding())
            .style(move |theme| theme::tag_chip(theme, opacity))
            .into()
    });

    Row::with_children(chips).spacing(8).wrap().into()
}
