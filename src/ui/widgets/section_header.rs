//! Section header widget
//!
//! Centered title with an optional subtitle, laid out in a fixed-height block
//! so the sections below it start at a known offset.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `subtitle` - Optional line under the title
/// * `height` - Height of the whole block
pub fn view<'a, Message: 'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    height: f32,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(36)
        .font(BOLD)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let content = match subtitle {
        Some(subtitle) => column![
            title_text,
            Space::new().height(16),
            text(subtitle).size(20).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ],
        None => column![title_text],
    }
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(height)
        .align_x(Alignment::Center)
        .into()
}
