//! Toast notification widget
//!
//! Small floating card with an accent bar, used to confirm clipboard copies.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification data
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let accent_color = theme::SUCCESS;

    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        text("✓").size(14).color(accent_color),
        Space::new().width(10),
        text(toast.message.clone())
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::card_raised_bg(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
