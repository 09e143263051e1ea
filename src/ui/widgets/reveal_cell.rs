//! Fixed-height cell that renders a reveal offset
//!
//! The cell keeps its own height no matter how far the content is pushed
//! down, so neighbours never shift while a card slides into place. Content
//! pushed past the bottom edge is clipped.

use iced::widget::{Space, column, container};
use iced::{Element, Fill};

/// Wrap `content` in a clipped cell of `height`, shifted down by `offset_y`
pub fn reveal_cell<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
    offset_y: f32,
) -> Element<'a, Message> {
    let offset = if offset_y.is_finite() {
        offset_y.clamp(0.0, height)
    } else {
        0.0
    };

    container(column![Space::new().height(offset), content.into()])
        .width(Fill)
        .height(height)
        .clip(true)
        .into()
}
