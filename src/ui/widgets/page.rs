//! Page scaffolding shared by every page
//!
//! Both helpers mirror the metrics the layout observer computes boxes from:
//! a centered, width-capped container and a grid of equal fixed-height cells.

use iced::widget::{Column, Row, Space, container};
use iced::{Element, Fill, Padding};

/// Center `content` in a container capped at `max_width` with side padding
pub fn centered<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    max_width: f32,
    padding_x: f32,
) -> Element<'a, Message> {
    container(container(content).max_width(max_width).width(Fill))
        .padding(Padding::ZERO.left(padding_x).right(padding_x))
        .center_x(Fill)
        .into()
}

/// Lay cells out in rows of `columns`, every row `cell_height` tall
///
/// Incomplete last rows are padded with empty cells so column widths stay
/// equal across rows.
pub fn grid<'a, Message: 'a>(
    cells: Vec<Element<'a, Message>>,
    columns: usize,
    cell_height: f32,
    gap: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(gap).width(Fill);
    let mut current = Row::new().spacing(gap).width(Fill).height(cell_height);
    let mut filled = 0;

    for cell in cells {
        current = current.push(container(cell).width(Fill).height(cell_height));
        filled += 1;
        if filled == columns {
            rows = rows.push(current);
            current = Row::new().spacing(gap).width(Fill).height(cell_height);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            current = current.push(Space::new().width(Fill).height(cell_height));
        }
        rows = rows.push(current);
    }

    rows.into()
}
