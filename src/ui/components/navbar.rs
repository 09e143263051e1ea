//! Navbar component
//!
//! Brand, history arrows, page links and the display toggles. Stays fixed
//! above the scrolling page.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::pages::layout::{NAVBAR_HEIGHT, PAGE_PADDING_X};
use crate::ui::theme::{self, BOLD, SEMIBOLD};

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavItem {
    #[default]
    Home,
    Portfolio,
    Blog,
}

impl NavItem {
    pub fn all() -> &'static [NavItem] {
        &[NavItem::Home, NavItem::Portfolio, NavItem::Blog]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Portfolio => "Portfolio",
            NavItem::Blog => "Blog",
        }
    }
}

/// Navbar state snapshot
#[derive(Debug, Clone, Copy)]
pub struct NavbarState {
    pub active: NavItem,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub dark_mode: bool,
    pub power_saving: bool,
}

fn history_button<'a>(label: &'a str, message: Message, enabled: bool) -> Element<'a, Message> {
    button(text(label).size(16))
        .padding(Padding::new(4.0).left(10.0).right(10.0))
        .style(theme::text_link)
        .on_press_maybe(enabled.then_some(message))
        .into()
}

fn toggle<'a>(label: &'a str, message: Message, active: bool) -> Element<'a, Message> {
    button(text(label).size(14))
        .padding(Padding::new(6.0).left(12.0).right(12.0))
        .style(theme::toggle_button(active))
        .on_press(message)
        .into()
}

/// Build the navbar
pub fn view<'a>(state: NavbarState) -> Element<'a, Message> {
    let brand = button(text("Portfolio").size(24).font(BOLD).color(theme::PRIMARY))
        .padding(0)
        .style(|_theme, _status| button::Style::default())
        .on_press(Message::Navigate(NavItem::Home));

    let links = NavItem::all().iter().fold(row![].spacing(8), |links, item| {
        links.push(
            button(text(item.label()).size(15).font(SEMIBOLD))
                .padding(Padding::new(6.0).left(12.0).right(12.0))
                .style(theme::nav_link(*item == state.active))
                .on_press(Message::Navigate(*item)),
        )
    });

    let content = row![
        brand,
        Space::new().width(16),
        history_button("‹", Message::NavigateBack, state.can_go_back),
        history_button("›", Message::NavigateForward, state.can_go_forward),
        Space::new().width(Fill),
        links,
        Space::new().width(16),
        toggle(
            if state.dark_mode { "☀ Light" } else { "☾ Dark" },
            Message::ToggleDarkMode,
            state.dark_mode,
        ),
        Space::new().width(8),
        toggle("⚡ Saver", Message::TogglePowerSaving, state.power_saving),
    ]
    .align_y(Alignment::Center);

    container(content)
        .width(Fill)
        .height(NAVBAR_HEIGHT)
        .padding(Padding::ZERO.left(PAGE_PADDING_X).right(PAGE_PADDING_X))
        .align_y(Alignment::Center)
        .style(theme::navbar)
        .into()
}
