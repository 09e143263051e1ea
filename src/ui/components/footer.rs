//! Footer component
//!
//! Brand blurb with social links, quick links, contact details, shortcut
//! hints and the copyright line. Links copy their target to the clipboard.

use chrono::Datelike;
use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::NavItem;
use crate::app::Message;
use crate::content::profile;
use crate::features::{Action, KeyBindings};
use crate::ui::pages::layout::{MAX_CONTENT_WIDTH, MD_BREAKPOINT, PAGE_PADDING_X};
use crate::ui::theme::{self, BOLD, SEMIBOLD};
use crate::ui::widgets::page;

/// Actions listed in the shortcut hints
const HINTED_ACTIONS: [Action; 4] = [
    Action::GoBack,
    Action::GoForward,
    Action::ToggleDarkMode,
    Action::TogglePowerSaving,
];

/// Year shown in the copyright line
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, profile::NAME)
}

/// One-line shortcut summary, e.g. `Back: Alt+Left · Forward: Alt+Right`
pub fn shortcut_hints(keybindings: &KeyBindings) -> String {
    HINTED_ACTIONS
        .iter()
        .map(|action| {
            format!(
                "{}: {}",
                action.display_name(),
                keybindings.display_for_action(action)
            )
        })
        .collect::<Vec<_>>()
        .join("  ·  ")
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(18)
        .font(SEMIBOLD)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}

fn link<'a>(label: impl text::IntoFragment<'a>, message: Message) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding(0)
        .style(theme::text_link)
        .on_press(message)
        .into()
}

fn muted<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(label)
        .size(15)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

/// Build the footer
pub fn view<'a>(keybindings: &KeyBindings, window_width: f32) -> Element<'a, Message> {
    let brand = column![
        button(text("Portfolio").size(24).font(BOLD).color(theme::PRIMARY))
            .padding(0)
            .style(|_theme, _status| button::Style::default())
            .on_press(Message::Navigate(NavItem::Home)),
        muted(profile::BLURB),
        row![
            link("GitHub", Message::CopyLink(profile::GITHUB)),
            link("LinkedIn", Message::CopyLink(profile::LINKEDIN)),
            link("Twitter", Message::CopyLink(profile::TWITTER)),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .width(Fill);

    let quick_links = NavItem::all().iter().fold(
        column![heading("Quick Links"), Space::new().height(8)].spacing(8),
        |links, item| links.push(link(item.label(), Message::Navigate(*item))),
    );

    let contact = column![
        heading("Contact"),
        Space::new().height(8),
        row![muted("✉"), link(profile::EMAIL, Message::CopyLink(profile::EMAIL))].spacing(8),
        row![muted("⌖"), muted(profile::LOCATION)].spacing(8),
    ]
    .spacing(8)
    .width(Fill);

    let sections: Element<'a, Message> = if window_width < MD_BREAKPOINT {
        Column::new()
            .push(brand)
            .push(quick_links.width(Fill))
            .push(contact)
            .spacing(32)
            .into()
    } else {
        row![brand, quick_links.width(Fill), contact]
            .spacing(32)
            .into()
    };

    let bottom = column![
        container(Space::new().width(Fill).height(1)).style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::border_color(theme))),
            ..Default::default()
        }),
        Space::new().height(24),
        text(shortcut_hints(keybindings))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(8),
        muted(copyright_line(current_year())),
    ]
    .align_x(Alignment::Center);

    let content = column![sections, Space::new().height(32), bottom]
        .padding(Padding::new(32.0).left(0.0).right(0.0));

    container(page::centered(content, MAX_CONTENT_WIDTH, PAGE_PADDING_X))
        .width(Fill)
        .style(theme::footer)
        .into()
}
