// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, scrollable, stack};
use iced::{Alignment, Element, Fill, Padding};

use super::message::Message;
use super::{App, PAGE_SCROLL_ID};
use crate::ui::components::{NavItem, NavbarState};
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let width = self.core.window_size.width;
        let viewport = self.core.viewport();
        let player = self.motion.player();

        let page: Element<'_, Message> = match self.ui.active_nav {
            NavItem::Home => pages::home::view(player, &self.motion.cube, width, viewport.height),
            NavItem::Portfolio => pages::portfolio::view(player, width),
            NavItem::Blog => pages::blog::view(player, width),
        };

        let body = column![
            page,
            components::footer::view(&self.core.settings.keybindings, width),
        ]
        .width(Fill);

        let scroll = scrollable(body)
            .width(Fill)
            .height(Fill)
            .id(iced::widget::Id::new(PAGE_SCROLL_ID))
            .on_scroll(|viewport| Message::PageScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .style(theme::page_scrollable);

        let navbar = components::navbar::view(NavbarState {
            active: self.ui.active_nav,
            can_go_back: self.ui.nav_history.can_go_back(),
            can_go_forward: self.ui.nav_history.can_go_forward(),
            dark_mode: self.core.settings.display.dark_mode,
            power_saving: self.core.power_saving(),
        });

        let base = container(column![navbar, scroll])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        match &self.ui.toast {
            Some(toast) => stack![
                base,
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .height(Fill)
                    .padding(Padding::new(24.0))
                    .align_x(Alignment::Center)
                    .align_y(Alignment::End),
            ]
            .into(),
            None => base.into(),
        }
    }
}
