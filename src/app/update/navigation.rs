// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::PAGE_SCROLL_ID;
use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::NavItem;

fn scroll_to_top() -> Task<Message> {
    iced::widget::operation::snap_to(
        iced::widget::Id::new(PAGE_SCROLL_ID),
        iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
    )
}

impl App {
    /// Register the active page's reveals, or leave it static in power saving mode
    pub(crate) fn mount_current_page(&mut self, play_hero: bool) {
        if self.core.power_saving() {
            self.motion.unmount();
            return;
        }

        self.motion.layout.set_viewport(self.core.viewport());
        self.motion.mount(
            self.ui.active_nav,
            &self.core.settings.reveal,
            self.core.window_size.width,
            play_hero,
            Instant::now(),
        );
    }

    /// Swap pages: old registrations go, the new page mounts at the top
    fn show_page(&mut self, nav: NavItem) -> Task<Message> {
        tracing::info!("Navigating to {:?}", nav);
        self.ui.active_nav = nav;
        // Mirrors the snap below so the first tick measures from the top
        self.motion.layout.set_scroll(0.0);
        self.mount_current_page(true);
        scroll_to_top()
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(nav) => {
                if *nav == self.ui.active_nav {
                    return Some(scroll_to_top());
                }
                self.ui.nav_history.push(*nav);
                Some(self.show_page(*nav))
            }

            Message::NavigateBack => match self.ui.nav_history.go_back() {
                Some(nav) => Some(self.show_page(nav)),
                None => Some(Task::none()),
            },

            Message::NavigateForward => match self.ui.nav_history.go_forward() {
                Some(nav) => Some(self.show_page(nav)),
                None => Some(Task::none()),
            },

            Message::ScrollToTop => Some(scroll_to_top()),

            _ => None,
        }
    }
}
