// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;
use crate::ui::components::NavItem;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        let message = match action {
            Action::GoBack => Message::NavigateBack,
            Action::GoForward => Message::NavigateForward,
            Action::GoHome => Message::Navigate(NavItem::Home),
            Action::GoPortfolio => Message::Navigate(NavItem::Portfolio),
            Action::GoBlog => Message::Navigate(NavItem::Blog),
            Action::ScrollToTop => Message::ScrollToTop,
            Action::ToggleDarkMode => Message::ToggleDarkMode,
            Action::TogglePowerSaving => Message::TogglePowerSaving,
        };
        self.update(message)
    }
}
