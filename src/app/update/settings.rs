//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Persist settings, logging instead of failing the update
    fn save_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        } else {
            tracing::info!("Settings saved successfully");
        }
    }

    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                let prefs = &mut self.core.settings.display;
                prefs.dark_mode = !prefs.dark_mode;
                self.save_settings();
                Some(Task::none())
            }

            Message::TogglePowerSaving => {
                let enabled = !self.core.settings.display.power_saving_mode;
                self.set_power_saving(enabled);
                self.save_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Switch power saving without persisting it
    fn set_power_saving(&mut self, enabled: bool) {
        self.core.settings.display.power_saving_mode = enabled;
        tracing::info!("Power saving mode: {}", enabled);

        // Re-mount in place without replaying the hero; cards on screen at
        // the current scroll offset reveal on the next tick
        self.mount_current_page(false);
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;

    use crate::app::message::Message;
    use crate::app::state::{App, CoreState, MotionState, UiState};
    use crate::features::Settings;
    use crate::features::reveal::RevealState;
    use crate::ui::components::NavItem;
    use crate::ui::pages::blog;

    fn blog_app() -> App {
        let core = CoreState::new(Settings::default());
        let motion = MotionState::new(&core.settings.reveal, core.viewport());
        let mut app = App {
            core,
            ui: UiState::new(),
            motion,
        };
        app.ui.active_nav = NavItem::Blog;
        app.mount_current_page(false);
        app
    }

    #[test]
    fn test_power_saving_round_trip_keeps_scroll() {
        let mut app = blog_app();
        let _ = app.update(Message::PageScrolled {
            offset_y: 800.0,
            viewport_height: app.core.viewport().height,
        });

        app.set_power_saving(true);
        assert!(app.core.power_saving());
        assert!(app.motion.registrations.is_empty());
        assert!(app.motion.controller.state(&blog::target_id(1)).is_none());

        app.set_power_saving(false);
        assert!(!app.core.power_saving());
        assert_eq!(app.motion.registrations.len(), 1);

        let _ = app.update(Message::AnimationTick(Instant::now()));
        assert_eq!(
            app.motion.controller.state(&blog::target_id(1)),
            Some(RevealState::Entering)
        );
    }
}
