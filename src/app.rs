//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;
use state::{CoreState, MotionState, UiState};

/// Scrollable holding the current page
pub const PAGE_SCROLL_ID: &str = "page_scroll";

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the first frame uses the saved theme
        let settings = crate::features::Settings::load();

        // 2. Initialize sub-states
        let core = CoreState::new(settings);
        let ui = UiState::new();
        let motion = MotionState::new(&core.settings.reveal, core.viewport());

        let mut app = Self { core, ui, motion };

        // 3. Mount the home page (plays the hero timeline)
        app.mount_current_page(true);

        // 4. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: state::DEFAULT_WINDOW_SIZE,
            min_size: Some(iced::Size::new(480.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "folio".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the current page
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("Portfolio - {}", self.ui.active_nav.label())
    }

    /// Whether the hero cube is spinning
    pub fn cube_spinning(&self) -> bool {
        !self.core.power_saving()
            && self.ui.active_nav == crate::ui::components::NavItem::Home
            && crate::ui::pages::home::shows_cube(self.core.window_size.width)
    }

    /// Subscriptions for animations, keyboard events, and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let power_saving = self.core.power_saving();

        // 1. Animation frames (reveals, hero timeline, cube)
        let animation_sub = if subscription_logic::needs_animation_frames(
            self.motion.has_active_animations(),
            self.cube_spinning(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Optional fallback poll for layout changes scroll events miss
        let poll_sub = match subscription_logic::poll_interval(
            self.core.settings.reveal.poll_interval(),
            power_saving,
            !self.motion.registrations.is_empty(),
        ) {
            Some(interval) => iced::time::every(interval).map(|_| Message::RevealPoll),
            None => iced::Subscription::none(),
        };

        // 3. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 4. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, poll_sub, keyboard_sub, resize_sub, close_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use std::time::Duration;

    pub fn needs_animation_frames(has_animations: bool, cube_spinning: bool) -> bool {
        has_animations || cube_spinning
    }

    /// Poll timer period, only while a page has live registrations
    pub fn poll_interval(
        configured: Option<Duration>,
        power_saving: bool,
        has_registrations: bool,
    ) -> Option<Duration> {
        if power_saving || !has_registrations {
            return None;
        }
        configured
    }
}
