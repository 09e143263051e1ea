//! Link and toast message handlers
//!
//! External links are copied to the clipboard rather than opened.

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

/// How long a toast stays up
const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Handle link and toast messages
    pub fn handle_links(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CopyLink(link) => {
                tracing::info!("Copying {} to clipboard", link);
                Some(Task::batch([
                    iced::clipboard::write(link.to_string()),
                    Task::done(Message::ShowToast(format!("Copied {link}"))),
                ]))
            }

            Message::ShowToast(text) => {
                self.ui.toast = Some(Toast::success(text.clone()));
                self.ui.toast_timers += 1;
                // Auto-hide toast after a few seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(TOAST_DURATION).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::HideToast => {
                // Hide only once the newest toast's timer fires
                self.ui.toast_timers = self.ui.toast_timers.saturating_sub(1);
                if self.ui.toast_timers == 0 {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
