// src/app/update/reveal.rs
//! Scroll observation and the per-frame reveal tick

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::reveal::{PositionObserver, Viewport};

impl App {
    /// Handle reveal-related messages
    pub fn handle_reveal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => {
                let motion = &mut self.motion;
                motion.layout.set_scroll(*offset_y);
                let width = motion.layout.viewport().width;
                motion
                    .layout
                    .set_viewport(Viewport::new(width, *viewport_height));
                // Observation only runs on the next frame
                if !motion.coalescer.request() {
                    tracing::trace!(
                        "Scroll folded into pending tick ({} coalesced)",
                        motion.coalescer.coalesced()
                    );
                }
                Some(Task::none())
            }

            Message::RevealPoll => {
                self.motion.coalescer.request();
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                let now = *now;
                self.motion.frame(now);

                if self.cube_spinning() {
                    self.motion.cube.advance(now);
                } else {
                    self.motion.cube.pause();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
