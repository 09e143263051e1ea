//! Animation playback for the UI
//!
//! Reveal transitions run on `iced_anim` progress values, advanced by the
//! frame subscription while anything is moving.

mod reveal;

pub use reveal::RevealPlayer;
