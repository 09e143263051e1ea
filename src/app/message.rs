//! Application messages

use iced::Size;
use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::features::Action;
use crate::ui::components::NavItem;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Navbar or footer link selected
    Navigate(NavItem),
    /// Navigate back in history
    NavigateBack,
    /// Navigate forward in history
    NavigateForward,
    /// Jump the page back to the top
    ScrollToTop,

    // ============ Reveal ============
    /// Page scrolled (absolute offset, visible height)
    PageScrolled { offset_y: f32, viewport_height: f32 },
    /// Animation frame
    AnimationTick(Instant),
    /// Fallback poll timer fired
    RevealPoll,

    // ============ Window ============
    WindowResized(Size),
    /// Main window closed
    WindowClosed,

    // ============ Settings ============
    ToggleDarkMode,
    TogglePowerSaving,

    // ============ Keyboard ============
    KeyPressed(Key, Modifiers),
    ExecuteAction(Action),

    // ============ Links ============
    /// Copy a link or address to the clipboard
    CopyLink(&'static str),
    ShowToast(String),
    HideToast,
}
