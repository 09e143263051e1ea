//! Keyboard shortcuts
//!
//! Bindings are stored with the settings so they can be remapped by editing
//! the settings file.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    GoBack,
    GoForward,
    GoHome,
    GoPortfolio,
    GoBlog,
    ScrollToTop,

    // Display
    ToggleDarkMode,
    TogglePowerSaving,
}

impl Action {
    /// Get all available actions
    #[cfg(test)]
    pub fn all() -> &'static [Action] {
        &[
            Action::GoBack,
            Action::GoForward,
            Action::GoHome,
            Action::GoPortfolio,
            Action::GoBlog,
            Action::ScrollToTop,
            Action::ToggleDarkMode,
            Action::TogglePowerSaving,
        ]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::GoHome => "Home",
            Action::GoPortfolio => "Portfolio",
            Action::GoBlog => "Blog",
            Action::ScrollToTop => "Scroll to top",
            Action::ToggleDarkMode => "Toggle dark mode",
            Action::TogglePowerSaving => "Toggle power saving",
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    B,
    D,
    H,
    P,
    Key1,
    Key2,
    Key3,
    Left,
    Right,
    Home,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!(
                    (self, c.as_str()),
                    (KeyCode::B, "b")
                        | (KeyCode::D, "d")
                        | (KeyCode::H, "h")
                        | (KeyCode::P, "p")
                        | (KeyCode::Key1, "1")
                        | (KeyCode::Key2, "2")
                        | (KeyCode::Key3, "3")
                )
            }
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                        | (KeyCode::Home, Named::Home)
                )
            }
            Key::Unidentified => false,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            KeyCode::B => "B",
            KeyCode::D => "D",
            KeyCode::H => "H",
            KeyCode::P => "P",
            KeyCode::Key1 => "1",
            KeyCode::Key2 => "2",
            KeyCode::Key3 => "3",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
            KeyCode::Home => "Home",
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Browser-style history
        bindings.insert(Action::GoBack, vec![KeyBinding::new(KeyCode::Left).alt()]);
        bindings.insert(
            Action::GoForward,
            vec![KeyBinding::new(KeyCode::Right).alt()],
        );

        bindings.insert(
            Action::GoHome,
            vec![
                KeyBinding::new(KeyCode::Key1).ctrl(),
                KeyBinding::new(KeyCode::H).ctrl(),
            ],
        );
        bindings.insert(
            Action::GoPortfolio,
            vec![KeyBinding::new(KeyCode::Key2).ctrl()],
        );
        bindings.insert(
            Action::GoBlog,
            vec![
                KeyBinding::new(KeyCode::Key3).ctrl(),
                KeyBinding::new(KeyCode::B).ctrl(),
            ],
        );
        bindings.insert(Action::ScrollToTop, vec![KeyBinding::new(KeyCode::Home)]);

        bindings.insert(
            Action::ToggleDarkMode,
            vec![KeyBinding::new(KeyCode::D).ctrl()],
        );
        bindings.insert(
            Action::TogglePowerSaving,
            vec![KeyBinding::new(KeyCode::P).ctrl().shift()],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key, modifiers)))
            .map(|(action, _)| *action)
    }

    /// Display string for an action's first keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn test_every_action_has_a_default() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert_ne!(bindings.display_for_action(action), "None", "{:?} unbound", action);
        }
    }

    #[test]
    fn test_find_action() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &Modifiers::ALT),
            Some(Action::GoBack)
        );
        assert_eq!(
            bindings.find_action(&Key::Character("D".into()), &Modifiers::CTRL),
            Some(Action::ToggleDarkMode)
        );
        // Plain arrow keys scroll the page instead
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &Modifiers::empty()),
            None
        );
    }

    #[test]
    fn test_keybinding_display() {
        let binding = KeyBinding::new(KeyCode::P).ctrl().shift();
        assert_eq!(binding.display(), "Ctrl+Shift+P");
        assert_eq!(
            KeyBindings::default().display_for_action(&Action::GoForward),
            "Alt+Right"
        );
    }
}
