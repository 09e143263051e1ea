//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on primitives and iced's built-in widgets

pub mod page;
mod reveal_cell;
pub mod section_header;
mod tags;
mod toast;

pub use reveal_cell::reveal_cell;
pub use tags::{TagSize, tag_row};
pub use toast::{Toast, view_toast};
