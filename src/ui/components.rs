//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer besides pages that imports from `crate::app`.

pub mod footer;
pub mod navbar;

pub use navbar::{NavItem, NavbarState};
