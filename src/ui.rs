//! UI module for the portfolio
//! Light and dark modes with a blue accent
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Canvas programs
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Navbar and footer with Message handling
//! - **Pages** (`pages`): Full-page views plus the layout metrics they share
//! - **Animation** (`animation`): The reveal player the pages read from

pub mod animation;
pub mod components;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
