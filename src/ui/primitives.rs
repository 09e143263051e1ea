//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`Cube`] - Flat-shaded spinning cube drawn on a Canvas

pub mod cube;

pub use cube::{Cube, CubeState, view_cube};
