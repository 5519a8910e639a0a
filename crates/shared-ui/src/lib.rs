//! Styled building blocks for the pass status client.
//!
//! Each component links its own stylesheet, so pages only import what they render.

pub mod components;

pub use components::*;
