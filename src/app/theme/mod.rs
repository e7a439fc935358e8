//! Theme Module
//!
//! Color constants and styling helpers for the sign-in UI.

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
