//! Color Constants for the Dark Slate Theme
//!
//! All color constants used by the sign-in UI.

use eframe::egui::Color32;

/// Main background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x27);

/// Card/panel background
pub const PANEL_BG: Color32 = Color32::from_rgb(0x24, 0x29, 0x33);

/// Panel border
pub const PANEL_BORDER: Color32 = Color32::from_rgb(0x33, 0x3A, 0x47);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x12, 0x15, 0x1C);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEA, 0xEF);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8E, 0x96, 0xA3);

/// Accent color for primary actions
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x6E, 0xC5);

/// Primary button background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x3B, 0x6E, 0xC5);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x1E, 0x23, 0x2C);

/// Error text - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0x3A, 0x22, 0x26);
