//! Colour constants for the preferences window

use eframe::egui::Color32;

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(28, 30, 34);
/// Section frame background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(36, 39, 45);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 223, 228);
/// Dimmed text
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 165, 175);
/// Muted text (field labels, descriptions)
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 115, 125);

/// Success accents (save confirmation, valid toolchain)
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(100, 200, 130);
/// Error accents (validation failures)
pub const ACCENT_RED: Color32 = Color32::from_rgb(230, 100, 100);
