//! Shared color constants for the UI.

use egui::Color32;

/// Border color for table and panel frames (subtle gray).
pub const BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Muted text for empty regions and field captions.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(120, 120, 120);
