//! Material palette constants for the light and dark themes.

// === LIGHT ===
pub const LIGHT_PRIMARY: &str = "#6200ee";
pub const LIGHT_SECONDARY: &str = "#03dac5";
pub const LIGHT_BACKGROUND: &str = "#f5f5f5";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_ON_SURFACE: &str = "#1c1b1f";
pub const LIGHT_ON_SURFACE_MUTED: &str = "rgba(28, 27, 31, 0.7)";
pub const LIGHT_SHADOW: &str = "rgba(0, 0, 0, 0.2)";

// === DARK ===
pub const DARK_PRIMARY: &str = "#bb86fc";
pub const DARK_SECONDARY: &str = "#03dac5";
pub const DARK_BACKGROUND: &str = "#121212";
pub const DARK_SURFACE: &str = "#1e1e1e";
pub const DARK_ON_SURFACE: &str = "#f5f5f5";
pub const DARK_ON_SURFACE_MUTED: &str = "rgba(245, 245, 245, 0.7)";
pub const DARK_SHADOW: &str = "rgba(0, 0, 0, 0.6)";
