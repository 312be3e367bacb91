//! Color and font constants for the Y2K palette.
//!
//! Translucent blues and chrome, after early-2000s portable stereos.

// === ELECTRIC (Primary accents) ===
pub const ELECTRIC_BLUE: &str = "#0066ff";
pub const CYAN: &str = "#00ccff";
pub const GLOW: &str = "rgba(0, 204, 255, 0.3)";

// === GLASS (Translucent surfaces) ===
pub const TRANSLUCENT_BLUE: &str = "rgba(0, 102, 255, 0.15)";
pub const GLASS_BLUE: &str = "rgba(0, 204, 255, 0.08)";

// === CHROME (Metallic surfaces) ===
pub const CHROME: &str = "#c0c8d8";
pub const SILVER: &str = "#8892a6";
pub const DARK_CHROME: &str = "#4a5568";

// === FONTS ===
pub const FONT_PRIMARY: &str =
    "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif";
pub const FONT_DISPLAY: &str = "'Orbitron', 'Inter', system-ui, sans-serif";
pub const FONT_MONO: &str = "'JetBrains Mono', 'Consolas', 'Monaco', monospace";
