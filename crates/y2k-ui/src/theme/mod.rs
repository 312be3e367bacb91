//! Y2K theme: palette, effect classes and global CSS.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

use serde::{Deserialize, Serialize};

/// Effect utility class names defined in [`GLOBAL_STYLES`]
pub mod classes {
    pub const GLASS_CARD: &str = "glass-card";
    pub const CHROME_SURFACE: &str = "chrome-surface";
    pub const GLOW_BLUE: &str = "glow-blue";
    pub const BUTTON_3D: &str = "button-3d";
    pub const FONT_DISPLAY: &str = "font-display";
    pub const TEXT_TECH: &str = "text-tech";
    pub const TEXT_DIGITAL: &str = "text-digital";
}

/// Named palette entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Y2kColors {
    pub electric_blue: String,
    pub cyan: String,
    pub translucent_blue: String,
    pub glass_blue: String,
    pub chrome: String,
    pub silver: String,
    pub dark_chrome: String,
    pub glow: String,
}

/// Font stacks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Y2kFonts {
    pub primary: String,
    pub display: String,
    pub mono: String,
}

/// Effect class names
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Y2kEffects {
    pub glass_card: String,
    pub chrome_surface: String,
    pub glow_blue: String,
    pub button_3d: String,
}

/// The full theme as a value, for hosts that want to generate their own
/// styles or hand the palette to another renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Y2kTheme {
    pub colors: Y2kColors,
    pub fonts: Y2kFonts,
    pub effects: Y2kEffects,
}

impl Default for Y2kTheme {
    fn default() -> Self {
        Self {
            colors: Y2kColors {
                electric_blue: colors::ELECTRIC_BLUE.to_string(),
                cyan: colors::CYAN.to_string(),
                translucent_blue: colors::TRANSLUCENT_BLUE.to_string(),
                glass_blue: colors::GLASS_BLUE.to_string(),
                chrome: colors::CHROME.to_string(),
                silver: colors::SILVER.to_string(),
                dark_chrome: colors::DARK_CHROME.to_string(),
                glow: colors::GLOW.to_string(),
            },
            fonts: Y2kFonts {
                primary: colors::FONT_PRIMARY.to_string(),
                display: colors::FONT_DISPLAY.to_string(),
                mono: colors::FONT_MONO.to_string(),
            },
            effects: Y2kEffects {
                glass_card: classes::GLASS_CARD.to_string(),
                chrome_surface: classes::CHROME_SURFACE.to_string(),
                glow_blue: classes::GLOW_BLUE.to_string(),
                button_3d: classes::BUTTON_3D.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_palette() {
        let theme = Y2kTheme::default();
        assert_eq!(theme.colors.electric_blue, "#0066ff");
        assert_eq!(theme.colors.cyan, "#00ccff");
        assert_eq!(theme.effects.button_3d, "button-3d");
    }

    #[test]
    fn theme_serializes_camel_case() {
        let value = serde_json::to_value(Y2kTheme::default()).unwrap();
        assert_eq!(value["colors"]["electricBlue"], "#0066ff");
        assert_eq!(value["effects"]["glassCard"], "glass-card");
        assert_eq!(value["fonts"]["mono"], colors::FONT_MONO);
    }

    #[test]
    fn effect_classes_are_styled() {
        for class in [
            classes::GLASS_CARD,
            classes::CHROME_SURFACE,
            classes::GLOW_BLUE,
            classes::BUTTON_3D,
            classes::FONT_DISPLAY,
            classes::TEXT_TECH,
            classes::TEXT_DIGITAL,
        ] {
            assert!(GLOBAL_STYLES.contains(&format!(".{class}")), "missing .{class}");
        }
    }

    #[test]
    fn every_banner_variant_is_styled() {
        for variant in crate::BannerVariant::ALL {
            assert!(GLOBAL_STYLES.contains(&format!(".{}", variant.class())));
        }
    }
}
