//! Showcase configuration
//!
//! The showcase window renders a list of banners described in a JSON file.
//! Fields left out of the file fall back to the component defaults, and
//! without any file the built-in showcase of all four variants is used.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use y2k_ui::{BannerVariant, Orb, DEFAULT_GRID_LINE_COLOR, DEFAULT_GRID_SIZE};

/// Errors while loading a showcase file
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// The file could not be read
    #[error("Failed to read showcase file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid showcase description
    #[error("Invalid showcase file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Page background theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    /// Pale chrome gradient
    #[default]
    Light,
    /// Deep navy
    Dark,
}

impl ThemeMode {
    /// Returns the CSS class applied to the page root
    pub fn class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

/// One banner in the showcase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub title: Option<String>,
    pub message: Option<String>,
    pub badge: Option<String>,
    /// Short glyph shown on the icon tile
    pub icon: Option<String>,
    /// Label of the call-to-action button
    pub action_label: Option<String>,
    pub variant: BannerVariant,
    pub variant_class: Option<String>,
    pub animated: bool,
    pub dismissible: bool,
    pub show_background: bool,
    pub grid_size: f64,
    pub grid_line_color: String,
    pub orbs: Vec<Orb>,
    pub show_frame: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            badge: None,
            icon: None,
            action_label: None,
            variant: BannerVariant::Default,
            variant_class: None,
            animated: false,
            dismissible: false,
            show_background: true,
            grid_size: DEFAULT_GRID_SIZE,
            grid_line_color: DEFAULT_GRID_LINE_COLOR.to_string(),
            orbs: Vec::new(),
            show_frame: true,
        }
    }
}

/// Everything the showcase window displays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub title: String,
    pub subtitle: String,
    pub banners: Vec<BannerConfig>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self::built_in()
    }
}

impl ShowcaseConfig {
    /// One dismissible banner per variant
    pub fn built_in() -> Self {
        let orbs = vec![
            Orb::new("top: 8px; right: 32px;")
                .with_size(48.0)
                .with_colors("rgba(0, 102, 255, 0.3)", "rgba(0, 204, 255, 0.3)"),
            Orb::new("bottom: 12px; left: 40%;")
                .with_size(28.0)
                .with_colors("rgba(192, 200, 216, 0.4)", "rgba(136, 146, 166, 0.4)"),
        ];

        let banners = BannerVariant::ALL
            .into_iter()
            .map(|variant| BannerConfig {
                title: Some(format!("{} edition", variant.label())),
                message: Some(
                    "Translucent shells, chrome trim and a cyan display that glows in the dark."
                        .to_string(),
                ),
                badge: Some("NEW".to_string()),
                icon: Some("\u{25C9}".to_string()),
                action_label: Some("Learn more".to_string()),
                variant,
                animated: variant == BannerVariant::Glow,
                dismissible: true,
                orbs: orbs.clone(),
                ..BannerConfig::default()
            })
            .collect();

        Self {
            title: "Y2K Tech Aesthetic".to_string(),
            subtitle: "Announcement banners in every variant".to_string(),
            banners,
        }
    }

    /// Reads a showcase description from a JSON file
    pub fn load(path: &Path) -> Result<Self, ShowcaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ShowcaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ShowcaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Picks the showcase to display.
    ///
    /// An explicitly requested file must load. A file at the default
    /// location is optional: when it is missing or broken, the built-in
    /// showcase is used.
    pub fn resolve(
        explicit: Option<&Path>,
        default_path: Option<&Path>,
    ) -> Result<Self, ShowcaseError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_path {
            Some(path) if path.exists() => match Self::load(path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("Ignoring showcase file: {}", e);
                    Ok(Self::built_in())
                }
            },
            _ => Ok(Self::built_in()),
        }
    }
}

/// `<config dir>/y2k-showcase/showcase.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("y2k-showcase").join("showcase.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn built_in_covers_every_variant() {
        let config = ShowcaseConfig::built_in();
        let variants: Vec<_> = config.banners.iter().map(|b| b.variant).collect();
        assert_eq!(variants, BannerVariant::ALL.to_vec());
        assert!(config.banners.iter().all(|b| b.dismissible));
    }

    #[test]
    fn missing_fields_take_component_defaults() {
        let banner: BannerConfig = serde_json::from_str(r#"{"title": "Hi"}"#).unwrap();
        assert_eq!(banner.title.as_deref(), Some("Hi"));
        assert_eq!(banner.variant, BannerVariant::Default);
        assert!(banner.show_background);
        assert!(banner.show_frame);
        assert!(!banner.dismissible);
        assert_eq!(banner.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(banner.grid_line_color, DEFAULT_GRID_LINE_COLOR);
    }

    #[test]
    fn load_reads_banners() {
        let file = write_temp(
            r#"{
                "title": "Spring drop",
                "banners": [
                    {"variant": "chrome", "message": "Now in silver", "dismissible": true},
                    {"variant": "electric", "orbs": [{"position": "top: 0;", "size": 40}]}
                ]
            }"#,
        );

        let config = ShowcaseConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Spring drop");
        assert_eq!(config.banners.len(), 2);
        assert_eq!(config.banners[0].variant, BannerVariant::Chrome);
        assert!(config.banners[0].dismissible);
        assert_eq!(config.banners[1].orbs[0].size, Some(40.0));
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let file = write_temp(r#"{"banners": [{"variant": "neon"}]}"#);
        let err = ShowcaseConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ShowcaseError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = ShowcaseConfig::resolve(Some(&path), None).unwrap_err();
        assert!(matches!(err, ShowcaseError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn broken_default_file_falls_back() {
        let file = write_temp("{ not json");
        let config = ShowcaseConfig::resolve(None, Some(file.path())).unwrap();
        assert_eq!(config, ShowcaseConfig::built_in());
    }

    #[test]
    fn absent_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase.json");
        let config = ShowcaseConfig::resolve(None, Some(&path)).unwrap();
        assert_eq!(config, ShowcaseConfig::built_in());
    }

    #[test]
    fn theme_classes() {
        assert_eq!(ThemeMode::Light.class(), "theme-light");
        assert_eq!(ThemeMode::Dark.class(), "theme-dark");
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
