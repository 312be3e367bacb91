//! Floating Orbs Component
//!
//! Blurred circular gradients scattered over a container. Each orb is
//! positioned, sized and colored independently; none of them interact.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Diameter used when an orb does not specify one (pixels)
pub const DEFAULT_ORB_SIZE: f64 = 24.0;

/// A single decorative orb.
///
/// `position` holds raw CSS declarations such as `"top: 8px; right: 32px;"`.
/// Colors are any CSS color expression. None of the strings are validated;
/// they reach the rendered style as given, except that a trailing `;` is
/// added to `position` when it is missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orb {
    /// Absolute-positioning declarations
    pub position: String,
    /// Diameter in pixels
    pub size: Option<f64>,
    /// Gradient start color
    pub from_color: String,
    /// Gradient end color
    pub to_color: String,
    /// Extra CSS classes
    pub class: Option<String>,
    /// Extra inline style, applied after everything else
    pub style: Option<String>,
}

impl Orb {
    /// Creates an orb at the given position with default size and no colors.
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            ..Self::default()
        }
    }

    /// Sets the diameter in pixels.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the gradient start and end colors.
    pub fn with_colors(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_color = from.into();
        self.to_color = to.into();
        self
    }

    /// Adds extra CSS classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds an extra inline style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Rendered diameter: the requested size, or [`DEFAULT_ORB_SIZE`] when it
    /// is missing, negative or not finite.
    pub fn diameter(&self) -> f64 {
        match self.size {
            Some(size) if size.is_finite() && size >= 0.0 => size,
            _ => DEFAULT_ORB_SIZE,
        }
    }

    /// Full inline style for this orb.
    pub fn inline_style(&self) -> String {
        let diameter = self.diameter();
        let position = self.position.trim();
        let separator = if position.is_empty() || position.ends_with(';') { "" } else { ";" };
        let mut style = format!(
            "{position}{separator} width: {diameter}px; height: {diameter}px; \
             background-image: linear-gradient(to bottom right, {}, {});",
            color_or_transparent(&self.from_color),
            color_or_transparent(&self.to_color),
        );
        if let Some(extra) = self.style.as_deref() {
            style.push(' ');
            style.push_str(extra);
        }
        style.trim_start().to_string()
    }

    /// Full class list for this orb.
    pub fn class_list(&self, animated: bool) -> String {
        super::cn([
            "floating-orb",
            if animated { "animate-pulse" } else { "" },
            self.class.as_deref().unwrap_or(""),
        ])
    }
}

fn color_or_transparent(color: &str) -> &str {
    if color.trim().is_empty() {
        "transparent"
    } else {
        color
    }
}

/// Properties for the FloatingOrbs component
#[derive(Clone, PartialEq, Props)]
pub struct FloatingOrbsProps {
    /// Orbs to render, in order
    #[props(default)]
    pub orbs: Vec<Orb>,
    /// Whether every orb pulses
    #[props(default = false)]
    pub animated: bool,
    /// Optional additional CSS classes for the container
    #[props(default)]
    pub class: Option<String>,
}

/// Renders one blurred gradient circle per orb
///
/// The container is always present, even with no orbs, so the layer
/// stack of the parent stays stable.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FloatingOrbs {
///         orbs: vec![
///             Orb::new("top: 8px; right: 32px;")
///                 .with_size(48.0)
///                 .with_colors("rgba(0,102,255,0.3)", "rgba(0,204,255,0.3)"),
///         ],
///         animated: true,
///     }
/// }
/// ```
#[component]
pub fn FloatingOrbs(props: FloatingOrbsProps) -> Element {
    let container_class = super::cn(["orb-field", props.class.as_deref().unwrap_or("")]);
    let animated = props.animated;

    rsx! {
        div { class: "{container_class}", "aria-hidden": "true",
            for (index, orb) in props.orbs.iter().enumerate() {
                div {
                    key: "{index}",
                    class: orb.class_list(animated),
                    style: orb.inline_style(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_size_uses_default() {
        assert_eq!(Orb::new("top: 0;").diameter(), DEFAULT_ORB_SIZE);
    }

    #[test]
    fn invalid_sizes_are_coerced() {
        assert_eq!(Orb::new("").with_size(-1.0).diameter(), DEFAULT_ORB_SIZE);
        assert_eq!(Orb::new("").with_size(f64::NAN).diameter(), DEFAULT_ORB_SIZE);
        assert_eq!(Orb::new("").with_size(0.0).diameter(), 0.0);
        assert_eq!(Orb::new("").with_size(64.0).diameter(), 64.0);
    }

    #[test]
    fn inline_style_carries_position_size_and_colors() {
        let orb = Orb::new("top: 8px; right: 32px;")
            .with_size(48.0)
            .with_colors("#0066ff", "#00ccff");
        let style = orb.inline_style();
        assert!(style.starts_with("top: 8px; right: 32px;"));
        assert!(style.contains("width: 48px; height: 48px;"));
        assert!(style.contains("linear-gradient(to bottom right, #0066ff, #00ccff)"));
    }

    #[test]
    fn unterminated_position_gets_a_semicolon() {
        let style = Orb::new("top: 8px").with_size(48.0).inline_style();
        assert!(style.starts_with("top: 8px; width: 48px; height: 48px;"));
        assert_eq!(style.matches(";;").count(), 0);
    }

    #[test]
    fn terminated_position_is_not_doubled() {
        let style = Orb::new("top: 8px; right: 32px;").inline_style();
        assert!(style.starts_with("top: 8px; right: 32px; width: 24px;"));
    }

    #[test]
    fn extra_style_comes_last() {
        let orb = Orb::new("left: 0;").with_style("opacity: 0.4;");
        assert!(orb.inline_style().ends_with("opacity: 0.4;"));
    }

    #[test]
    fn missing_colors_render_transparent() {
        let style = Orb::new("").inline_style();
        assert!(style.contains("linear-gradient(to bottom right, transparent, transparent)"));
    }

    #[test]
    fn animated_orbs_pulse() {
        let orb = Orb::new("").with_class("blur-lg");
        assert_eq!(orb.class_list(false), "floating-orb blur-lg");
        assert_eq!(orb.class_list(true), "floating-orb animate-pulse blur-lg");
    }

    #[test]
    fn orb_deserializes_with_defaults() {
        let orb: Orb = serde_json::from_str(r#"{"position": "top: 4px;", "size": 32}"#).unwrap();
        assert_eq!(orb.position, "top: 4px;");
        assert_eq!(orb.size, Some(32.0));
        assert!(orb.from_color.is_empty());
        assert_eq!(orb.class, None);
    }
}
