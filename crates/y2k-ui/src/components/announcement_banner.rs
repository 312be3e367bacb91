//! Announcement Banner Component
//!
//! A glass card announcing something new, backed by a grid, optional
//! floating orbs and a tech frame. Four color variants, plus an escape
//! hatch for callers who bring their own classes.
//!
//! A dismissible banner stays gone for the rest of its mount once the
//! user closes it.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    cn, Badge, BadgeVariant, Button, ButtonVariant, FloatingOrbs, GridPattern, IconButton, Orb,
    TechFrame, DEFAULT_GRID_LINE_COLOR, DEFAULT_GRID_SIZE,
};

/// Frame line classes used by the banner's overlay
const FRAME_BOTTOM_LINE_CLASS: &str = "frame-line-electric";
const FRAME_SIDE_LINE_CLASS: &str = "frame-line-cyan";
const FRAME_CORNER_CLASS: &str = "frame-accent-electric";

/// Banner color variants
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    /// Faint electric blue to cyan
    #[default]
    Default,
    /// Stronger blue wash with a cyan border
    Electric,
    /// Chrome to silver
    Chrome,
    /// Blue wash with a glowing border
    Glow,
}

impl BannerVariant {
    /// Every variant, in display order
    pub const ALL: [BannerVariant; 4] = [
        BannerVariant::Default,
        BannerVariant::Electric,
        BannerVariant::Chrome,
        BannerVariant::Glow,
    ];

    /// Returns the gradient/border class bundle for this variant
    pub fn class(&self) -> &'static str {
        match self {
            BannerVariant::Default => "banner-variant-default",
            BannerVariant::Electric => "banner-variant-electric",
            BannerVariant::Chrome => "banner-variant-chrome",
            BannerVariant::Glow => "banner-variant-glow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerVariant::Default => "default",
            BannerVariant::Electric => "electric",
            BannerVariant::Chrome => "chrome",
            BannerVariant::Glow => "glow",
        }
    }
}

/// Picks the container classes: the override when given, otherwise the
/// variant's own bundle.
pub fn resolve_variant_class(variant: BannerVariant, override_class: Option<&str>) -> &str {
    override_class.unwrap_or_else(|| variant.class())
}

/// Visibility of a single banner instance
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BannerState {
    /// Rendered normally
    #[default]
    Visible,
    /// Closed by the user; renders nothing for the rest of the mount
    Dismissed,
}

impl BannerState {
    /// Moves to `Dismissed`. Returns `true` only on the call that actually
    /// performed the transition.
    pub fn dismiss(&mut self) -> bool {
        match self {
            BannerState::Visible => {
                *self = BannerState::Dismissed;
                true
            }
            BannerState::Dismissed => false,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        matches!(self, BannerState::Dismissed)
    }
}

/// Call-to-action button rendered at the trailing edge of the banner
#[derive(Clone, PartialEq)]
pub struct BannerAction {
    /// Button content
    pub label: Element,
    /// Click handler
    pub on_click: Option<EventHandler<()>>,
    /// Content rendered after the label (arrow icon, etc.)
    pub end_icon: Option<Element>,
    /// Optional additional CSS classes for the button
    pub class: Option<String>,
}

impl BannerAction {
    pub fn new(label: Element) -> Self {
        Self {
            label,
            on_click: None,
            end_icon: None,
            class: None,
        }
    }

    pub fn with_on_click(mut self, handler: EventHandler<()>) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn with_end_icon(mut self, icon: Element) -> Self {
        self.end_icon = Some(icon);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Properties for the AnnouncementBanner component
#[derive(Clone, PartialEq, Props)]
pub struct AnnouncementBannerProps {
    /// Heading text or markup
    #[props(default)]
    pub title: Option<Element>,
    /// Body text or markup
    #[props(default)]
    pub message: Option<Element>,
    /// Content of the small badge next to the title
    #[props(default)]
    pub badge: Option<Element>,
    /// Leading icon, shown on a chrome tile
    #[props(default)]
    pub icon: Option<Element>,
    /// Optional call-to-action
    #[props(default)]
    pub action: Option<BannerAction>,
    /// Called once when the user dismisses the banner
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
    /// Color variant
    #[props(default)]
    pub variant: BannerVariant,
    /// Pulse the container and its orbs
    #[props(default = false)]
    pub animated: bool,
    /// Render a dismiss button
    #[props(default = false)]
    pub dismissible: bool,
    /// Replaces the variant's gradient/border classes
    #[props(default)]
    pub variant_class: Option<String>,
    /// Render the grid (and orbs, if any) behind the content
    #[props(default = true)]
    pub show_background: bool,
    /// Grid cell size in pixels
    #[props(default = DEFAULT_GRID_SIZE)]
    pub grid_size: f64,
    /// Grid line color
    #[props(default = DEFAULT_GRID_LINE_COLOR.to_string())]
    pub grid_line_color: String,
    /// Orbs floating behind the content
    #[props(default)]
    pub orbs: Vec<Orb>,
    /// Render the tech frame over the content
    #[props(default = true)]
    pub show_frame: bool,
    /// Optional additional CSS classes for the container
    #[props(default)]
    pub class: Option<String>,
}

/// Announcement card with layered decoration
///
/// Layers, back to front: grid pattern, floating orbs, content row, tech
/// frame. Every content slot is optional and simply omitted when absent.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AnnouncementBanner {
///         variant: BannerVariant::Glow,
///         badge: rsx! { "NEW" },
///         title: rsx! { "Chrome Edition" },
///         message: rsx! { "The translucent blue series is back in stock." },
///         dismissible: true,
///         on_dismiss: move |_| tracing::info!("banner closed"),
///     }
/// }
/// ```
#[component]
pub fn AnnouncementBanner(props: AnnouncementBannerProps) -> Element {
    let mut state = use_signal(BannerState::default);

    if state().is_dismissed() {
        return rsx! {};
    }

    let variant_class = resolve_variant_class(props.variant, props.variant_class.as_deref());
    tracing::trace!(variant = props.variant.label(), class = variant_class, "Resolved banner variant");

    let container_class = cn([
        "announcement-banner glass-card",
        variant_class,
        if props.animated { "animate-pulse" } else { "" },
        props.class.as_deref().unwrap_or(""),
    ]);

    let on_dismiss = props.on_dismiss;
    let handle_dismiss = move |_: ()| {
        if state.write().dismiss() {
            tracing::debug!("Announcement banner dismissed");
            if let Some(handler) = &on_dismiss {
                handler.call(());
            }
        }
    };

    let action_view = props.action.as_ref().map(|action| {
        let on_click = action.on_click;
        let label = action.label.clone();
        let end_icon = action.end_icon.clone();
        let button_class = cn(["banner-action group", action.class.as_deref().unwrap_or("")]);
        rsx! {
            Button {
                variant: ButtonVariant::Chrome,
                class: button_class,
                onclick: move |_: ()| {
                    tracing::debug!("Banner action clicked");
                    if let Some(handler) = &on_click {
                        handler.call(());
                    }
                },
                span { class: "banner-action-label font-display", {label} }
                {end_icon}
            }
        }
    });

    let has_heading = props.badge.is_some() || props.title.is_some();
    let animated = props.animated;

    rsx! {
        div { class: "{container_class}",
            if props.show_background {
                GridPattern {
                    class: "opacity-50".to_string(),
                    size: props.grid_size,
                    line_color: props.grid_line_color.clone(),
                }
                if !props.orbs.is_empty() {
                    FloatingOrbs { orbs: props.orbs.clone(), animated }
                }
            }

            div { class: "banner-body",
                div { class: "banner-main",
                    if let Some(icon) = props.icon.clone() {
                        div { class: "banner-icon",
                            div { class: "chrome-surface banner-icon-tile", {icon} }
                        }
                    }
                    div { class: "banner-text",
                        if has_heading {
                            div { class: "banner-heading",
                                if let Some(badge) = props.badge.clone() {
                                    Badge {
                                        variant: BadgeVariant::Secondary,
                                        class: "chrome-surface font-display banner-badge".to_string(),
                                        {badge}
                                    }
                                }
                                if let Some(title) = props.title.clone() {
                                    h3 { class: "banner-title font-display", {title} }
                                }
                            }
                        }
                        if let Some(message) = props.message.clone() {
                            div { class: "banner-message", {message} }
                        }
                    }
                }

                div { class: "banner-controls",
                    {action_view}
                    if props.dismissible {
                        IconButton {
                            onclick: handle_dismiss,
                            aria_label: "Dismiss".to_string(),
                            class: "chrome-surface banner-dismiss".to_string(),
                            span { "aria-hidden": "true", "\u{00D7}" }
                        }
                    }
                }
            }

            if props.show_frame {
                TechFrame {
                    bottom_line_class: FRAME_BOTTOM_LINE_CLASS.to_string(),
                    side_line_class: FRAME_SIDE_LINE_CLASS.to_string(),
                    corner_class: FRAME_CORNER_CLASS.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_bundle() {
        for variant in BannerVariant::ALL {
            assert!(variant.class().starts_with("banner-variant-"));
            assert!(variant.class().ends_with(variant.label()));
        }
    }

    #[test]
    fn variant_default_is_default() {
        assert_eq!(BannerVariant::default(), BannerVariant::Default);
    }

    #[test]
    fn electric_without_override() {
        assert_eq!(
            resolve_variant_class(BannerVariant::Electric, None),
            "banner-variant-electric"
        );
    }

    #[test]
    fn override_wins_for_every_variant() {
        for variant in BannerVariant::ALL {
            assert_eq!(resolve_variant_class(variant, Some("my-gradient")), "my-gradient");
        }
    }

    #[test]
    fn empty_override_still_wins() {
        assert_eq!(resolve_variant_class(BannerVariant::Glow, Some("")), "");
    }

    #[test]
    fn dismissal_is_one_way() {
        let mut state = BannerState::default();
        assert!(!state.is_dismissed());
        assert!(state.dismiss());
        assert!(state.is_dismissed());
        assert!(!state.dismiss());
        assert!(state.is_dismissed());
    }

    #[test]
    fn variant_serializes_lowercase() {
        let json = serde_json::to_string(&BannerVariant::Electric).unwrap();
        assert_eq!(json, "\"electric\"");
        let back: BannerVariant = serde_json::from_str("\"glow\"").unwrap();
        assert_eq!(back, BannerVariant::Glow);
    }

    #[test]
    fn action_builder() {
        let action = BannerAction::new(VNode::empty()).with_class("cta");
        assert!(action.label.is_ok());
        assert_eq!(action.class.as_deref(), Some("cta"));
        assert!(action.on_click.is_none());
        assert!(action.end_icon.is_none());
    }
}
