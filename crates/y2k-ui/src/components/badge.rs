//! Badge Component
//!
//! Small pill-shaped labels for tags like "NEW" or "BETA".

use dioxus::prelude::*;

use super::cn;

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Filled electric blue
    #[default]
    Default,
    /// Muted chrome fill
    Secondary,
    /// Border only
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Renders a small inline label
///
/// ```rust,ignore
/// rsx! {
///     Badge { variant: BadgeVariant::Outline, "Chrome Accents" }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let full_class = cn(["badge", props.variant.class(), props.class.as_deref().unwrap_or("")]);

    rsx! {
        span { class: "{full_class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(BadgeVariant::Default.class(), "badge-default");
        assert_eq!(BadgeVariant::Secondary.class(), "badge-secondary");
        assert_eq!(BadgeVariant::Outline.class(), "badge-outline");
    }
}
