//! Button Components
//!
//! Button styles from the Y2K kit:
//! - Default: Solid electric blue
//! - Ghost: Transparent until hovered
//! - Chrome: Beveled 3D chrome key, like a stereo transport button
//! - Glow: Chrome key with a cyan halo

use dioxus::prelude::*;

use super::cn;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid electric blue
    #[default]
    Default,
    /// Transparent background, tinted on hover
    Ghost,
    /// Raised chrome key
    Chrome,
    /// Raised chrome key with glow
    Glow,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Chrome => "btn-ghost button-3d chrome-surface",
            ButtonVariant::Glow => "btn-ghost button-3d glow-blue",
        }
    }
}

/// Button size presets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-size-default",
            ButtonSize::Sm => "btn-size-sm",
            ButtonSize::Lg => "btn-size-lg",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Size preset
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Chrome,
///         onclick: move |_| playing.toggle(),
///         "PLAY"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = cn([
        "btn",
        props.variant.class(),
        props.size.class(),
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, skip, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = cn([
        "btn",
        ButtonVariant::Ghost.class(),
        ButtonSize::Sm.class(),
        "icon-btn",
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
