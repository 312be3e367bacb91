use dioxus::prelude::*;
use y2k_ui::theme::GLOBAL_STYLES;
use y2k_ui::{AnnouncementBanner, BannerAction};

use crate::config::BannerConfig;
use crate::showcase;

/// Root application component.
///
/// Provides global styles and lays out the configured banners.
#[component]
pub fn App() -> Element {
    let showcase = showcase();
    let config = &showcase.config;
    let page_class = showcase.theme.class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{page_class}",
            div { class: "showcase",
                h1 { class: "showcase-title", "{config.title}" }
                if !config.subtitle.is_empty() {
                    p { class: "showcase-subtitle", "{config.subtitle}" }
                }
                for (index, banner) in config.banners.iter().enumerate() {
                    ShowcaseBanner { key: "{index}", index, banner: banner.clone() }
                }
            }
        }
    }
}

/// One configured banner, wired to log its interactions
#[component]
fn ShowcaseBanner(index: usize, banner: BannerConfig) -> Element {
    let action = banner.action_label.clone().map(|label| {
        BannerAction::new(rsx! { "{label}" })
            .with_on_click(EventHandler::new(move |_: ()| {
                tracing::info!(banner = index, "Action pressed");
            }))
            .with_end_icon(rsx! { span { "aria-hidden": "true", "\u{2192}" } })
    });

    rsx! {
        AnnouncementBanner {
            title: banner.title.clone().map(|title| rsx! { "{title}" }),
            message: banner.message.clone().map(|message| rsx! { "{message}" }),
            badge: banner.badge.clone().map(|badge| rsx! { "{badge}" }),
            icon: banner.icon.clone().map(|icon| rsx! { span { class: "text-digital", "{icon}" } }),
            action,
            on_dismiss: move |_| tracing::info!(banner = index, "Banner dismissed"),
            variant: banner.variant,
            animated: banner.animated,
            dismissible: banner.dismissible,
            variant_class: banner.variant_class.clone(),
            show_background: banner.show_background,
            grid_size: banner.grid_size,
            grid_line_color: banner.grid_line_color.clone(),
            orbs: banner.orbs.clone(),
            show_frame: banner.show_frame,
        }
    }
}
