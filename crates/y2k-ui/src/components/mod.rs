//! Reusable UI components
//!
//! Decorative primitives plus the small controls the banner is built from.
//! All styling goes through class names defined in `theme::GLOBAL_STYLES`.

mod announcement_banner;
mod badge;
mod button;
mod floating_orbs;
mod grid_pattern;
mod tech_frame;

pub use announcement_banner::*;
pub use badge::*;
pub use button::*;
pub use floating_orbs::*;
pub use grid_pattern::*;
pub use tech_frame::*;

/// Joins class fragments with single spaces, skipping empty ones.
///
/// ```rust
/// use y2k_ui::cn;
///
/// assert_eq!(cn(["pill", "", "selected"]), "pill selected");
/// ```
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
