//! Y2K Tech UI Components
//!
//! This crate provides Dioxus components in the translucent, chrome-accented
//! style of early-2000s portable stereo hardware.
//!
//! ## Design Philosophy
//!
//! - **Electric Blue (#0066ff)**: Primary accents, frame lines, corners
//! - **Cyan (#00ccff)**: Glow, side lines, digital readouts
//! - **Chrome (#c0c8d8)**: Metallic surfaces and bevels
//! - **Glass**: Translucent cards with backdrop blur
//!
//! ## Decorative Layers
//!
//! Backgrounds are built from small composable primitives:
//! [`GridPattern`], [`FloatingOrbs`] and [`TechFrame`]. The
//! [`AnnouncementBanner`] stacks all three around its content.
//!
//! Inject [`theme::GLOBAL_STYLES`] once at the root of the app so the class
//! names used by the components resolve to real styles.

pub mod components;
pub mod theme;

pub use components::*;
