//! Property-based tests for the decorative layout functions
//!
//! Uses proptest to check the counting and coercion rules of the grid,
//! orb and frame primitives.

use proptest::prelude::*;
use y2k_ui::{
    grid_cell_size, grid_layer_style, resolve_variant_class, BannerState, BannerVariant,
    FrameToggles, Orb, DEFAULT_ORB_SIZE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// CSS-ish color strings, including junk that must pass through untouched
fn color_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("#[0-9a-f]{6}").expect("valid regex"),
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("rgba({r},{g},{b},0.2)")),
        prop::string::string_regex("[a-z-]{1,16}").expect("valid regex"),
    ]
}

fn orb_strategy() -> impl Strategy<Value = Orb> {
    (
        prop::string::string_regex("(top|left|right|bottom): [0-9]{1,3}px;").expect("valid regex"),
        prop::option::of(0.0f64..512.0),
        color_strategy(),
        color_strategy(),
    )
        .prop_map(|(position, size, from, to)| {
            let orb = Orb::new(position).with_colors(from, to);
            match size {
                Some(size) => orb.with_size(size),
                None => orb,
            }
        })
}

fn variant_strategy() -> impl Strategy<Value = BannerVariant> {
    prop::sample::select(BannerVariant::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The grid tiles at exactly the requested size, in both directions
    #[test]
    fn grid_tiles_at_requested_size(size in 0.5f64..500.0, color in color_strategy()) {
        prop_assert_eq!(grid_cell_size(size), size);
        let style = grid_layer_style(size, &color);
        let expected = format!("background-size: {size}px {size}px;");
        prop_assert!(style.contains(&expected));
        prop_assert_eq!(style.matches("background-size").count(), 1);
        let horizontal = format!("linear-gradient({color} 1px, transparent 1px)");
        let vertical = format!("linear-gradient(90deg, {color} 1px, transparent 1px)");
        prop_assert!(style.contains(&horizontal));
        prop_assert!(style.contains(&vertical));
    }

    /// Non-positive sizes never reach the stylesheet
    #[test]
    fn grid_rejects_non_positive(size in -500.0f64..=0.0) {
        prop_assert!(grid_cell_size(size) > 0.0);
    }

    /// Each orb carries its own size and colors
    #[test]
    fn orbs_keep_their_own_styles(orbs in prop::collection::vec(orb_strategy(), 0..12)) {
        let styles: Vec<String> = orbs.iter().map(Orb::inline_style).collect();
        prop_assert_eq!(styles.len(), orbs.len());
        for (orb, style) in orbs.iter().zip(&styles) {
            let diameter = orb.diameter();
            prop_assert!(style.starts_with(orb.position.as_str()));
            let expected_width = format!("width: {diameter}px;");
            prop_assert!(style.contains(&expected_width));
            prop_assert!(style.contains(orb.from_color.as_str()));
            prop_assert!(style.contains(orb.to_color.as_str()));
            if orb.size.is_none() {
                prop_assert_eq!(diameter, DEFAULT_ORB_SIZE);
            }
        }
    }

    /// Frame segment count is 1 per bottom line, 2 for sides, 4 for corners
    #[test]
    fn frame_segment_count(bottom_line: bool, side_lines: bool, corners: bool) {
        let segments = FrameToggles { bottom_line, side_lines, corners }.segments();
        let expected = usize::from(bottom_line) + 2 * usize::from(side_lines) + 4 * usize::from(corners);
        prop_assert_eq!(segments.len(), expected);
        prop_assert_eq!(segments.iter().filter(|s| s.is_corner()).count(), 4 * usize::from(corners));
    }

    /// An override always wins over the variant table
    #[test]
    fn override_always_wins(variant in variant_strategy(), class in "[a-z-]{0,24}") {
        prop_assert_eq!(resolve_variant_class(variant, Some(class.as_str())), class.as_str());
        prop_assert_eq!(resolve_variant_class(variant, None), variant.class());
    }

    /// However many times dismiss is pressed, only the first one counts
    #[test]
    fn dismissal_fires_once(presses in 1usize..20) {
        let mut state = BannerState::default();
        let transitions = (0..presses).filter(|_| state.dismiss()).count();
        prop_assert_eq!(transitions, 1);
        prop_assert!(state.is_dismissed());
    }
}
