//! Grid Pattern Component
//!
//! A tiled line grid drawn with two CSS gradients. Used as an ambient
//! backdrop behind banners and cards.

use dioxus::prelude::*;

/// Default grid cell size in pixels
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default grid line color (translucent white)
pub const DEFAULT_GRID_LINE_COLOR: &str = "rgba(255,255,255,0.2)";

/// Coerces a requested cell size into one the browser can tile.
///
/// Zero, negative and non-finite sizes fall back to [`DEFAULT_GRID_SIZE`].
pub fn grid_cell_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        DEFAULT_GRID_SIZE
    }
}

/// Inline style for the grid layer: one horizontal and one vertical
/// gradient of 1px lines, repeated every `size` pixels in both directions.
pub fn grid_layer_style(size: f64, line_color: &str) -> String {
    let size = grid_cell_size(size);
    format!(
        "width: 100%; height: 100%; \
         background-image: linear-gradient({line_color} 1px, transparent 1px), \
         linear-gradient(90deg, {line_color} 1px, transparent 1px); \
         background-size: {size}px {size}px;"
    )
}

/// Properties for the GridPattern component
#[derive(Clone, PartialEq, Props)]
pub struct GridPatternProps {
    /// Grid cell size in pixels (default: 20)
    #[props(default = DEFAULT_GRID_SIZE)]
    pub size: f64,
    /// CSS color for the grid lines (default: translucent white)
    #[props(default = DEFAULT_GRID_LINE_COLOR.to_string())]
    pub line_color: String,
    /// Optional additional CSS classes for the wrapper
    #[props(default)]
    pub class: Option<String>,
    /// Optional inline style for the wrapper
    #[props(default)]
    pub style: Option<String>,
}

/// Renders a full-bleed, non-interactive square grid
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "relative",
///         GridPattern { size: 24.0, line_color: "rgba(0,102,255,0.15)".to_string() }
///         // Content goes on top
///     }
/// }
/// ```
#[component]
pub fn GridPattern(props: GridPatternProps) -> Element {
    let wrapper_class = super::cn(["grid-pattern", props.class.as_deref().unwrap_or("")]);
    let wrapper_style = props.style.as_deref().unwrap_or("");
    let layer_style = grid_layer_style(props.size, &props.line_color);

    rsx! {
        div {
            class: "{wrapper_class}",
            style: "{wrapper_style}",
            "aria-hidden": "true",
            div { class: "grid-pattern-layer", style: "{layer_style}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_sizes_pass_through() {
        assert_eq!(grid_cell_size(32.0), 32.0);
        assert_eq!(grid_cell_size(0.5), 0.5);
    }

    #[test]
    fn degenerate_sizes_use_default() {
        assert_eq!(grid_cell_size(0.0), DEFAULT_GRID_SIZE);
        assert_eq!(grid_cell_size(-4.0), DEFAULT_GRID_SIZE);
        assert_eq!(grid_cell_size(f64::NAN), DEFAULT_GRID_SIZE);
        assert_eq!(grid_cell_size(f64::INFINITY), DEFAULT_GRID_SIZE);
    }

    #[test]
    fn layer_style_tiles_both_directions() {
        let style = grid_layer_style(20.0, DEFAULT_GRID_LINE_COLOR);
        assert!(style.contains("background-size: 20px 20px;"));
        assert!(style.contains("linear-gradient(rgba(255,255,255,0.2) 1px, transparent 1px)"));
        assert!(style.contains("linear-gradient(90deg, rgba(255,255,255,0.2) 1px, transparent 1px)"));
    }

    #[test]
    fn layer_style_passes_color_through() {
        let style = grid_layer_style(10.0, "not-a-color");
        assert_eq!(style.matches("not-a-color").count(), 2);
    }
}
