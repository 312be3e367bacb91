//! Tech Frame Component
//!
//! Thin frame lines and corner accents laid over a container, like the
//! bezel markings on a stereo faceplate. Colors come from the caller's
//! classes; the frame only handles placement.

use dioxus::prelude::*;

/// One decorative piece of the frame
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameSegment {
    /// Hairline along the bottom edge
    BottomLine,
    /// Hairline down the left edge
    LeftLine,
    /// Hairline down the right edge
    RightLine,
    /// Rounded accent in the top-left corner
    TopLeftCorner,
    /// Rounded accent in the top-right corner
    TopRightCorner,
    /// Rounded accent in the bottom-left corner
    BottomLeftCorner,
    /// Rounded accent in the bottom-right corner
    BottomRightCorner,
}

impl FrameSegment {
    /// Returns the placement classes for this segment
    pub fn class(&self) -> &'static str {
        match self {
            FrameSegment::BottomLine => "tech-frame-segment frame-line frame-line-bottom",
            FrameSegment::LeftLine => "tech-frame-segment frame-line frame-line-left",
            FrameSegment::RightLine => "tech-frame-segment frame-line frame-line-right",
            FrameSegment::TopLeftCorner => "tech-frame-segment frame-corner frame-corner-tl",
            FrameSegment::TopRightCorner => "tech-frame-segment frame-corner frame-corner-tr",
            FrameSegment::BottomLeftCorner => "tech-frame-segment frame-corner frame-corner-bl",
            FrameSegment::BottomRightCorner => "tech-frame-segment frame-corner frame-corner-br",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            FrameSegment::TopLeftCorner
                | FrameSegment::TopRightCorner
                | FrameSegment::BottomLeftCorner
                | FrameSegment::BottomRightCorner
        )
    }
}

/// Which parts of the frame to draw
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameToggles {
    pub bottom_line: bool,
    pub side_lines: bool,
    pub corners: bool,
}

impl Default for FrameToggles {
    fn default() -> Self {
        Self {
            bottom_line: true,
            side_lines: true,
            corners: true,
        }
    }
}

impl FrameToggles {
    /// Segments to render, in paint order
    pub fn segments(&self) -> Vec<FrameSegment> {
        let mut segments = Vec::with_capacity(7);
        if self.bottom_line {
            segments.push(FrameSegment::BottomLine);
        }
        if self.side_lines {
            segments.extend([FrameSegment::LeftLine, FrameSegment::RightLine]);
        }
        if self.corners {
            segments.extend([
                FrameSegment::TopLeftCorner,
                FrameSegment::TopRightCorner,
                FrameSegment::BottomLeftCorner,
                FrameSegment::BottomRightCorner,
            ]);
        }
        segments
    }
}

/// Properties for the TechFrame component
#[derive(Clone, PartialEq, Props)]
pub struct TechFrameProps {
    /// Draw the thin bottom line
    #[props(default = true)]
    pub show_bottom_line: bool,
    /// Draw the thin left and right lines
    #[props(default = true)]
    pub show_side_lines: bool,
    /// Draw the four corner accents
    #[props(default = true)]
    pub show_corners: bool,
    /// Classes for the bottom line
    #[props(default)]
    pub bottom_line_class: Option<String>,
    /// Classes for both side lines
    #[props(default)]
    pub side_line_class: Option<String>,
    /// Classes for every corner accent
    #[props(default)]
    pub corner_class: Option<String>,
    /// Optional additional CSS classes for the container
    #[props(default)]
    pub class: Option<String>,
}

impl TechFrameProps {
    fn toggles(&self) -> FrameToggles {
        FrameToggles {
            bottom_line: self.show_bottom_line,
            side_lines: self.show_side_lines,
            corners: self.show_corners,
        }
    }

    fn segment_class(&self, segment: FrameSegment) -> String {
        let extra = match segment {
            FrameSegment::BottomLine => &self.bottom_line_class,
            FrameSegment::LeftLine | FrameSegment::RightLine => &self.side_line_class,
            _ => &self.corner_class,
        };
        super::cn([segment.class(), extra.as_deref().unwrap_or("")])
    }
}

/// Overlays frame lines and corner accents on the nearest positioned parent
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "relative glass-card",
///         TechFrame {
///             show_side_lines: false,
///             corner_class: "frame-accent-electric".to_string(),
///         }
///     }
/// }
/// ```
#[component]
pub fn TechFrame(props: TechFrameProps) -> Element {
    let container_class = super::cn(["tech-frame", props.class.as_deref().unwrap_or("")]);
    let segments = props.toggles().segments();

    rsx! {
        div { class: "{container_class}", "aria-hidden": "true",
            for segment in segments {
                div { class: props.segment_class(segment) }
            }
        }
    }
}
