use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MOBILE_BREAKPOINT_PX};
use crate::core::easing::clamp01;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Builds a viewport, replacing non-finite or non-positive dimensions
    /// with the defaults used before the window is first measured.
    pub fn new(width: f64, height: f64) -> Self {
        let sane = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                fallback
            }
        };
        Self {
            width: sane(width, DEFAULT_VIEWPORT_WIDTH),
            height: sane(height, DEFAULT_VIEWPORT_HEIGHT),
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }

    /// Converts a viewport-height fraction into an absolute scroll offset.
    #[inline]
    pub fn at(&self, fraction: f64) -> f64 {
        self.height * fraction
    }

    /// Region spanning two viewport-height fractions.
    #[inline]
    pub fn region(&self, (start, end): (f64, f64)) -> ScrollRegion {
        ScrollRegion::new(self.at(start), self.at(end))
    }
}

/// Clamp a raw scroll reading to a usable offset. Overscroll bounce on some
/// platforms reports negative values.
#[inline]
pub fn sanitize_scroll(scroll: f64) -> f64 {
    if scroll.is_finite() {
        scroll.max(0.0)
    } else {
        0.0
    }
}

/// A `[start, end]` scroll interval mapped onto a `0..=1` progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub start: f64,
    pub end: f64,
}

impl ScrollRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Region that starts at `start` and completes `span` pixels later.
    pub fn with_span(start: f64, span: f64) -> Self {
        Self::new(start, start + span)
    }

    /// Linear progress through the region. Empty or inverted regions act as
    /// a step at `start`.
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if !(span > 0.0) {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        clamp01((scroll - self.start) / span)
    }

    #[inline]
    pub fn contains(&self, scroll: f64) -> bool {
        scroll >= self.start && scroll < self.end
    }
}
