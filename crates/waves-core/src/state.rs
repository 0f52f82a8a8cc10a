//! Plain value types passed between the web frontend, the driver and the renderer.
//!
//! None of these reference platform APIs; the frontend fills [`PageMetrics`]
//! from the DOM and the renderer consumes [`FrameParams`] produced by the driver.

/// Scroll position and page extents as last reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMetrics {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Largest of the document size measurements the host can see.
    pub document_height: f64,
}

impl PageMetrics {
    pub fn new(scroll_offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    /// True once the viewport bottom is within `threshold` of the document end.
    #[inline]
    pub fn is_at_bottom(&self, threshold: f64) -> bool {
        self.scroll_offset + self.viewport_height >= self.document_height - threshold
    }
}

/// Everything the renderer needs from the animation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub time: f64,
    pub bottom_gap: f64,
    /// Intro reveal progress in \[0, 1\]; `None` once the intro is over.
    pub reveal: Option<f64>,
}
