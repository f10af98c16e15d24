/// Pixel geometry of the visible editing surface, read back from the
/// rendering layer after layout. The engine never measures anything itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Height of one text line.
    pub line_height: f32,
    /// Visible height of the surface.
    pub height: f32,
    /// Full height of the laid-out buffer.
    pub content_height: f32,
}

impl Viewport {
    /// Largest legal scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }
}

/// 0-indexed line containing the caret: the number of newlines before it.
pub fn caret_line(text: &str, caret: usize) -> usize {
    let caret = caret.min(text.len());
    text.as_bytes()[..caret].iter().filter(|b| **b == b'\n').count()
}

/// Scroll offset that puts `line` in the vertical middle of the viewport,
/// clamped to the scrollable range.
pub fn centered_scroll(viewport: &Viewport, line: usize) -> f32 {
    let desired = line as f32 * viewport.line_height - viewport.height / 2.0
        + viewport.line_height / 2.0;
    desired.clamp(0.0, viewport.max_scroll())
}
