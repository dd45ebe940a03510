/// The scrollable surface a [`crate::assist::Session`] drives.
///
/// Offsets are measured in the host's own unit (pixels in a browser, rows in
/// a terminal) from the top of the page.
pub trait ScrollHost {
    fn scroll_offset(&self) -> f64;

    /// Height of the visible area, in the same unit as the offsets.
    fn viewport_height(&self) -> f64;

    /// Jumps to `offset` immediately, without animation.
    fn scroll_to(&mut self, offset: f64);
}
