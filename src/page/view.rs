use crate::assist::ScrollHost;

/// Scroll position over a document, measured in rows.
///
/// Offsets clamp to `[0, content_rows - viewport_rows]` the way a browser
/// clamps `scrollY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView {
    offset: f64,
    viewport_rows: usize,
    content_rows: usize,
}

impl PageView {
    #[must_use]
    pub fn new(content_rows: usize, viewport_rows: usize) -> Self {
        Self {
            offset: 0.0,
            viewport_rows,
            content_rows,
        }
    }

    #[must_use]
    pub const fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Updates the visible height, e.g. after a terminal resize.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.offset = self.clamp(self.offset);
    }

    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.content_rows.saturating_sub(self.viewport_rows) as f64
    }

    /// First visible row.
    #[must_use]
    pub fn top_row(&self) -> usize {
        self.offset.round() as usize
    }

    #[expect(clippy::float_arithmetic, reason = "relative scroll")]
    pub fn scroll_by(&mut self, rows: f64) {
        self.offset = self.clamp(self.offset + rows);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step());
    }

    #[expect(clippy::float_arithmetic, reason = "relative scroll")]
    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_step());
    }

    pub fn home(&mut self) {
        self.offset = 0.0;
    }

    pub fn end(&mut self) {
        self.offset = self.max_offset();
    }

    fn page_step(&self) -> f64 {
        self.viewport_rows.saturating_sub(1).max(1) as f64
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollHost for PageView {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_rows as f64
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }
}
