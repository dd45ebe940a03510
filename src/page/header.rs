/// Offset past which the header switches to its shaded style.
pub const DEFAULT_SHADE_OFFSET: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// At the top of the page.
    Plain,
    /// Scrolled into the content.
    Shaded,
}

impl HeaderStyle {
    #[must_use]
    pub fn for_offset(offset: f64, shade_offset: u64) -> Self {
        if offset > shade_offset as f64 {
            Self::Shaded
        } else {
            Self::Plain
        }
    }
}
