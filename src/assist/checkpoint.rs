use std::fmt;

use serde::Serialize;

/// A recorded vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Checkpoint(u64);

impl Checkpoint {
    #[must_use]
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }

    /// Rounds a live scroll offset to the nearest whole unit. Negative and
    /// non-finite offsets collapse to the top of the page.
    #[must_use]
    pub fn from_scroll_offset(offset: f64) -> Self {
        if !offset.is_finite() || offset <= 0.0 {
            return Self(0);
        }
        Self(offset.round() as u64)
    }

    #[must_use]
    pub const fn offset(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn as_scroll_offset(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Checkpoint;

    #[test]
    fn from_scroll_offset_rounds_and_clamps() {
        assert_eq!(Checkpoint::from_scroll_offset(399.6), Checkpoint::new(400));
        assert_eq!(Checkpoint::from_scroll_offset(12.4), Checkpoint::new(12));
        assert_eq!(Checkpoint::from_scroll_offset(-3.0), Checkpoint::new(0));
        assert_eq!(Checkpoint::from_scroll_offset(f64::NAN), Checkpoint::new(0));
    }
}
