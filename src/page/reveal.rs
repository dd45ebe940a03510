use super::Section;

/// Share of a section that must be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Reveals sections the first time enough of them scrolls into view. A
/// revealed section is never hidden again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(section_count: usize, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: vec![false; section_count],
        }
    }

    /// Checks every unrevealed section against the visible rows
    /// `[top, top + height)` and returns how many were newly revealed.
    pub fn observe(&mut self, sections: &[Section], top: usize, height: usize) -> usize {
        let bottom = top.saturating_add(height);
        let mut newly_revealed = 0usize;
        for (section, revealed) in sections.iter().zip(self.revealed.iter_mut()) {
            if *revealed || section.is_empty() {
                continue;
            }
            let visible = section
                .end
                .min(bottom)
                .saturating_sub(section.start.max(top));
            if visible > 0 && visible_ratio(visible, section.len()) >= self.threshold {
                *revealed = true;
                newly_revealed = newly_revealed.saturating_add(1);
            }
        }
        if newly_revealed > 0 {
            tracing::debug!(newly_revealed, "Sections revealed");
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealed.get(section).copied().unwrap_or(true)
    }
}

#[expect(clippy::float_arithmetic, reason = "intersection ratio")]
fn visible_ratio(visible: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    visible as f64 / total as f64
}
