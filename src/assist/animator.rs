use std::time::Duration;

use super::ScrollHost;

/// Animation time spent per viewport height of distance.
const DEFAULT_PER_VIEWPORT: Duration = Duration::from_millis(100);
/// Shortest animation, so small hops stay visible.
const DEFAULT_MIN_DURATION: Duration = Duration::from_millis(200);
/// Longest animation, bounding the wait for far jumps.
const DEFAULT_MAX_DURATION: Duration = Duration::from_millis(4000);

/// Speed settings for eased scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTuning {
    pub per_viewport: Duration,
    pub min_duration: Duration,
    pub max_duration: Duration,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            per_viewport: DEFAULT_PER_VIEWPORT,
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl AnimationTuning {
    /// Duration of a scroll covering `distance` on a viewport of
    /// `viewport_height`, clamped to `[min_duration, max_duration]`.
    ///
    /// A viewport without height maps to the maximum duration.
    #[expect(
        clippy::float_arithmetic,
        reason = "duration scales with the viewport-relative distance"
    )]
    #[must_use]
    pub fn duration_for(&self, distance: f64, viewport_height: f64) -> Duration {
        let max_duration = self.max_duration.max(self.min_duration);
        if viewport_height.is_nan() || viewport_height <= 0.0 || !distance.is_finite() {
            return max_duration;
        }

        let min_us = self.min_duration.as_micros() as f64;
        let max_us = max_duration.as_micros() as f64;
        let per_viewport_us = self.per_viewport.as_micros() as f64;
        let micros = (distance.abs() / viewport_height * per_viewport_us)
            .round()
            .clamp(min_us, max_us);
        Duration::from_micros(micros as u64)
    }
}

/// Quintic ease-out: fast start, smooth deceleration into the target.
#[expect(clippy::float_arithmetic, reason = "easing curve")]
#[must_use]
pub fn ease_out_quint(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

/// Outcome of asking the animator to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStart {
    /// Already at the target; nothing to animate.
    Arrived,
    Animating { duration: Duration },
    /// Another animation is still in flight.
    Busy,
}

/// Signalled once when an animation reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Completion;

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f64,
    distance: f64,
    duration: Duration,
    started_at: Option<Duration>,
}

impl Animation {
    #[expect(clippy::float_arithmetic, reason = "interpolated scroll offset")]
    fn position(&self, progress: f64) -> f64 {
        self.from + self.distance * ease_out_quint(progress)
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        elapsed.div_duration_f64(self.duration).min(1.0)
    }
}

/// Frame-stepped eased scrolling. At most one animation runs at a time; the
/// frame driver calls [`Animator::step`] with a monotonic timestamp.
#[derive(Debug, Default)]
pub struct Animator {
    tuning: AnimationTuning,
    active: Option<Animation>,
}

impl Animator {
    #[must_use]
    pub const fn new(tuning: AnimationTuning) -> Self {
        Self {
            tuning,
            active: None,
        }
    }

    #[must_use]
    pub const fn tuning(&self) -> AnimationTuning {
        self.tuning
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Starts an eased scroll from the host's current offset to `target`.
    ///
    /// The host is not moved here; the first [`Animator::step`] pins the
    /// animation clock and later steps move the host.
    #[expect(clippy::float_arithmetic, reason = "scroll distance")]
    pub fn scroll_to<H: ScrollHost + ?Sized>(&mut self, host: &H, target: f64) -> ScrollStart {
        if self.active.is_some() {
            return ScrollStart::Busy;
        }

        let from = host.scroll_offset();
        let distance = target - from;
        if distance.abs() < f64::EPSILON {
            return ScrollStart::Arrived;
        }

        let duration = self.tuning.duration_for(distance, host.viewport_height());
        self.active = Some(Animation {
            from,
            distance,
            duration,
            started_at: None,
        });
        tracing::debug!(from, target, ?duration, "Scroll animation started");
        ScrollStart::Animating { duration }
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns [`Completion`] on the frame that lands on the target; the
    /// animator is idle again afterwards.
    pub fn step<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: Duration,
    ) -> Option<Completion> {
        let animation = self.active.as_mut()?;
        let started_at = *animation.started_at.get_or_insert(now);
        let progress = animation.progress(now.saturating_sub(started_at));
        host.scroll_to(animation.position(progress));

        if progress < 1.0 {
            return None;
        }
        self.active = None;
        Some(Completion)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AnimationTuning, Animator, Completion, ScrollStart, ease_out_quint};
    use crate::assist::ScrollHost;

    struct Page {
        offset: f64,
        viewport: f64,
    }

    impl ScrollHost for Page {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn scroll_to(&mut self, offset: f64) {
            self.offset = offset;
        }
    }

    #[expect(clippy::float_arithmetic, reason = "test tolerance")]
    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn ease_out_quint_hits_endpoints_and_decelerates() {
        assert!(close(ease_out_quint(0.0), 0.0));
        assert!(close(ease_out_quint(1.0), 1.0));
        assert!(close(ease_out_quint(0.5), 0.968_75));
        assert!(ease_out_quint(0.2) > 0.2);
        assert!(close(ease_out_quint(3.0), 1.0));
    }

    #[test]
    fn duration_scales_with_viewport_and_clamps() {
        let tuning = AnimationTuning::default();
        assert_eq!(tuning.duration_for(400.0, 800.0), Duration::from_millis(200));
        assert_eq!(tuning.duration_for(-1800.0, 800.0), Duration::from_millis(225));
        assert_eq!(tuning.duration_for(8000.0, 100.0), Duration::from_millis(4000));
        assert_eq!(tuning.duration_for(5000.0, 0.0), Duration::from_millis(4000));
    }

    #[test]
    fn zero_distance_arrives_without_busy() {
        let page = Page {
            offset: 300.0,
            viewport: 800.0,
        };
        let mut animator = Animator::default();
        assert_eq!(animator.scroll_to(&page, 300.0), ScrollStart::Arrived);
        assert!(!animator.is_busy());
    }

    #[test]
    fn step_moves_host_and_completes_once() -> Result<(), String> {
        let mut page = Page {
            offset: 0.0,
            viewport: 800.0,
        };
        let mut animator = Animator::default();
        let start = animator.scroll_to(&page, 1800.0);
        assert_eq!(
            start,
            ScrollStart::Animating {
                duration: Duration::from_millis(225)
            }
        );
        assert!(animator.is_busy());
        assert_eq!(animator.scroll_to(&page, 10.0), ScrollStart::Busy);

        let base = Duration::from_secs(5);
        assert_eq!(animator.step(&mut page, base), None);
        assert!(close(page.offset, 0.0));

        assert_eq!(animator.step(&mut page, base.saturating_add(Duration::from_millis(100))), None);
        if !(page.offset > 900.0 && page.offset < 1800.0) {
            return Err(format!("unexpected mid-flight offset {}", page.offset));
        }

        let done = animator.step(&mut page, base.saturating_add(Duration::from_millis(300)));
        assert_eq!(done, Some(Completion));
        assert!(close(page.offset, 1800.0));
        assert!(!animator.is_busy());
        assert_eq!(animator.step(&mut page, base.saturating_add(Duration::from_millis(400))), None);
        Ok(())
    }
}
