//! Horizontal drag tracking.
//!
//! Pointer samples are fed in while a drag is active; the release reports the
//! total offset and the release velocity, which is what
//! [`crate::carousel::classify_swipe`] consumes.

use tracing::trace;

/// Samples older than this, relative to the newest one, do not count towards
/// the release velocity.
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Offset and velocity of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Distance from the drag start, in px. Negative is leftwards.
    pub offset: f64,
    /// Velocity at release, in px/s. Negative is leftwards.
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    x: f64,
    at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        origin: f64,
        // newest last
        recent: Vec<Sample>,
    },
}

/// Two-state drag machine: idle, or dragging with live samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragTracker {
    phase: Phase,
}

impl DragTracker {
    /// Idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// True between [`DragTracker::begin`] and release or cancel.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Starts a drag at pointer position `x`. Restarts an active drag.
    pub fn begin(&mut self, x: f64, at_ms: f64) {
        self.begin_from(x, at_ms, 0.0);
    }

    /// Starts a drag on an element already displaced by `offset`, e.g. one
    /// still snapping back. Reported offsets continue from `offset`.
    pub fn begin_from(&mut self, x: f64, at_ms: f64, offset: f64) {
        self.phase = Phase::Dragging {
            origin: x - offset,
            recent: vec![Sample { x, at_ms }],
        };
    }

    /// Records a pointer move and returns the live offset, or `None` if idle.
    pub fn sample(&mut self, x: f64, at_ms: f64) -> Option<f64> {
        let Phase::Dragging { origin, recent } = &mut self.phase else {
            return None;
        };
        recent.push(Sample { x, at_ms });
        recent.retain(|s| at_ms - s.at_ms <= VELOCITY_WINDOW_MS);
        let offset = x - *origin;
        trace!(offset, "drag sample");
        Some(offset)
    }

    /// Live offset without recording a sample.
    pub fn offset(&self) -> f64 {
        match &self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging { origin, recent } => {
                recent.last().map(|s| s.x - origin).unwrap_or_default()
            },
        }
    }

    /// Ends the drag at `x` and reports it. `None` if no drag was active.
    pub fn release(&mut self, x: f64, at_ms: f64) -> Option<DragRelease> {
        self.sample(x, at_ms)?;
        let Phase::Dragging { origin, recent } = std::mem::take(&mut self.phase) else {
            return None;
        };
        let velocity = match (recent.first(), recent.last()) {
            (Some(first), Some(last)) => {
                let elapsed_ms = last.at_ms - first.at_ms;
                if elapsed_ms > 0.0 {
                    (last.x - first.x) * 1000.0 / elapsed_ms
                } else {
                    0.0
                }
            },
            _ => 0.0,
        };
        Some(DragRelease {
            offset: x - origin,
            velocity,
        })
    }

    /// Abandons an active drag without reporting it.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_tracker_ignores_samples_and_release() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.sample(10.0, 5.0), None);
        assert_eq!(tracker.release(10.0, 5.0), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_reports_offset_and_recent_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(500.0, 0.0);
        // slow start, outside the velocity window by release time
        tracker.sample(495.0, 100.0);
        tracker.sample(480.0, 200.0);
        tracker.sample(440.0, 250.0);

        let release = tracker.release(400.0, 300.0).expect("active drag");
        assert_eq!(release.offset, -100.0);
        // 480 -> 400 over 100ms
        assert_eq!(release.velocity, -800.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn zero_elapsed_release_has_no_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(0.0, 42.0);
        let release = tracker.release(30.0, 42.0).expect("active drag");
        assert_eq!(release, DragRelease { offset: 30.0, velocity: 0.0 });
    }

    #[test]
    fn grab_during_snap_back_continues_from_live_offset() {
        let mut tracker = DragTracker::new();
        tracker.begin_from(300.0, 0.0, -40.0);
        assert_eq!(tracker.offset(), -40.0);
        assert_eq!(tracker.sample(290.0, 16.0), Some(-50.0));

        let release = tracker.release(280.0, 32.0).expect("active drag");
        assert_eq!(release.offset, -60.0);
        // velocity ignores the inherited offset: 300 -> 280 over 32ms
        assert_eq!(release.velocity, -625.0);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tracker = DragTracker::new();
        tracker.begin(0.0, 0.0);
        assert_eq!(tracker.sample(25.0, 16.0), Some(25.0));
        assert_eq!(tracker.offset(), 25.0);
        tracker.cancel();
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.release(30.0, 32.0), None);
    }
}
