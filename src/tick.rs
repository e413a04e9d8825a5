use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Decides, once per display frame, whether the game is due a tick.
///
/// Time between frames is accumulated until it reaches one tick period, at
/// which point a tick fires and the accumulator starts again from zero.  Any
/// time beyond the period is dropped rather than carried into the next tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickDriver {
    period: Duration,
    accumulated: Duration,
    last_frame: Option<Instant>,
}

impl TickDriver {
    /// Create a driver firing `speed` times per second
    pub(crate) fn new(speed: NonZeroU32) -> TickDriver {
        TickDriver {
            period: Duration::from_secs(1) / speed.get(),
            accumulated: Duration::ZERO,
            last_frame: None,
        }
    }

    /// Time between ticks
    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Record a display frame happening at `now`.  Returns `true` if the game
    /// should tick.
    ///
    /// The first frame only starts the clock.
    pub(crate) fn frame_at(&mut self, now: Instant) -> bool {
        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |prev| now.saturating_duration_since(prev));
        self.last_frame = Some(now);
        self.frame(delta)
    }

    /// Record a display frame happening `delta` after the previous one.
    /// Returns `true` if the game should tick.
    pub(crate) fn frame(&mut self, delta: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(delta);
        if self.accumulated >= self.period {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
