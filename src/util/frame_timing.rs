use web_time::{Duration, Instant};

/// Gaps longer than this are treated as a stall rather than elapsed time.
const LAG_THRESHOLD: Duration = Duration::from_millis(500);

/// Delta reported in place of a stalled gap.
const LAG_DELTA: Duration = Duration::from_millis(33);

/// Per-frame clock reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds the timelines should advance this frame.
    pub delta: f32,
    /// Wall-clock seconds since the clock started.
    pub elapsed: f32,
}

/// Frame clock with lag smoothing: a gap over 500 ms (window dragged,
/// minimized, debugger) advances by 33 ms, shorter gaps advance in full.
#[derive(Debug)]
pub struct FrameTiming {
    start: Instant,
    last_frame: Instant,
}

impl FrameTiming {
    /// Start a new clock now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
        }
    }

    /// Advance the clock to now.
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let gap = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta = if gap > LAG_THRESHOLD { LAG_DELTA } else { gap };
        FrameTick {
            delta: delta.as_secs_f32(),
            elapsed: now.duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
