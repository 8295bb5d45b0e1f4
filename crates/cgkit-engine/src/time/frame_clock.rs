use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots.
///
/// Delta time is clamped to `[100 µs, 250 ms]` so that animation speed stays
/// sane after a stall (window drag, debugger pause, minimise).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(last: Instant) -> Self {
        Self {
            last,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.advance_to(Instant::now())
    }

    fn advance_to(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        assert_eq!(clock.advance_to(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.advance_to(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_both_ways() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let stalled = clock.advance_to(t0 + Duration::from_secs(3));
        assert!((stalled.dt - 0.25).abs() < 1e-6);

        let same = clock.advance_to(t0 + Duration::from_secs(3));
        assert!((same.dt - 0.0001).abs() < 1e-6);
    }

    #[test]
    fn regular_frames_report_elapsed_seconds() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let ft = clock.advance_to(t0 + Duration::from_millis(20));
        assert!((ft.dt - 0.02).abs() < 1e-6);
    }
}
