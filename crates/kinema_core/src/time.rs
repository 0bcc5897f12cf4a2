use std::time::{Duration, Instant};

/// Millisecond timestamp handed to the animation engine on every tick.
pub type Timestamp = f64;

/// Host-side frame clock.
///
/// The engine never reads wall-clock time itself; a host ticks this clock
/// once per frame and forwards [`FrameClock::now_ms`] to the registry.
pub struct FrameClock {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a new clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Samples the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Advances the clock by a fixed step instead of sampling the wall clock.
    ///
    /// Used by headless hosts and replays that need deterministic timestamps.
    pub fn step(&mut self, dt: Duration) {
        self.delta = dt;
        self.elapsed += dt;
        self.last_update = self.start_time + self.elapsed;
        self.frame_count += 1;
    }

    /// Elapsed time at the last tick, in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> Timestamp {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Duration of the last frame, in seconds.
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_deterministic() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.now_ms(), 0.0);

        clock.step(Duration::from_millis(16));
        clock.step(Duration::from_millis(16));
        assert_eq!(clock.frame_count, 2);
        assert!((clock.now_ms() - 32.0).abs() < 1e-9);
        assert!((clock.dt_seconds() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn tick_is_monotonic() {
        let mut clock = FrameClock::new();
        clock.tick();
        let first = clock.now_ms();
        clock.tick();
        assert!(clock.now_ms() >= first);
    }

    #[test]
    fn tick_reports_frame_delta() {
        let mut clock = FrameClock::new();
        clock.tick();
        std::thread::sleep(Duration::from_millis(2));
        clock.tick();
        assert_eq!(clock.frame_count, 2);
        assert!(clock.dt_seconds() >= 0.002);
        assert!(clock.elapsed >= clock.delta);
    }
}
