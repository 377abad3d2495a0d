/// Simulation clock driven by host frame deltas.
///
/// Unlike a wall clock, it only moves when the owner calls `advance`,
/// so a paused simulation keeps its elapsed time frozen and resumes
/// exactly where it stopped.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Delta of the most recent advance, in seconds.
    delta: f32,
    /// Total advanced time, in seconds. Kept in f64 so long sessions
    /// do not lose frame deltas to rounding.
    elapsed: f64,
    /// Number of advances so far.
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame delta.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.delta = dt;
        self.elapsed += dt as f64;
        self.frames += 1;
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Host-side frame timing handed to the app each tick.
/// `now` keeps running while the simulation clock is paused.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Seconds since the runner started.
    pub now: f64,
}

impl FrameTime {
    pub fn step(&mut self, dt: f32) {
        self.dt = dt.max(0.0);
        self.now += self.dt as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates() {
        let mut clock = Clock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-6);
        assert!((clock.delta() - 0.25).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.advance(-3.0);
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn thirty_hour_session_keeps_pace() {
        let dt = 1.0_f32 / 60.0;
        let frames = 30 * 3600 * 60;
        let mut clock = Clock::new();
        for _ in 0..frames {
            clock.advance(dt);
        }
        let expected = frames as f64 * dt as f64;
        assert!((clock.elapsed() - expected).abs() < 1e-3, "elapsed={}", clock.elapsed());

        // A further minute of frames still adds a minute.
        let before = clock.elapsed();
        for _ in 0..3600 {
            clock.advance(dt);
        }
        assert!((clock.elapsed() - before - 60.0).abs() < 1e-3);
    }

    #[test]
    fn frame_time_runs_independently() {
        let mut frame = FrameTime::default();
        frame.step(1.0 / 60.0);
        frame.step(1.0 / 60.0);
        assert!((frame.now - 2.0 / 60.0).abs() < 1e-6);
    }
}
