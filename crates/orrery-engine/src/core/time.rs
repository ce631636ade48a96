/// Fixed timestep accumulator.
/// Ensures simulation steps run at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // Hidden tabs report huge or negative deltas; ignore the sign.
        self.accumulator += frame_dt.max(0.0);
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Simulated milliseconds added per reference frame at speed 1.0.
pub const BASE_STEP_MS: f64 = 16.0;
/// Wall-clock length of one reference frame, in seconds.
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;
/// Upper bound for the speed multiplier.
pub const MAX_SPEED: f64 = 5.0;

/// Monotonic simulated-time accumulator driving orbital motion.
///
/// Every reference frame of wall time adds `BASE_STEP_MS * speed` simulated
/// milliseconds. Speed is kept in `[0, MAX_SPEED]`; zero freezes the clock.
/// There is no way to rewind or reset it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    time: f64,
    speed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self { time: 0.0, speed: 1.0 }
    }

    /// Simulated time in milliseconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_nan() { 0.0 } else { speed.clamp(0.0, MAX_SPEED) };
    }

    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Advance by `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        self.time += BASE_STEP_MS * self.speed * (dt / REFERENCE_FRAME_SECS);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
