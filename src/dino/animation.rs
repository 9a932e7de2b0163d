//! Time-driven animation values for the runner.
//!
//! Both animations are advanced explicitly with the elapsed milliseconds of
//! each frame; nothing here reads a clock.

/// Easing curves used by the jump arc and the obstacle sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic Bézier (0.42, 0, 1, 1).
    EaseIn,
    /// Cubic Bézier (0, 0, 0.58, 1).
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic Bézier easing with control points
/// (x1, y1) and (x2, y2) at horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton first, bisection when the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let cx = bezier(x1, x2, s);
        if (cx - x).abs() < 1e-6 {
            break;
        }
        if cx < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

/// One-shot jump arc: eases in from its starting height to the peak (1.0),
/// then eases out back to the ground (0.0).
#[derive(Debug, Clone)]
pub struct JumpAnimation {
    value: f32,
    start_value: f32,
    elapsed_ms: u64,
    running: bool,
    peak_ms: u64,
    duration_ms: u64,
}

impl JumpAnimation {
    pub fn new(duration_ms: u64) -> Self {
        let duration_ms = duration_ms.max(1);
        Self {
            value: 0.0,
            start_value: 0.0,
            elapsed_ms: 0,
            running: false,
            peak_ms: duration_ms / 2,
            duration_ms,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) the arc from the current height.
    pub fn start(&mut self) {
        self.start_value = self.value;
        self.elapsed_ms = 0;
        self.running = true;
    }

    /// Halt in place. The current value is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Jump to `value` without easing, cancelling any running arc.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.start_value = self.value;
        self.elapsed_ms = 0;
        self.running = false;
    }

    /// Advance by `dt_ms`. Returns true if the value changed.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        if !self.running {
            return false;
        }

        let before = self.value;
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.value = self.sample(self.elapsed_ms);

        if self.elapsed_ms >= self.duration_ms {
            self.value = 0.0;
            self.running = false;
        }

        self.value != before
    }

    fn sample(&self, t: u64) -> f32 {
        if t < self.peak_ms {
            let frac = t as f32 / self.peak_ms as f32;
            self.start_value + (1.0 - self.start_value) * Easing::EaseIn.transform(frac)
        } else {
            let frac = (t - self.peak_ms) as f32 / (self.duration_ms - self.peak_ms) as f32;
            1.0 - Easing::EaseOut.transform(frac)
        }
    }
}

/// Infinitely repeating linear sweep from its start value to 1.0.
#[derive(Debug, Clone)]
pub struct ObstacleAnimation {
    value: f32,
    start_value: f32,
    running: bool,
    /// Time into the current iteration, delay included.
    phase_ms: u64,
    first_cycle: bool,
    cycle_ms: u64,
    delay_ms: u64,
    delay_each_cycle: bool,
}

impl ObstacleAnimation {
    pub fn new(cycle_ms: u64, delay_ms: u64, delay_each_cycle: bool) -> Self {
        Self {
            value: 0.0,
            start_value: 0.0,
            running: false,
            phase_ms: 0,
            first_cycle: true,
            cycle_ms: cycle_ms.max(1),
            delay_ms,
            delay_each_cycle,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin sweeping from the current value. The delay runs first.
    pub fn start(&mut self) {
        self.start_value = self.value;
        self.phase_ms = 0;
        self.first_cycle = true;
        self.running = true;
    }

    /// Halt in place. The current value is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn snap_to(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.start_value = self.value;
        self.phase_ms = 0;
        self.first_cycle = true;
        self.running = false;
    }

    fn current_delay(&self) -> u64 {
        if self.first_cycle || self.delay_each_cycle {
            self.delay_ms
        } else {
            0
        }
    }

    /// Advance by `dt_ms`. Returns true if the value changed.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        if !self.running {
            return false;
        }

        let before = self.value;
        self.phase_ms += dt_ms;

        loop {
            let span = self.current_delay() + self.cycle_ms;
            if self.phase_ms < span {
                break;
            }
            self.phase_ms -= span;
            self.first_cycle = false;
        }

        let delay = self.current_delay();
        self.value = if self.phase_ms < delay {
            self.start_value
        } else {
            let frac = (self.phase_ms - delay) as f32 / self.cycle_ms as f32;
            self.start_value + (1.0 - self.start_value) * Easing::Linear.transform(frac)
        };

        self.value != before
    }
}
