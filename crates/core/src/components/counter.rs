/// Fixed duration of every counter animation.
pub const COUNT_DURATION_MS: f64 = 1200.0;

/// Per-element counter configuration, read from `data-*` attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub divisor: f64,
    pub suffix: String,
    /// At-most-once guard. Pre-marked elements are never animated.
    pub animated: bool,
}

impl Default for CounterSpec {
    fn default() -> Self {
        Self {
            target: 0.0,
            divisor: 1.0,
            suffix: String::new(),
            animated: false,
        }
    }
}

/// Ease-out-cubic: fast start, long settle.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Format an interpolated value: divisor 1 rounds to the nearest integer,
/// any other divisor renders one decimal place. The suffix is appended
/// verbatim.
pub fn format_value(raw: f64, divisor: f64, suffix: &str) -> String {
    let value = raw / divisor;
    if divisor == 1.0 {
        format!("{}{suffix}", value.round() as i64)
    } else {
        format!("{value:.1}{suffix}")
    }
}

/// Output of one animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// Set on the frame that snapped to the final value; the driver stops
    /// scheduling redraw callbacks once it sees this.
    pub done: bool,
}

/// A running count-up animation for a single element.
///
/// Driven by per-frame timestamps rather than fixed intervals. The final
/// frame snaps to the exactly formatted target so no floating-point drift
/// remains on screen.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    start_ms: f64,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, now_ms: f64) -> Self {
        Self {
            spec,
            start_ms: now_ms,
        }
    }

    pub fn frame(&self, now_ms: f64) -> CounterFrame {
        let progress = ((now_ms - self.start_ms) / COUNT_DURATION_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return CounterFrame {
                text: format_value(self.spec.target, self.spec.divisor, &self.spec.suffix),
                done: true,
            };
        }
        let current = self.spec.target * ease_out_cubic(progress);
        CounterFrame {
            text: format_value(current, self.spec.divisor, &self.spec.suffix),
            done: false,
        }
    }
}
