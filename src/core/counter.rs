//! Animated statistic counters
//!
//! A counter element carries its target in `data-counter` and an optional
//! `data-suffix`. Once visible it counts from 0 to the target over
//! `COUNTER_DURATION_MS` with a quartic ease-out.

/// Length of the count-up animation
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Attribute holding the target value
pub const COUNTER_ATTR: &str = "data-counter";

/// Attribute holding the optional suffix
pub const SUFFIX_ATTR: &str = "data-suffix";

/// Parsed counter attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub suffix: String,
}

impl CounterSpec {
    /// Parse the raw attribute values.
    ///
    /// The target is read from its leading integer, so `"12.5"` and `"12k"`
    /// both count to 12. Targets without leading digits yield `None`.
    pub fn parse(target: Option<&str>, suffix: Option<&str>) -> Option<Self> {
        let target = leading_integer(target?)?;
        Some(Self {
            target,
            suffix: suffix.unwrap_or_default().to_string(),
        })
    }

    /// Value shown at `progress` (clamped to `[0, 1]`)
    pub fn value_at(&self, progress: f64) -> i64 {
        let eased = 1.0 - (1.0 - clamp_progress(progress)).powi(4);
        (self.target as f64 * eased).round() as i64
    }

    /// Text shown at `progress`
    pub fn text_at(&self, progress: f64) -> String {
        format!("{}{}", self.value_at(progress), self.suffix)
    }
}

/// Optional sign and digits after leading whitespace; trailing text is ignored
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    raw[..sign_len + digits_len].parse().ok()
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// One running count-up, driven by animation-frame timestamps
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    started_at: f64,
}

/// Output of a single animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames needed
    pub finished: bool,
}

impl CounterAnimation {
    /// Start at `now` (milliseconds, same clock as the frame timestamps)
    pub fn start(spec: CounterSpec, now: f64) -> Self {
        Self {
            spec,
            started_at: now,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn progress(&self, now: f64) -> f64 {
        clamp_progress((now - self.started_at) / COUNTER_DURATION_MS)
    }

    pub fn frame(&self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        CounterFrame {
            text: self.spec.text_at(progress),
            finished: progress >= 1.0,
        }
    }
}
