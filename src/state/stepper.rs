// Increment/decrement math for number inputs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stepper {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for Stepper {
    fn default() -> Self {
        Self {
            step: 1.0,
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

/// Leading-number parse: "2.5kg" -> 2.5, "" -> None. NaN counts as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .take_while(|&(i, c)| {
            c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0) || c == 'e' || c == 'E'
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    (0..=end)
        .rev()
        .find_map(|cut| raw[..cut].parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

impl Stepper {
    /// Reads the `step`/`min`/`max` attribute strings of an input.
    pub fn from_attrs(step: &str, min: &str, max: &str) -> Self {
        let d = Self::default();
        Self {
            step: parse_number(step).filter(|s| *s > 0.0).unwrap_or(d.step),
            min: parse_number(min).unwrap_or(d.min),
            max: parse_number(max).unwrap_or(d.max),
        }
    }

    /// New value after one decrement, or None when already at the minimum.
    pub fn decrement(&self, value: f64) -> Option<f64> {
        (value > self.min).then(|| (value - self.step).max(self.min))
    }

    /// New value after one increment, or None when already at the maximum.
    pub fn increment(&self, value: f64) -> Option<f64> {
        (value < self.max).then(|| (value + self.step).min(self.max))
    }
}

/// Current value of an input; anything unparseable counts as zero.
pub fn current_value(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}
