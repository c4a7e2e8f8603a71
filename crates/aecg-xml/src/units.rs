//! Unit normalization for amplitude and time quantities.
//!
//! | Quantity  | Unit | Multiplier |
//! |-----------|------|------------|
//! | amplitude | `V`  | 1          |
//! | amplitude | `mV` | 1e-3       |
//! | amplitude | `uV` | 1e-6       |
//! | time      | `s`  | 1          |
//! | time      | `ms` | 1e3        |
//! | time      | `us` | 1e6        |
//!
//! Tags are matched exactly (`MV` is not `mV`). Time values are multiplied,
//! not divided, by the factor.

use std::fmt;

/// Physical quantity a unit tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Amplitude,
    Time,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amplitude => write!(f, "amplitude"),
            Self::Time => write!(f, "time"),
        }
    }
}

impl Quantity {
    /// Scale factor for a unit tag, or `None` if the tag is not recognized.
    #[must_use]
    pub fn multiplier(self, unit: &str) -> Option<f64> {
        match (self, unit) {
            (Self::Amplitude, "V") => Some(1.0),
            (Self::Amplitude, "mV") => Some(1e-3),
            (Self::Amplitude, "uV") => Some(1e-6),
            (Self::Time, "s") => Some(1.0),
            (Self::Time, "ms") => Some(1e3),
            (Self::Time, "us") => Some(1e6),
            _ => None,
        }
    }
}

/// Convert an amplitude to volts.
#[must_use]
pub fn normalize_amplitude(value: f64, unit: &str) -> Option<f64> {
    Quantity::Amplitude
        .multiplier(unit)
        .map(|factor| value * factor)
}

/// Scale a time-derived value by its unit multiplier.
#[must_use]
pub fn normalize_time(value: f64, unit: &str) -> Option<f64> {
    Quantity::Time.multiplier(unit).map(|factor| value * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn amplitude_units_scale_to_volts() {
        assert_eq!(normalize_amplitude(2.0, "V"), Some(2.0));
        assert!(normalize_amplitude(5.0, "mV").is_some_and(|v| close(v, 0.005)));
        assert!(normalize_amplitude(250.0, "uV").is_some_and(|v| close(v, 0.00025)));
    }

    #[test]
    fn time_units_multiply() {
        assert_eq!(normalize_time(500.0, "s"), Some(500.0));
        assert_eq!(normalize_time(0.5, "ms"), Some(500.0));
        assert_eq!(normalize_time(2.0, "us"), Some(2e6));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(normalize_amplitude(1.0, "MV"), None);
        assert_eq!(normalize_amplitude(1.0, "s"), None);
        assert_eq!(normalize_time(1.0, "mV"), None);
        assert_eq!(normalize_time(1.0, ""), None);
    }
}
