//! Time resolutions and conversion between them.

use std::fmt;

/// A time resolution in which time values are expressed.
///
/// Time values are stored internally in seconds. A unit only determines how such a value
/// is interpreted when read, so converting between units never loses the underlying instant.
///
/// # Examples
///
/// ```
/// use chronologger::TimeUnit;
///
/// let millis = TimeUnit::Milliseconds.from_secs(1.5);
/// assert!((millis - 1500.0).abs() < 1e-9);
///
/// let secs = TimeUnit::Milliseconds.to_secs(millis);
/// assert!((secs - 1.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TimeUnit {
    /// Nanoseconds (1e-9 s).
    Nanoseconds,

    /// Milliseconds (1e-3 s).
    Milliseconds,

    /// Seconds.
    #[default]
    Seconds,
}

impl TimeUnit {
    /// The power of ten that converts seconds into this unit.
    #[must_use]
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Nanoseconds => 9,
            Self::Milliseconds => 3,
            Self::Seconds => 0,
        }
    }

    /// The short symbol of the unit, as used in reports.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
        }
    }

    /// Expresses a value given in seconds in this unit.
    #[must_use]
    pub fn from_secs(self, secs: f64) -> f64 {
        secs * self.scale()
    }

    /// Expresses a value given in this unit in seconds.
    #[must_use]
    pub fn to_secs(self, value: f64) -> f64 {
        value / self.scale()
    }

    /// Formats a value given in seconds in this unit, including the unit symbol.
    ///
    /// Seconds are shown with millisecond precision, finer units as whole numbers.
    ///
    /// ```
    /// use chronologger::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Seconds.format_secs(1.23456), "1.235 s");
    /// assert_eq!(TimeUnit::Milliseconds.format_secs(1.23456), "1235 ms");
    /// ```
    #[must_use]
    pub fn format_secs(self, secs: f64) -> String {
        let value = self.from_secs(secs);

        match self {
            Self::Seconds => format!("{value:.3} {self}"),
            Self::Milliseconds | Self::Nanoseconds => format!("{value:.0} {self}"),
        }
    }

    fn scale(self) -> f64 {
        10_f64.powi(self.exponent())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const ALL_UNITS: [TimeUnit; 3] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
    ];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn default_is_seconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
    }

    #[test]
    fn from_secs_scales_by_exponent() {
        assert!(approx_eq(TimeUnit::Seconds.from_secs(2.5), 2.5));
        assert!(approx_eq(TimeUnit::Milliseconds.from_secs(2.5), 2_500.0));
        assert!(approx_eq(TimeUnit::Nanoseconds.from_secs(2.5), 2_500_000_000.0));
    }

    #[test]
    fn to_secs_inverts_from_secs() {
        for unit in ALL_UNITS {
            for secs in [0.0, 0.001, 1.0, 12.345_678, 86_400.0] {
                assert!(
                    approx_eq(unit.to_secs(unit.from_secs(secs)), secs),
                    "round trip failed for {secs} s in {unit}"
                );
            }
        }
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(TimeUnit::Nanoseconds.to_string(), "ns");
        assert_eq!(TimeUnit::Milliseconds.to_string(), "ms");
        assert_eq!(TimeUnit::Seconds.to_string(), "s");
    }

    #[test]
    fn format_secs_precision_depends_on_unit() {
        assert_eq!(TimeUnit::Seconds.format_secs(0.1), "0.100 s");
        assert_eq!(TimeUnit::Milliseconds.format_secs(0.1), "100 ms");
        assert_eq!(TimeUnit::Nanoseconds.format_secs(0.000_001), "1000 ns");
    }
}
