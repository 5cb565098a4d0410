/// Brute-force estimate output and its human-readable time breakdown.
use crate::model::format::{format_big_count, format_count};
use num_bigint::BigUint;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// 365-day years; leap days are ignored.
pub const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

/// Year counts at or above this are shown in scientific notation.
const SCIENTIFIC_YEARS: f64 = 1e15;

/// Exact attempt count for one password and the time it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateResult {
    pub charset_size: usize,
    /// Length in characters (Unicode scalar values), not bytes.
    pub password_length: usize,
    /// 1-based position of the password in length-then-charset order.
    pub total_attempts: BigUint,
    pub estimated_secs: f64,
}

impl EstimateResult {
    pub fn breakdown(&self) -> TimeBreakdown {
        TimeBreakdown::from_seconds(self.estimated_secs)
    }

    /// Console lines describing this estimate.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Charset size: {}", self.charset_size),
            format!("Password length: {}", self.password_length),
            format!(
                "Total attempts: {}",
                format_big_count(&self.total_attempts)
            ),
            format!("Estimated time: {}", self.breakdown()),
        ]
    }
}

/// Seconds split into calendar-ish units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBreakdown {
    /// Whole years. Kept as `f64` because it can exceed `u64`.
    pub years: f64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl TimeBreakdown {
    pub fn from_seconds(total: f64) -> Self {
        if !total.is_finite() {
            return Self {
                years: f64::INFINITY,
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0.0,
            };
        }
        let total = total.max(0.0);
        let years = (total / SECONDS_PER_YEAR).floor();
        // `%` on f64 is exact, unlike `total - years * SECONDS_PER_YEAR`.
        let rem = total % SECONDS_PER_YEAR;
        let days = (rem / SECONDS_PER_DAY).floor();
        let rem = rem % SECONDS_PER_DAY;
        let hours = (rem / SECONDS_PER_HOUR).floor();
        let rem = rem % SECONDS_PER_HOUR;
        let minutes = (rem / SECONDS_PER_MINUTE).floor();
        let seconds = rem % SECONDS_PER_MINUTE;
        Self {
            years,
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds,
        }
    }

    fn years_display(&self) -> String {
        if self.years.is_infinite() {
            "effectively infinite".to_string()
        } else if self.years >= SCIENTIFIC_YEARS {
            format!("{:.3e}", self.years)
        } else {
            format_count(self.years as u64)
        }
    }
}

impl std::fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} days, {} hours, {} minutes, {:.2} seconds",
            self.years_display(),
            self.days,
            self.hours,
            self.minutes,
            self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_of_small_values() {
        let b = TimeBreakdown::from_seconds(59.5);
        assert_eq!(b.years, 0.0);
        assert_eq!((b.days, b.hours, b.minutes), (0, 0, 0));
        assert_eq!(b.seconds, 59.5);
    }

    #[test]
    fn breakdown_uses_365_day_years() {
        let secs = SECONDS_PER_YEAR + 2.0 * SECONDS_PER_DAY + 3.0 * SECONDS_PER_HOUR + 4.0 * 60.0 + 5.0;
        let b = TimeBreakdown::from_seconds(secs);
        assert_eq!(b.years, 1.0);
        assert_eq!(b.days, 2);
        assert_eq!(b.hours, 3);
        assert_eq!(b.minutes, 4);
        assert_eq!(b.seconds, 5.0);
        assert_eq!(
            b.to_string(),
            "1 years, 2 days, 3 hours, 4 minutes, 5.00 seconds"
        );
    }

    #[test]
    fn breakdown_of_huge_and_infinite_values() {
        let b = TimeBreakdown::from_seconds(1e40);
        assert!(b.years >= SCIENTIFIC_YEARS);
        assert!(b.to_string().contains('e'));

        let inf = TimeBreakdown::from_seconds(f64::INFINITY);
        assert!(inf.years.is_infinite());
        assert!(inf.to_string().starts_with("effectively infinite"));
    }

    #[test]
    fn report_lines_group_attempts() {
        let r = EstimateResult {
            charset_size: 10,
            password_length: 7,
            total_attempts: BigUint::from(1_111_111u32),
            estimated_secs: 0.001111111,
        };
        let lines = r.report_lines();
        assert_eq!(lines[0], "Charset size: 10");
        assert_eq!(lines[1], "Password length: 7");
        assert_eq!(lines[2], "Total attempts: 1,111,111");
        assert!(lines[3].starts_with("Estimated time: 0 years, 0 days"));
    }
}
