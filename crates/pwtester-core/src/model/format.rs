/// Display formatting — thousands separators and elapsed times.
///
/// Attempt counts can exceed any fixed-width integer, so grouping works on
/// the decimal string rather than on the numeric value.
use num_bigint::BigUint;

/// Format an integer count with thousand separators.
pub fn format_count(count: u64) -> String {
    group_digits(&count.to_string())
}

/// Format an arbitrary-precision count with thousand separators.
pub fn format_big_count(count: &BigUint) -> String {
    group_digits(&count.to_str_radix(10))
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Per-source elapsed time as shown in the console, e.g. `0.42s`.
pub fn format_elapsed(secs: f64) -> String {
    format!("{secs:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_big_count() {
        assert_eq!(format_big_count(&BigUint::from(5u32)), "5");
        let big = BigUint::from(u64::MAX) * BigUint::from(1000u32);
        assert_eq!(format_big_count(&big), "18,446,744,073,709,551,615,000");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0.00s");
        assert_eq!(format_elapsed(1.234), "1.23s");
    }
}
