/// Brute-force estimator — exact rank of a password in enumeration order.
///
/// A brute-forcer that tries every string of length 1, then length 2, and so
/// on, each length in charset order, reaches a password of length `L` after
/// exactly
///
/// ```text
/// sum(N^i for i in 1..L) + rank(password) + 1
/// ```
///
/// attempts, where `rank` reads the password as a base-`N` number whose
/// digits are charset indices. This is an exact count, not a probabilistic
/// guess, so it is computed with arbitrary-precision integers.
pub mod charset;

pub use charset::Charset;

use crate::error::EstimateError;
use crate::model::EstimateResult;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Default guesses per second used when the configuration does not say.
pub const DEFAULT_GUESS_RATE: f64 = 1_000_000_000.0;

/// Number of strings strictly shorter than `len` (and at least 1 long)
/// over an alphabet of size `n`.
pub fn attempts_before_length(len: usize, n: usize) -> BigUint {
    let n = BigUint::from(n);
    let mut total = BigUint::zero();
    let mut power = BigUint::from(1u32);
    for _ in 1..len {
        power *= &n;
        total += &power;
    }
    total
}

/// 0-based position of `password` among all strings of its length.
///
/// Fails on the first character that is not in `charset`.
pub fn rank_of(password: &str, charset: &Charset) -> Result<BigUint, EstimateError> {
    let n = BigUint::from(charset.len());
    let mut rank = BigUint::zero();
    for (position, ch) in password.chars().enumerate() {
        let idx = charset
            .index_of(ch)
            .ok_or(EstimateError::InvalidCharacter { ch, position })?;
        rank = rank * &n + BigUint::from(idx);
    }
    Ok(rank)
}

/// Estimate how many attempts, and how long, a sequential brute-forcer needs
/// to reach `password`.
pub fn estimate(
    password: &str,
    charset: &Charset,
    guess_rate: f64,
) -> Result<EstimateResult, EstimateError> {
    if !guess_rate.is_finite() || guess_rate <= 0.0 {
        return Err(EstimateError::InvalidGuessRate(guess_rate));
    }

    let rank = rank_of(password, charset)?;
    let length = password.chars().count();
    let total_attempts = attempts_before_length(length, charset.len()) + rank + 1u32;

    // `to_f64` saturates to infinity for values beyond f64 range.
    let estimated_secs = total_attempts.to_f64().unwrap_or(f64::INFINITY) / guess_rate;

    Ok(EstimateResult {
        charset_size: charset.len(),
        password_length: length,
        total_attempts,
        estimated_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> Charset {
        "ab".parse().unwrap()
    }

    #[test]
    fn worked_example_ba_is_fifth() {
        // Enumeration: a, b, aa, ab, ba
        let r = estimate("ba", &ab(), 1.0).unwrap();
        assert_eq!(attempts_before_length(2, 2), BigUint::from(2u32));
        assert_eq!(rank_of("ba", &ab()).unwrap(), BigUint::from(2u32));
        assert_eq!(r.total_attempts, BigUint::from(5u32));
        assert_eq!(r.charset_size, 2);
        assert_eq!(r.password_length, 2);
    }

    #[test]
    fn total_matches_enumeration_order() {
        // Every string up to length 3 over "ab", generated in brute-force order.
        let mut expected = Vec::new();
        for len in 1..=3u32 {
            for n in 0..2u32.pow(len) {
                let s: String = (0..len)
                    .rev()
                    .map(|bit| if n >> bit & 1 == 1 { 'b' } else { 'a' })
                    .collect();
                expected.push(s);
            }
        }
        for (i, pw) in expected.iter().enumerate() {
            let r = estimate(pw, &ab(), 1.0).unwrap();
            assert_eq!(r.total_attempts, BigUint::from(i + 1), "password {pw}");
        }
    }

    #[test]
    fn identity_before_plus_rank_plus_one() {
        let cs = Charset::for_password("Tr0ub4dor&3");
        let pw = "Tr0ub4dor&3";
        let r = estimate(pw, &cs, 1e9).unwrap();
        let expected =
            attempts_before_length(pw.chars().count(), cs.len()) + rank_of(pw, &cs).unwrap() + 1u32;
        assert_eq!(r.total_attempts, expected);
    }

    #[test]
    fn seconds_are_total_over_rate() {
        let cs: Charset = charset::DIGITS.parse().unwrap();
        let r = estimate("999", &cs, 4.0).unwrap();
        // 10 + 100 + 999 + 1
        assert_eq!(r.total_attempts, BigUint::from(1_110u32));
        assert_eq!(r.estimated_secs, 1_110.0 / 4.0);
    }

    #[test]
    fn deterministic() {
        let cs = Charset::for_password("hello");
        assert_eq!(
            estimate("hello", &cs, 1e6).unwrap(),
            estimate("hello", &cs, 1e6).unwrap()
        );
    }

    #[test]
    fn invalid_character_is_reported() {
        let err = estimate("abc", &ab(), 1.0).unwrap_err();
        assert_eq!(err, EstimateError::InvalidCharacter { ch: 'c', position: 2 });
        assert!(err.to_string().contains("'c'"));
    }

    #[test]
    fn invalid_guess_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                estimate("a", &ab(), rate),
                Err(EstimateError::InvalidGuessRate(_))
            ));
        }
    }

    #[test]
    fn empty_password_is_first_attempt() {
        let r = estimate("", &ab(), 2.0).unwrap();
        assert_eq!(r.total_attempts, BigUint::from(1u32));
        assert_eq!(r.password_length, 0);
        assert_eq!(r.estimated_secs, 0.5);
    }

    #[test]
    fn long_passwords_do_not_overflow() {
        let pw = "z".repeat(64);
        let cs = Charset::for_password(&pw);
        let r = estimate(&pw, &cs, DEFAULT_GUESS_RATE).unwrap();
        // 26^64 has 91 digits.
        assert!(r.total_attempts.to_str_radix(10).len() >= 90);
        assert!(r.estimated_secs.is_finite());
    }
}
