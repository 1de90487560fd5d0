//! Integer arithmetic modulo 26.
//!
//! Every cipher in the suite works over the residues of the 26-letter alphabet.
//! [`reduce`], [`mod_inverse`] and [`is_invertible`] accept any `i64`. A missing
//! inverse is reported with `None`, so callers can check invertibility and use the
//! inverse in a single step.
//!
//! # Examples
//!
//! ```
//! use cryptosuite_core::modular::{self, MODULUS};
//!
//! assert_eq!(MODULUS, 26);
//! assert_eq!(modular::reduce(-1), 25);
//! assert_eq!(modular::mod_inverse(5), Some(21)); // 5 * 21 = 105 = 4 * 26 + 1
//! assert_eq!(modular::mod_inverse(13), None);
//! ```

/// The size of the alphabet, and the modulus of all cipher arithmetic.
pub const MODULUS: i64 = 26;

/// Reduces `value` into the range `0..26`.
///
/// Unlike the `%` operator, the result is never negative.
#[must_use]
pub const fn reduce(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a * x + b * y = g`.
///
/// `g` is never negative.
///
/// # Panics
///
/// May panic on overflow when an argument is `i64::MIN`, since the gcd or a
/// quotient then falls outside the `i64` range.
///
/// # Examples
///
/// ```
/// use cryptosuite_core::modular::extended_gcd;
///
/// let (g, x, y) = extended_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
#[must_use]
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1, 0);
    let (mut old_t, mut t) = (0, 1);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Returns the greatest common divisor of `a` and `b`.
///
/// # Panics
///
/// May panic on overflow when an argument is `i64::MIN`; see [`extended_gcd`].
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a, b).0
}

/// Returns the inverse of `value` modulo 26.
///
/// The inverse exists exactly when `gcd(value, 26) = 1`; otherwise `None` is returned.
/// Any integer is accepted, and the result is always in the range `1..26`.
///
/// # Examples
///
/// ```
/// use cryptosuite_core::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(3), Some(9));
/// assert_eq!(mod_inverse(-3), Some(17));
/// assert_eq!(mod_inverse(2), None);
/// assert_eq!(mod_inverse(0), None);
/// ```
#[must_use]
pub fn mod_inverse(value: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(reduce(value), MODULUS);
    (g == 1).then(|| reduce(x))
}

/// Returns `true` if `value` has an inverse modulo 26.
#[must_use]
pub fn is_invertible(value: i64) -> bool {
    mod_inverse(value).is_some()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(0), 0);
        assert_eq!(reduce(26), 0);
        assert_eq!(reduce(27), 1);
        assert_eq!(reduce(-1), 25);
        assert_eq!(reduce(-26), 0);
        assert_eq!(reduce(i64::MIN), i64::MIN.rem_euclid(26));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 26), 1);
        assert_eq!(gcd(0, 26), 26);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_invertible_residues() {
        // The units of Z/26Z are exactly the odd residues other than 13.
        let units: Vec<i64> = (0..26).filter(|&a| is_invertible(a)).collect();
        assert_eq!(units, vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]);
    }

    #[test]
    fn test_known_inverses() {
        assert_eq!(mod_inverse(1), Some(1));
        assert_eq!(mod_inverse(9), Some(3));
        assert_eq!(mod_inverse(7), Some(15));
        assert_eq!(mod_inverse(25), Some(25));
        assert_eq!(mod_inverse(27), Some(1));
        assert_eq!(mod_inverse(13), None);
        assert_eq!(mod_inverse(26), None);
    }

    #[test]
    fn test_mod_inverse_extreme_values() {
        // i64::MAX reduces to 7, i64::MIN to 18
        assert_eq!(mod_inverse(i64::MAX), Some(15));
        assert_eq!(mod_inverse(i64::MIN), None);
        assert!(is_invertible(i64::MAX - 26));
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_gcd_overflows_on_min() {
        let _ = gcd(i64::MIN, -1);
    }

    proptest! {
        #[test]
        fn inverse_multiplies_to_one(value in -10_000_i64..10_000) {
            match mod_inverse(value) {
                Some(inverse) => {
                    prop_assert!((1..26).contains(&inverse));
                    prop_assert_eq!(reduce(reduce(value) * inverse), 1);
                }
                None => prop_assert_ne!(gcd(value, MODULUS), 1),
            }
        }

        #[test]
        fn extended_gcd_satisfies_bezout(a in -100_000_i64..100_000, b in -100_000_i64..100_000) {
            let (g, x, y) = extended_gcd(a, b);
            prop_assert!(g >= 0);
            prop_assert_eq!(a * x + b * y, g);
        }
    }
}
