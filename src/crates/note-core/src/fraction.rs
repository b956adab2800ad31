use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Rational number used for exact quarter-length durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Create a new fraction and simplify it
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            panic!("Denominator cannot be zero");
        }
        let mut f = Fraction {
            numerator,
            denominator,
        };
        f.simplify();
        f
    }

    /// Create a fraction from a whole number
    pub fn from_int(n: i64) -> Self {
        Fraction {
            numerator: n,
            denominator: 1,
        }
    }

    pub fn zero() -> Self {
        Fraction::from_int(0)
    }

    pub fn one() -> Self {
        Fraction::from_int(1)
    }

    /// Number of MIDI ticks this quarter-length spans at the given resolution.
    ///
    /// Non-integral results are rounded to the nearest tick. Returns `None` for
    /// negative lengths or when the result does not fit in a `u32`.
    pub fn to_ticks(&self, ticks_per_quarter: u32) -> Option<u32> {
        if self.is_negative() {
            return None;
        }
        let scaled = self.numerator.checked_mul(ticks_per_quarter as i64)?;
        let rounded = scaled
            .checked_mul(2)?
            .checked_add(self.denominator)?
            / (2 * self.denominator);
        u32::try_from(rounded).ok()
    }

    /// Simplify the fraction
    fn simplify(&mut self) {
        let gcd = Self::gcd(self.numerator.abs(), self.denominator.abs());
        self.numerator /= gcd;
        self.denominator /= gcd;

        // Keep denominator positive
        if self.denominator < 0 {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
    }

    /// Greatest common divisor
    fn gcd(mut a: i64, mut b: i64) -> i64 {
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a
    }

    /// Least common multiple
    fn lcm(a: i64, b: i64) -> i64 {
        (a * b) / Self::gcd(a, b)
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let lcm = Self::lcm(self.denominator, other.denominator);
        let num1 = self.numerator * (lcm / self.denominator);
        let num2 = other.numerator * (lcm / other.denominator);
        Fraction::new(num1 + num2, lcm)
    }
}

impl std::iter::Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lcm = Self::lcm(self.denominator, other.denominator);
        let num1 = self.numerator * (lcm / self.denominator);
        let num2 = other.numerator * (lcm / other.denominator);
        num1.cmp(&num2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fraction_simplification() {
        let f = Fraction::new(4, 8);
        assert_eq!(f.numerator, 1);
        assert_eq!(f.denominator, 2);
    }

    #[test]
    fn test_negative_denominator_is_normalized() {
        let f = Fraction::new(1, -4);
        assert_eq!(f, Fraction { numerator: -1, denominator: 4 });
    }

    #[test]
    fn test_fraction_addition() {
        let result = Fraction::new(1, 2) + Fraction::new(1, 4);
        assert_eq!(result, Fraction::new(3, 4));
    }

    #[test]
    fn test_sum_of_quarter_lengths() {
        let total: Fraction = [Fraction::from_int(4), Fraction::new(1, 2), Fraction::new(1, 4)]
            .into_iter()
            .sum();
        assert_eq!(total, Fraction::new(19, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::from_int(4).to_string(), "4");
        assert_eq!(Fraction::new(2, 8).to_string(), "1/4");
    }

    #[test]
    fn test_to_ticks() {
        assert_eq!(Fraction::from_int(4).to_ticks(480), Some(1920));
        assert_eq!(Fraction::new(1, 4).to_ticks(480), Some(120));
        assert_eq!(Fraction::new(1, 4).to_ticks(2), Some(1)); // 0.5 rounds up
        assert_eq!(Fraction::new(-1, 2).to_ticks(480), None);
    }

    #[test]
    fn test_fraction_comparison() {
        assert!(Fraction::new(1, 4) < Fraction::new(1, 2));
        assert!(Fraction::from_int(2) > Fraction::one());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Fraction::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"numerator":1,"denominator":2}"#);
    }

    proptest! {
        #[test]
        fn ticks_scale_linearly(n in 0i64..64, d in prop::sample::select(vec![1i64, 2, 4])) {
            let f = Fraction::new(n, d);
            let ticks = f.to_ticks(480).unwrap() as i64;
            prop_assert_eq!(ticks * d, n * 480);
        }
    }
}
