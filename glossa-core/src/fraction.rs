//! Exact fractions for the language model wire format
//!
//! Training stores every relative frequency as a reduced `p/q`; the decimal
//! value is only materialized when a model is loaded for detection.

use crate::error::CoreError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A rational number reduced to lowest terms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Creates a fraction and reduces it to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        assert!(
            denominator != 0,
            "zero denominator in fraction {numerator}/{denominator}"
        );
        if numerator == 0 {
            return Self {
                numerator: 0,
                denominator: 1,
            };
        }
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// The reduced numerator
    pub fn numerator(self) -> u32 {
        self.numerator
    }

    /// The reduced denominator
    pub fn denominator(self) -> u32 {
        self.denominator
    }

    /// The decimal value, losing exactness
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = u64::from(self.numerator) * u64::from(other.denominator);
        let right = u64::from(other.numerator) * u64::from(self.denominator);
        left.cmp(&right)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = CoreError;

    fn from_str(literal: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::MalformedFraction {
            literal: literal.to_string(),
        };
        let (numerator, denominator) = literal.split_once('/').ok_or_else(malformed)?;
        let numerator: u32 = numerator.trim().parse().map_err(|_| malformed())?;
        let denominator: u32 = denominator.trim().parse().map_err(|_| malformed())?;
        if denominator == 0 {
            return Err(CoreError::ZeroDenominator {
                literal: literal.to_string(),
            });
        }
        Ok(Self::new(numerator, denominator))
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FractionVisitor;

        impl Visitor<'_> for FractionVisitor {
            type Value = Fraction;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a fraction literal of the form 'numerator/denominator'")
            }

            fn visit_str<E: de::Error>(self, literal: &str) -> Result<Fraction, E> {
                literal.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(FractionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        let fraction = Fraction::new(12, 144);
        assert_eq!(fraction.numerator(), 1);
        assert_eq!(fraction.denominator(), 12);
    }

    #[test]
    fn zero_numerator_normalizes() {
        assert_eq!(Fraction::new(0, 7), Fraction::new(0, 13));
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn zero_denominator_panics() {
        let _ = Fraction::new(3, 0);
    }

    #[test]
    fn orders_by_value() {
        assert!(Fraction::new(1, 3) < Fraction::new(1, 2));
        assert!(Fraction::new(3, 4) > Fraction::new(2, 3));
        assert_eq!(
            Fraction::new(2, 4).cmp(&Fraction::new(1, 2)),
            Ordering::Equal
        );
    }

    #[test]
    fn parses_and_displays_round_trip() {
        let fraction: Fraction = "3/12".parse().unwrap();
        assert_eq!(fraction, Fraction::new(1, 4));
        assert_eq!(fraction.to_string(), "1/4");
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!("three/four".parse::<Fraction>().is_err());
        assert!("3".parse::<Fraction>().is_err());
        assert!("3/0".parse::<Fraction>().is_err());
    }

    #[test]
    fn decimal_value() {
        assert_eq!(Fraction::new(1, 4).to_f64(), 0.25);
    }

    #[test]
    fn serde_uses_the_literal_form() {
        let json = serde_json::to_string(&Fraction::new(2, 6)).unwrap();
        assert_eq!(json, "\"1/3\"");
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Fraction::new(1, 3));
    }
}
