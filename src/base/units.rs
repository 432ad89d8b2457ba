/// Integral quantity of a currency's minor unit (e.g. cents). Signed, so that
/// rolled-up totals can go negative.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::Neg,
)]
pub struct Units(pub i64);

/// A sum of units left the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("total is out of range")]
pub struct Overflow;

impl Units {
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Decimal digits of the magnitude, without sign. Never empty.
    pub fn magnitude_digits(self) -> String {
        self.0.unsigned_abs().to_string()
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, Overflow> {
        self.0.checked_add(rhs.0).map(Self).ok_or(Overflow)
    }

    /// Sums `iter`, failing instead of wrapping.
    pub fn checked_sum<I>(iter: I) -> Result<Self, Overflow>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .try_fold(Self::default(), |acc, u| acc.checked_add(u))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("amount must not carry a sign")]
    Signed,
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Units {
    type Err = ParseError;

    /// Parses a non-negative integer, ignoring `,` and `_` digit separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace([',', '_'], "");
        if s.starts_with(['+', '-']) {
            return Err(ParseError::Signed);
        }
        Ok(Self(s.parse::<i64>()?))
    }
}
