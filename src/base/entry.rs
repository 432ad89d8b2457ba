use crate::base;

/// One budget line: a category path, a direction, and a non-negative amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    categories: Vec<String>,
    is_expense: bool,
    amount: base::Units,
    currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntry {
    #[error("category path is empty")]
    EmptyPath,
    #[error("category path contains an empty segment")]
    EmptySegment,
    #[error("amount is negative")]
    NegativeAmount,
    #[error("currency code is empty")]
    EmptyCurrency,
}

impl Entry {
    /// Separates category path segments in the ledger format.
    pub const SEP: &str = ":";

    pub fn new(
        categories: Vec<String>,
        is_expense: bool,
        amount: base::Units,
        currency: String,
    ) -> Result<Self, InvalidEntry> {
        if categories.is_empty() {
            return Err(InvalidEntry::EmptyPath);
        }
        if categories.iter().any(|c| c.is_empty()) {
            return Err(InvalidEntry::EmptySegment);
        }
        if amount.is_negative() {
            return Err(InvalidEntry::NegativeAmount);
        }
        if currency.is_empty() {
            return Err(InvalidEntry::EmptyCurrency);
        }
        Ok(Self {
            categories,
            is_expense,
            amount,
            currency,
        })
    }

    /// Path segments, outermost first. Never empty.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_expense(&self) -> bool {
        self.is_expense
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Full category path joined with [`Entry::SEP`].
    pub fn path(&self) -> String {
        self.categories.join(Self::SEP)
    }

    /// Signed amount: income counts positive, expense negative.
    pub fn contribution(&self) -> base::Units {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }

    pub fn sign_marker(&self) -> char {
        if self.is_expense { '-' } else { '+' }
    }
}

impl std::fmt::Display for Entry {
    /// Writes the entry in ledger line format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{} {} {}",
            self.sign_marker(),
            self.path(),
            Self::SEP,
            self.amount,
            self.currency
        )
    }
}
