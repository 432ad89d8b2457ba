use crate::base;

/// Entries read from a ledger file in file order, plus a diagnostic for each
/// line that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<base::Entry>,
    diagnostics: Vec<Diagnostic>,
}

/// A skipped line. `line` is one-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {error}")]
pub struct Diagnostic {
    pub line: usize,
    pub error: ParseError,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected '+' or '-', found '{0}'")]
    SignMarker(char),
    #[error("missing '{}' between category path and amount", base::Entry::SEP)]
    MissingSeparator,
    #[error("missing amount")]
    MissingAmount,
    #[error("invalid amount '{0}'")]
    Amount(String, #[source] base::units::ParseError),
    #[error("unexpected trailing text '{0}'")]
    TrailingText(String),
    #[error(transparent)]
    Entry(#[from] base::InvalidEntry),
}

impl Ledger {
    pub const COMMENT: char = '#';

    /// Parses every line of `s`. Lines that fail to parse are logged, recorded
    /// in [`Ledger::diagnostics`], and otherwise ignored. Entries without a
    /// currency code get `default_currency`.
    pub fn parse(s: &str, default_currency: &str) -> Self {
        let mut ledger = Self::default();
        for (i, line) in s.lines().enumerate() {
            match parse_line(line, default_currency) {
                Ok(Some(entry)) => ledger.entries.push(entry),
                Ok(None) => {}
                Err(error) => {
                    let d = Diagnostic { line: i + 1, error };
                    tracing::warn!(line = d.line, error = %d.error, "skipping malformed ledger line");
                    ledger.diagnostics.push(d);
                }
            }
        }
        tracing::debug!(
            entries = ledger.entries.len(),
            skipped = ledger.diagnostics.len(),
            "parsed ledger"
        );
        ledger
    }

    pub fn entries(&self) -> &[base::Entry] {
        &self.entries
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

}

/// Returns `Ok(None)` for blank and comment lines.
fn parse_line(line: &str, default_currency: &str) -> Result<Option<base::Entry>, ParseError> {
    let line = line.trim();
    let mut chars = line.chars();
    let is_expense = match chars.next() {
        None | Some(Ledger::COMMENT) => return Ok(None),
        Some('+') => false,
        Some('-') => true,
        Some(c) => return Err(ParseError::SignMarker(c)),
    };
    let (path, rest) = chars
        .as_str()
        .rsplit_once(base::Entry::SEP)
        .ok_or(ParseError::MissingSeparator)?;
    let categories = path
        .split(base::Entry::SEP)
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>();

    let mut fields = rest.split_whitespace();
    let amount = fields.next().ok_or(ParseError::MissingAmount)?;
    let amount = amount
        .parse::<base::Units>()
        .map_err(|e| ParseError::Amount(amount.to_string(), e))?;
    let currency = fields.next().unwrap_or(default_currency);
    if let Some(extra) = fields.next() {
        return Err(ParseError::TrailingText(extra.to_string()));
    }
    let entry = base::Entry::new(categories, is_expense, amount, currency.to_string())?;
    Ok(Some(entry))
}
