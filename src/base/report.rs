pub mod forplain;
pub mod fortable;

use crate::base;

/// Income and expense hierarchies with their totals, built from one ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    pub entries: Vec<base::Entry>,
    pub income: base::Tree,
    pub expenses: base::Tree,
    pub total_income: base::Units,
    /// Zero or negative.
    pub total_expenses: base::Units,
    /// Net of every entry's contribution, independent of tree placement.
    pub total_unassigned: base::Units,
    /// The one currency all entries share, or `None` for an empty ledger.
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    DuplicateCategoryPath(#[from] base::DuplicateCategoryPath),
    #[error("ledger mixes currencies '{first}' and '{other}'")]
    MixedCurrencies { first: String, other: String },
    #[error(transparent)]
    Overflow(#[from] base::units::Overflow),
}

/// A titled block of the report. The unassigned section has no tree.
pub struct Section<'a> {
    pub label: &'static str,
    pub total: base::Units,
    pub tree: Option<&'a base::Tree>,
}

impl ReportData {
    pub const INCOME: &str = "INCOME";
    pub const EXPENSES: &str = "EXPENSES";
    pub const UNASSIGNED: &str = "UNASSIGNED";

    /// Splits entries into income and expenses, builds a tree for each, and
    /// rolls up totals. Either side may be empty.
    pub fn compose(entries: Vec<base::Entry>) -> Result<Self, ComposeError> {
        let currency = single_currency(&entries)?;
        let (expense_entries, income_entries): (Vec<_>, Vec<_>) =
            entries.iter().cloned().partition(base::Entry::is_expense);

        let mut income = base::Tree::build(income_entries)?;
        let total_income = income.aggregate()?;
        let mut expenses = base::Tree::build(expense_entries)?;
        let total_expenses = expenses.aggregate()?;
        let total_unassigned =
            base::Units::checked_sum(entries.iter().map(base::Entry::contribution))?;

        tracing::debug!(
            entries = entries.len(),
            %total_income,
            %total_expenses,
            %total_unassigned,
            "composed report"
        );
        Ok(Self {
            entries,
            income,
            expenses,
            total_income,
            total_expenses,
            total_unassigned,
            currency,
        })
    }

    /// Sections in display order.
    pub fn sections(&self) -> [Section<'_>; 3] {
        [
            Section {
                label: Self::INCOME,
                total: self.total_income,
                tree: Some(&self.income),
            },
            Section {
                label: Self::EXPENSES,
                total: self.total_expenses,
                tree: Some(&self.expenses),
            },
            Section {
                label: Self::UNASSIGNED,
                total: self.total_unassigned,
                tree: None,
            },
        ]
    }
}

fn single_currency(entries: &[base::Entry]) -> Result<Option<String>, ComposeError> {
    let first = match entries.first() {
        Some(e) => e.currency(),
        None => return Ok(None),
    };
    match entries.iter().find(|e| e.currency() != first) {
        Some(e) => Err(ComposeError::MixedCurrencies {
            first: first.into(),
            other: e.currency().into(),
        }),
        None => Ok(Some(first.into())),
    }
}

/// Indentation per tree level.
const INDENT: &str = "    ";

fn indented(depth: usize, label: &str) -> String {
    let mut s = INDENT.repeat(depth);
    s.push_str(label);
    s
}

fn heading(charset: &base::Charset, label: &str) -> String {
    if charset.color {
        colored::Colorize::bold(label).to_string()
    } else {
        label.to_string()
    }
}

fn amount(charset: &base::Charset, options: &base::RenderOptions, units: base::Units) -> String {
    let s = options.currency.format(units);
    if charset.color && units.is_negative() {
        colored::Colorize::red(s.as_str()).to_string()
    } else {
        s
    }
}
