use crate::base;

/// Parses ledger text, panicking on any malformed line. Currency defaults to
/// `USD`.
pub fn entries(s: &str) -> Vec<base::Entry> {
    let ledger = base::Ledger::parse(s, "USD");
    assert!(
        ledger.diagnostics().is_empty(),
        "malformed test ledger: {:?}",
        ledger.diagnostics()
    );
    ledger.entries().to_vec()
}
