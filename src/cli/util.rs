use anyhow::Context;

use crate::base;
use crate::cli;

/// Returns the charset described by `config`, adjusted by command line flags.
/// Enabling color forces styling on even when stdout is not a terminal.
pub fn charset(config: &base::Config, opts: &cli::sharedopts::RenderOpts) -> base::Charset {
    let mut charset = config.charset();
    if opts.ascii {
        charset = base::Charset {
            color: charset.color,
            ..base::Charset::default()
        }
    }
    if opts.color {
        charset = charset.with_color()
    }
    if charset.color {
        colored::control::set_override(true);
    }
    charset
}

/// Reads the ledger at `p` and composes it into report data. Malformed ledger
/// lines are skipped by the parser and do not fail the read.
pub fn read_report_data<P>(
    fs: &base::Fs,
    p: P,
    config: &base::Config,
) -> anyhow::Result<base::ReportData>
where
    P: AsRef<std::path::Path>,
{
    let p = p.as_ref();
    let ledger = fs
        .read_ledger(p, &config.default_currency)
        .with_context(|| format!("failed to read '{}'", p.display()))?;
    if !ledger.diagnostics().is_empty() {
        tracing::debug!(
            skipped = ledger.diagnostics().len(),
            path = %p.display(),
            "ledger has malformed lines"
        );
    }
    base::ReportData::compose(ledger.entries().to_vec())
        .with_context(|| format!("failed to build report from '{}'", p.display()))
}

/// If `fullmatch` is false, ensures all patterns start with and end with `*`,
/// except for empty patterns which are left alone. If `fullmatch` is true,
/// does not modify patterns.
pub fn preprocess_patterns<'a>(
    patterns: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return patterns.into();
    }
    patterns
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns a predicate telling whether a category path matches any wildcard
/// pattern in `patterns`.
pub fn path_matcher<T>(patterns: &[T]) -> impl Fn(&str) -> bool
where
    T: AsRef<str>,
{
    let incl = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    move |path: &str| incl.iter().any(|p| p.matches(path))
}
