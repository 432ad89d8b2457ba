use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Report(base::report::forplain::Config),
    /// Pre-rendered lines, without terminating newlines.
    Lines(Vec<String>),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Report(config) => write!(f, "{}", config),
            Output::Lines(lines) => lines.iter().try_for_each(|line| writeln!(f, "{}", line)),
        }
    }
}
