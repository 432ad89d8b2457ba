use anyhow::Context;

use crate::base;
use crate::cli;

/// View unique category paths
#[derive(clap::Parser)]
pub struct Cats {
    /// Ledger file to read
    file: std::path::PathBuf,

    /// Match patterns against the whole category path
    ///
    /// By default, patterns are wrapped in '*' so that they match anywhere in
    /// the path.
    #[arg(long)]
    pub fullmatch: bool,

    /// Wildcard pattern to match category paths of interest
    ///
    /// If multiple patterns are provided, include paths that match any
    /// pattern.
    #[arg(default_value = "*")]
    pub category: Vec<String>,
}

impl Cats {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let ledger = fs
            .read_ledger(&self.file, &config.default_currency)
            .with_context(|| format!("failed to read '{}'", self.file.display()))?;
        let patterns = cli::util::preprocess_patterns(&self.category, self.fullmatch);

        let matches = cli::util::path_matcher(&patterns);

        let mut cats = ledger
            .entries()
            .iter()
            .map(|e| (e.sign_marker(), e.path()))
            .filter(|(_, path)| matches(path.as_str()))
            .map(|(marker, path)| format!("{} {}", marker, path))
            .collect::<Vec<_>>();
        cats.sort();
        cats.dedup();
        Ok(if cats.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(cats.join("\n"))
        })
    }
}
