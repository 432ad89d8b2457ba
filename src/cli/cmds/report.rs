use anyhow::Context;

use crate::base;
use crate::cli;

/// Print income, expenses and what is left, by category
#[derive(clap::Parser)]
pub struct Report {
    /// Ledger file to read
    file: std::path::PathBuf,

    #[command(flatten)]
    render_opts: cli::sharedopts::RenderOpts,
}

impl Report {
    pub fn run(self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let data = cli::util::read_report_data(fs, &self.file, config)?;
        let options = config
            .render_options(
                &self.render_opts.overrides(),
                base::PROFILES,
                data.currency.as_deref(),
            )
            .context("invalid render options")?;
        Ok(cli::Output::Report(base::report::forplain::Config {
            charset: cli::util::charset(config, &self.render_opts),
            options,
            data,
        }))
    }
}
