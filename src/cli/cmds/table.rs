use anyhow::Context;

use crate::base;
use crate::cli;

/// Print the report as a table
#[derive(clap::Parser)]
pub struct Table {
    /// Ledger file to read
    file: std::path::PathBuf,

    #[command(flatten)]
    render_opts: cli::sharedopts::RenderOpts,
}

impl Table {
    pub fn run(self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let data = cli::util::read_report_data(fs, &self.file, config)?;
        let options = config
            .render_options(
                &self.render_opts.overrides(),
                base::PROFILES,
                data.currency.as_deref(),
            )
            .context("invalid render options")?;
        let tb_config = base::report::fortable::Config {
            charset: cli::util::charset(config, &self.render_opts),
            options,
            data,
        };
        let lines = tb_config.to_lines().context("failed to lay out table")?;
        Ok(cli::Output::Lines(lines))
    }
}
