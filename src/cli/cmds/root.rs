use anyhow::Context;

use crate::base;
use crate::cli;

/// Hierarchical budget reports from a plain-text ledger
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Report(cli::cmds::report::Report),
    Table(cli::cmds::table::Table),
    Cats(cli::cmds::cats::Cats),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Report(cmd) => cmd.run(&config, fs),
            Commands::Table(cmd) => cmd.run(&config, fs),
            Commands::Cats(cmd) => cmd.run(&config, fs),
        }
    }
}
