use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a config file to the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing config to defaults
    #[arg(long)]
    reset_config: bool,
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existed = path.exists();

        // An existing config is rewritten in canonical form, which also
        // validates it.
        let config = if self.reset_config || !existed {
            base::Config::default()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !existed {
            cli::Output::Str(format!("Config initialized in '{}'", fs.dir().display()))
        } else if self.reset_config {
            cli::Output::Str("Config reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!("Config reinitialized in '{}'", fs.dir().display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            empty_dir,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("config initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(base::Config::default()),
            }
        ),
        (
            empty_dir_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob("config initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(base::Config::default()),
            }
        ),
        (
            existing_config,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("config reinitialized in*"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"width":40,"currency":"NTD"}"#)
                    .with_ledger("budget.txt", "+ Pay: 1\n"),
            }
        ),
        (
            existing_config_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob("config reset to defaults."),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"width":40,"currency":"NTD"}"#),
                final_state: cli::testing::State::new().with_config(base::Config::default()),
            }
        ),
    ];

    #[test]
    fn test_invalid_config_is_kept() {
        let (fs, _td) = cli::testing::tempfs();
        std::fs::write(fs.path::<base::Config>(), "{").unwrap();
        let root = <cli::Root as clap::Parser>::try_parse_from(["", "init"]).unwrap();
        let err = root.run(&fs).unwrap_err();
        assert!(err.to_string().starts_with("failed to read '"), "{}", err);
        assert_eq!(std::fs::read_to_string(fs.path::<base::Config>()).unwrap(), "{");
    }
}
