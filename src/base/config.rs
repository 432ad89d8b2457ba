use crate::base;

/// Application config, read from the working directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub width: usize,
    pub currency_format: String,
    pub currency_decimals: usize,
    /// Name of a predefined currency profile. Takes precedence over
    /// `currency_format` and `currency_decimals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Currency code for ledger lines that do not name one.
    pub default_currency: String,
    pub use_unicode_symbols: bool,
    pub use_colored_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 80,
            currency_format: base::CurrencyFormat::DEFAULT_TEMPLATE.into(),
            currency_decimals: base::CurrencyFormat::DEFAULT_DECIMALS,
            currency: None,
            default_currency: "USD".into(),
            use_unicode_symbols: true,
            use_colored_output: false,
        }
    }
}

/// Settings for one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub currency: base::CurrencyFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            currency: base::CurrencyFormat::default(),
        }
    }
}

/// Per-invocation settings that take precedence over [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<usize>,
    pub currency_format: Option<String>,
    pub currency_decimals: Option<usize>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("display width must be more than 0")]
    ZeroWidth,
    #[error("unknown currency profile '{0}'")]
    UnknownProfile(String),
    #[error(transparent)]
    Template(#[from] base::InvalidFormatTemplate),
}

impl Config {
    /// Resolves render options. Precedence, lowest first: config fields, the
    /// currency profile, explicit overrides.
    ///
    /// The profile is named by the overrides or else by the config. Failing
    /// both, `ledger_currency` picks one if it is a known profile code.
    pub fn render_options(
        &self,
        overrides: &Overrides,
        profiles: &[base::Profile],
        ledger_currency: Option<&str>,
    ) -> Result<RenderOptions, ConfigError> {
        let width = overrides.width.unwrap_or(self.width);
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        let mut template = self.currency_format.as_str();
        let mut decimals = self.currency_decimals;
        let profile = match overrides.currency.as_deref().or(self.currency.as_deref()) {
            Some(code) => Some(
                base::Profile::lookup(profiles, code)
                    .ok_or_else(|| ConfigError::UnknownProfile(code.into()))?,
            ),
            None => ledger_currency.and_then(|code| base::Profile::lookup(profiles, code)),
        };
        if let Some(profile) = profile {
            template = profile.template;
            decimals = profile.decimals;
        }
        if let Some(t) = overrides.currency_format.as_deref() {
            template = t;
        }
        if let Some(d) = overrides.currency_decimals {
            decimals = d;
        }

        let currency = base::CurrencyFormat::new(template, decimals)?;
        Ok(RenderOptions { width, currency })
    }

    pub fn charset(&self) -> base::Charset {
        let mut charset = base::Charset::default();
        if self.use_unicode_symbols {
            charset = charset.with_unicode()
        }
        if self.use_colored_output {
            charset = charset.with_color()
        }
        charset
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
