use crate::base;

pub const CURRENCY_FORMAT_HELP: &str = "Currency format template";
pub const CURRENCY_FORMAT_HELP_LONG: &str = "Currency format template

Must contain '{amount}' and '{neg}' exactly as written. '{amount}' is replaced by the absolute value with the configured number of decimal places, '{neg}' by '-' for negative values and nothing otherwise. Write '{{' or '}}' for a literal brace.

Examples:
{neg}${amount}   -> -$12.50
{neg}{amount} kr -> -12.50 kr";

// Flags shared by every rendering command. Unset flags fall back to the
// config file.
#[derive(clap::Args)]
pub struct RenderOpts {
    /// Display width in columns
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    #[arg(
        long,
        value_name = "TEMPLATE",
        help = CURRENCY_FORMAT_HELP,
        long_help = CURRENCY_FORMAT_HELP_LONG,
    )]
    pub currency_format: Option<String>,

    /// Number of decimal places shown for amounts
    #[arg(long, value_name = "N")]
    pub currency_decimals: Option<usize>,

    /// Predefined currency profile, e.g. USD or NTD
    ///
    /// Sets both the format template and the number of decimals. Explicit
    /// '--currency-format' and '--currency-decimals' still take precedence.
    #[arg(long, value_name = "PROFILE")]
    pub currency: Option<String>,

    /// Draw with ASCII characters only
    #[arg(long)]
    pub ascii: bool,

    /// Bold section labels and color negative totals
    #[arg(long)]
    pub color: bool,
}

impl RenderOpts {
    pub fn overrides(&self) -> base::Overrides {
        base::Overrides {
            width: self.width,
            currency_format: self.currency_format.clone(),
            currency_decimals: self.currency_decimals,
            currency: self.currency.clone(),
        }
    }
}
