use crate::base;

/// How to display an amount of minor units: a template with `{neg}` and
/// `{amount}` placeholders, and the number of decimal places to shift by.
/// `{{` and `}}` are literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    decimals: usize,
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Neg,
    Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFormatTemplate {
    #[error("currency format '{0}' is missing the '{{amount}}' placeholder")]
    MissingAmount(String),
    #[error("currency format '{0}' is missing the '{{neg}}' placeholder")]
    MissingNeg(String),
    #[error("currency format '{template}' has unknown placeholder '{{{name}}}'")]
    UnknownPlaceholder { template: String, name: String },
    #[error("currency format '{0}' has an unmatched brace")]
    UnmatchedBrace(String),
}

/// A named preset for [`CurrencyFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub code: &'static str,
    pub template: &'static str,
    pub decimals: usize,
}

pub const PROFILES: &[Profile] = &[
    Profile {
        code: "NTD",
        template: "{neg}{amount} NTD",
        decimals: 0,
    },
    Profile {
        code: "USD",
        template: "{neg}${amount}",
        decimals: 2,
    },
];

impl Profile {
    /// Case-insensitive search by currency code.
    pub fn lookup<'a>(profiles: &'a [Self], code: &str) -> Option<&'a Self> {
        profiles.iter().find(|p| p.code.eq_ignore_ascii_case(code))
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEMPLATE, Self::DEFAULT_DECIMALS)
            .expect("default template should be valid")
    }
}

impl CurrencyFormat {
    pub const DEFAULT_TEMPLATE: &str = "{neg}${amount}";
    pub const DEFAULT_DECIMALS: usize = 2;

    pub fn new(template: &str, decimals: usize) -> Result<Self, InvalidFormatTemplate> {
        let pieces = tokenize(template)?;
        if !pieces.contains(&Piece::Amount) {
            return Err(InvalidFormatTemplate::MissingAmount(template.into()));
        }
        if !pieces.contains(&Piece::Neg) {
            return Err(InvalidFormatTemplate::MissingNeg(template.into()));
        }
        Ok(Self { decimals, pieces })
    }

    /// Renders the magnitude of `units` with exactly `decimals` fractional
    /// digits, and `-` in place of `{neg}` when `units` is negative. No
    /// thousands separators.
    pub fn format(&self, units: base::Units) -> String {
        let digits = units.magnitude_digits();
        let amount = if self.decimals == 0 {
            digits
        } else {
            let padded = format!("{:0>width$}", digits, width = self.decimals + 1);
            let (int, frac) = padded.split_at(padded.len() - self.decimals);
            format!("{}.{}", int, frac)
        };
        let neg = if units.is_negative() { "-" } else { "" };

        let mut s = String::new();
        for piece in self.pieces.iter() {
            match piece {
                Piece::Literal(lit) => s.push_str(lit),
                Piece::Neg => s.push_str(neg),
                Piece::Amount => s.push_str(&amount),
            }
        }
        s
    }
}

fn tokenize(template: &str) -> Result<Vec<Piece>, InvalidFormatTemplate> {
    let unmatched = || InvalidFormatTemplate::UnmatchedBrace(template.into());
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut rest = template;
    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '{' if rest.starts_with('{') => {
                literal.push('{');
                rest = &rest[1..];
            }
            '}' if rest.starts_with('}') => {
                literal.push('}');
                rest = &rest[1..];
            }
            '}' => return Err(unmatched()),
            '{' => {
                let end = rest.find('}').ok_or_else(unmatched)?;
                let piece = match &rest[..end] {
                    "neg" => Piece::Neg,
                    "amount" => Piece::Amount,
                    name => {
                        return Err(InvalidFormatTemplate::UnknownPlaceholder {
                            template: template.into(),
                            name: name.into(),
                        });
                    }
                };
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(piece);
                rest = &rest[end + 1..];
            }
            c => literal.push(c),
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}
