/// Characters used to draw rules and table borders, plus whether styling is
/// enabled. Junction triples are ordered left, inner, right. `dash` draws the
/// plain report's rules and stays ASCII in every set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub horizontal: char,
    pub vertical: char,
    pub top: [char; 3],
    pub middle: [char; 3],
    pub bottom: [char; 3],
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            horizontal: '-',
            vertical: '|',
            top: ['+', '+', '+'],
            middle: ['+', '+', '+'],
            bottom: ['+', '+', '+'],
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            horizontal: '\u{2500}',
            vertical: '\u{2502}',
            top: ['\u{250c}', '\u{252c}', '\u{2510}'],
            middle: ['\u{251c}', '\u{253c}', '\u{2524}'],
            bottom: ['\u{2514}', '\u{2534}', '\u{2518}'],
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
