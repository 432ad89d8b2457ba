//! Width measurement and padding for text that may carry terminal styling.
//!
//! Styling is limited to SGR sequences (`ESC [ <params> m`), which is what
//! `colored` emits. Such sequences occupy no columns on screen, so they are
//! skipped when measuring.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Number of columns `text` occupies, ignoring SGR sequences. Multi-line text
/// is measured per line, and the widest line wins.
pub fn visible_width(text: &str) -> usize {
    text.split('\n').map(line_width).max().unwrap_or_default()
}

fn line_width(line: &str) -> usize {
    let mut width = 0;
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        match sgr_len(rest) {
            Some(len) => rest = &rest[len..],
            None => {
                width += 1;
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    width
}

/// Byte length of the SGR sequence at the start of `s`, if there is one.
fn sgr_len(s: &str) -> Option<usize> {
    let params = s.strip_prefix("\x1b[")?;
    let end = params.find(|c: char| !(c.is_ascii_digit() || c == ';'))?;
    params[end..].starts_with('m').then_some(2 + end + 1)
}

/// Pads a single line to `width` columns. Text already at least `width` wide
/// is returned unchanged. Centering puts the odd space on the right.
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let padding = width.saturating_sub(visible_width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Right => (padding, 0),
        Alignment::Center => (padding / 2, padding - padding / 2),
    };
    let mut s = String::with_capacity(text.len() + padding);
    s.extend(std::iter::repeat_n(' ', left));
    s.push_str(text);
    s.extend(std::iter::repeat_n(' ', right));
    s
}

/// `left` and `right` separated by enough spaces to span `width` columns.
/// When they do not fit, a single space separates them instead.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = visible_width(left) + visible_width(right);
    let gap = match width.checked_sub(used) {
        Some(gap) => gap,
        None => {
            tracing::debug!(width, used, "line exceeds display width");
            1
        }
    };
    let mut s = String::with_capacity(left.len() + gap + right.len());
    s.push_str(left);
    s.extend(std::iter::repeat_n(' ', gap));
    s.push_str(right);
    s
}
