use crate::base;
use crate::base::text;

/// Report as plain lines: each section is a ruled header followed by its
/// category tree, labels on the left and totals flush right.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub options: base::RenderOptions,
    pub data: base::ReportData,
}

impl Config {
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in self.data.sections() {
            self.push_header(&mut lines, section.label, section.total);
            for (depth, node) in section.tree.iter().flat_map(|tr| tr.iter()) {
                lines.push(text::spread(
                    &super::indented(depth, node.label()),
                    &self.amount(node.total()),
                    self.options.width,
                ));
            }
        }
        lines
    }

    fn push_header(&self, lines: &mut Vec<String>, label: &str, total: base::Units) {
        let rule = self
            .charset
            .dash
            .to_string()
            .repeat(self.options.width);
        lines.push(rule.clone());
        lines.push(text::spread(
            &super::heading(&self.charset, label),
            &self.amount(total),
            self.options.width,
        ));
        lines.push(rule);
    }

    fn amount(&self, units: base::Units) -> String {
        super::amount(&self.charset, &self.options, units)
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_lines()
            .iter()
            .try_for_each(|line| writeln!(f, "{}", line))
    }
}
