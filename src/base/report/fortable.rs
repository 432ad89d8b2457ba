use crate::base;
use crate::base::table;
use crate::base::text;

/// Report as a two-column box-drawn table. Row 0 is the header, then one
/// multi-line row per section.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub options: base::RenderOptions,
    pub data: base::ReportData,
}

impl Config {
    pub const CATEGORY: &str = "Category";
    pub const TOTAL: &str = "Total";

    pub fn to_table(&self) -> table::Table {
        let mut labels = table::Column::new(text::Alignment::Left);
        let mut totals = table::Column::new(text::Alignment::Right);
        labels.push(super::heading(&self.charset, Self::CATEGORY));
        totals.push(super::heading(&self.charset, Self::TOTAL));

        for section in self.data.sections() {
            let mut label_lines = vec![super::heading(&self.charset, section.label)];
            let mut total_lines = vec![self.amount(section.total)];
            for (depth, node) in section.tree.iter().flat_map(|tr| tr.iter()) {
                label_lines.push(super::indented(depth, node.label()));
                total_lines.push(self.amount(node.total()));
            }
            labels.push(label_lines.join("\n"));
            totals.push(total_lines.join("\n"));
        }
        [labels, totals].into_iter().collect()
    }

    pub fn to_lines(&self) -> Result<Vec<String>, table::RowCountMismatch> {
        let table = self.to_table();
        if table.width() > self.options.width {
            tracing::debug!(
                width = self.options.width,
                table_width = table.width(),
                "table exceeds display width"
            );
        }
        table.render(&self.charset)
    }

    fn amount(&self, units: base::Units) -> String {
        super::amount(&self.charset, &self.options, units)
    }
}
