use crate::base;
use crate::base::text;

/// Cells of one column, top to bottom. A cell may span several physical lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    cells: Vec<String>,
    alignment: text::Alignment,
    /// Widest visible line across all cells.
    width: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} has {got} rows, expected {want}")]
pub struct RowCountMismatch {
    pub column: usize,
    pub want: usize,
    pub got: usize,
}

impl Column {
    pub fn new(alignment: text::Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    pub fn push<S>(&mut self, cell: S)
    where
        S: Into<String>,
    {
        let cell = cell.into();
        self.width = self.width.max(text::visible_width(&cell));
        self.cells.push(cell);
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

impl<S> Extend<S> for Column
where
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        iter.into_iter().for_each(|cell| self.push(cell));
    }
}

impl FromIterator<Column> for Table {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl Table {
    /// Total width in columns, borders and padding included.
    pub fn width(&self) -> usize {
        if self.columns.is_empty() {
            return 0;
        }
        self.columns.iter().map(|c| c.width + 3).sum::<usize>() + 1
    }

    /// Number of logical rows, which every column must agree on.
    pub fn row_count(&self) -> Result<usize, RowCountMismatch> {
        let want = self.columns.first().map(Column::len).unwrap_or_default();
        match self.columns.iter().position(|c| c.len() != want) {
            Some(column) => Err(RowCountMismatch {
                column,
                want,
                got: self.columns[column].len(),
            }),
            None => Ok(want),
        }
    }

    /// Lays the table out as lines of text, without terminating newlines.
    /// Fails before producing anything if the columns disagree on row count.
    pub fn render(&self, charset: &base::Charset) -> Result<Vec<String>, RowCountMismatch> {
        let rows = self.row_count()?;
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(
            columns = self.columns.len(),
            rows,
            width = self.width(),
            "rendering table"
        );

        let mut lines = vec![self.border(charset, charset.top)];
        for i in 0..rows {
            if i > 0 {
                lines.push(self.border(charset, charset.middle));
            }
            self.draw_row(&mut lines, charset, i);
        }
        lines.push(self.border(charset, charset.bottom));
        Ok(lines)
    }

    fn border(&self, charset: &base::Charset, [left, inner, right]: [char; 3]) -> String {
        let mut s = String::with_capacity(self.width() * 3);
        s.push(left);
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                s.push(inner);
            }
            s.extend(std::iter::repeat_n(charset.horizontal, col.width + 2));
        }
        s.push(right);
        s
    }

    /// Writes as many lines as the tallest cell in row `i`. Shorter cells are
    /// padded with blank lines.
    fn draw_row(&self, lines: &mut Vec<String>, charset: &base::Charset, i: usize) {
        let cells = self
            .columns
            .iter()
            .map(|c| c.cells[i].split('\n').collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        for j in 0..height {
            let mut line = String::new();
            line.push(charset.vertical);
            for (col, sublines) in self.columns.iter().zip(cells.iter()) {
                let content = sublines.get(j).copied().unwrap_or_default();
                line.push(' ');
                line.push_str(&text::pad(content, col.width, col.alignment));
                line.push(' ');
                line.push(charset.vertical);
            }
            lines.push(line);
        }
    }
}
