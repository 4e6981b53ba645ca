//! Canvas — 2D character grid for painting room outlines.

/// A 2D character grid used as a painting surface.
///
/// Writes outside the grid, including negative coordinates, are dropped.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn cell(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        (row < self.height && col < self.width).then_some((col, row))
    }

    pub fn get(&self, col: i64, row: i64) -> char {
        match self.cell(col, row) {
            Some((c, r)) => self.cells[r][c],
            None => ' ',
        }
    }

    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        if let Some((c, r)) = self.cell(col, row) {
            self.cells[r][c] = ch;
        }
    }

    /// Fill row `row` over the open column interval between `x1` and `x2`.
    pub fn hline_between(&mut self, row: i64, x1: i64, x2: i64, ch: char) {
        let (lo, hi) = open_span(x1, x2, self.width);
        for col in lo..hi {
            self.set(col, row, ch);
        }
    }

    /// Fill column `col` over the open row interval between `y1` and `y2`.
    pub fn vline_between(&mut self, col: i64, y1: i64, y2: i64, ch: char) {
        let (lo, hi) = open_span(y1, y2, self.height);
        for row in lo..hi {
            self.set(col, row, ch);
        }
    }

    /// Each row as a full-width string.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// Render every row followed by `\n`, optionally trimming trailing spaces.
    pub fn render_to_string(&self, trim_trailing: bool) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 3 + 1));
        for row in self.rows() {
            if trim_trailing {
                out.push_str(row.trim_end());
            } else {
                out.push_str(&row);
            }
            out.push('\n');
        }
        out
    }
}

/// The open interval between `a` and `b`, clipped to `0..len`.
fn open_span(a: i64, b: i64, len: usize) -> (i64, i64) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let limit = i64::try_from(len).unwrap_or(i64::MAX);
    (lo.saturating_add(1).max(0), hi.min(limit))
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string(false))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
