/// Column separator used between aligned cells
const GAP: &str = "  ";

/// Left-align `rows` into columns the way `column -t` does
///
/// Every column except the last is padded to its widest cell. Padding and
/// gaps are only written before a non-empty cell, so no line ends in them;
/// spaces that belong to a cell are kept.
pub fn align(rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            let mut pending = 0;
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    pending += GAP.len();
                }
                if !cell.is_empty() {
                    line.extend(std::iter::repeat_n(' ', pending));
                    line.push_str(cell);
                    pending = 0;
                }
                if col + 1 < row.len() {
                    pending += widths[col] - cell.chars().count();
                }
            }
            line
        })
        .collect()
}
