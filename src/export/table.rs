//! Plain-text table for the terminal

/// Render headers and rows as aligned columns.
///
/// Multi-line headers are laid out over several header rows.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let header_lines: Vec<Vec<&str>> = headers.iter().map(|h| h.lines().collect()).collect();
    let height = header_lines.iter().map(Vec::len).max().unwrap_or(0);

    let widths: Vec<usize> = header_lines
        .iter()
        .enumerate()
        .map(|(i, lines)| {
            let header = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let cells = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            header.max(cells)
        })
        .collect();

    let mut out = String::new();
    for line in 0..height {
        let cells = header_lines
            .iter()
            .map(|lines| lines.get(line).copied().unwrap_or(""));
        push_line(&mut out, cells, &widths);
    }

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');

    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
