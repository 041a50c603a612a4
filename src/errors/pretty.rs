/// Point a caret at a column within a source line.
pub fn underline(line: &str, column: usize) -> String {
    let mut marker = String::new();
    for _ in 1..column {
        marker.push(' ');
    }
    marker.push('^');
    format!("{}\n{}", line, marker)
}

/// Pull the offending line out of the source and underline the column.
pub fn annotate(source: &str, line: usize, column: usize) -> Option<String> {
    let text = source.lines().nth(line.checked_sub(1)?)?;
    Some(underline(text, column))
}
