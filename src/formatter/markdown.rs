use serde_json::Value;
use std::borrow::Cow;

/// Make a value safe to place inside a table cell.
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if !cell.contains(['|', '\n', '\r']) {
        return Cow::Borrowed(cell);
    }
    let folded = cell
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Cow::Owned(folded.replace('|', "\\|"))
}

/// `| a | b | c |`
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<_> = cells.iter().map(|c| escape_cell(c.as_ref())).collect();
    format!("| {} |", cells.join(" | "))
}

/// Header row plus the dash separator row
pub fn table_header(columns: &[&str]) -> [String; 2] {
    let separator: Vec<_> = columns.iter().map(|c| "-".repeat(c.len() + 2)).collect();
    [table_row(columns), format!("|{}|", separator.join("|"))]
}

/// Two-space indented JSON in source key order.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Push a `**<label>**:` heading followed by a fenced JSON block.
pub fn push_json_block(lines: &mut Vec<String>, label: &str, value: &Value) {
    lines.push(format!("**{label}**:"));
    lines.push(String::new());
    lines.push("```json".to_string());
    lines.push(pretty_json(value));
    lines.push("```".to_string());
    lines.push(String::new());
}
