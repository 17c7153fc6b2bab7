pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Entries that carry text, in their original order and spelling.
pub fn non_blank(values: &[String]) -> Vec<String> {
    values.iter().filter(|v| !is_blank(v)).cloned().collect()
}

/// Entries that carry text, trimmed.
pub fn non_blank_trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn blank_slots(count: usize) -> Vec<String> {
    vec![String::new(); count]
}

/// Pads a decoded list so the editor always has a minimal skeleton to work with.
pub fn or_placeholders(values: Vec<String>, count: usize) -> Vec<String> {
    if values.is_empty() {
        blank_slots(count)
    } else {
        values
    }
}

/// Splits a comma separated answer list, trimming pieces and dropping empty ones.
pub fn split_answers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
