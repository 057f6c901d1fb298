//! Leader-name canonicalization.

/// Canonicalize a raw leader cell.
///
/// Drops parenthesized annotations, strips a leading role tag of the form
/// `<letter><digits?>:` ("P1:", "A:"), and resolves joint-worship values
/// ("Anna / Ben") to the first listed leader. Returns the trimmed remainder,
/// which may be empty; the caller decides how to bucket empty leaders.
pub fn canonicalize_leader(raw: &str) -> String {
    let without_annotations = strip_parenthesized(raw);
    let without_tag = strip_role_tag(without_annotations.trim());
    let first = without_tag.split(['/', '&']).next().unwrap_or("");
    first.trim().to_string()
}

fn strip_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '(' | '（' => depth += 1,
            ')' | '）' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Strip a leading role code: one ASCII uppercase letter, optional digits,
/// a colon, optional following space.
fn strip_role_tag(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return text;
    }
    let mut idx = 1;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    if idx < bytes.len() && bytes[idx] == b':' {
        text[idx + 1..].trim_start()
    } else {
        text
    }
}
