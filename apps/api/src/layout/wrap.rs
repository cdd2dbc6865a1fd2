//! Text Flow Engine: greedy word wrap against a per-line character budget.
//!
//! Lengths are counted in characters, not rendered width: guide body text is set at a
//! fixed size. A word longer than the budget is emitted on its own line, never split.

/// Wraps `text` into lines of at most `max_chars` characters.
///
/// Words are split on any whitespace and re-joined with single spaces. An empty or
/// whitespace-only input returns an empty vector.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            // Line is full: emit it and start the next one with this word.
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
