/// Truncate a caption that exceeds `max_len` characters to its first
/// `keep_len` characters plus an ellipsis. Shorter captions pass through
/// unmodified. Counts are in characters, not bytes.
pub fn truncate_caption(text: &str, max_len: usize, keep_len: usize) -> String {
    if text.chars().count() > max_len {
        let mut truncated: String = text.chars().take(keep_len).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

/// Greedy word wrap: whole words are appended to the current line until the
/// next word would push it past `max_width` characters. A single word longer
/// than the limit gets a line of its own. Each line keeps one trailing space;
/// callers strip it when rendering.
pub fn wrap_caption(text: &str, max_width: usize) -> Vec<String> {
    if text.chars().count() <= max_width {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split(' ') {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + word_len + 1 > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(word);
        current.push(' ');
        current_len += word_len + 1;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
