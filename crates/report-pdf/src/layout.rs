//! Greedy word-wrap layout
//!
//! The wrap rules are load-bearing for golden output and are reproduced
//! exactly, including the strict `< 80` accept comparison (a word is
//! accepted only while `buffer + word` stays under the limit, so rows flush
//! at `>= 80`). Changing the comparison to `<= 80` would shift every wrapped
//! row and is deliberately not done.

/// Width limit, in characters, for a visual row.
pub const WRAP_WIDTH: usize = 80;

/// Split a report body into visual rows.
///
/// Logical lines are split on line breaks first; each is wrapped
/// independently. Blank logical lines survive as empty rows so paragraph
/// spacing is preserved.
pub fn layout_rows(body: &str) -> Vec<String> {
    body.lines().flat_map(wrap_line).collect()
}

/// Wrap a single logical line into one or more visual rows.
///
/// Lines of at most [`WRAP_WIDTH`] characters become a single row, trimmed
/// of trailing whitespace. Longer lines are split on single spaces and
/// re-accumulated greedily: before a word is appended, a buffer that would
/// reach the limit is flushed (trailing-space trimmed) and the word starts a
/// new buffer. A first word that is itself at or past the limit therefore
/// flushes an empty row before it; unsplittable tokens are emitted whole on
/// their own row rather than broken mid-word.
pub fn wrap_line(line: &str) -> Vec<String> {
    if line.chars().count() <= WRAP_WIDTH {
        return vec![line.trim_end().to_string()];
    }

    let mut rows = Vec::new();
    let mut buffer = String::new();
    for word in line.split(' ') {
        if buffer.chars().count() + word.chars().count() < WRAP_WIDTH {
            buffer.push_str(word);
            buffer.push(' ');
        } else {
            rows.push(buffer.trim_end().to_string());
            buffer.clear();
            buffer.push_str(word);
            buffer.push(' ');
        }
    }
    if !buffer.trim().is_empty() {
        rows.push(buffer.trim_end().to_string());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_is_unchanged() {
        let line = "Price action stayed within a narrow band.";
        assert_eq!(wrap_line(line), vec![line.to_string()]);
    }

    #[test]
    fn test_short_line_trailing_whitespace_trimmed() {
        assert_eq!(wrap_line("short line   "), vec!["short line".to_string()]);
    }

    #[test]
    fn test_exactly_80_chars_is_one_row() {
        let line = "x".repeat(80);
        assert_eq!(wrap_line(&line), vec![line.clone()]);
    }

    #[test]
    fn test_blank_line_produces_empty_row() {
        assert_eq!(wrap_line(""), vec![String::new()]);
    }

    #[test]
    fn test_long_line_rows_stay_under_limit() {
        let line = "word ".repeat(40);
        for row in wrap_line(line.trim_end()) {
            assert!(row.chars().count() < WRAP_WIDTH, "row too wide: {row:?}");
        }
    }

    #[test]
    fn test_wrap_coverage_preserves_words() {
        let words: Vec<String> = (0..60).map(|i| format!("token{i}")).collect();
        let line = words.join(" ");
        assert!(line.chars().count() > WRAP_WIDTH);

        let rows = wrap_line(&line);
        let rejoined: Vec<String> = rows
            .iter()
            .flat_map(|row| row.split(' '))
            .filter(|w| !w.is_empty())
            .map(ToString::to_string)
            .collect();
        assert_eq!(rejoined, words);
    }

    #[test]
    fn test_unsplittable_token_flushes_empty_row_first() {
        let line = "A".repeat(85);
        let rows = wrap_line(&line);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "");
        assert_eq!(rows[1], line);
    }

    #[test]
    fn test_flush_happens_at_exact_boundary() {
        // 79 chars + a following word must flush: 79 + len(word) >= 80.
        let first = "y".repeat(79);
        let line = format!("{first} z {}", "pad ".repeat(10).trim_end());
        let rows = wrap_line(&line);
        assert_eq!(rows[0], first);
        assert!(rows[1].starts_with('z'));
    }

    #[test]
    fn test_layout_rows_preserves_paragraph_breaks() {
        let body = "first paragraph\n\nsecond paragraph";
        assert_eq!(
            layout_rows(body),
            vec![
                "first paragraph".to_string(),
                String::new(),
                "second paragraph".to_string(),
            ]
        );
    }

    #[test]
    fn test_layout_rows_wraps_each_line_independently() {
        let long = "alpha ".repeat(20);
        let body = format!("short\n{}", long.trim_end());
        let rows = layout_rows(&body);
        assert_eq!(rows[0], "short");
        assert!(rows.len() > 2);
    }
}
