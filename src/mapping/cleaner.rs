// src/mapping/cleaner.rs
//
// Normalises mapping text into the single line the controller parses.

/// Comment marker. There is no escape for it, so a literal `#` can never be sent
/// through the cleaned variant.
const COMMENT: char = '#';

/// Strip comments and blank lines and join what is left into one line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Each line loses everything from
/// the first `#`, then leading and trailing whitespace. Lines left empty are
/// dropped and the survivors are joined with a single space. The result
/// always ends in exactly one `\n`.
pub fn clean_mapping(text: &str) -> String {
    let mut cleaned = text
        .split(['\r', '\n'])
        .map(strip_comment)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    cleaned.push('\n');
    cleaned
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

// ============================================================================
// Tests
// ============================================================================
