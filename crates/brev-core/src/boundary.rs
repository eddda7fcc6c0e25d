//! Locating the start of the current shell command by scanning backward for
//! the nearest command separator.

/// Shell tokens that end one command and begin another, in the order they
/// are checked. Multi-character separators are matched as substrings.
pub const COMMAND_SEPARATORS: &[&str] = &["&&", "||", ";", "|", "(", "{"];

/// A word counts as a separator when it equals one exactly or ends with one,
/// which covers operators abutting a prior word (`cmd;`).
pub fn is_separator_match(word: &str, separator: &str) -> bool {
    word == separator || word.ends_with(separator)
}

fn skip_spaces(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos < bytes.len() && bytes[pos] == b' ' {
        pos += 1;
    }
    pos
}

/// Start offset of the current command within `text`: just past the
/// rightmost separator occurrence with following spaces skipped, or the
/// first non-space offset when no separator is present.
pub fn command_start(text: &str) -> usize {
    let mut rightmost: Option<(usize, usize)> = None;

    for separator in COMMAND_SEPARATORS {
        if let Some(pos) = text.rfind(separator) {
            if rightmost.map_or(true, |(best, _)| pos > best) {
                rightmost = Some((pos, separator.len()));
            }
        }
    }

    match rightmost {
        Some((pos, len)) => skip_spaces(text, pos + len),
        None => skip_spaces(text, 0),
    }
}

/// Word-level variant used by the command-scope test: index of the first
/// word of the current command within `words`.
pub fn command_start_in_words(words: &[&str]) -> usize {
    for i in (0..words.len()).rev() {
        if COMMAND_SEPARATORS
            .iter()
            .any(|sep| is_separator_match(words[i], sep))
        {
            return i + 1;
        }
    }
    0
}
