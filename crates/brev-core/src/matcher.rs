//! First-match-wins rule scanning over the configured abbreviations.

use crate::boundary::{self, COMMAND_SEPARATORS};
use crate::models::{Abbreviation, Position};
use crate::pattern::PatternCache;
use crate::shell::ShellExecutor;

/// A selected rule together with the exact buffer span it replaces and the
/// text its pattern was tested against (used again for capture groups).
pub struct RuleMatch<'a> {
    pub abbr: &'a Abbreviation,
    pub start: usize,
    pub end: usize,
    pub candidate: String,
}

pub struct Matcher<'a> {
    rules: &'a [Abbreviation],
    cache: &'a PatternCache,
    shell: &'a dyn ShellExecutor,
}

impl<'a> Matcher<'a> {
    pub fn new(
        rules: &'a [Abbreviation],
        cache: &'a PatternCache,
        shell: &'a dyn ShellExecutor,
    ) -> Self {
        Self {
            rules,
            cache,
            shell,
        }
    }

    /// Scan the rules in declaration order and return the first one that
    /// passes every applicable test, or None.
    pub fn find_match(
        &self,
        word: &str,
        word_start: usize,
        left_buffer: &str,
    ) -> Option<RuleMatch<'a>> {
        for abbr in self.rules {
            if !self.matches(abbr, word, word_start, left_buffer) {
                continue;
            }
            if let Some(condition) = abbr.condition() {
                // Failing or unspawnable conditions skip the rule, never
                // the whole search.
                if !self.shell.status(condition) {
                    continue;
                }
            }
            return Some(self.locate(abbr, word, word_start, left_buffer));
        }
        None
    }

    fn matches(
        &self,
        abbr: &Abbreviation,
        word: &str,
        word_start: usize,
        left_buffer: &str,
    ) -> bool {
        if let Some(pattern) = abbr.regex() {
            // Invalid patterns are silent non-matches while scanning.
            let Ok(regex) = self.cache.compile(pattern) else {
                return false;
            };

            if abbr.trigger().is_empty() {
                if abbr.anchored_pattern().is_some() {
                    let (_, command) = current_command(left_buffer, word_start);
                    if !regex.is_match(command) {
                        return false;
                    }
                } else if !regex.is_match(word) {
                    return false;
                }
            } else if word != abbr.trigger() || !regex.is_match(word) {
                return false;
            }
        } else if word != abbr.trigger() {
            return false;
        }

        if let Some(scope) = abbr.command() {
            // A verified scope subsumes the position test for its segment.
            return self.matches_scope(scope, word_start, left_buffer);
        }

        if abbr.is_pattern_only() {
            // Pattern-only rules encode placement in the pattern itself.
            return true;
        }

        self.is_valid_position(abbr, word_start, left_buffer)
    }

    /// Require the words of the current command segment to start with the
    /// whitespace-split words of `scope`.
    fn matches_scope(&self, scope: &str, word_start: usize, left_buffer: &str) -> bool {
        let before = left_buffer[..word_start].trim();
        if before.is_empty() {
            return false;
        }

        let words: Vec<&str> = before.split_whitespace().collect();
        let expected: Vec<&str> = scope.split_whitespace().collect();
        if expected.is_empty() {
            return false;
        }

        let segment = &words[boundary::command_start_in_words(&words)..];
        segment.len() >= expected.len()
            && expected.iter().zip(segment.iter()).all(|(e, w)| e == w)
    }

    fn is_valid_position(
        &self,
        abbr: &Abbreviation,
        word_start: usize,
        left_buffer: &str,
    ) -> bool {
        if abbr.position() == Position::Anywhere {
            return true;
        }

        let before = left_buffer[..word_start].trim();
        if before.is_empty() {
            return true;
        }

        COMMAND_SEPARATORS
            .iter()
            .any(|sep| boundary::is_separator_match(before, sep))
    }

    /// The span the rendered snippet will replace. Anchored pattern-only
    /// rules replace their pattern's match bounds within the current
    /// command; every other rule replaces exactly the trailing word.
    fn locate(
        &self,
        abbr: &'a Abbreviation,
        word: &str,
        word_start: usize,
        left_buffer: &str,
    ) -> RuleMatch<'a> {
        if let Some(pattern) = abbr.anchored_pattern() {
            if let Ok(regex) = self.cache.compile(pattern) {
                let (offset, command) = current_command(left_buffer, word_start);
                if let Some(m) = regex.find(command) {
                    return RuleMatch {
                        abbr,
                        start: offset + m.start(),
                        end: offset + m.end(),
                        candidate: command.to_string(),
                    };
                }
            }
        }

        RuleMatch {
            abbr,
            start: word_start,
            end: word_start + word.len(),
            candidate: word.to_string(),
        }
    }
}

/// The current-command substring of `left_buffer` (the text from the nearest
/// separator before the trailing word through the end, trimmed) and the
/// buffer offset where it starts.
fn current_command(left_buffer: &str, word_start: usize) -> (usize, &str) {
    let start = boundary::command_start(&left_buffer[..word_start]);
    let tail = &left_buffer[start..];
    let offset = start + (tail.len() - tail.trim_start().len());
    (offset, tail.trim())
}
