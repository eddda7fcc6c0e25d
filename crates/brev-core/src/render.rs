//! Turning a matched rule into final replacement text and a cursor policy.

use crate::error::{BrevError, Result};
use crate::models::Abbreviation;
use crate::pattern::PatternCache;
use crate::shell::ShellExecutor;

/// The character in a snippet marking where the cursor should land.
pub const CURSOR_MARKER: char = '%';

/// Rendered replacement text. `cursor` is the byte offset the removed `%`
/// marker occupied, relative to the start of the text, computed before any
/// evaluation step.
pub struct RenderedSnippet {
    pub text: String,
    pub cursor: Option<usize>,
}

pub struct Renderer<'a> {
    cache: &'a PatternCache,
    shell: &'a dyn ShellExecutor,
}

impl<'a> Renderer<'a> {
    pub fn new(cache: &'a PatternCache, shell: &'a dyn ShellExecutor) -> Self {
        Self { cache, shell }
    }

    /// Render `abbr`'s snippet against `candidate`, the text its pattern
    /// matched during scanning.
    pub fn render(&self, abbr: &Abbreviation, candidate: &str) -> Result<RenderedSnippet> {
        let mut text = abbr.snippet.clone();

        if let Some(pattern) = abbr.regex() {
            // The pattern already matched while scanning; a compile failure
            // here is an invariant violation and fails loudly.
            let regex =
                self.cache
                    .compile(pattern)
                    .map_err(|source| BrevError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    })?;

            if let Some(captures) = regex.captures(candidate) {
                for name in regex.capture_names().flatten() {
                    if let Some(m) = captures.name(name) {
                        text = text.replace(&format!("${}", name), m.as_str());
                    }
                }
            }
        }

        // Marker scanning happens on the substituted text, before any
        // evaluation output replaces it.
        let mut cursor = None;
        if abbr.set_cursor() {
            if let Some(pos) = text.find(CURSOR_MARKER) {
                text.remove(pos);
                cursor = Some(pos);
            }
        }

        if abbr.evaluate() {
            let escaped = text.replace('"', "\\\"");
            let command = format!("printf '%s' \"{}\"", escaped);
            if let Ok(output) = self.shell.output(&command) {
                text = output;
            }
            // On failure the un-evaluated snippet text stands.
        }

        Ok(RenderedSnippet { text, cursor })
    }
}
