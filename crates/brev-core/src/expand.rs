//! The expansion orchestrator: tokenize, match, render, splice.

use crate::config::Config;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::pattern::PatternCache;
use crate::render::Renderer;
use crate::shell::{ShellExecutor, SystemShell};
use crate::token;

/// The editor buffer split at the cursor.
#[derive(Debug, Clone)]
pub struct ExpandRequest {
    pub left_buffer: String,
    pub right_buffer: String,
}

/// The rewritten buffer. `cursor_offset` is an absolute offset into
/// `new_left_buffer`; the embedding editor should only honor it when
/// `set_cursor` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandResult {
    pub new_left_buffer: String,
    pub new_right_buffer: String,
    pub cursor_offset: usize,
    pub has_expansion: bool,
    pub set_cursor: bool,
}

/// One-shot expansion engine over a borrowed rule list. The pattern cache
/// lives as long as the expander; rules are read-only for its lifetime.
pub struct Expander<'a> {
    config: &'a Config,
    cache: PatternCache,
    shell: Box<dyn ShellExecutor>,
}

impl<'a> Expander<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_shell(config, Box::new(SystemShell))
    }

    /// Construct with an explicit shell capability (used by tests).
    pub fn with_shell(config: &'a Config, shell: Box<dyn ShellExecutor>) -> Self {
        Self {
            config,
            cache: PatternCache::new(),
            shell,
        }
    }

    /// Decide whether the word just typed should be replaced, and if so
    /// produce the rewritten line and cursor position. A rendered snippet is
    /// never re-scanned for further matches.
    pub fn expand(&self, request: ExpandRequest) -> Result<ExpandResult> {
        let (word, word_start) = token::word_before_cursor(&request.left_buffer);
        if word.is_empty() {
            return Ok(Self::pass_through(request));
        }

        let matcher = Matcher::new(
            &self.config.abbreviations,
            &self.cache,
            self.shell.as_ref(),
        );
        let matched = match matcher.find_match(word, word_start, &request.left_buffer) {
            Some(matched) => matched,
            None => return Ok(Self::pass_through(request)),
        };

        let renderer = Renderer::new(&self.cache, self.shell.as_ref());
        let rendered = renderer.render(matched.abbr, &matched.candidate)?;

        let mut new_left = String::with_capacity(
            request.left_buffer.len() + rendered.text.len(),
        );
        new_left.push_str(&request.left_buffer[..matched.start]);
        new_left.push_str(&rendered.text);
        new_left.push_str(&request.left_buffer[matched.end..]);

        let (cursor_offset, set_cursor) = match rendered.cursor {
            Some(marker) => (matched.start + marker, true),
            None => (new_left.len(), false),
        };

        Ok(ExpandResult {
            new_left_buffer: new_left,
            new_right_buffer: request.right_buffer,
            cursor_offset,
            has_expansion: true,
            set_cursor,
        })
    }

    fn pass_through(request: ExpandRequest) -> ExpandResult {
        ExpandResult {
            cursor_offset: request.left_buffer.len(),
            new_left_buffer: request.left_buffer,
            new_right_buffer: request.right_buffer,
            has_expansion: false,
            set_cursor: false,
        }
    }
}
