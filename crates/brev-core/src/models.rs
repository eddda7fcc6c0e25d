use serde::{Deserialize, Serialize};

/// Where in a shell command a literal trigger may appear.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Only as the first word of the current command.
    #[default]
    CommandStart,
    /// Any word position.
    Anywhere,
}

/// Optional behavior switches for an abbreviation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AbbrOptions {
    pub position: Position,
    /// Restrict expansion to when the current command starts with these words.
    pub command: Option<String>,
    /// Regular expression; replaces or constrains the literal trigger.
    pub regex: Option<String>,
    /// Honor a `%` marker in the snippet as the final cursor position.
    pub set_cursor: bool,
    /// Run the rendered snippet through the shell and use its stdout.
    pub evaluate: bool,
    /// Shell expression gating the rule; must exit zero.
    pub condition: Option<String>,
}

/// A single configured expansion rule. Declaration order in the config file
/// is priority order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Abbreviation {
    #[serde(default)]
    pub name: Option<String>,
    /// Literal trigger word; empty for pattern-only rules.
    #[serde(default)]
    pub abbr: Option<String>,
    pub snippet: String,
    #[serde(default)]
    pub options: Option<AbbrOptions>,
}

impl Abbreviation {
    /// The literal trigger, or `""` for pattern-only rules.
    pub fn trigger(&self) -> &str {
        self.abbr.as_deref().unwrap_or("")
    }

    pub fn position(&self) -> Position {
        self.options.as_ref().map(|o| o.position).unwrap_or_default()
    }

    pub fn command(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.command.as_deref())
            .filter(|c| !c.is_empty())
    }

    pub fn regex(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.regex.as_deref())
            .filter(|r| !r.is_empty())
    }

    pub fn set_cursor(&self) -> bool {
        self.options.as_ref().map(|o| o.set_cursor).unwrap_or(false)
    }

    pub fn evaluate(&self) -> bool {
        self.options.as_ref().map(|o| o.evaluate).unwrap_or(false)
    }

    pub fn condition(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.condition.as_deref())
            .filter(|c| !c.is_empty())
    }

    /// Rules without a literal trigger match on their pattern alone.
    pub fn is_pattern_only(&self) -> bool {
        self.trigger().is_empty() && self.regex().is_some()
    }

    /// A `^`-anchored pattern on a pattern-only rule is evaluated against the
    /// whole current command instead of the trailing word.
    pub fn anchored_pattern(&self) -> Option<&str> {
        if !self.trigger().is_empty() {
            return None;
        }
        self.regex().filter(|r| r.starts_with('^'))
    }
}
