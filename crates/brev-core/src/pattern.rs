use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use regex::Regex;

/// Memoizes compiled regular expressions by their source text so repeated
/// rule scans within one invocation compile each pattern once.
///
/// An explicit instance rather than a process-wide singleton; the expander
/// owns one per invocation and tests can construct isolated caches.
#[derive(Default)]
pub struct PatternCache {
    compiled: RwLock<HashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern`, returning the cached instance on a repeat lookup.
    pub fn compile(&self, pattern: &str) -> std::result::Result<Arc<Regex>, regex::Error> {
        {
            let cache = self.compiled.read().expect("pattern cache lock poisoned");
            if let Some(regex) = cache.get(pattern) {
                return Ok(Arc::clone(regex));
            }
        }

        let regex = Arc::new(Regex::new(pattern)?);

        let mut cache = self.compiled.write().expect("pattern cache lock poisoned");
        let entry = cache
            .entry(pattern.to_string())
            .or_insert_with(|| Arc::clone(&regex));
        Ok(Arc::clone(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_share_one_compilation() {
        let cache = PatternCache::new();
        let first = cache.compile(r"^git\s").expect("valid pattern");
        let second = cache.compile(r"^git\s").expect("valid pattern");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn distinct_patterns_get_distinct_entries() {
        let cache = PatternCache::new();
        let a = cache.compile(r"foo").expect("valid pattern");
        let b = cache.compile(r"bar").expect("valid pattern");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let cache = PatternCache::new();
        assert!(cache.compile(r"(unclosed").is_err());
        // A failed compile must not poison later lookups.
        assert!(cache.compile(r"ok").is_ok());
    }
}
