//! Tag name matching by shell glob

use super::TagPredicate;
use crate::error::{PrunerError, Result};
use crate::registry::types::Tag;
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Matches tags whose name fits a glob (`*`, `?`, `[...]`, `[!...]`)
#[derive(Debug, Clone)]
pub struct NamePattern {
    pattern: Pattern,
}

impl NamePattern {
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl TagPredicate for NamePattern {
    fn matches(&self, tag: &Tag) -> bool {
        self.pattern.matches_with(&tag.name, MATCH_OPTIONS)
    }
}

/// Build a name predicate; invalid glob syntax is rejected up front
pub fn by_name_pattern(pattern: &str) -> Result<NamePattern> {
    let glob = Pattern::new(&collapse_stars(pattern))
        .map_err(|e| PrunerError::Pattern(format!("Invalid tag pattern {:?}: {}", pattern, e)))?;
    Ok(NamePattern { pattern: glob })
}

// Tag names have no path components, so `**` is just `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut collapsed = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}
