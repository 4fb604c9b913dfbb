//! Compiled step types for path queries.

use regex::Regex;

/// A compiled pattern matched against a single path segment name.
///
/// The regex is always anchored at both ends, so a pattern only ever
/// matches a whole segment, never a substring of one.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The segment text as written in the query.
    source: String,
    regex: Regex,
}

impl Pattern {
    pub(crate) fn new(source: &str, regex: Regex) -> Self {
        Self {
            source: source.to_string(),
            regex,
        }
    }

    /// Returns the segment text this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the anchored regular expression used for matching.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns true if `name` matches this pattern in full.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.regex.as_str() == other.regex.as_str()
    }
}

/// One compiled segment of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Empty or `.` segment - stays where it is
    SameDir,
    /// `..` segment - undoes the previous step
    ParentDir,
    /// `*` segment - any one child
    ChildOf,
    /// `**` segment - any number of descendant levels, including zero
    DescendantOf,
    /// Any other segment, matched against one path segment name
    Literal(Pattern),
}

impl Step {
    /// Returns true for the directive steps (everything except `Literal`).
    pub fn is_directive(&self) -> bool {
        !matches!(self, Step::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(source: &str, re: &str) -> Pattern {
        Pattern::new(source, Regex::new(re).unwrap())
    }

    #[test]
    fn test_pattern_matches_whole_name() {
        let p = pattern("calc", "^(?:calc)$");
        assert!(p.is_match("calc"));
        assert!(!p.is_match("calc.exe"));
        assert_eq!(p.source(), "calc");
    }

    #[test]
    fn test_pattern_equality_uses_source_and_regex() {
        assert_eq!(pattern("a", "^(?:a)$"), pattern("a", "^(?:a)$"));
        assert_ne!(pattern("a", "^(?:a)$"), pattern("a", "^(?i:a)$"));
    }

    #[test]
    fn test_is_directive() {
        assert!(Step::SameDir.is_directive());
        assert!(Step::DescendantOf.is_directive());
        assert!(!Step::Literal(pattern("x", "^x$")).is_directive());
    }
}
