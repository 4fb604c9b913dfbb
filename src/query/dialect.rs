//! Surface syntaxes for literal query segments.
//!
//! Every dialect shares the same segment grammar (`/` separators and the
//! whole-segment `.`, `..`, `*` and `**` directives). Dialects differ only
//! in how the remaining literal segments are turned into a regular
//! expression, which is what [`Dialect::translate`] does.

use std::fmt;
use std::str::FromStr;

use super::error::QueryError;

/// The surface syntax used for literal segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Regular expressions, with `.` meaning a literal period outside
    /// character classes.
    #[default]
    Regex,
    /// Glob patterns supporting `*` and `?`.
    Glob,
    /// POSIX basic regular expressions as accepted by grep.
    Grep,
    /// Exact text, no wildcards inside a segment.
    Literal,
}

impl Dialect {
    /// All dialects, in the order they are listed in help output.
    pub const ALL: [Dialect; 4] = [
        Dialect::Regex,
        Dialect::Glob,
        Dialect::Grep,
        Dialect::Literal,
    ];

    /// Returns the lowercase name of the dialect.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Regex => "regex",
            Dialect::Glob => "glob",
            Dialect::Grep => "grep",
            Dialect::Literal => "literal",
        }
    }

    /// Rewrites a literal segment into regular expression syntax.
    ///
    /// The result is not anchored; the compiler anchors it so that it must
    /// match the whole segment name.
    pub fn translate(self, segment: &str) -> String {
        match self {
            Dialect::Regex => regex_to_regex(segment),
            Dialect::Glob => glob_to_regex(segment),
            Dialect::Grep => grep_to_regex(segment),
            Dialect::Literal => regex::escape(segment),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QueryError::UnknownDialect(s.to_string()))
    }
}

/// Escapes every unescaped `.` that is not inside a character class.
///
/// `a.exe` becomes `a\.exe`, while `a[.]exe`, `a\.exe` and `a[.x]` are
/// left alone.
pub fn regex_to_regex(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut chars = segment.chars().peekable();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                // A leading `]` (after an optional `^`) is a literal member
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push_str("\\]");
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '.' if !in_class => out.push_str("\\."),
            _ => out.push(ch),
        }
    }

    out
}

/// Translates a glob segment: `*` is any run of characters, `?` is any one
/// character, and everything else is matched literally.
pub fn glob_to_regex(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() * 2);
    let mut buf = [0u8; 4];

    for ch in segment.chars() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }

    out
}

/// Translates a grep basic regular expression segment.
///
/// BRE spells grouping, alternation and counted repetition with a
/// backslash (`\(`, `\|`, `\{`), which this unescapes; `\<` and `\>` become
/// word boundaries and `\.` becomes `.`. Outside bracket expressions `^`
/// and `$` anchor the whole segment. Any other escape, and everything
/// inside a bracket expression, is passed through untouched.
pub fn grep_to_regex(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut chars = segment.chars().peekable();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        if in_class {
            match ch {
                '\\' => {
                    out.push('\\');
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                }
                ']' => {
                    in_class = false;
                    out.push(']');
                }
                _ => out.push(ch),
            }
            continue;
        }

        match ch {
            '\\' => match chars.next() {
                Some('<') | Some('>') => out.push_str("\\b"),
                Some(c @ ('{' | '}' | '+' | '|' | '(' | ')' | '?' | '.')) => out.push(c),
                Some(c) => {
                    out.push('\\');
                    out.push(c);
                }
                None => out.push('\\'),
            },
            '[' => {
                in_class = true;
                out.push('[');
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push_str("\\]");
                    chars.next();
                }
            }
            '^' => out.push_str("\\A"),
            '$' => out.push_str("\\z"),
            _ => out.push(ch),
        }
    }

    out
}
