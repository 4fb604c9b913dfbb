//! Direct path matching.
//!
//! The matcher aligns compiled steps against path segments with two
//! cursors. A step followed later by a `..` that undoes it is a detour: it
//! never lines up with a path segment, so `a/b/../c` describes the path
//! `a/c`. Detours are counted rather than matched, which keeps the state
//! to `(step, segment, detour depth)` and lets failed states be memoized.

use std::collections::HashSet;

use super::ast::Step;
use super::error::QueryError;

/// Something that can be split into path segments for matching.
///
/// Empty segments carry no position and are dropped, the same way empty
/// query segments compile to a no-op step.
pub trait PathSegments {
    /// Returns the non-empty segments in root-to-leaf order.
    fn to_segments(&self) -> Vec<String>;
}

impl PathSegments for str {
    fn to_segments(&self) -> Vec<String> {
        self.split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl PathSegments for String {
    fn to_segments(&self) -> Vec<String> {
        self.as_str().to_segments()
    }
}

impl<S: AsRef<str>> PathSegments for [S] {
    fn to_segments(&self) -> Vec<String> {
        self.iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S: AsRef<str>> PathSegments for Vec<S> {
    fn to_segments(&self) -> Vec<String> {
        self.as_slice().to_segments()
    }
}

impl<S: AsRef<str>, const N: usize> PathSegments for [S; N] {
    fn to_segments(&self) -> Vec<String> {
        self.as_slice().to_segments()
    }
}

/// Tests whether `path` satisfies `steps` in full.
///
/// Returns `Ok(false)` when the path simply does not match, including when
/// it runs out of segments. Returns [`QueryError::EmptyPathUnderflow`] only
/// when no alignment matches and at least one was cut short by a `..` with
/// nothing left to climb out of.
pub fn match_segments<S: AsRef<str>>(steps: &[Step], path: &[S]) -> Result<bool, QueryError> {
    let mut matcher = Matcher::new(steps, path);
    if matcher.run(0, 0, 0) {
        return Ok(true);
    }
    match matcher.underflow {
        Some(step) => Err(QueryError::EmptyPathUnderflow { step }),
        None => Ok(false),
    }
}

struct Matcher<'a, S> {
    steps: &'a [Step],
    path: &'a [S],
    /// Number of `..` steps after each step index.
    parents_after: Vec<usize>,
    failed: HashSet<(usize, usize, usize)>,
    underflow: Option<usize>,
}

impl<'a, S: AsRef<str>> Matcher<'a, S> {
    fn new(steps: &'a [Step], path: &'a [S]) -> Self {
        let mut parents_after = vec![0; steps.len()];
        let mut count = 0;
        for (i, step) in steps.iter().enumerate().rev() {
            parents_after[i] = count;
            if *step == Step::ParentDir {
                count += 1;
            }
        }

        Self {
            steps,
            path,
            parents_after,
            failed: HashSet::new(),
            underflow: None,
        }
    }

    /// Matches `steps[step..]` with `seg` path segments consumed and
    /// `detour` pushed levels still waiting for a `..`.
    fn run(&mut self, step: usize, seg: usize, detour: usize) -> bool {
        if step == self.steps.len() {
            return detour == 0 && seg == self.path.len();
        }
        if self.failed.contains(&(step, seg, detour)) {
            return false;
        }

        let matched = self.advance(step, seg, detour);
        if !matched {
            self.failed.insert((step, seg, detour));
        }
        matched
    }

    fn advance(&mut self, step: usize, seg: usize, detour: usize) -> bool {
        let steps = self.steps;
        let remaining = self.path.len() - seg;

        match &steps[step] {
            Step::SameDir => self.run(step + 1, seg, detour),
            Step::ParentDir => {
                if detour > 0 {
                    self.run(step + 1, seg, detour - 1)
                } else if seg > 0 {
                    self.run(step + 1, seg - 1, 0)
                } else {
                    self.underflow.get_or_insert(step);
                    false
                }
            }
            Step::ChildOf | Step::Literal(_) => {
                if detour == 0
                    && remaining > 0
                    && self.accepts(step, seg)
                    && self.run(step + 1, seg + 1, 0)
                {
                    return true;
                }
                self.can_detour(step, detour) && self.run(step + 1, seg, detour + 1)
            }
            Step::DescendantOf => {
                if detour == 0 && (0..=remaining).any(|skip| self.run(step + 1, seg + skip, 0)) {
                    return true;
                }
                // Levels pushed inside a detour only matter if a later `..`
                // pops them, so never push more than can be popped.
                let spare = self.parents_after[step].saturating_sub(detour);
                let first = if detour == 0 { 1 } else { 0 };
                (first..=spare).any(|extra| self.run(step + 1, seg, detour + extra))
            }
        }
    }

    fn accepts(&self, step: usize, seg: usize) -> bool {
        match &self.steps[step] {
            Step::Literal(pattern) => pattern.is_match(self.path[seg].as_ref()),
            _ => true,
        }
    }

    fn can_detour(&self, step: usize, detour: usize) -> bool {
        self.parents_after[step] > detour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::dialect::Dialect;
    use crate::query::parser::Parser;

    fn steps(query: &str) -> Vec<Step> {
        Parser::parse(query, Dialect::Regex, false).unwrap()
    }

    fn check(query: &str, path: &str) -> bool {
        match_segments(&steps(query), &path.to_segments()).unwrap()
    }

    #[test]
    fn test_literal_path() {
        assert!(check("a/b/c", "a/b/c"));
        assert!(!check("a/b/c", "a/b"));
        assert!(!check("a/b", "a/b/c"));
        assert!(!check("a/x/c", "a/b/c"));
    }

    #[test]
    fn test_same_dir_is_a_no_op() {
        assert!(check("./a/./b/", "a/b"));
        assert!(check("/a/b", "a/b"));
    }

    #[test]
    fn test_child_of_needs_a_segment() {
        assert!(check("a/*", "a/b"));
        assert!(!check("a/*", "a"));
        assert!(check("*/*", "x/y"));
    }

    #[test]
    fn test_descendant_of_every_split() {
        assert!(check("windows/**/calc.exe", "windows/foo/bar/calc.exe"));
        assert!(check("windows/**/calc.exe", "windows/calc.exe"));
        assert!(!check("windows/**/calc.exe", "windows/foo/bar"));
        assert!(check("**", ""));
        assert!(check("**", "a/b/c"));
        assert!(check("a/**", "a"));
    }

    #[test]
    fn test_descendant_of_backtracks() {
        assert!(check("**/a/**/a", "a/a/b/a"));
        assert!(check("**/b/**", "a/b"));
        assert!(!check("**/c/**", "a/b"));
    }

    #[test]
    fn test_parent_dir_detour() {
        assert!(check("a/b/../c", "a/c"));
        assert!(!check("a/b/../c", "a/b/c"));
        assert!(check("a/b/c/../../d", "a/d"));
        assert!(check("a/../a/b", "a/b"));
    }

    #[test]
    fn test_parent_dir_underflow_is_an_error() {
        let result = match_segments(&steps("../a"), &"a".to_segments());
        assert_eq!(result, Err(QueryError::EmptyPathUnderflow { step: 0 }));
    }

    #[test]
    fn test_underflow_ignored_when_another_split_matches() {
        assert!(check("**/../x", "x"));
    }

    #[test]
    fn test_empty_steps_match_only_empty_path() {
        assert!(match_segments::<&str>(&[], &[]).unwrap());
        assert!(!match_segments(&[], &["a"]).unwrap());
    }

    #[test]
    fn test_path_segments_drop_empties() {
        assert_eq!("/a//b/".to_segments(), vec!["a", "b"]);
        assert_eq!(["", "a"].to_segments(), vec!["a"]);
        assert_eq!(vec!["x".to_string()].to_segments(), vec!["x"]);
    }
}
