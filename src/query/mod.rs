//! Path queries over arbitrary trees.
//!
//! A query is a `/`-separated list of segments, each compiled on its own.
//! The query can then test a single path ([`Query::matches`]) or search a
//! whole tree breadth-first ([`Query::find`]).
//!
//! # Supported Syntax
//!
//! - `/` - Segment separator, never matched against a name (never `\`,
//!   even on Windows)
//! - empty or `.` - Same directory, consumes nothing
//! - `..` - Parent directory, undoes the previous step
//! - `*` - Any one child
//! - `**` - Any number of descendant levels, including none
//! - anything else - A pattern for one name, in the query's [`Dialect`]
//!
//! In the regex dialect a `.` inside a segment means a literal period, so
//! `a.exe` matches `a.exe` but not `aZexe`. Write `a[.]exe` to be explicit,
//! and use `[.]` or `[.]{2}` for names that really are `.` or `..` rather
//! than directives.
//!
//! # Examples
//!
//! ```
//! use treequery::query::{Dialect, Query};
//!
//! // windows/*/*.exe - executables one level below windows
//! let query = Query::new("windows/*/*.exe", Dialect::Glob).unwrap();
//! assert!(query.matches("windows/system32/calc.exe"));
//!
//! // windows/**/calc.exe - calc.exe anywhere below windows
//! let query = Query::regex("windows/**/calc.exe").unwrap();
//! assert!(query.matches("windows/calc.exe"));
//! assert!(query.matches(&["windows", "foo", "bar", "calc.exe"]));
//! ```

pub mod ast;
pub mod dialect;
pub mod error;
pub mod evaluator;
pub mod frontier;
pub mod matcher;
pub mod parser;

pub use ast::{Pattern, Step};
pub use dialect::Dialect;
pub use error::QueryError;
pub use evaluator::Find;
pub use frontier::Frontier;
pub use matcher::PathSegments;
pub use parser::Parser;

use std::fmt;
use std::str::FromStr;

use crate::document::node::TreeNode;

/// A compiled query.
///
/// The query string and its compiled steps always agree: reassigning
/// compiles the new string first and only replaces the old state once
/// compilation has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    source: String,
    dialect: Dialect,
    ignore_case: bool,
    steps: Vec<Step>,
}

impl Query {
    /// Compiles a case-sensitive query in the given dialect.
    pub fn new(query: &str, dialect: Dialect) -> Result<Self, QueryError> {
        Self::with_ignore_case(query, dialect, false)
    }

    /// Compiles a query, optionally comparing names case-insensitively.
    pub fn with_ignore_case(
        query: &str,
        dialect: Dialect,
        ignore_case: bool,
    ) -> Result<Self, QueryError> {
        let steps = Parser::parse(query, dialect, ignore_case)?;
        Ok(Self {
            source: query.to_string(),
            dialect,
            ignore_case,
            steps,
        })
    }

    /// Compiles a query in the regex dialect.
    pub fn regex(query: &str) -> Result<Self, QueryError> {
        Self::new(query, Dialect::Regex)
    }

    /// Compiles a query in the glob dialect.
    pub fn glob(query: &str) -> Result<Self, QueryError> {
        Self::new(query, Dialect::Glob)
    }

    /// Compiles a query in the grep dialect.
    pub fn grep(query: &str) -> Result<Self, QueryError> {
        Self::new(query, Dialect::Grep)
    }

    /// Compiles a query in the literal-path dialect.
    pub fn literal(query: &str) -> Result<Self, QueryError> {
        Self::new(query, Dialect::Literal)
    }

    /// Replaces the query string, keeping the dialect.
    ///
    /// On error the query is left exactly as it was.
    pub fn reassign(&mut self, query: &str, ignore_case: bool) -> Result<(), QueryError> {
        *self = Self::with_ignore_case(query, self.dialect, ignore_case)?;
        Ok(())
    }

    /// Returns the query as written.
    pub fn query_string(&self) -> &str {
        &self.source
    }

    /// Returns the dialect literal segments were compiled in.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns true if names are compared case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Returns the compiled steps, one per segment.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Checks whether a path matches this query.
    ///
    /// The path can be a `/`-delimited string or a list of segment names.
    pub fn matches<P: PathSegments + ?Sized>(&self, path: &P) -> bool {
        self.try_matches(path).unwrap_or(false)
    }

    /// Like [`matches`](Self::matches), but reports a `..` that climbs
    /// above the start of the path as [`QueryError::EmptyPathUnderflow`].
    pub fn try_matches<P: PathSegments + ?Sized>(&self, path: &P) -> Result<bool, QueryError> {
        matcher::match_segments(&self.steps, &path.to_segments())
    }

    /// Checks whether a node's path, derived from its ancestry, matches.
    pub fn matches_node<N: TreeNode>(&self, node: &N) -> bool {
        matcher::match_segments(&self.steps, &node.path_segments()).unwrap_or(false)
    }

    /// Finds every node under `start` whose path matches, breadth-first.
    ///
    /// A query with no segments yields only `start` itself.
    pub fn find<N: TreeNode>(&self, start: N) -> Find<'_, N> {
        self.find_with(start, Frontier::new())
    }

    /// Like [`find`](Self::find), but continues from an existing frontier,
    /// skipping every node it has already visited.
    pub fn find_with<N: TreeNode>(&self, start: N, frontier: Frontier<N>) -> Find<'_, N> {
        Find::new(&self.steps, start, frontier)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Query {
    type Err = QueryError;

    /// Parses a case-sensitive regex-dialect query.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::regex(s)
    }
}
