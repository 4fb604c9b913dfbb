//! Query string compiler.
//!
//! Splits a query on `/` and compiles each segment into a [`Step`].

use log::debug;
use regex::RegexBuilder;

use super::ast::{Pattern, Step};
use super::dialect::Dialect;
use super::error::QueryError;

/// Compiler for query strings.
pub struct Parser<'a> {
    input: &'a str,
    dialect: Dialect,
    ignore_case: bool,
}

impl<'a> Parser<'a> {
    /// Creates a new compiler for the given query string.
    pub fn new(query: &'a str, dialect: Dialect) -> Self {
        Self {
            input: query,
            dialect,
            ignore_case: false,
        }
    }

    /// Sets whether literal segments compare case-insensitively.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Compiles a query string into its steps.
    pub fn parse(
        query: &str,
        dialect: Dialect,
        ignore_case: bool,
    ) -> Result<Vec<Step>, QueryError> {
        Parser::new(query, dialect)
            .ignore_case(ignore_case)
            .compile()
    }

    /// Compiles the input into steps, one per `/`-separated segment.
    pub fn compile(&self) -> Result<Vec<Step>, QueryError> {
        let mut steps = Vec::new();
        if self.input.is_empty() {
            return Ok(steps);
        }

        let mut offset = 0;
        for (index, segment) in self.input.split('/').enumerate() {
            steps.push(self.compile_segment(segment, index, offset)?);
            offset += segment.len() + 1;
        }

        debug!(
            "compiled {} query '{}' into {} steps",
            self.dialect,
            self.input,
            steps.len()
        );
        Ok(steps)
    }

    fn compile_segment(
        &self,
        segment: &str,
        index: usize,
        offset: usize,
    ) -> Result<Step, QueryError> {
        let step = match segment {
            "" | "." => Step::SameDir,
            ".." => Step::ParentDir,
            "*" => Step::ChildOf,
            "**" => Step::DescendantOf,
            _ => Step::Literal(self.compile_literal(segment, index, offset)?),
        };
        Ok(step)
    }

    fn compile_literal(
        &self,
        segment: &str,
        index: usize,
        offset: usize,
    ) -> Result<Pattern, QueryError> {
        let translated = self.dialect.translate(segment);
        let anchored = format!("^(?:{})$", translated);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(self.ignore_case)
            .build()
            .map_err(|e| QueryError::MalformedPattern {
                segment: segment.to_string(),
                index,
                offset,
                reason: e.to_string(),
            })?;
        Ok(Pattern::new(segment, regex))
    }
}
