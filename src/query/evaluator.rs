use log::trace;

use super::ast::Step;
use super::frontier::Frontier;
use super::matcher::match_segments;
use crate::document::node::TreeNode;

/// Lazy breadth-first search for nodes whose path matches a query.
///
/// Created by [`Query::find`](super::Query::find). Each call to `next`
/// pops nodes off the frontier until one matches, queueing the children of
/// every node it pops. Nodes already visited are never queued again, so the
/// search ends even when child links loop back to an ancestor.
pub struct Find<'q, N: TreeNode> {
    steps: &'q [Step],
    frontier: Frontier<N>,
    /// Pending start node for a query with no steps.
    only: Option<N>,
}

impl<'q, N: TreeNode> Find<'q, N> {
    pub(crate) fn new(steps: &'q [Step], start: N, mut frontier: Frontier<N>) -> Self {
        if steps.is_empty() {
            let only = (!frontier.is_visited(&start)).then_some(start);
            return Self {
                steps,
                frontier,
                only,
            };
        }

        frontier.push(start);
        Self {
            steps,
            frontier,
            only: None,
        }
    }

    /// The frontier as it stands between results.
    ///
    /// Fork it to start an independent search that skips everything this
    /// one has already visited.
    pub fn frontier(&self) -> &Frontier<N> {
        &self.frontier
    }

    /// Consumes the search, returning its frontier.
    pub fn into_frontier(self) -> Frontier<N> {
        self.frontier
    }

    fn is_match(&self, node: &N) -> bool {
        // A `..` that climbs past the root simply fails to match here
        match_segments(self.steps, &node.path_segments()).unwrap_or(false)
    }
}

impl<N: TreeNode> Iterator for Find<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.steps.is_empty() {
            let node = self.only.take()?;
            self.frontier.mark_visited(node.clone());
            return Some(node);
        }

        while let Some(node) = self.frontier.pop() {
            for child in node.children() {
                self.frontier.push(child);
            }
            let matched = self.is_match(&node);
            trace!("visited {} (match: {})", node.path(), matched);
            if matched {
                return Some(node);
            }
        }
        None
    }
}
