use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A walk through a graph, from a start node to its last node, in traversal
/// order.
///
/// A path always holds at least one node. Extending a path allocates a new
/// one, so candidate continuations queued during a search never share
/// mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<N>", into = "Vec<N>")]
#[serde(bound(
    serialize = "N: Serialize + Clone",
    deserialize = "N: Deserialize<'de>"
))]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// Single-node path containing only `start`.
    pub fn new(start: N) -> Self {
        Self { nodes: vec![start] }
    }

    /// First node of the path.
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node of the path.
    pub fn last(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes in the path, endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; kept for parity with [`Path::len`].
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.nodes.contains(node)
    }

    /// Total cost of the path: `cost` applied to every consecutive pair,
    /// summed left to right. A single-node path costs `0.0`.
    pub fn cost<C>(&self, cost: C) -> f64
    where
        C: Fn(&N, &N) -> f64,
    {
        self.nodes
            .windows(2)
            .fold(0.0, |total, pair| total + cost(&pair[0], &pair[1]))
    }
}

impl<N: Clone> Path<N> {
    /// Copy this path into a new allocation with `next` appended.
    pub(crate) fn extend_to(&self, next: N) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);
        Self { nodes }
    }
}

impl<N> TryFrom<Vec<N>> for Path<N> {
    type Error = Error;

    fn try_from(nodes: Vec<N>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(Self { nodes })
    }
}

impl<N> From<Path<N>> for Vec<N> {
    fn from(path: Path<N>) -> Self {
        path.nodes
    }
}

impl<N> AsRef<[N]> for Path<N> {
    fn as_ref(&self) -> &[N] {
        &self.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
