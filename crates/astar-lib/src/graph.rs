use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Neighbour enumeration for a graph whose nodes are of type `N`.
///
/// The search never stores or mutates the graph; it only asks for the
/// neighbours of the node it is expanding. Implementations may be backed by
/// an adjacency list, computed on the fly (grid offsets, generated moves), or
/// anything else. Neighbour order only affects which of several equally cheap
/// routes is returned, never whether the result is optimal.
pub trait Graph<N> {
    /// Return the neighbour nodes of `node`.
    fn neighbours(&self, node: &N) -> Vec<N>;
}

impl<N, G> Graph<N> for &G
where
    G: Graph<N> + ?Sized,
{
    fn neighbours(&self, node: &N) -> Vec<N> {
        (**self).neighbours(node)
    }
}

/// Adjacency-list adapter. Nodes without an entry have no neighbours.
impl<N, S> Graph<N> for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn neighbours(&self, node: &N) -> Vec<N> {
        self.get(node).cloned().unwrap_or_default()
    }
}
