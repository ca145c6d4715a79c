//! A* search over a caller-supplied [`Graph`].
//!
//! The frontier holds complete candidate paths ordered by `g + h`, where `g`
//! is the accumulated cost of the path and `h` the heuristic estimate from
//! its last node to the destination. Nodes are never updated in place:
//! every neighbour of an expanded node is pushed as a new candidate, and
//! candidates whose last node was already closed are discarded when popped.
//!
//! # Preconditions
//!
//! The engine does not validate its inputs. The result is the cheapest path
//! only when edge costs are non-negative and the heuristic never
//! overestimates the remaining cost. A graph that keeps producing new nodes
//! without ever reaching the destination makes the search run forever; bound
//! it in the [`Graph`] implementation if that matters.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Graph;
use crate::path::Path;
use crate::queue::PriorityQueue;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes closed (neighbours enumerated).
    pub expanded: usize,
    /// Candidate paths pushed onto the frontier, the initial one included.
    pub generated: usize,
    /// Candidates discarded on extraction because their node was closed.
    pub stale: usize,
}

/// Result of [`search`]: the cheapest path, if any, and the work done.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<N> {
    pub path: Option<Path<N>>,
    pub stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

struct Candidate<N> {
    path: Path<N>,
    cost: f64,
}

/// Find the cheapest path from `start` to `dest`.
///
/// Returns `None` when `dest` cannot be reached. When `start == dest` the
/// result is the single-node path `[start]`.
///
/// `cost(a, b)` is the transition cost between adjacent nodes and
/// `heuristic(n, dest)` estimates the remaining cost from `n`. See the module
/// documentation for the preconditions on both.
pub fn find_path<N, G, C, H>(graph: &G, start: N, dest: N, cost: C, heuristic: H) -> Option<Path<N>>
where
    N: Clone + Eq + Hash,
    G: Graph<N> + ?Sized,
    C: Fn(&N, &N) -> f64,
    H: Fn(&N, &N) -> f64,
{
    search(graph, start, dest, cost, heuristic).path
}

/// Same search as [`find_path`], also reporting [`SearchStats`].
pub fn search<N, G, C, H>(graph: &G, start: N, dest: N, cost: C, heuristic: H) -> SearchOutcome<N>
where
    N: Clone + Eq + Hash,
    G: Graph<N> + ?Sized,
    C: Fn(&N, &N) -> f64,
    H: Fn(&N, &N) -> f64,
{
    let mut closed: HashSet<N> = HashSet::new();
    let mut queue = PriorityQueue::new();
    let mut stats = SearchStats::default();

    queue.push(
        Candidate {
            path: Path::new(start),
            cost: 0.0,
        },
        0.0,
    );
    stats.generated += 1;

    while let Some(item) = queue.pop() {
        let candidate = item.value;
        let current = candidate.path.last();

        if closed.contains(current) {
            stats.stale += 1;
            tracing::trace!(
                hops = candidate.path.hop_count(),
                priority = item.priority,
                "skipping candidate ending at a closed node"
            );
            continue;
        }

        if *current == dest {
            tracing::debug!(
                expanded = stats.expanded,
                generated = stats.generated,
                stale = stats.stale,
                hops = candidate.path.hop_count(),
                cost = candidate.cost,
                "path found"
            );
            return SearchOutcome {
                path: Some(candidate.path),
                stats,
            };
        }

        closed.insert(current.clone());
        stats.expanded += 1;

        for next in graph.neighbours(current) {
            let next_cost = candidate.cost + cost(current, &next);
            let priority = next_cost + heuristic(&next, &dest);
            queue.push(
                Candidate {
                    path: candidate.path.extend_to(next),
                    cost: next_cost,
                },
                priority,
            );
            stats.generated += 1;
        }
    }

    tracing::debug!(
        expanded = stats.expanded,
        generated = stats.generated,
        stale = stats.stale,
        "frontier exhausted without reaching destination"
    );
    SearchOutcome { path: None, stats }
}
