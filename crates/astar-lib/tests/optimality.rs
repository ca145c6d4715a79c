//! Randomised checks against exhaustive enumeration on small graphs.

use std::collections::HashMap;

use astar_lib::{find_path, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NODES: usize = 8;
const TRIALS: u64 = 200;

/// Directed graph over points in the plane. Every edge costs at least the
/// straight-line distance between its endpoints, so that distance is an
/// admissible heuristic.
struct RandomGraph {
    positions: Vec<(f64, f64)>,
    adjacency: HashMap<usize, Vec<usize>>,
    costs: HashMap<(usize, usize), f64>,
}

impl RandomGraph {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions: Vec<(f64, f64)> = (0..NODES)
            .map(|_| (rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)))
            .collect();

        let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut costs = HashMap::new();
        for from in 0..NODES {
            for to in 0..NODES {
                if from == to || !rng.random_bool(0.3) {
                    continue;
                }
                let stretch = rng.random_range(1.0..3.0);
                let cost = straight_line(&positions, from, to) * stretch;
                adjacency.entry(from).or_default().push(to);
                costs.insert((from, to), cost);
            }
        }

        Self {
            positions,
            adjacency,
            costs,
        }
    }

    fn cost(&self, a: &usize, b: &usize) -> f64 {
        self.costs[&(*a, *b)]
    }

    fn estimate(&self, a: &usize, b: &usize) -> f64 {
        straight_line(&self.positions, *a, *b)
    }

    /// Cheapest simple path cost from `start` to `dest`, by enumeration.
    fn brute_force(&self, start: usize, dest: usize) -> Option<f64> {
        fn walk(
            graph: &RandomGraph,
            node: usize,
            dest: usize,
            visited: &mut Vec<bool>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if node == dest {
                if best.map_or(true, |b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            visited[node] = true;
            for next in graph.neighbours(&node) {
                if !visited[next] {
                    let step = graph.cost(&node, &next);
                    walk(graph, next, dest, visited, cost + step, best);
                }
            }
            visited[node] = false;
        }

        let mut best = None;
        let mut visited = vec![false; NODES];
        walk(self, start, dest, &mut visited, 0.0, &mut best);
        best
    }
}

impl Graph<usize> for RandomGraph {
    fn neighbours(&self, node: &usize) -> Vec<usize> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }
}

fn straight_line(positions: &[(f64, f64)], a: usize, b: usize) -> f64 {
    let (ax, ay) = positions[a];
    let (bx, by) = positions[b];
    ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt()
}

fn assert_optimal(graph: &RandomGraph, start: usize, dest: usize, use_heuristic: bool, seed: u64) {
    let cost = |a: &usize, b: &usize| graph.cost(a, b);
    let result = if use_heuristic {
        find_path(graph, start, dest, cost, |a: &usize, b: &usize| graph.estimate(a, b))
    } else {
        find_path(graph, start, dest, cost, |_: &usize, _: &usize| 0.0)
    };

    match (graph.brute_force(start, dest), result) {
        (None, None) => {}
        (Some(best), Some(path)) => {
            assert_eq!(path.start(), &start, "seed {seed}");
            assert_eq!(path.last(), &dest, "seed {seed}");
            for pair in path.nodes().windows(2) {
                assert!(
                    graph.costs.contains_key(&(pair[0], pair[1])),
                    "seed {seed}: path uses a missing edge {pair:?}"
                );
            }
            let found = path.cost(cost);
            assert!(
                (found - best).abs() < 1e-9,
                "seed {seed}: found cost {found}, optimum {best}"
            );
        }
        (expected, actual) => {
            panic!("seed {seed}: brute force {expected:?} but search {actual:?}")
        }
    }
}

#[test]
fn matches_exhaustive_search_with_admissible_heuristic() {
    for seed in 0..TRIALS {
        let graph = RandomGraph::generate(seed);
        assert_optimal(&graph, 0, NODES - 1, true, seed);
    }
}

#[test]
fn matches_exhaustive_search_without_heuristic() {
    for seed in 0..TRIALS {
        let graph = RandomGraph::generate(seed);
        assert_optimal(&graph, 0, NODES - 1, false, seed);
    }
}

#[test]
fn every_pair_agrees_on_a_dense_graph() {
    let graph = RandomGraph::generate(4242);
    for start in 0..NODES {
        for dest in 0..NODES {
            assert_optimal(&graph, start, dest, true, 4242);
        }
    }
}
