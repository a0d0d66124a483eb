use log::debug;

use crate::error::Result;
use crate::graph::CompleteGraph;
use crate::tsp::{Tour, trivial_tour};
use crate::types::{Km, NodeIndex};

/// Per-call search state, threaded through the recursion by `&mut`.
struct Search<'a> {
    graph: &'a CompleteGraph,
    start: NodeIndex,
    visited: Vec<bool>,
    path: Vec<NodeIndex>,
    best_cost: Km,
    best_order: Vec<NodeIndex>,
    pruned: usize,
}

impl Search<'_> {
    fn backtrack(&mut self, current: NodeIndex, current_cost: Km) {
        if current_cost >= self.best_cost {
            self.pruned += 1;
            return;
        }

        let n = self.graph.len();
        if self.path.len() == n {
            let total = current_cost + self.graph.distance(current, self.start);
            if total < self.best_cost {
                self.best_cost = total;
                self.best_order.clone_from(&self.path);
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);

            self.backtrack(next, current_cost + self.graph.distance(current, next));

            self.path.pop();
            self.visited[next] = false;
        }
    }
}

/// Exact TSP by depth-first permutation search.
///
/// A partial tour is dropped as soon as its cost reaches the best complete
/// tour found so far. Extensions are tried in ascending node index, and only
/// a strictly shorter tour replaces the incumbent, so among equal tours the
/// lexicographically first one is kept.
pub fn solve_branch_and_bound(graph: &CompleteGraph, start: NodeIndex) -> Result<Tour> {
    if let Some(tour) = trivial_tour(graph, start)? {
        return Ok(tour);
    }

    let n = graph.len();
    let mut search = Search {
        graph,
        start,
        visited: vec![false; n],
        path: Vec::with_capacity(n),
        best_cost: Km::INFINITY,
        best_order: Vec::new(),
        pruned: 0,
    };
    search.visited[start] = true;
    search.path.push(start);

    search.backtrack(start, 0.0);

    debug!(
        "branch_and_bound: n={} best={:.3} pruned={}",
        n, search.best_cost, search.pruned
    );

    Ok(Tour {
        order: search.best_order,
        total_distance_km: search.best_cost,
    })
}
