mod branch_bound;
mod held_karp;

pub use branch_bound::solve_branch_and_bound;
pub use held_karp::{MAX_HELD_KARP_CITIES, solve_held_karp};

use crate::error::{Result, SolverError};
use crate::graph::CompleteGraph;
use crate::types::{City, Km, NodeIndex};

/// A closed tour: `order` starts at the start node and implicitly returns to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    pub order: Vec<NodeIndex>,
    pub total_distance_km: Km,
}

impl Tour {
    pub fn empty() -> Self {
        Tour {
            order: Vec::new(),
            total_distance_km: 0.0,
        }
    }

    /// Cities in visiting order.
    pub fn cities<'g>(&self, graph: &'g CompleteGraph) -> impl Iterator<Item = &'g City> {
        self.order.iter().map(move |&index| graph.node(index))
    }
}

/// Length of the cycle through `order`, including the closing edge.
pub fn tour_length(graph: &CompleteGraph, order: &[NodeIndex]) -> Km {
    if order.len() < 2 {
        return 0.0;
    }
    order
        .iter()
        .zip(order.iter().cycle().skip(1))
        .map(|(&from, &to)| graph.distance(from, to))
        .sum()
}

/// Handles the sizes that need no search. Returns `Ok(None)` for `n >= 3`.
fn trivial_tour(graph: &CompleteGraph, start: NodeIndex) -> Result<Option<Tour>> {
    let n = graph.len();
    if n == 0 {
        return Ok(Some(Tour::empty()));
    }
    if start >= n {
        return Err(SolverError::invalid_argument(format!(
            "start index {} out of range for {} nodes",
            start, n
        )));
    }

    match n {
        1 => Ok(Some(Tour {
            order: vec![start],
            total_distance_km: 0.0,
        })),
        2 => {
            let other = 1 - start;
            Ok(Some(Tour {
                order: vec![start, other],
                total_distance_km: graph.distance(start, other) + graph.distance(other, start),
            }))
        }
        _ => Ok(None),
    }
}
