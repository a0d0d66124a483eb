use log::debug;

use crate::error::{Result, SolverError};
use crate::graph::CompleteGraph;
use crate::tsp::{Tour, trivial_tour};
use crate::types::{Km, Mask, NodeIndex};
use crate::utils::Matrix2;

/// Largest city count the bitmask tables are built for.
pub const MAX_HELD_KARP_CITIES: usize = 20;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Rows and padded columns of the tables for `n >= 2` cities.
fn table_shape(n: usize) -> (usize, usize) {
    let shift = usize::BITS - (n - 1).leading_zeros();
    (1usize << n, 1usize << shift)
}

/// Cost and predecessor tables keyed by `(mask, last)`.
///
/// Rows are masks and each row is padded to a power of two, so the flat
/// index is `(mask << ceil(log2 n)) | last`.
struct StateTable {
    cost: Matrix2<Km>,
    predecessor: Matrix2<u8>,
}

impl StateTable {
    fn new(n: usize) -> Result<Self> {
        let (rows, cols) = table_shape(n);
        Ok(StateTable {
            cost: Matrix2::try_new(rows, cols, Km::INFINITY)?,
            predecessor: Matrix2::try_new(rows, cols, NO_PREDECESSOR)?,
        })
    }

    #[inline(always)]
    fn cost(&self, mask: Mask, last: NodeIndex) -> Km {
        *self.cost.get(mask.raw() as usize, last)
    }

    #[inline(always)]
    fn predecessor(&self, mask: Mask, last: NodeIndex) -> Option<NodeIndex> {
        match *self.predecessor.get(mask.raw() as usize, last) {
            NO_PREDECESSOR => None,
            p => Some(p as NodeIndex),
        }
    }

    #[inline(always)]
    fn relax(&mut self, mask: Mask, last: NodeIndex, cost: Km, from: NodeIndex) {
        let row = mask.raw() as usize;
        if cost < *self.cost.get(row, last) {
            self.cost.set(row, last, cost);
            self.predecessor.set(row, last, from as u8);
        }
    }
}

/// Exact TSP by dynamic programming over visited subsets.
///
/// Ties are resolved towards the first relaxation seen and the lowest
/// terminal node, since every comparison is strict.
pub fn solve_held_karp(graph: &CompleteGraph, start: NodeIndex) -> Result<Tour> {
    if let Some(tour) = trivial_tour(graph, start)? {
        return Ok(tour);
    }

    let n = graph.len();
    if n > MAX_HELD_KARP_CITIES {
        return Err(SolverError::invalid_argument(format!(
            "Held-Karp supports at most {} cities, got {}",
            MAX_HELD_KARP_CITIES, n
        )));
    }

    let mut table = StateTable::new(n)?;
    let start_mask = Mask::singleton(start);
    *table.cost.get_mut(start_mask.raw() as usize, start) = 0.0;

    let mut masks: Vec<Mask> = (0u32..(1 << n))
        .map(Mask::from_raw)
        .filter(|mask| mask.contains(start))
        .collect();
    masks.sort_by_key(|mask| mask.count());

    for &mask in &masks {
        for last in mask.members() {
            let current = table.cost(mask, last);
            if current == Km::INFINITY {
                continue;
            }
            for next in (0..n).filter(|&next| !mask.contains(next)) {
                table.relax(mask.with(next), next, current + graph.distance(last, next), last);
            }
        }
    }

    let full = Mask::full(n);
    let mut min_cost = Km::INFINITY;
    let mut last_node = None;

    for i in (0..n).filter(|&i| i != start) {
        let cost = table.cost(full, i);
        if cost == Km::INFINITY {
            continue;
        }
        let total = cost + graph.distance(i, start);
        if total < min_cost {
            min_cost = total;
            last_node = Some(i);
        }
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut node = last_node;
    while let Some(current) = node {
        order.push(current);
        node = table.predecessor(mask, current);
        mask = mask.without(current);
    }
    order.reverse();

    debug!(
        "held_karp: n={} states={} best={:.3}",
        n,
        masks.len() * n,
        min_cost
    );

    Ok(Tour {
        order,
        total_distance_km: min_cost,
    })
}
