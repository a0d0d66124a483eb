use std::collections::HashMap;
use std::fmt;
use std::fmt::Write as _;

use log::debug;

use crate::graph::geo::haversine_km;
use crate::types::{City, CityId, Km, NodeIndex};
use crate::utils::Matrix2;

/// Distance function between two cities.
pub type Metric = fn(&City, &City) -> f64;

/// Number of rows/cols of the distance matrix shown by `format`.
const MATRIX_SAMPLE: usize = 6;
const DEFAULT_MAX_NEIGHBORS: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub index: NodeIndex,
    pub id: CityId,
    pub weight: Km,
}

/// Complete weighted graph over a list of cities.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteGraph {
    nodes: Vec<City>,
    id_to_index: HashMap<CityId, NodeIndex>,
    distance_matrix: Matrix2<f64>,
    adjacency_list: Vec<Vec<Neighbor>>,
}

/// Builds the complete graph with great-circle distances.
pub fn build_complete_graph(cities: Vec<City>) -> CompleteGraph {
    CompleteGraph::build_with(cities, haversine_km)
}

impl CompleteGraph {
    /// Builds the complete graph using `metric` for every pair.
    ///
    /// Each unordered pair is measured once and mirrored, so the matrix is
    /// symmetric with a zero diagonal regardless of `metric`. When two cities
    /// share an id the later one wins in the id lookup.
    pub fn build_with(cities: Vec<City>, metric: Metric) -> Self {
        let n = cities.len();
        let mut distance_matrix = Matrix2::new(n, n, 0.0);

        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric(&cities[i], &cities[j]);
                distance_matrix.set(i, j, d);
                distance_matrix.set(j, i, d);
            }
        }

        let id_to_index = cities
            .iter()
            .enumerate()
            .map(|(index, city)| (city.id, index))
            .collect();

        let adjacency_list = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .map(|j| Neighbor {
                        index: j,
                        id: cities[j].id,
                        weight: *distance_matrix.get(i, j),
                    })
                    .collect()
            })
            .collect();

        debug!("Built complete graph with {} nodes", n);

        CompleteGraph {
            nodes: cities,
            id_to_index,
            distance_matrix,
            adjacency_list,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[City] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> &City {
        &self.nodes[index]
    }

    pub fn index_of(&self, id: CityId) -> Option<NodeIndex> {
        self.id_to_index.get(&id).copied()
    }

    #[inline(always)]
    pub fn distance(&self, from: NodeIndex, to: NodeIndex) -> Km {
        *self.distance_matrix.get(from, to)
    }

    pub fn distance_matrix(&self) -> &Matrix2<f64> {
        &self.distance_matrix
    }

    pub fn distance_by_id(&self, from: CityId, to: CityId) -> Option<Km> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        Some(self.distance(from, to))
    }

    /// Every other node, in index order.
    pub fn neighbors(&self, index: NodeIndex) -> &[Neighbor] {
        &self.adjacency_list[index]
    }

    /// Readable dump: node table, neighbor lists truncated to
    /// `max_neighbors`, and the top-left corner of the distance matrix.
    pub fn format(&self, max_neighbors: usize) -> String {
        let n = self.len();
        let mut out = String::new();

        let _ = writeln!(out, "CompleteGraph: {} nodes", n);
        let _ = writeln!(out, "Index  Id     Name (lat,lng)");
        for (i, node) in self.nodes.iter().enumerate() {
            let name = node.name.as_deref().map(|s| format!(" {}", s)).unwrap_or_default();
            let _ = writeln!(
                out,
                "{:<6} {:<6}{} ({:.4},{:.4})",
                i, node.id, name, node.lat, node.lng
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Adjacency (neighbors):");
        for (i, neighbors) in self.adjacency_list.iter().enumerate() {
            let parts: Vec<String> = neighbors
                .iter()
                .take(max_neighbors)
                .map(|nb| format!("{}[{}]({:.2}km)", nb.id, nb.index, nb.weight))
                .collect();
            let more = if neighbors.len() > max_neighbors {
                format!(" ... (+{})", neighbors.len() - max_neighbors)
            } else {
                String::new()
            };
            let _ = writeln!(out, "{} ({}) -> {}{}", i, self.nodes[i].id, parts.join(", "), more);
        }

        let sample = n.min(MATRIX_SAMPLE);
        let _ = writeln!(out);
        let _ = writeln!(out, "Distance matrix (km), first {} rows/cols:", sample);
        let header: Vec<String> = std::iter::once("idx".to_string())
            .chain((0..sample).map(|j| j.to_string()))
            .collect();
        let _ = write!(out, "{}", header.join("\t"));
        for i in 0..sample {
            let row: Vec<String> = std::iter::once(i.to_string())
                .chain((0..sample).map(|j| format!("{:.2}", self.distance(i, j))))
                .collect();
            let _ = write!(out, "\n{}", row.join("\t"));
        }

        out
    }
}

impl fmt::Display for CompleteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_MAX_NEIGHBORS))
    }
}
