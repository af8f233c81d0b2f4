//! Weighted multigraph over the stations of every line.
//!
//! Built from scratch for each query. Every section adds one edge in each
//! direction, and sections of different lines joining the same two stations
//! stay as separate parallel edges.

use std::collections::HashMap;
use std::sync::Arc;

use pathfinding::prelude::dijkstra;

use crate::identifiers::StationIdentifier;
use crate::models::types::*;

#[derive(Debug, Default)]
pub struct SectionGraph {
    stations: HashMap<StationIdentifier, Arc<Station>>,
    edges: HashMap<StationIdentifier, Vec<(StationIdentifier, u64)>>,
}

impl SectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections<'a>(sections: impl IntoIterator<Item = &'a Section>) -> Self {
        let mut graph = Self::new();
        for section in sections {
            graph.add_section(section);
        }
        graph
    }

    pub fn add_section(&mut self, section: &Section) {
        let up = section.up_station();
        let down = section.down_station();
        let weight = u64::from(section.distance().get());

        self.stations.insert(up.id.clone(), up.clone());
        self.stations.insert(down.id.clone(), down.clone());

        self.edges
            .entry(up.id.clone())
            .or_default()
            .push((down.id.clone(), weight));
        self.edges
            .entry(down.id.clone())
            .or_default()
            .push((up.id.clone(), weight));
    }

    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of sections the graph was built from
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, station: &StationIdentifier) -> bool {
        self.stations.contains_key(station)
    }

    /// Minimum-weight walk between two stations, with its total weight.
    ///
    /// `None` when either station is missing or nothing connects them.
    pub fn shortest_path(
        &self,
        source: &StationIdentifier,
        target: &StationIdentifier,
    ) -> Option<(Vec<Arc<Station>>, u64)> {
        if !self.contains(source) || !self.contains(target) {
            return None;
        }

        let (ids, weight) = dijkstra(
            source,
            |id| {
                self.edges
                    .get(id)
                    .into_iter()
                    .flatten()
                    .map(|(next, weight)| (next.clone(), *weight))
            },
            |id| id == target,
        )?;

        let stations = ids
            .iter()
            .filter_map(|id| self.stations.get(id).cloned())
            .collect();
        Some((stations, weight))
    }
}
