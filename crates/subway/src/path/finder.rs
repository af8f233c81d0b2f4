//! Shortest path queries across every line of the network.

use tracing::debug;

use crate::models::traits::LineProvider;
use crate::models::types::*;
use crate::path::graph::SectionGraph;

/// Finds the shortest route between two stations
pub trait PathFinder {
    fn shortest_path(&self, source: &Station, target: &Station) -> Result<Path>;
}

/// Dijkstra over a graph rebuilt from the provider's lines on every query
pub struct DijkstraPathFinder<'a> {
    lines: &'a dyn LineProvider,
}

impl<'a> DijkstraPathFinder<'a> {
    pub fn new(lines: &'a dyn LineProvider) -> Self {
        Self { lines }
    }

    fn build_graph(&self) -> SectionGraph {
        SectionGraph::from_sections(
            self.lines
                .all_lines()
                .into_iter()
                .flat_map(|line| line.sections()),
        )
    }
}

impl PathFinder for DijkstraPathFinder<'_> {
    fn shortest_path(&self, source: &Station, target: &Station) -> Result<Path> {
        if source == target {
            return Err(SubwayError::InvalidSourceTarget(source.id.clone()));
        }

        let graph = self.build_graph();
        debug!(
            stations = graph.vertex_count(),
            sections = graph.edge_count(),
            "built section graph"
        );

        let (stations, distance) = graph
            .shortest_path(&source.id, &target.id)
            .ok_or_else(|| SubwayError::PathNotFound {
                from: source.id.clone(),
                to: target.id.clone(),
            })?;

        debug!(source = %source.id, target = %target.id, distance, "found shortest path");
        Ok(Path { stations, distance })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{Line, LineRepository};
    use crate::provider::InMemorySubwayProvider;

    fn station(id: &str) -> Arc<Station> {
        Arc::new(Station::new(id, id))
    }

    #[test]
    fn test_shortcut_on_another_line_wins() {
        let a = station("a");
        let b = station("b");
        let c = station("c");
        let mut provider = InMemorySubwayProvider::new();
        let mut long = Line::new("1", "long", "blue", a.clone(), b.clone(), 10).unwrap();
        long.add_section(b.clone(), c.clone(), 10).unwrap();
        provider.insert_line(long).unwrap();
        provider
            .insert_line(Line::new("2", "short", "red", a.clone(), c.clone(), 5).unwrap())
            .unwrap();

        let path = DijkstraPathFinder::new(&provider).shortest_path(&a, &c).unwrap();

        assert_eq!(path.stations, vec![a, c]);
        assert_eq!(path.distance, 5);
    }

    #[test]
    fn test_transfer_between_lines() {
        let a = station("a");
        let b = station("b");
        let c = station("c");
        let d = station("d");
        let mut provider = InMemorySubwayProvider::new();
        provider
            .insert_line(Line::new("1", "one", "blue", a.clone(), b.clone(), 3).unwrap())
            .unwrap();
        let mut two = Line::new("2", "two", "red", c.clone(), b.clone(), 4).unwrap();
        two.add_section(b.clone(), d.clone(), 2).unwrap();
        provider.insert_line(two).unwrap();

        let path = DijkstraPathFinder::new(&provider).shortest_path(&a, &d).unwrap();

        assert_eq!(path.stations, vec![a, b, d]);
        assert_eq!(path.distance, 5);
    }

    #[test]
    fn test_disconnected_stations() {
        let a = station("a");
        let b = station("b");
        let c = station("c");
        let d = station("d");
        let mut provider = InMemorySubwayProvider::new();
        provider
            .insert_line(Line::new("1", "one", "blue", a.clone(), b, 3).unwrap())
            .unwrap();
        provider
            .insert_line(Line::new("2", "two", "red", c, d.clone(), 3).unwrap())
            .unwrap();

        let result = DijkstraPathFinder::new(&provider).shortest_path(&a, &d);

        assert!(matches!(result, Err(SubwayError::PathNotFound { .. })));
    }

    #[test]
    fn test_station_without_sections_has_no_path() {
        let a = station("a");
        let b = station("b");
        let mut provider = InMemorySubwayProvider::new();
        provider
            .insert_line(Line::new("1", "one", "blue", a.clone(), b, 3).unwrap())
            .unwrap();

        let result = DijkstraPathFinder::new(&provider).shortest_path(&a, &station("lonely"));

        assert!(matches!(result, Err(SubwayError::PathNotFound { .. })));
    }

    #[test]
    fn test_same_source_and_target() {
        let a = station("a");
        let empty = InMemorySubwayProvider::new();

        let result = DijkstraPathFinder::new(&empty).shortest_path(&a, &a);

        assert!(matches!(result, Err(SubwayError::InvalidSourceTarget(_))));
    }

    #[test]
    fn test_graph_reflects_latest_sections() {
        let a = station("a");
        let b = station("b");
        let c = station("c");
        let mut provider = InMemorySubwayProvider::new();
        provider
            .insert_line(Line::new("1", "one", "blue", a.clone(), b.clone(), 3).unwrap())
            .unwrap();

        let before = DijkstraPathFinder::new(&provider).shortest_path(&a, &c);
        assert!(before.is_err());

        provider
            .get_line_mut(&"1".into())
            .unwrap()
            .add_section(b.clone(), c.clone(), 4)
            .unwrap();
        let after = DijkstraPathFinder::new(&provider).shortest_path(&a, &c).unwrap();

        assert_eq!(after.stations, vec![a, b, c]);
        assert_eq!(after.distance, 7);
    }
}
