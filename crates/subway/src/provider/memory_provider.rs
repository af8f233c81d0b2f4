//! In-memory subway provider.
//!
//! Holds every station and line in memory and implements the collaborator
//! traits the services need. Networks are small, so lines are kept in
//! insertion order and looked up by scanning.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::identifiers::*;
use crate::models::{line::Line, traits::*, types::*};

#[derive(Clone, Debug, Default)]
pub struct InMemorySubwayProvider {
    stations: Vec<Arc<Station>>,
    station_map: HashMap<StationIdentifier, Arc<Station>>,
    lines: Vec<Line>,
}

impl InMemorySubwayProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from stations and already assembled lines
    pub fn from_data(stations: Vec<Station>, lines: Vec<Line>) -> Result<Self> {
        let mut provider = Self::new();
        for station in stations {
            provider.add_station(station);
        }
        for line in lines {
            provider.insert_line(line)?;
        }
        Ok(provider)
    }

    /// Register a station, replacing any station with the same id
    pub fn add_station(&mut self, station: Station) -> Arc<Station> {
        let station = Arc::new(station);
        if let Some(existing) = self.stations.iter_mut().find(|s| s.id == station.id) {
            *existing = station.clone();
        } else {
            self.stations.push(station.clone());
        }
        self.station_map.insert(station.id.clone(), station.clone());
        station
    }
}

impl StationResolver for InMemorySubwayProvider {
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<Station>> {
        self.station_map.get(id).cloned()
    }

    fn all_stations(&self) -> Vec<Arc<Station>> {
        self.stations.clone()
    }
}

impl LineProvider for InMemorySubwayProvider {
    fn get_line(&self, id: &LineIdentifier) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == *id)
    }

    fn all_lines(&self) -> Vec<&Line> {
        self.lines.iter().collect()
    }
}

impl LineRepository for InMemorySubwayProvider {
    fn get_line_mut(&mut self, id: &LineIdentifier) -> Option<&mut Line> {
        self.lines.iter_mut().find(|line| line.id == *id)
    }

    fn insert_line(&mut self, line: Line) -> Result<()> {
        if self.get_line(&line.id).is_some() {
            return Err(SubwayError::LineAlreadyExists(line.id));
        }
        info!(line = %line.id, name = %line.name, "created line");
        self.lines.push(line);
        Ok(())
    }

    fn remove_line(&mut self, id: &LineIdentifier) -> Option<Line> {
        let index = self.lines.iter().position(|line| line.id == *id)?;
        info!(line = %id, "deleted line");
        Some(self.lines.remove(index))
    }
}
