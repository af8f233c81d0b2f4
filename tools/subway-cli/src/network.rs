use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use subway_network::prelude::*;

/// On-disk description of a whole network
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationEntry>,
    pub lines: Vec<LineEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StationEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineEntry {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Sections in chain order
    pub sections: Vec<api_types::SectionRequest>,
}

/// Read and parse a network file
pub fn read_network(path: &Path) -> Result<NetworkFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a network file as pretty-printed JSON
pub fn write_network(network: &NetworkFile, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(network)?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote network to {}", path.display());
    Ok(())
}

impl NetworkFile {
    /// Build an in-memory provider.
    ///
    /// Each line is created from its first section and the rest are inserted
    /// one by one, so the file goes through the same checks as live edits.
    pub fn into_provider(self) -> Result<InMemorySubwayProvider> {
        let mut provider = InMemorySubwayProvider::new();
        for station in self.stations {
            provider.add_station(Station::new(station.id, station.name));
        }

        for entry in self.lines {
            let mut sections = entry.sections.iter();
            let first = sections
                .next()
                .with_context(|| format!("Line {} has no sections", entry.id))?;
            let mut line = Line::new(
                entry.id.as_str(),
                &entry.name,
                &entry.color,
                resolve(&provider, &first.up_station_id)?,
                resolve(&provider, &first.down_station_id)?,
                first.distance,
            )
            .with_context(|| format!("Invalid first section on line {}", entry.id))?;

            for section in sections {
                line.add_section(
                    resolve(&provider, &section.up_station_id)?,
                    resolve(&provider, &section.down_station_id)?,
                    section.distance,
                )
                .with_context(|| {
                    format!(
                        "Invalid section {} -> {} on line {}",
                        section.up_station_id, section.down_station_id, entry.id
                    )
                })?;
            }

            log::debug!("Loaded line {} with {} sections", entry.id, line.size());
            provider.insert_line(line)?;
        }

        log::info!(
            "Loaded {} stations, {} lines",
            provider.all_stations().len(),
            provider.all_lines().len()
        );
        Ok(provider)
    }

    /// Snapshot a provider, writing sections in chain order
    pub fn from_provider(provider: &InMemorySubwayProvider) -> Self {
        let stations = provider
            .all_stations()
            .iter()
            .map(|s| StationEntry {
                id: s.id.to_string(),
                name: s.name.to_string(),
            })
            .collect();

        let lines = provider
            .all_lines()
            .into_iter()
            .map(|line| LineEntry {
                id: line.id.to_string(),
                name: line.name.to_string(),
                color: line.color.to_string(),
                sections: line
                    .sections()
                    .iter()
                    .map(|s| {
                        api_types::SectionRequest::new(
                            s.up_station().id.as_str(),
                            s.down_station().id.as_str(),
                            s.distance().get(),
                        )
                    })
                    .collect(),
            })
            .collect();

        Self { stations, lines }
    }
}

fn resolve(provider: &InMemorySubwayProvider, id: &str) -> Result<std::sync::Arc<Station>> {
    provider
        .get_station(&id.into())
        .with_context(|| format!("Unknown station {id}"))
}
