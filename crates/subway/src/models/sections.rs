//! Ordered section chain of a single line.
//!
//! The chain is kept as a `Vec<Section>` in travel order, so for every adjacent
//! pair `sections[i].down_station() == sections[i + 1].up_station()`. Every
//! station therefore appears at most once as an up station and at most once as
//! a down station, and walking the chain never revisits a station.
//!
//! All operations validate before touching the vector: a rejected call leaves
//! the chain exactly as it was.

use std::sync::Arc;

use tracing::debug;

use crate::models::types::*;

/// Where an accepted insertion lands in the chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Prepend,
    Append,
    /// Split the section at this index, new section takes its up station
    SplitFront(usize),
    /// Split the section at this index, new section takes its down station
    SplitBack(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// A chain always starts with one section
    pub fn new(first: Section) -> Self {
        Self {
            sections: vec![first],
        }
    }

    pub fn size(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn first_station(&self) -> Option<&Arc<Station>> {
        self.sections.first().map(Section::up_station)
    }

    pub fn last_station(&self) -> Option<&Arc<Station>> {
        self.sections.last().map(Section::down_station)
    }

    /// Stations in travel order, each exactly once
    pub fn stations(&self) -> Vec<Arc<Station>> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.first_station() {
            stations.push(first.clone());
        }
        stations.extend(self.sections.iter().map(|s| s.down_station().clone()));
        stations
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections
            .iter()
            .any(|s| **s.up_station() == *station || **s.down_station() == *station)
    }

    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    // ---- Insertion ----

    /// Attach a section to the chain.
    ///
    /// Exactly one of its stations must already be on the line. The section
    /// either extends one end of the chain or splits the section it overlaps.
    pub fn insert(&mut self, section: Section) -> Result<()> {
        let placement = self.placement_of(&section)?;

        match placement {
            Placement::Prepend => self.sections.insert(0, section),
            Placement::Append => self.sections.push(section),
            Placement::SplitFront(index) => {
                let existing = &self.sections[index];
                let rest = Section::with_distance(
                    section.down_station().clone(),
                    existing.down_station().clone(),
                    existing.distance().split_off(section.distance())?,
                )?;
                self.sections[index] = section;
                self.sections.insert(index + 1, rest);
            }
            Placement::SplitBack(index) => {
                let existing = &self.sections[index];
                let rest = Section::with_distance(
                    existing.up_station().clone(),
                    section.up_station().clone(),
                    existing.distance().split_off(section.distance())?,
                )?;
                self.sections[index] = rest;
                self.sections.insert(index + 1, section);
            }
        }

        debug!(?placement, size = self.sections.len(), "inserted section");
        Ok(())
    }

    fn placement_of(&self, section: &Section) -> Result<Placement> {
        let up = section.up_station();
        let down = section.down_station();
        let has_up = self.contains_station(up);
        let has_down = self.contains_station(down);

        // Two known stations are either already adjacent or would close a cycle
        if has_up && has_down {
            return Err(SubwayError::SectionAlreadyRegistered {
                up: up.id.clone(),
                down: down.id.clone(),
            });
        }

        if !has_up && !has_down {
            return Err(SubwayError::SectionNotSearched(format!(
                "neither {} nor {} is on the line",
                up.id, down.id
            )));
        }

        if has_down {
            if self.first_station() == Some(down) {
                return Ok(Placement::Prepend);
            }
            let index = self.index_by_down_station(down)?;
            self.sections[index]
                .distance()
                .split_off(section.distance())?;
            return Ok(Placement::SplitBack(index));
        }

        if self.last_station() == Some(up) {
            return Ok(Placement::Append);
        }
        let index = self.index_by_up_station(up)?;
        self.sections[index]
            .distance()
            .split_off(section.distance())?;
        Ok(Placement::SplitFront(index))
    }

    // ---- Removal ----

    /// Remove a station from the line.
    ///
    /// End stations drop their section; an interior station merges its two
    /// sections into one spanning both neighbours.
    pub fn remove(&mut self, station: &Station) -> Result<()> {
        if self.sections.len() <= 1 {
            return Err(SubwayError::EmptyLine);
        }

        if !self.contains_station(station) {
            return Err(SubwayError::SectionNotSearched(format!(
                "{} is not on the line",
                station.id
            )));
        }

        if self.first_station().map(|s| **s == *station).unwrap_or(false) {
            self.sections.remove(0);
            debug!(station = %station.id, "removed first section");
            return Ok(());
        }

        if self.last_station().map(|s| **s == *station).unwrap_or(false) {
            self.sections.pop();
            debug!(station = %station.id, "removed last section");
            return Ok(());
        }

        let index = self.index_by_down_station(station)?;
        let upper = &self.sections[index];
        let lower = &self.sections[index + 1];
        let merged = Section::with_distance(
            upper.up_station().clone(),
            lower.down_station().clone(),
            upper.distance().merge(lower.distance())?,
        )?;
        self.sections[index] = merged;
        self.sections.remove(index + 1);

        debug!(station = %station.id, "merged sections around station");
        Ok(())
    }

    // ---- Lookups ----

    fn index_by_up_station(&self, station: &Station) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| **s.up_station() == *station)
            .ok_or_else(|| {
                SubwayError::SectionNotSearched(format!("no section leaves {}", station.id))
            })
    }

    fn index_by_down_station(&self, station: &Station) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| **s.down_station() == *station)
            .ok_or_else(|| {
                SubwayError::SectionNotSearched(format!("no section reaches {}", station.id))
            })
    }
}
