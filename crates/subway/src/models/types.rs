//! Core data types for the subway network.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use api_types::ErrorKind;

use crate::identifiers::*;

// ============================================================================
// Stations
// ============================================================================

/// A station. Compared and hashed by identifier only.
#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
}

impl Station {
    pub fn new(id: impl Into<StationIdentifier>, name: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Length of a section. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(SubwayError::InvalidSection(
                "distance must be greater than zero".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Remainder left when `part` is cut off the front of `self`.
    ///
    /// Fails with `InvalidDistance` unless `part` is strictly shorter.
    pub fn split_off(self, part: Distance) -> Result<Distance> {
        if part.0 >= self.0 {
            return Err(SubwayError::InvalidDistance {
                requested: part.0,
                available: self.0,
            });
        }
        Ok(Self(self.0 - part.0))
    }

    /// Length of two consecutive sections joined together
    pub fn merge(self, other: Distance) -> Result<Distance> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| SubwayError::InvalidSection("merged distance overflows".into()))
    }
}

/// A directed edge between two adjacent stations of a line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    up_station: Arc<Station>,
    down_station: Arc<Station>,
    distance: Distance,
}

impl Section {
    pub fn new(
        up_station: Arc<Station>,
        down_station: Arc<Station>,
        distance: u32,
    ) -> Result<Self> {
        Self::with_distance(up_station, down_station, Distance::new(distance)?)
    }

    pub(crate) fn with_distance(
        up_station: Arc<Station>,
        down_station: Arc<Station>,
        distance: Distance,
    ) -> Result<Self> {
        if up_station == down_station {
            return Err(SubwayError::InvalidSection(format!(
                "up and down station are both {}",
                up_station.id
            )));
        }
        Ok(Self {
            up_station,
            down_station,
            distance,
        })
    }

    pub fn up_station(&self) -> &Arc<Station> {
        &self.up_station
    }

    pub fn down_station(&self) -> &Arc<Station> {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

// ============================================================================
// Paths
// ============================================================================

/// Result of a shortest path query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub stations: Vec<Arc<Station>>,
    pub distance: u64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SubwayError {
    #[error("Source and target are the same station: {0}")]
    InvalidSourceTarget(StationIdentifier),

    #[error("No path from {from} to {to}")]
    PathNotFound {
        from: StationIdentifier,
        to: StationIdentifier,
    },

    #[error("Section already registered: {up} - {down}")]
    SectionAlreadyRegistered {
        up: StationIdentifier,
        down: StationIdentifier,
    },

    #[error("No section found: {0}")]
    SectionNotSearched(String),

    #[error("Invalid distance: {requested} must be shorter than the section ({available})")]
    InvalidDistance { requested: u32, available: u32 },

    #[error("Cannot remove the only section of a line")]
    EmptyLine,

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Line not found: {0}")]
    LineNotFound(LineIdentifier),

    #[error("Line already exists: {0}")]
    LineAlreadyExists(LineIdentifier),
}

impl SubwayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSourceTarget(_) => ErrorKind::InvalidSourceTarget,
            Self::PathNotFound { .. } => ErrorKind::PathNotFound,
            Self::SectionAlreadyRegistered { .. } => ErrorKind::SectionAlreadyRegistered,
            Self::SectionNotSearched(_) => ErrorKind::SectionNotSearched,
            Self::InvalidDistance { .. } => ErrorKind::InvalidDistance,
            Self::EmptyLine => ErrorKind::EmptyLine,
            Self::InvalidSection(_) => ErrorKind::InvalidSection,
            Self::StationNotFound(_) => ErrorKind::StationNotFound,
            Self::LineNotFound(_) => ErrorKind::LineNotFound,
            Self::LineAlreadyExists(_) => ErrorKind::LineAlreadyExists,
        }
    }
}

impl From<&SubwayError> for api_types::ErrorResponse {
    fn from(err: &SubwayError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubwayError>;
