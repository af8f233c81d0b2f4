//! Request and response shapes for the subway service boundary.
//!
//! Field names follow the public JSON API (`upStationId`, `downStationId`, ...).

use serde::{Deserialize, Serialize};

/// Body of an add-section request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: String,
    pub down_station_id: String,
    pub distance: u32,
}

impl SectionRequest {
    pub fn new(
        up_station_id: impl Into<String>,
        down_station_id: impl Into<String>,
        distance: u32,
    ) -> Self {
        Self {
            up_station_id: up_station_id.into(),
            down_station_id: down_station_id.into(),
            distance,
        }
    }
}

/// Body of a create-line request. The line starts with a single section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: String,
    pub down_station_id: String,
    pub distance: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Stations in chain order, first to last
    pub stations: Vec<StationResponse>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u64,
}

// ============================================================================
// Errors
// ============================================================================

/// Client-facing classification of a failed request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidSourceTarget,
    PathNotFound,
    SectionAlreadyRegistered,
    SectionNotSearched,
    InvalidDistance,
    EmptyLine,
    InvalidSection,
    StationNotFound,
    LineNotFound,
    LineAlreadyExists,
}

impl ErrorKind {
    /// HTTP-style status a front end should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidSourceTarget
            | Self::InvalidDistance
            | Self::EmptyLine
            | Self::InvalidSection => 400,
            Self::PathNotFound
            | Self::SectionNotSearched
            | Self::StationNotFound
            | Self::LineNotFound => 404,
            Self::SectionAlreadyRegistered | Self::LineAlreadyExists => 409,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}
