//! Collaborator traits for stations and lines.
//!
//! These traits define what the network logic needs from storage.
//! Implementations can be in-memory, database-backed, or remote.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::line::Line;
use crate::models::types::*;

/// Resolves station identifiers to shared station references
pub trait StationResolver: Send + Sync {
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<Station>>;

    fn all_stations(&self) -> Vec<Arc<Station>>;
}

/// Read access to the lines of a network
pub trait LineProvider: Send + Sync {
    fn get_line(&self, id: &LineIdentifier) -> Option<&Line>;

    /// Every line with its current sections
    fn all_lines(&self) -> Vec<&Line>;
}

/// Line storage that can be mutated
pub trait LineRepository: LineProvider {
    fn get_line_mut(&mut self, id: &LineIdentifier) -> Option<&mut Line>;

    /// Store a new line. Fails if a line with the same id exists.
    fn insert_line(&mut self, line: Line) -> Result<()>;

    fn remove_line(&mut self, id: &LineIdentifier) -> Option<Line>;
}
