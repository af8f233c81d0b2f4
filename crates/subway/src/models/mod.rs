//! Subway data models, types, and traits.

pub mod line;
pub mod sections;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use line::Line;
pub use sections::Sections;
pub use traits::{LineProvider, LineRepository, StationResolver};
pub use types::{Distance, Path, Result, Section, Station, SubwayError};
