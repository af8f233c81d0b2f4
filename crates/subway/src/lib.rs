//! # subway-network
//!
//! Subway lines as ordered section chains, and shortest paths across them.
//!
//! ## Features
//!
//! - **Section chains**: each line keeps a single unbroken path of sections
//!   while sections are added at either end, split in the middle, or removed
//! - **Shortest paths**: Dijkstra over a multigraph built from every line
//! - **Pluggable storage**: stations and lines come from provider traits
//!
//! ## Example
//!
//! ```
//! use subway_network::prelude::*;
//! use api_types::SectionRequest;
//!
//! let mut provider = InMemorySubwayProvider::new();
//! let gangnam = provider.add_station(Station::new("2", "강남역"));
//! let yeoksam = provider.add_station(Station::new("3", "역삼역"));
//! provider.add_station(Station::new("5", "삼성역"));
//! provider
//!     .insert_line(Line::new("1", "2호선", "green", gangnam, yeoksam, 10).unwrap())
//!     .unwrap();
//!
//! let mut service = SubwayService::new(provider);
//! service
//!     .add_section(&"1".into(), &SectionRequest::new("3", "5", 4))
//!     .unwrap();
//!
//! let path = service.find_path(&"2".into(), &"5".into()).unwrap();
//! assert_eq!(path.distance, 14);
//! ```

pub mod identifiers;
pub mod models;
pub mod path;
pub mod provider;
pub mod service;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{line::Line, sections::Sections, traits::*, types::*};
    pub use crate::path::{DijkstraPathFinder, PathFinder, SectionGraph};
    pub use crate::provider::InMemorySubwayProvider;
    pub use crate::service::SubwayService;
}

pub use prelude::*;
