//! Subway data providers.

pub mod memory_provider;

pub use memory_provider::InMemorySubwayProvider;
