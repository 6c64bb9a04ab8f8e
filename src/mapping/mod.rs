// src/mapping/mod.rs
//
// Mapping files: named text payloads stored under a mappings directory.

pub mod cleaner;
pub mod loader;

pub use cleaner::clean_mapping;
pub use loader::{MappingLoader, DEFAULT_MAPPINGS_DIR, MAPPING_EXTENSION};
