//! # Waregrid Mapping
//!
//! Real-mode placement for the waregrid layout engine: resolves
//! already-fetched backend floor and container records to level
//! indices and 3D positions, preferring stored coordinates and falling
//! back to computed slot positions.

pub mod floor_code;
pub mod mapper;
pub mod records;

// Re-exports
pub use floor_code::level_from_code;
pub use mapper::{map_containers, MapperContext, MappingResult};
pub use records::{ContainerRecord, FloorRecord};
pub use waregrid_core::{Error, PlacedItem, Result};
