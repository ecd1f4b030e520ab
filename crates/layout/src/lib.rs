//! # Waregrid Layout
//!
//! Procedural (mock-mode) placement for the waregrid layout engine.
//!
//! This crate allocates storage units into shelf rows and fills their
//! levels with generated boxes, producing stable coordinates for the
//! rendering layer.

pub mod mock;
pub mod packer;
pub mod rows;

// Re-exports
pub use mock::{mock_layout, MockLayout};
pub use packer::{pack_level, BoxSelector, RandomSelector};
pub use rows::{allocate_rows, split_units, RowLayout, RowParams, RowPlan};
pub use waregrid_core::{
    BoxType, Error, ItemStatus, LevelConfig, LevelPlan, PlacedItem, Result, Spacing, UnitFootprint,
};
