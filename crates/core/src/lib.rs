//! # Waregrid Core
//!
//! Shared types and configuration for the waregrid spatial layout engine.
//!
//! This crate provides the dimension registry, level configuration
//! tables, and the placed-item model consumed by the procedural layout
//! and record-mapping crates.
//!
//! ## Core Components
//!
//! - **Dimension registry**: [`BoxType`], [`UnitFootprint`]
//! - **Level configuration**: [`LevelConfig`], [`LevelPlan`]
//! - **Placed items**: [`PlacedItem`], [`ItemStatus`], [`ItemStats`]
//! - **Spacing**: margins and gaps applied by placement cursors
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod dims;
pub mod error;
pub mod geom;
pub mod item;
pub mod level;
pub mod spacing;

// Re-exports
pub use dims::{BoxDims, BoxType, UnitFootprint};
pub use error::{Error, Result};
pub use item::{ItemKind, ItemStats, ItemStatus, PlacedItem};
pub use level::{LevelConfig, LevelPlan, LevelSpec};
pub use spacing::Spacing;
