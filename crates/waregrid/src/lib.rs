//! # Waregrid
//!
//! Deterministic warehouse layout engine.
//!
//! This crate computes 3D placements for:
//! - **Storage units**: shelf rows allocated across the warehouse floor
//! - **Mock contents**: procedurally generated boxes for visualization
//! - **Real contents**: backend floor/container records mapped to
//!   coordinates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use waregrid::layout::{mock_layout, RandomSelector, RowParams};
//! use waregrid::{LevelPlan, Spacing, UnitFootprint};
//!
//! let params = RowParams::new(24, 4);
//! let mut selector = RandomSelector::new(StdRng::seed_from_u64(42));
//! let scene = mock_layout(
//!     &params,
//!     &UnitFootprint::standard(),
//!     &LevelPlan::standard(),
//!     &Spacing::default(),
//!     &mut selector,
//! )?;
//! ```
//!
//! ## Feature Flags
//!
//! - `layout` (default): procedural row allocation and level packing
//! - `mapping` (default): backend record mapping
//! - `serde`: serialization support

/// Core types and configuration.
pub use waregrid_core as core;

/// Procedural (mock-mode) layout.
#[cfg(feature = "layout")]
pub use waregrid_layout as layout;

/// Backend record mapping (real mode).
#[cfg(feature = "mapping")]
pub use waregrid_mapping as mapping;

// Re-export commonly used types at root level
pub use waregrid_core::{
    BoxType, Error, ItemStats, ItemStatus, LevelConfig, LevelPlan, PlacedItem, Result, Spacing,
    UnitFootprint,
};
