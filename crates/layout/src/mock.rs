//! Procedural mock layout: rows of shelves with generated contents.
//!
//! Drives the row allocator and the level packer together to produce a
//! complete warehouse scene from nothing but a requested unit count,
//! for visualization and demo purposes.

use waregrid_core::{ItemStats, LevelPlan, PlacedItem, Result, Spacing, UnitFootprint};

use crate::packer::{pack_level, BoxSelector};
use crate::rows::{allocate_rows, RowParams, RowPlan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fully generated mock scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MockLayout {
    /// Per-row unit distribution.
    pub rows: Vec<RowPlan>,

    /// Placed storage units.
    pub units: Vec<PlacedItem>,

    /// Generated boxes across all units and levels, in warehouse space.
    pub boxes: Vec<PlacedItem>,
}

impl MockLayout {
    /// Statistics over the generated boxes.
    pub fn box_stats(&self) -> ItemStats {
        ItemStats::from_items(&self.boxes)
    }

    /// Iterates units and boxes together, units first.
    pub fn all_items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.units.iter().chain(self.boxes.iter())
    }
}

/// Generates a mock warehouse layout.
///
/// Allocates shelf rows for the requested unit count, then packs every
/// configured level of every placed unit. Box positions are
/// unit-local out of the packer and are translated here by the unit's
/// center, which already carries the centroid offset. Box ids are
/// prefixed with the unit ordinal so they stay unique within the call.
pub fn mock_layout(
    params: &RowParams,
    footprint: &UnitFootprint,
    plan: &LevelPlan,
    spacing: &Spacing,
    selector: &mut impl BoxSelector,
) -> Result<MockLayout> {
    plan.validate()?;
    let allocated = allocate_rows(params, footprint, spacing)?;

    let mut boxes = Vec::new();
    for (ordinal, unit) in allocated.placements.iter().enumerate() {
        for (index, spec) in plan.levels() {
            for item in pack_level(
                index,
                &spec.config,
                spec.base_height,
                footprint,
                spacing,
                selector,
            )? {
                let mut item = item.translated(&unit.position);
                item.id = format!("U{ordinal}-{}", item.id);
                boxes.push(item);
            }
        }
    }

    Ok(MockLayout {
        rows: allocated.rows,
        units: allocated.placements,
        boxes,
    })
}
