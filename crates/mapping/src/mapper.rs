//! Maps backend floor/container records onto level-indexed positions.

use std::collections::{BTreeMap, HashMap};

use waregrid_core::geom::Vector3;
use waregrid_core::{
    BoxType, ItemStatus, LevelPlan, PlacedItem, Result, Spacing, UnitFootprint,
};

use crate::floor_code::level_from_code;
use crate::records::{ContainerRecord, FloorRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static context for a mapping pass over one storage unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapperContext {
    /// Code of the storage unit being mapped, for diagnostics.
    pub unit_code: String,

    /// Footprint of the unit, bounding the fallback slot arithmetic.
    pub footprint: UnitFootprint,

    /// Margins and gaps for computed positions.
    pub spacing: Spacing,

    /// Base-height table, one height per level index.
    pub plan: LevelPlan,
}

impl MapperContext {
    /// Creates a context with the standard footprint and level plan.
    pub fn new(unit_code: impl Into<String>) -> Self {
        Self {
            unit_code: unit_code.into(),
            footprint: UnitFootprint::standard(),
            spacing: Spacing::default(),
            plan: LevelPlan::standard(),
        }
    }

    /// Sets the unit footprint.
    pub fn with_footprint(mut self, footprint: UnitFootprint) -> Self {
        self.footprint = footprint;
        self
    }

    /// Sets the spacing configuration.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the level plan used for base heights.
    pub fn with_plan(mut self, plan: LevelPlan) -> Self {
        self.plan = plan;
        self
    }
}

/// Outcome of one mapping pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MappingResult {
    /// Placed containers grouped by resolved level index.
    pub by_level: BTreeMap<u32, Vec<PlacedItem>>,

    /// Floor codes whose container fetch failed (no entry in the
    /// input map). Their levels stay present with empty lists.
    pub missing_floors: Vec<String>,
}

impl MappingResult {
    /// Total number of placed containers.
    pub fn item_count(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    /// Number of floors whose fetch failed.
    pub fn failed_count(&self) -> usize {
        self.missing_floors.len()
    }

    /// Iterates all placed containers in level order.
    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.by_level.values().flatten()
    }
}

/// Maps already-fetched floor and container records to positions.
///
/// Each floor resolves to a level index: the explicit `floor_number`
/// wins, then the code suffix, then the documented default of 1. Each
/// container keeps its stored coordinates when the backend has all
/// three; otherwise its position is computed with the packer's
/// sequential-slot arithmetic, indexed by how many containers already
/// landed on that level.
///
/// A floor absent from `containers_by_floor` is a failed fetch: its
/// level maps to an empty list, the code is recorded in
/// `missing_floors`, and mapping continues. Pure function over its
/// inputs; fetching (and any retry policy) belongs to the caller.
pub fn map_containers(
    ctx: &MapperContext,
    floors: &[FloorRecord],
    containers_by_floor: &HashMap<String, Vec<ContainerRecord>>,
) -> Result<MappingResult> {
    ctx.footprint.validate()?;
    ctx.spacing.validate()?;

    let mut result = MappingResult::default();

    for floor in floors {
        let level = resolve_level(floor);
        let placed = result.by_level.entry(level).or_default();

        let Some(records) = containers_by_floor.get(&floor.floor_code) else {
            result.missing_floors.push(floor.floor_code.clone());
            continue;
        };

        for record in records {
            let ty = resolve_type(ctx, record);
            let position = record
                .explicit_position()
                .unwrap_or_else(|| slot_position(ctx, level, ty, placed.len()));
            placed.push(PlacedItem::new_box(
                record.container_code.clone(),
                ty,
                level,
                position,
                ItemStatus::from_code(&record.status),
            ));
        }
    }

    Ok(result)
}

fn resolve_level(floor: &FloorRecord) -> u32 {
    match floor.floor_number {
        Some(0) => {
            log::warn!(
                "floor {:?} carries reserved level number 0, defaulting to level 1",
                floor.floor_code
            );
            1
        }
        Some(number) => number,
        None => level_from_code(&floor.floor_code),
    }
}

fn resolve_type(ctx: &MapperContext, record: &ContainerRecord) -> BoxType {
    BoxType::from_code(&record.container_type).unwrap_or_else(|| {
        log::warn!(
            "container {:?} on unit {:?} has unknown type {:?}, assuming A",
            record.container_code,
            ctx.unit_code,
            record.container_type
        );
        BoxType::A
    })
}

/// Sequential-slot fallback position, mirroring the level packer:
/// slot `index` centers at
/// `-length/2 + margin + index * (type length + slot gap) + length/2`.
fn slot_position(ctx: &MapperContext, level: u32, ty: BoxType, index: usize) -> Vector3<f64> {
    let dims = ty.dims();
    let base_height = match ctx.plan.get(level) {
        Some(spec) => spec.base_height,
        None => {
            log::warn!(
                "no base height for level {level} of unit {:?}, using ground",
                ctx.unit_code
            );
            0.0
        }
    };

    let z = -ctx.footprint.length / 2.0
        + ctx.spacing.margin
        + index as f64 * (dims.length + ctx.spacing.slot_gap)
        + dims.length / 2.0;
    let y = base_height + dims.height / 2.0;

    Vector3::new(0.0, y, z)
}
