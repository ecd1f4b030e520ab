//! Placed item model shared by all layout producers.

use std::collections::HashMap;
use std::fmt;

use crate::dims::BoxType;
use crate::geom::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of physical object a placement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// An inventory container of a fixed type.
    Box(BoxType),
    /// A single-wide storage unit.
    SingleUnit,
    /// A double-wide (paired) storage unit.
    DoubleUnit,
}

impl ItemKind {
    /// Returns whether this is a storage unit rather than a container.
    pub fn is_unit(&self) -> bool {
        matches!(self, ItemKind::SingleUnit | ItemKind::DoubleUnit)
    }

    /// Returns the box type for container placements.
    pub fn box_type(&self) -> Option<BoxType> {
        match self {
            ItemKind::Box(ty) => Some(*ty),
            _ => None,
        }
    }
}

/// Inventory status attached to a placement.
///
/// Mock mode only ever produces `Stored`, `Shipping`, and `Empty`;
/// real mode preserves whatever status string the backend sent, with
/// known spellings folded into the matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemStatus {
    /// At rest in the warehouse.
    Stored,
    /// Staged for outbound shipping.
    Shipping,
    /// Slot or unit holds nothing.
    Empty,
    /// Backend status with no local meaning, kept verbatim.
    Other(String),
}

impl ItemStatus {
    /// Maps a backend status string onto a status value.
    pub fn from_code(code: &str) -> ItemStatus {
        match code.trim().to_ascii_lowercase().as_str() {
            "stored" => ItemStatus::Stored,
            "shipping" => ItemStatus::Shipping,
            "empty" => ItemStatus::Empty,
            _ => ItemStatus::Other(code.to_string()),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Stored => write!(f, "stored"),
            ItemStatus::Shipping => write!(f, "shipping"),
            ItemStatus::Empty => write!(f, "empty"),
            ItemStatus::Other(code) => write!(f, "{code}"),
        }
    }
}

/// One placed object in warehouse space.
///
/// Items are created fresh on every layout computation and never
/// mutated in place. In real mode the id is the backend container
/// code; mock ids are synthesized unique within the call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Identifier, unique within one layout call.
    pub id: String,

    /// What was placed.
    pub kind: ItemKind,

    /// Vertical tier, starting at 1. Storage units report 1.
    pub level: u32,

    /// Center position in warehouse space (y up).
    pub position: Vector3<f64>,

    /// Inventory status.
    pub status: ItemStatus,
}

impl PlacedItem {
    /// Creates a container placement.
    pub fn new_box(
        id: impl Into<String>,
        ty: BoxType,
        level: u32,
        position: Vector3<f64>,
        status: ItemStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Box(ty),
            level,
            position,
            status,
        }
    }

    /// Creates a storage-unit placement. Units stand on the ground
    /// tier and start out empty.
    pub fn new_unit(id: impl Into<String>, double: bool, position: Vector3<f64>) -> Self {
        Self {
            id: id.into(),
            kind: if double {
                ItemKind::DoubleUnit
            } else {
                ItemKind::SingleUnit
            },
            level: 1,
            position,
            status: ItemStatus::Empty,
        }
    }

    /// Returns a copy shifted by the given offset.
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            position: self.position + offset,
            ..self.clone()
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y (vertical) coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

/// Aggregate statistics over a set of placed items.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemStats {
    /// Total number of items.
    pub count: usize,
    /// Items with stored status.
    pub stored: usize,
    /// Items with shipping status.
    pub shipping: usize,
    /// Items with empty status.
    pub empty: usize,
    /// Items with a backend-specific status.
    pub other: usize,
    /// Distribution of items per level index.
    pub per_level: HashMap<u32, usize>,
}

impl ItemStats {
    /// Computes statistics from a set of items.
    pub fn from_items(items: &[PlacedItem]) -> Self {
        let mut stats = Self {
            count: items.len(),
            ..Default::default()
        };

        for item in items {
            match &item.status {
                ItemStatus::Stored => stats.stored += 1,
                ItemStatus::Shipping => stats.shipping += 1,
                ItemStatus::Empty => stats.empty += 1,
                ItemStatus::Other(_) => stats.other += 1,
            }
            *stats.per_level.entry(item.level).or_insert(0) += 1;
        }

        stats
    }
}
