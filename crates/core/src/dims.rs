//! Physical dimension registry for container types and storage units.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Container (box) type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxType {
    /// Standard pallet box.
    A,
    /// Tall pallet box.
    B,
    /// Half-depth carton.
    C,
    /// Wide flat tray, restricted to top levels.
    D,
}

/// Physical dimensions of a box type in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxDims {
    /// Extent along the shelf length axis.
    pub length: f64,
    /// Extent along the shelf depth axis.
    pub depth: f64,
    /// Vertical extent.
    pub height: f64,
}

impl BoxType {
    /// All known box types.
    pub const ALL: [BoxType; 4] = [BoxType::A, BoxType::B, BoxType::C, BoxType::D];

    /// Returns the fixed dimensions for this type.
    pub fn dims(&self) -> BoxDims {
        match self {
            BoxType::A => BoxDims {
                length: 1.2,
                depth: 0.8,
                height: 0.8,
            },
            BoxType::B => BoxDims {
                length: 1.0,
                depth: 0.8,
                height: 0.9,
            },
            BoxType::C => BoxDims {
                length: 0.8,
                depth: 0.6,
                height: 0.7,
            },
            BoxType::D => BoxDims {
                length: 2.4,
                depth: 0.8,
                height: 0.5,
            },
        }
    }

    /// Returns the canonical single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            BoxType::A => "A",
            BoxType::B => "B",
            BoxType::C => "C",
            BoxType::D => "D",
        }
    }

    /// Parses a backend type code, case-insensitively.
    pub fn from_code(code: &str) -> Option<BoxType> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(BoxType::A),
            "B" => Some(BoxType::B),
            "C" => Some(BoxType::C),
            "D" => Some(BoxType::D),
            _ => None,
        }
    }
}

/// Footprint of one storage unit (shelf rack).
///
/// A double-wide placement pairs two units back to back, so its depth
/// is `double_depth()`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitFootprint {
    /// Extent along the row direction.
    pub length: f64,
    /// Extent across the aisle direction, for a single unit.
    pub depth: f64,
    /// Vertical extent of the rack.
    pub height: f64,
}

impl UnitFootprint {
    /// Creates a footprint from explicit dimensions.
    pub fn new(length: f64, depth: f64, height: f64) -> Self {
        Self {
            length,
            depth,
            height,
        }
    }

    /// The standard rack used by the default deployment.
    pub fn standard() -> Self {
        Self::new(8.4, 1.2, 6.0)
    }

    /// Depth of a paired (double-wide) placement.
    pub fn double_depth(&self) -> f64 {
        self.depth * 2.0
    }

    /// Validates the footprint dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.depth <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidDimensions(
                "All footprint dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for UnitFootprint {
    fn default() -> Self {
        Self::standard()
    }
}
