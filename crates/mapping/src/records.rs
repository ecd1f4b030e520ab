//! Backend record types consumed by the mapper.
//!
//! These mirror the REST payloads the data-access layer fetches; the
//! mapper itself never performs network calls.

use waregrid_core::geom::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One floor (level) of a storage unit as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FloorRecord {
    /// Structured code, e.g. `"WH-A-F3"`.
    pub floor_code: String,

    /// Explicit level index. Wins over the code suffix when present.
    pub floor_number: Option<u32>,
}

impl FloorRecord {
    /// Creates a floor record from its code.
    pub fn new(floor_code: impl Into<String>) -> Self {
        Self {
            floor_code: floor_code.into(),
            floor_number: None,
        }
    }

    /// Sets the explicit level index.
    pub fn with_number(mut self, number: u32) -> Self {
        self.floor_number = Some(number);
        self
    }
}

/// One container under a floor as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerRecord {
    /// Backend container code; becomes the placed item id.
    pub container_code: String,

    /// Backend type code, expected to match a known box type.
    pub container_type: String,

    /// Backend status string, preserved verbatim.
    pub status: String,

    /// Stored x coordinate, if the backend has one.
    pub position_x: Option<f64>,

    /// Stored y coordinate, if the backend has one.
    pub position_y: Option<f64>,

    /// Stored z coordinate, if the backend has one.
    pub position_z: Option<f64>,
}

impl ContainerRecord {
    /// Creates a container record without stored coordinates.
    pub fn new(
        container_code: impl Into<String>,
        container_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            container_code: container_code.into(),
            container_type: container_type.into(),
            status: status.into(),
            position_x: None,
            position_y: None,
            position_z: None,
        }
    }

    /// Sets stored coordinates.
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position_x = Some(x);
        self.position_y = Some(y);
        self.position_z = Some(z);
        self
    }

    /// Returns the stored position when all three coordinates are
    /// present. Partial coordinates count as absent.
    pub fn explicit_position(&self) -> Option<Vector3<f64>> {
        match (self.position_x, self.position_y, self.position_z) {
            (Some(x), Some(y), Some(z)) => Some(Vector3::new(x, y, z)),
            _ => None,
        }
    }
}
