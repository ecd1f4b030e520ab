//! Spacing configuration shared by the placement routines.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gaps and margins applied while walking placement cursors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spacing {
    /// Margin kept free at both ends of a usable length.
    pub margin: f64,

    /// Gap between consecutive length-slots.
    pub slot_gap: f64,

    /// Vertical gap between stacked layers within one slot.
    pub layer_gap: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            margin: 0.2,
            slot_gap: 0.05,
            layer_gap: 0.05,
        }
    }
}

impl Spacing {
    /// Creates a spacing configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the end margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the gap between length-slots.
    pub fn with_slot_gap(mut self, gap: f64) -> Self {
        self.slot_gap = gap;
        self
    }

    /// Sets the vertical gap between stacked layers.
    pub fn with_layer_gap(mut self, gap: f64) -> Self {
        self.layer_gap = gap;
        self
    }

    /// Validates the spacing values.
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0.0 || self.slot_gap < 0.0 || self.layer_gap < 0.0 {
            return Err(Error::InvalidConfig(
                "Spacing values must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let spacing = Spacing::new()
            .with_margin(0.5)
            .with_slot_gap(0.1)
            .with_layer_gap(0.02);
        assert_eq!(spacing.margin, 0.5);
        assert_eq!(spacing.slot_gap, 0.1);
        assert_eq!(spacing.layer_gap, 0.02);
    }

    #[test]
    fn test_validation() {
        assert!(Spacing::default().validate().is_ok());
        assert!(Spacing::new().with_margin(-0.1).validate().is_err());
    }
}
