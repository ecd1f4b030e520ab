//! Per-level capacity configuration.
//!
//! Which box types a level accepts, how high boxes stack on it, and
//! where its floor sits are deployment data, not placement logic. The
//! packer and the record mapper both read this table; a level they are
//! asked about that has no entry is a fail-fast configuration error.

use std::collections::BTreeMap;

use crate::dims::BoxType;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity rules for one storage level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelConfig {
    /// Box types this level accepts.
    pub allowed_types: Vec<BoxType>,

    /// How many layers stack vertically within one length-slot.
    pub stack_layers: usize,
}

impl LevelConfig {
    /// Creates a level configuration.
    pub fn new(allowed_types: Vec<BoxType>, stack_layers: usize) -> Self {
        Self {
            allowed_types,
            stack_layers,
        }
    }

    /// Returns whether the given type may be placed on this level.
    pub fn allows(&self, ty: BoxType) -> bool {
        self.allowed_types.contains(&ty)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.allowed_types.is_empty() {
            return Err(Error::InvalidConfig(
                "Level must allow at least one box type".into(),
            ));
        }
        if self.stack_layers == 0 {
            return Err(Error::InvalidConfig(
                "Stack layer count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration and base height for one level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelSpec {
    /// Capacity rules.
    pub config: LevelConfig,

    /// Height of the level floor above the unit base, in meters.
    pub base_height: f64,
}

/// Table of level specs keyed by level index.
///
/// Level indices start at 1; index 0 is reserved.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelPlan {
    levels: BTreeMap<u32, LevelSpec>,
}

impl LevelPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default four-level deployment table: levels 1-3 take the
    /// narrow types in two layers, level 4 takes wide trays only.
    pub fn standard() -> Self {
        let narrow = vec![BoxType::A, BoxType::B, BoxType::C];
        Self::new()
            .with_level(1, LevelConfig::new(narrow.clone(), 2), 0.0)
            .with_level(2, LevelConfig::new(narrow.clone(), 2), 2.0)
            .with_level(3, LevelConfig::new(narrow, 2), 4.0)
            .with_level(4, LevelConfig::new(vec![BoxType::D], 2), 5.4)
    }

    /// Adds or replaces the spec for a level.
    pub fn with_level(mut self, index: u32, config: LevelConfig, base_height: f64) -> Self {
        self.levels.insert(
            index,
            LevelSpec {
                config,
                base_height,
            },
        );
        self
    }

    /// Looks up a level spec, failing fast on unknown indices.
    pub fn spec(&self, index: u32) -> Result<&LevelSpec> {
        self.levels.get(&index).ok_or(Error::UnknownLevel(index))
    }

    /// Looks up a level spec without failing.
    pub fn get(&self, index: u32) -> Option<&LevelSpec> {
        self.levels.get(&index)
    }

    /// Looks up a level's capacity rules, failing fast on unknown indices.
    pub fn config(&self, index: u32) -> Result<&LevelConfig> {
        self.spec(index).map(|s| &s.config)
    }

    /// Looks up a level's base height, failing fast on unknown indices.
    pub fn base_height(&self, index: u32) -> Result<f64> {
        self.spec(index).map(|s| s.base_height)
    }

    /// Iterates levels in ascending index order.
    pub fn levels(&self) -> impl Iterator<Item = (u32, &LevelSpec)> {
        self.levels.iter().map(|(&i, s)| (i, s))
    }

    /// Number of configured levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns whether the plan has no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Validates every level in the plan.
    pub fn validate(&self) -> Result<()> {
        for (&index, spec) in &self.levels {
            if index == 0 {
                return Err(Error::InvalidConfig(
                    "Level index 0 is reserved".into(),
                ));
            }
            spec.config.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_plan() {
        let plan = LevelPlan::standard();
        assert_eq!(plan.len(), 4);
        assert!(plan.validate().is_ok());

        let top = plan.config(4).unwrap();
        assert_eq!(top.allowed_types, vec![BoxType::D]);
        assert_eq!(top.stack_layers, 2);

        assert!(plan.config(1).unwrap().allows(BoxType::A));
        assert!(!plan.config(1).unwrap().allows(BoxType::D));
    }

    #[test]
    fn test_unknown_level_fails_fast() {
        let plan = LevelPlan::standard();
        assert!(matches!(plan.spec(9), Err(Error::UnknownLevel(9))));
        assert!(plan.get(9).is_none());
    }

    #[test]
    fn test_base_heights_ascend() {
        let plan = LevelPlan::standard();
        let heights: Vec<f64> = plan.levels().map(|(_, s)| s.base_height).collect();
        for pair in heights.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_invalid_configs() {
        assert!(LevelConfig::new(vec![], 2).validate().is_err());
        assert!(LevelConfig::new(vec![BoxType::A], 0).validate().is_err());

        let zero_index = LevelPlan::new().with_level(0, LevelConfig::new(vec![BoxType::A], 1), 0.0);
        assert!(zero_index.validate().is_err());
    }
}
