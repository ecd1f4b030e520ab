//! Integration tests for waregrid-core.

use waregrid_core::geom::vec3;
use waregrid_core::{
    BoxType, Error, ItemKind, ItemStats, ItemStatus, LevelConfig, LevelPlan, PlacedItem, Spacing,
    UnitFootprint,
};

mod registry_tests {
    use super::*;

    #[test]
    fn test_standard_registry_is_consistent() {
        let footprint = UnitFootprint::standard();
        assert!(footprint.validate().is_ok());

        // Every box type fits a single shelf depth so the registry can
        // feed the packer without per-type depth checks.
        for ty in BoxType::ALL {
            assert!(ty.dims().depth <= footprint.depth + 1e-12, "{:?}", ty);
        }
    }

    #[test]
    fn test_wide_tray_is_only_top_level_type() {
        let plan = LevelPlan::standard();
        for (index, spec) in plan.levels() {
            if index < 4 {
                assert!(!spec.config.allows(BoxType::D));
            } else {
                assert_eq!(spec.config.allowed_types, vec![BoxType::D]);
            }
        }
    }

    #[test]
    fn test_plan_lookups() {
        let plan = LevelPlan::standard();
        assert!(plan.config(1).is_ok());
        assert!(plan.base_height(4).is_ok());
        assert!(matches!(plan.config(7), Err(Error::UnknownLevel(7))));
        assert!(matches!(plan.base_height(0), Err(Error::UnknownLevel(0))));
    }
}

mod item_tests {
    use super::*;

    #[test]
    fn test_backend_status_preserved_verbatim() {
        let status = ItemStatus::from_code("QUARANTINE-2");
        assert_eq!(status, ItemStatus::Other("QUARANTINE-2".to_string()));
        assert_eq!(status.to_string(), "QUARANTINE-2");
    }

    #[test]
    fn test_kind_accessors() {
        let item = PlacedItem::new_box("c1", BoxType::C, 2, vec3(0.0, 1.0, 0.0), ItemStatus::Stored);
        assert_eq!(item.kind.box_type(), Some(BoxType::C));
        assert!(!item.kind.is_unit());

        let unit = PlacedItem::new_unit("u1", false, vec3(0.0, 0.0, 0.0));
        assert_eq!(unit.kind, ItemKind::SingleUnit);
        assert_eq!(unit.kind.box_type(), None);
    }

    #[test]
    fn test_stats_cover_all_statuses() {
        let items = vec![
            PlacedItem::new_box("1", BoxType::A, 1, vec3(0.0, 0.0, 0.0), ItemStatus::Stored),
            PlacedItem::new_box("2", BoxType::A, 1, vec3(0.0, 0.0, 1.0), ItemStatus::Shipping),
            PlacedItem::new_unit("3", true, vec3(0.0, 0.0, 2.0)),
            PlacedItem::new_box(
                "4",
                BoxType::B,
                3,
                vec3(0.0, 0.0, 3.0),
                ItemStatus::from_code("blocked"),
            ),
        ];

        let stats = ItemStats::from_items(&items);
        assert_eq!(stats.count, 4);
        assert_eq!(
            stats.stored + stats.shipping + stats.empty + stats.other,
            stats.count
        );
        assert_eq!(stats.per_level.values().sum::<usize>(), stats.count);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_custom_plan_replaces_levels() {
        let plan = LevelPlan::standard().with_level(4, LevelConfig::new(vec![BoxType::A], 3), 5.0);
        let top = plan.config(4).unwrap();
        assert_eq!(top.allowed_types, vec![BoxType::A]);
        assert_eq!(top.stack_layers, 3);
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_spacing_defaults_are_valid() {
        assert!(Spacing::default().validate().is_ok());
    }
}
