//! Greedy box packing for a single storage level.
//!
//! The level's usable length is filled slot by slot until no box of an
//! allowed type fits the remaining space. Which type fills the next
//! slot, and which mock status a box gets, flow through the injected
//! [`BoxSelector`]; position arithmetic never consults it, so the
//! placement shape is deterministic for a pinned selector.

use rand::Rng;

use waregrid_core::geom::Vector3;
use waregrid_core::{
    BoxType, Error, ItemStatus, LevelConfig, PlacedItem, Result, Spacing, UnitFootprint,
};

/// Selection source for box type and mock status.
pub trait BoxSelector {
    /// Picks the type for the next length-slot from the allowed set.
    /// `allowed` is never empty.
    fn pick_type(&mut self, allowed: &[BoxType]) -> BoxType;

    /// Picks the status for one generated box.
    fn pick_status(&mut self) -> ItemStatus;
}

/// Selector backed by a [`rand::Rng`]: uniform type choice and a
/// stored/shipping status split.
pub struct RandomSelector<R: Rng> {
    rng: R,
    shipping_ratio: f64,
}

impl<R: Rng> RandomSelector<R> {
    /// Creates a selector with the default 20% shipping ratio.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            shipping_ratio: 0.2,
        }
    }

    /// Sets the fraction of boxes reported as shipping.
    pub fn with_shipping_ratio(mut self, ratio: f64) -> Self {
        self.shipping_ratio = ratio.clamp(0.0, 1.0);
        self
    }
}

impl<R: Rng> BoxSelector for RandomSelector<R> {
    fn pick_type(&mut self, allowed: &[BoxType]) -> BoxType {
        allowed[self.rng.gen_range(0..allowed.len())]
    }

    fn pick_status(&mut self) -> ItemStatus {
        if self.rng.gen_bool(self.shipping_ratio) {
            ItemStatus::Shipping
        } else {
            ItemStatus::Stored
        }
    }
}

/// Packs one storage level with generated boxes.
///
/// The usable length is `[-length/2 + margin, length/2 - margin]` in
/// unit-local coordinates (x at the depth center line, y above the
/// unit base, z along the length). The cursor walks from the minimum
/// bound; a slot holds `stack_layers` boxes of the picked type, one
/// per layer, then the cursor advances by the type length plus the
/// slot gap. Packing stops when the picked type's center would cross
/// the maximum bound.
///
/// Items in one level never overlap along the length axis, and layers
/// stacked in one slot never overlap along height.
pub fn pack_level(
    level_index: u32,
    config: &LevelConfig,
    base_height: f64,
    footprint: &UnitFootprint,
    spacing: &Spacing,
    selector: &mut impl BoxSelector,
) -> Result<Vec<PlacedItem>> {
    if level_index == 0 {
        return Err(Error::InvalidConfig("Level index 0 is reserved".into()));
    }
    config.validate()?;
    footprint.validate()?;
    spacing.validate()?;

    let min_bound = -footprint.length / 2.0 + spacing.margin;
    let max_bound = footprint.length / 2.0 - spacing.margin;

    let mut items = Vec::new();
    let mut cursor = min_bound;
    let mut slot = 0usize;

    loop {
        let ty = selector.pick_type(&config.allowed_types);
        let dims = ty.dims();
        if cursor + dims.length / 2.0 > max_bound {
            break;
        }

        let z = cursor + dims.length / 2.0;
        for layer in 0..config.stack_layers {
            let y = base_height
                + dims.height / 2.0
                + layer as f64 * (dims.height + spacing.layer_gap);
            items.push(PlacedItem::new_box(
                format!("L{level_index}-S{slot}-{layer}"),
                ty,
                level_index,
                Vector3::new(0.0, y, z),
                selector.pick_status(),
            ));
        }

        cursor += dims.length + spacing.slot_gap;
        slot += 1;
    }

    Ok(items)
}
