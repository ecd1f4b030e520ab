//! Shelf row allocation across the warehouse floor.
//!
//! Partitions a requested unit count into parallel rows, pairs
//! adjacent units into double-wide placements where possible, and
//! walks a length cursor to give every placement a center coordinate.

use waregrid_core::geom::Vector3;
use waregrid_core::{Error, PlacedItem, Result, Spacing, UnitFootprint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input parameters for row allocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowParams {
    /// How many storage units to place.
    pub total_units: usize,

    /// Warehouse extent along x, in meters.
    pub warehouse_width: f64,

    /// Warehouse extent along z, in meters.
    pub warehouse_length: f64,

    /// Clear aisle width between adjacent rows.
    pub aisle_width: f64,

    /// Gap kept between the first row and the warehouse wall.
    pub wall_gap: f64,

    /// Number of parallel rows.
    pub row_count: usize,

    /// Offset reconciling layout space with the loaded 3D asset's
    /// bounding-box center. Supplied by the rendering layer.
    pub centroid_offset: Vector3<f64>,
}

impl RowParams {
    /// Creates parameters for the given unit count and row count,
    /// with the default warehouse envelope.
    pub fn new(total_units: usize, row_count: usize) -> Self {
        Self {
            total_units,
            warehouse_width: 30.0,
            warehouse_length: 50.0,
            aisle_width: 3.0,
            wall_gap: 1.0,
            row_count,
            centroid_offset: Vector3::zeros(),
        }
    }

    /// Sets the warehouse envelope.
    pub fn with_warehouse(mut self, width: f64, length: f64) -> Self {
        self.warehouse_width = width;
        self.warehouse_length = length;
        self
    }

    /// Sets the aisle width between rows.
    pub fn with_aisle_width(mut self, width: f64) -> Self {
        self.aisle_width = width;
        self
    }

    /// Sets the wall gap before the first row.
    pub fn with_wall_gap(mut self, gap: f64) -> Self {
        self.wall_gap = gap;
        self
    }

    /// Sets the centroid reconciliation offset.
    pub fn with_centroid_offset(mut self, offset: Vector3<f64>) -> Self {
        self.centroid_offset = offset;
        self
    }
}

/// Unit count and center line assigned to one row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowPlan {
    /// Row ordinal, 0-based.
    pub row_index: usize,

    /// Center x coordinate of the row, before centroid offset.
    pub center_x: f64,

    /// Units assigned to this row.
    pub units_in_row: usize,
}

/// Result of a row allocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowLayout {
    /// Per-row distribution and center lines.
    pub rows: Vec<RowPlan>,

    /// Placed storage units. A double-wide placement consumes two
    /// units but contributes one entry.
    pub placements: Vec<PlacedItem>,
}

impl RowLayout {
    /// Total units distributed across the rows.
    pub fn unit_count(&self) -> usize {
        self.rows.iter().map(|r| r.units_in_row).sum()
    }

    /// Returns whether the layout placed anything.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Splits `total` units over `rows` rows.
///
/// Integer division assigns the base count; the remainder goes to the
/// earliest rows, one extra each. Deterministic and order-stable.
/// Zero rows yields an empty split.
pub fn split_units(total: usize, rows: usize) -> Vec<usize> {
    if rows == 0 {
        return Vec::new();
    }
    let base = total / rows;
    let remainder = total % rows;
    (0..rows)
        .map(|r| if r < remainder { base + 1 } else { base })
        .collect()
}

/// Allocates storage units into parallel rows.
///
/// Rows run along z. Row `r` is centered at
/// `-width/2 + wall_gap + double_depth/2 + r * (double_depth + aisle)`,
/// so rows stay clear of each other and of the warehouse boundary for
/// valid inputs. Within a row the cursor places a double-wide unit
/// while at least two units remain; a final odd unit becomes a single,
/// offset toward one side of the row center line. All positions are
/// translated by the centroid offset.
pub fn allocate_rows(
    params: &RowParams,
    footprint: &UnitFootprint,
    spacing: &Spacing,
) -> Result<RowLayout> {
    if params.row_count == 0 {
        return Err(Error::InvalidConfig("Row count must be at least 1".into()));
    }
    footprint.validate()?;
    spacing.validate()?;

    let double_depth = footprint.double_depth();
    let first_center = -params.warehouse_width / 2.0 + params.wall_gap + double_depth / 2.0;
    let row_stride = double_depth + params.aisle_width;
    let single_offset = double_depth / 2.0 - footprint.depth / 2.0 - spacing.margin;

    let last_edge = first_center + (params.row_count - 1) as f64 * row_stride + double_depth / 2.0;
    if last_edge > params.warehouse_width / 2.0 {
        log::warn!(
            "{} rows extend {:.2}m past the warehouse wall",
            params.row_count,
            last_edge - params.warehouse_width / 2.0
        );
    }

    let counts = split_units(params.total_units, params.row_count);
    let mut rows = Vec::with_capacity(params.row_count);
    let mut placements = Vec::new();

    for (row_index, &units_in_row) in counts.iter().enumerate() {
        let center_x = first_center + row_index as f64 * row_stride;
        rows.push(RowPlan {
            row_index,
            center_x,
            units_in_row,
        });

        let mut remaining = units_in_row;
        let mut cursor = -params.warehouse_length / 2.0 + spacing.margin;
        let mut slot = 0usize;

        while remaining > 0 {
            // Pair while two or more remain; the last odd unit is a single.
            let double = remaining >= 2;
            let x = if double {
                center_x
            } else {
                center_x + single_offset
            };

            let position = Vector3::new(x, 0.0, cursor + footprint.length / 2.0)
                + params.centroid_offset;
            let id = format!("R{row_index}-S{slot}");
            placements.push(PlacedItem::new_unit(id, double, position));

            remaining -= if double { 2 } else { 1 };
            cursor += footprint.length + spacing.slot_gap;
            slot += 1;
        }
    }

    Ok(RowLayout { rows, placements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use waregrid_core::geom::vec3;
    use waregrid_core::ItemKind;

    fn doubles_and_singles(layout: &RowLayout) -> (usize, usize) {
        let doubles = layout
            .placements
            .iter()
            .filter(|p| p.kind == ItemKind::DoubleUnit)
            .count();
        let singles = layout
            .placements
            .iter()
            .filter(|p| p.kind == ItemKind::SingleUnit)
            .count();
        (doubles, singles)
    }

    #[test]
    fn test_distribution_sums_to_total() {
        for total in 0..40 {
            for rows in 1..6 {
                let counts = split_units(total, rows);
                assert_eq!(counts.iter().sum::<usize>(), total);
                let max = counts.iter().max().unwrap();
                let min = counts.iter().min().unwrap();
                assert!(max - min <= 1, "total={total} rows={rows}");
            }
        }
    }

    #[test]
    fn test_remainder_goes_to_earliest_rows() {
        assert_eq!(split_units(7, 3), vec![3, 2, 2]);
        assert_eq!(split_units(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(split_units(2, 3), vec![1, 1, 0]);
    }

    #[test]
    fn test_seven_units_three_rows() {
        let params = RowParams::new(7, 3);
        let layout = allocate_rows(&params, &UnitFootprint::standard(), &Spacing::default())
            .unwrap();

        assert_eq!(layout.unit_count(), 7);
        let counts: Vec<usize> = layout.rows.iter().map(|r| r.units_in_row).collect();
        assert_eq!(counts, vec![3, 2, 2]);

        // Row 0 holds 3 units: one double plus one single. Rows 1 and 2
        // pair cleanly into one double each.
        let (doubles, singles) = doubles_and_singles(&layout);
        assert_eq!(doubles, 3);
        assert_eq!(singles, 1);
    }

    #[test]
    fn test_zero_units_empty_layout() {
        let params = RowParams::new(0, 3);
        let layout = allocate_rows(&params, &UnitFootprint::standard(), &Spacing::default())
            .unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.unit_count(), 0);
        assert_eq!(layout.rows.len(), 3);
    }

    #[test]
    fn test_zero_rows_fails_fast() {
        let params = RowParams::new(4, 0);
        let result = allocate_rows(&params, &UnitFootprint::standard(), &Spacing::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_single_never_paired() {
        // One unit per row can only ever produce singles.
        let params = RowParams::new(3, 3);
        let layout = allocate_rows(&params, &UnitFootprint::standard(), &Spacing::default())
            .unwrap();
        let (doubles, singles) = doubles_and_singles(&layout);
        assert_eq!(doubles, 0);
        assert_eq!(singles, 3);
    }

    #[test]
    fn test_row_centers_evenly_spaced() {
        let footprint = UnitFootprint::standard();
        let params = RowParams::new(8, 4);
        let layout = allocate_rows(&params, &footprint, &Spacing::default()).unwrap();

        let expected_first =
            -params.warehouse_width / 2.0 + params.wall_gap + footprint.double_depth() / 2.0;
        assert_relative_eq!(layout.rows[0].center_x, expected_first, epsilon = 1e-12);

        let stride = footprint.double_depth() + params.aisle_width;
        for pair in layout.rows.windows(2) {
            assert_relative_eq!(
                pair[1].center_x - pair[0].center_x,
                stride,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_no_two_doubles_share_a_slot() {
        let params = RowParams::new(12, 2);
        let layout = allocate_rows(&params, &UnitFootprint::standard(), &Spacing::default())
            .unwrap();

        let mut slots: Vec<(i64, i64)> = layout
            .placements
            .iter()
            .filter(|p| p.kind == ItemKind::DoubleUnit)
            .map(|p| ((p.x() * 1e6) as i64, (p.z() * 1e6) as i64))
            .collect();
        let before = slots.len();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), before);
    }

    #[test]
    fn test_centroid_offset_applied() {
        let offset = vec3(2.0, 0.5, -3.0);
        let base = RowParams::new(4, 2);
        let shifted = base.clone().with_centroid_offset(offset);

        let footprint = UnitFootprint::standard();
        let spacing = Spacing::default();
        let a = allocate_rows(&base, &footprint, &spacing).unwrap();
        let b = allocate_rows(&shifted, &footprint, &spacing).unwrap();

        for (p, q) in a.placements.iter().zip(&b.placements) {
            assert_relative_eq!(q.x() - p.x(), 2.0, epsilon = 1e-12);
            assert_relative_eq!(q.y() - p.y(), 0.5, epsilon = 1e-12);
            assert_relative_eq!(q.z() - p.z(), -3.0, epsilon = 1e-12);
        }
    }
}
