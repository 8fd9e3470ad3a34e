// Layout engine for a single-floor plan.
//
// The engine owns the Plan and is the only code path that mutates it.
//
// Guarantees (for every plan reachable through the engine):
// - Committed room positions are snapped to the grid unit
// - No two committed rooms overlap (edge contact is allowed)
// - A room is either fully added or not added at all
// - Doors never reference a room that is no longer in the plan
//
// Submodules:
// - plan: Plan storage + LayoutEngine operations
// - spatial_grid: bucketed overlap queries for the free-slot search
// - doors: door endpoint derivation

use serde::{Deserialize, Serialize};

use crate::model::{PointI, SizeI};

mod doors;
mod plan;
mod spatial_grid;

pub use doors::derive_door_endpoints;
pub use plan::{LayoutEngine, Plan};

/// Token that names the outside as a door target. Reserved: it wins over a
/// room that happens to carry the same name.
pub const OUTSIDE: &str = "outside";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid unit every committed position is snapped to.
    pub grid_unit: i32,
    /// Extent scanned by the free-slot search, starting at (0, 0).
    pub canvas: SizeI,
    /// Length of the stub drawn for an outside door.
    pub door_length: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_unit: 20,
            canvas: SizeI { w: 800, h: 600 },
            door_length: 20,
        }
    }
}

impl LayoutConfig {
    /// Grid unit clamped to at least 1.
    pub fn grid(&self) -> i32 {
        self.grid_unit.max(1)
    }
}

/// Round a coordinate to the nearest multiple of `grid`, halves away from zero.
pub fn snap_coord(value: i32, grid: i32) -> i32 {
    let grid = grid.max(1);
    let cells = (value as f64 / grid as f64).round() as i64;
    (cells * grid as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Snap both axes independently.
pub fn snap_to_grid(pos: PointI, grid: i32) -> PointI {
    PointI { x: snap_coord(pos.x, grid), y: snap_coord(pos.y, grid) }
}
