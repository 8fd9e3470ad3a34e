// Door endpoint derivation.
//
// Doors are symbolic connectors, not wall openings:
// - outside door: left-edge midpoint of room1, running `door_length` to the left
// - inter-room door: right-edge midpoint of room1 to room2's left edge, at room1's mid height
//
// Adjacency of the two rooms is not checked, nor whether the line crosses other rooms.

use crate::model::{PointI, RectI};

/// Compute (start, end) for a door leaving `room1`.
pub fn derive_door_endpoints(room1: &RectI, room2: Option<&RectI>, door_length: i32) -> (PointI, PointI) {
    match room2 {
        None => {
            let start = room1.left_mid();
            (start, PointI { x: start.x.saturating_sub(door_length), y: start.y })
        }
        Some(other) => {
            let start = room1.right_mid();
            (start, PointI { x: other.x, y: start.y })
        }
    }
}
