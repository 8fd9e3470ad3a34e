// Plan storage and the validated operations that mutate it.
//
// Rooms are kept in insertion order: that order is the render z-order, the
// overlap scan order, and the hit-test order.

use tracing::{debug, warn};

use crate::error::{FloorPlanError, Result};
use crate::model::{Door, PointI, RectI, Room, RoomDraft, RoomId, SizeI};

use super::doors::derive_door_endpoints;
use super::spatial_grid::SpatialGrid;
use super::{LayoutConfig, OUTSIDE, snap_to_grid};

/// The rooms and doors of one floor. Read-only outside the engine.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    rooms: Vec<Room>,
    doors: Vec<Door>,
}

impl Plan {
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.is_named(name))
    }

    /// First room in insertion order whose bounds contain `p` (edges inclusive).
    /// Earlier rooms win over later ones, not the topmost.
    pub fn hit_test(&self, p: PointI) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.bounds().contains(p)).map(|r| r.id)
    }

    /// True iff `rect` strictly intersects any room other than `exclude`.
    pub fn is_overlapping(&self, rect: &RectI, exclude: Option<RoomId>) -> bool {
        self.rooms
            .iter()
            .filter(|r| Some(r.id) != exclude)
            .any(|r| rect.overlaps(&r.bounds()))
    }
}

/// Owns the plan and exposes the only code paths that change it.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
    plan: Plan,
    next_id: u64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg, plan: Plan::default(), next_id: 1 }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    fn allocate_id(&mut self) -> RoomId {
        let id = RoomId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn snap_to_grid(&self, pos: PointI) -> PointI {
        snap_to_grid(pos, self.cfg.grid())
    }

    pub fn is_overlapping(&self, rect: &RectI, exclude: Option<RoomId>) -> bool {
        self.plan.is_overlapping(rect, exclude)
    }

    /// Validate, snap, and append a room at the top of the z-order.
    ///
    /// Nothing is added on error.
    pub fn add_room(&mut self, draft: RoomDraft) -> Result<&Room> {
        if !draft.size.is_positive() {
            return Err(FloorPlanError::InvalidDimension { width: draft.size.w, height: draft.size.h });
        }
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(FloorPlanError::EmptyName);
        }
        if self.plan.find_by_name(name).is_some() {
            return Err(FloorPlanError::DuplicateName(name.to_string()));
        }

        let pos = self.snap_to_grid(draft.pos);
        let Some(rect) = RectI::checked_at(pos, draft.size) else {
            return Err(FloorPlanError::OutOfRange { name: name.to_string() });
        };
        if self.plan.is_overlapping(&rect, None) {
            warn!(room = %name, x = pos.x, y = pos.y, "overlap detected, room not added");
            return Err(FloorPlanError::Overlap { name: name.to_string() });
        }

        let id = self.allocate_id();
        debug!(room = %name, x = pos.x, y = pos.y, w = draft.size.w, h = draft.size.h, "room added");
        self.plan.rooms.push(Room {
            id,
            kind: draft.kind,
            name: name.to_string(),
            pos,
            size: draft.size,
        });
        Ok(&self.plan.rooms[self.plan.rooms.len() - 1])
    }

    /// First free top-left corner for a room of `size`, scanning the canvas in
    /// row-major order (y outer, x inner) at grid steps from (0, 0).
    ///
    /// Falls back to (0, 0) when the canvas is full; that corner is not
    /// guaranteed free, so `add_room` still has the final say.
    pub fn find_free_position(&self, size: SizeI) -> PointI {
        let grid = self.cfg.grid();
        if !size.is_positive() {
            return PointI::default();
        }

        let cell_size = self
            .plan
            .rooms
            .iter()
            .map(|r| r.size.w.max(r.size.h))
            .fold(grid.max(size.w).max(size.h), i32::max);
        let mut index = SpatialGrid::new(cell_size);
        for room in &self.plan.rooms {
            index.insert(room.id, room.bounds());
        }

        for y in (0..self.cfg.canvas.h).step_by(grid as usize) {
            for x in (0..self.cfg.canvas.w).step_by(grid as usize) {
                let candidate = RectI { x, y, w: size.w, h: size.h };
                if !index.overlaps_any(&candidate) {
                    return PointI { x, y };
                }
            }
        }
        PointI::default()
    }

    /// Set a room's position as-is. Used for live drag previews, so the
    /// result may overlap other rooms until `commit_move` runs.
    pub fn move_room(&mut self, id: RoomId, pos: PointI) -> bool {
        match self.plan.room_mut(id) {
            Some(room) => {
                room.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Snap a moved room and keep it there if it fits. On collision the room
    /// goes back to exactly `fallback` and `Overlap` is returned; a far edge
    /// past the `i32` range does the same with `OutOfRange`.
    ///
    /// Doors touching the room are re-derived from wherever it ends up.
    pub fn commit_move(&mut self, id: RoomId, fallback: PointI) -> Result<()> {
        let Some(room) = self.plan.room(id) else {
            return Err(FloorPlanError::UnknownRoom(format!("#{}", id.0)));
        };
        let pos = self.snap_to_grid(room.pos);
        let name = room.name.clone();

        let rejected = match RectI::checked_at(pos, room.size) {
            None => Some(FloorPlanError::OutOfRange { name: name.clone() }),
            Some(rect) if self.plan.is_overlapping(&rect, Some(id)) => {
                Some(FloorPlanError::Overlap { name: name.clone() })
            }
            Some(_) => None,
        };
        if let Some(err) = rejected {
            warn!(room = %name, x = pos.x, y = pos.y, error = %err, "move rejected, returning to original position");
            self.move_room(id, fallback);
            self.rederive_doors(id);
            return Err(err);
        }

        self.move_room(id, pos);
        self.rederive_doors(id);
        debug!(room = %name, x = pos.x, y = pos.y, "room moved");
        Ok(())
    }

    /// Remove a room and every door that references it.
    pub fn delete_room(&mut self, id: RoomId) -> Option<Room> {
        let idx = self.plan.rooms.iter().position(|r| r.id == id)?;
        let room = self.plan.rooms.remove(idx);
        let before = self.plan.doors.len();
        self.plan.doors.retain(|d| !d.references(id));
        debug!(room = %room.name, doors_removed = before - self.plan.doors.len(), "room deleted");
        Some(room)
    }

    /// Drop all rooms and doors.
    pub fn clear(&mut self) {
        self.plan.rooms.clear();
        self.plan.doors.clear();
        debug!("plan cleared");
    }

    /// Add a door from `name1` to `name2`, or to the outside when `name2` is
    /// the reserved token `outside` (any case).
    pub fn connect_rooms(&mut self, name1: &str, name2: &str) -> Result<&Door> {
        let name1 = name1.trim();
        let name2 = name2.trim();

        let Some(room1) = self.plan.find_by_name(name1) else {
            warn!(room = %name1, "door endpoint not found");
            return Err(FloorPlanError::UnknownRoom(name1.to_string()));
        };
        let room2 = if name2.to_lowercase() == OUTSIDE {
            None
        } else {
            match self.plan.find_by_name(name2) {
                Some(r) => Some(r),
                None => {
                    warn!(room = %name2, "door endpoint not found");
                    return Err(FloorPlanError::UnknownRoom(name2.to_string()));
                }
            }
        };

        let (start, end) = derive_door_endpoints(
            &room1.bounds(),
            room2.map(|r| r.bounds()).as_ref(),
            self.cfg.door_length,
        );
        let door = Door { start, end, room1: room1.id, room2: room2.map(|r| r.id) };
        debug!(
            from = %room1.name,
            to = %room2.map(|r| r.name.as_str()).unwrap_or(OUTSIDE),
            "door connected"
        );
        self.plan.doors.push(door);
        Ok(&self.plan.doors[self.plan.doors.len() - 1])
    }

    /// Recompute endpoints of doors touching `id` from current room bounds.
    fn rederive_doors(&mut self, id: RoomId) {
        let door_length = self.cfg.door_length;
        let rooms = &self.plan.rooms;
        let bounds_of = |rid: RoomId| rooms.iter().find(|r| r.id == rid).map(|r| r.bounds());

        for door in self.plan.doors.iter_mut().filter(|d| d.references(id)) {
            let Some(r1) = bounds_of(door.room1) else { continue };
            let r2 = door.room2.and_then(bounds_of);
            let (start, end) = derive_door_endpoints(&r1, r2.as_ref(), door_length);
            door.start = start;
            door.end = end;
        }
    }

    /// Swap in a fully validated room list, e.g. from a loaded file.
    /// Doors are dropped since they are not persisted.
    pub(crate) fn replace_rooms(&mut self, drafts: Vec<RoomDraft>) {
        let mut rooms = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = self.allocate_id();
            rooms.push(Room { id, kind: draft.kind, name: draft.name, pos: draft.pos, size: draft.size });
        }
        self.plan.rooms = rooms;
        self.plan.doors.clear();
        debug!(rooms = self.plan.rooms.len(), "plan replaced");
    }
}
