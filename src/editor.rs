//! The editor state object: one layout engine plus one interaction controller.
//!
//! Construct one at startup and pass it by reference to whatever handles input
//! and drawing. Every method is synchronous and runs to completion.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::codec;
use crate::error::{FloorPlanError, Result};
use crate::interaction::{InteractionController, InteractionState};
use crate::layout::{LayoutConfig, LayoutEngine};
use crate::model::{Door, PointI, Room, RoomDraft, RoomId, RoomType, SizeI};
use crate::output::{self, PlanOutput};

#[derive(Debug, Clone, Default)]
pub struct Editor {
    engine: LayoutEngine,
    controller: InteractionController,
}

impl Editor {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { engine: LayoutEngine::new(cfg), controller: InteractionController::new() }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn rooms(&self) -> &[Room] {
        self.engine.plan().rooms()
    }

    pub fn doors(&self) -> &[Door] {
        self.engine.plan().doors()
    }

    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.engine.plan().find_by_name(name)
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.controller.selected().and_then(|id| self.engine.plan().room(id))
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    /// Create a room of the given type and size at the first free grid corner.
    pub fn add_room(&mut self, kind: RoomType, width: i32, height: i32, name: &str) -> Result<&Room> {
        let size = SizeI { w: width, h: height };
        if !size.is_positive() {
            return Err(FloorPlanError::InvalidDimension { width, height });
        }
        if name.trim().is_empty() {
            return Err(FloorPlanError::EmptyName);
        }

        let pos = self.engine.find_free_position(size);
        self.engine.add_room(RoomDraft { kind, name: name.to_string(), pos, size })
    }

    pub fn connect_rooms(&mut self, name1: &str, name2: &str) -> Result<&Door> {
        self.engine.connect_rooms(name1, name2)
    }

    /// Delete the selected room along with its doors.
    pub fn delete_selected_room(&mut self) -> Result<Room> {
        let id = self.controller.selected().ok_or(FloorPlanError::NoSelection)?;
        self.controller.forget(id);
        self.engine.delete_room(id).ok_or(FloorPlanError::NoSelection)
    }

    pub fn clear_all_rooms(&mut self) {
        self.engine.clear();
        self.controller.reset();
    }

    /// Start a gesture. A drag still captured from a gesture whose release
    /// never arrived is committed (or rolled back) first.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> Option<RoomId> {
        self.controller.pointer_down(&mut self.engine, PointI { x, y })
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        self.controller.pointer_move(&mut self.engine, PointI { x, y })
    }

    /// Finish the gesture. `Overlap` means the room was put back where the
    /// gesture started.
    pub fn pointer_up(&mut self) -> Result<Option<RoomId>> {
        self.controller.pointer_up(&mut self.engine)
    }

    pub fn save_to_string(&self) -> String {
        codec::emit_plan(self.rooms())
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        codec::write_plan(writer, self.rooms())
    }

    /// Replace the plan with the file's rooms. On any error the current plan
    /// is left exactly as it was.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        let drafts = codec::read_plan(reader).inspect_err(|e| warn!(error = %e, "plan load failed"))?;
        self.engine.replace_rooms(drafts);
        self.controller.reset();
        Ok(())
    }

    pub fn load_str(&mut self, input: &str) -> Result<()> {
        self.load(input.as_bytes())
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.save(BufWriter::new(file))?;
        debug!(path = %path.display(), rooms = self.rooms().len(), "plan saved");
        Ok(())
    }

    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.load(BufReader::new(file))?;
        debug!(path = %path.display(), rooms = self.rooms().len(), "plan loaded");
        Ok(())
    }

    pub fn snapshot(&self) -> PlanOutput {
        output::snapshot(&self.engine, self.controller.selected())
    }
}
