//! Press / drag / release handling on the canvas.
//!
//! One gesture at a time. A press selects the first room (insertion order)
//! under the pointer and captures it for dragging; moves preview the new
//! position without validation; the release commits through the layout
//! engine, which rolls the room back if the drop collides.
//!
//! Selection and drag capture start on the same press but end separately:
//! the release drops the capture, the selection stays until the next press.

use tracing::{debug, warn};

use crate::error::Result;
use crate::layout::{LayoutEngine, Plan};
use crate::model::{PointI, RoomId};

/// Release has no state of its own: `pointer_up` commits or rolls back
/// synchronously and returns to `Idle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionState {
    /// No gesture in progress.
    Idle,
    /// A room was pressed but has not moved yet.
    Selecting,
    /// A captured room is following the pointer.
    Dragging,
}

/// Per-gesture capture. Never outlives the gesture that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DragCapture {
    pub room: RoomId,
    /// Pointer position relative to the room's top-left corner at press time.
    pub offset: PointI,
    /// Where the room was when the gesture started; the rollback target.
    pub original: PointI,
    moved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    selected: Option<RoomId>,
    drag: Option<DragCapture>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        match self.drag {
            None => InteractionState::Idle,
            Some(d) if !d.moved => InteractionState::Selecting,
            Some(_) => InteractionState::Dragging,
        }
    }

    pub fn selected(&self) -> Option<RoomId> {
        self.selected
    }

    pub fn capture(&self) -> Option<&DragCapture> {
        self.drag.as_ref()
    }

    /// Pointer down. Returns the newly selected room, if any; a miss clears
    /// both the selection and the capture.
    ///
    /// A capture left over from a gesture that never saw its release is
    /// settled first, so a preview position never outlives its gesture.
    pub fn pointer_down(&mut self, engine: &mut LayoutEngine, p: PointI) -> Option<RoomId> {
        if let Some(stale) = self.drag.take() {
            if let Err(e) = engine.commit_move(stale.room, stale.original) {
                warn!(error = %e, "unreleased drag settled at its original position");
            }
        }

        let plan = engine.plan();
        let hit = plan.hit_test(p).and_then(|id| plan.room(id));
        match hit {
            Some(room) => {
                self.selected = Some(room.id);
                self.drag = Some(DragCapture {
                    room: room.id,
                    offset: p.offset_from(room.pos),
                    original: room.pos,
                    moved: false,
                });
                debug!(room = %room.name, "room selected");
                Some(room.id)
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Pointer move. Returns whether a captured room was moved.
    pub fn pointer_move(&mut self, engine: &mut LayoutEngine, p: PointI) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        drag.moved = true;
        engine.move_room(drag.room, p.offset_from(drag.offset))
    }

    /// Pointer up. Commits the captured room, if any. The capture is dropped
    /// whether or not the commit succeeds.
    pub fn pointer_up(&mut self, engine: &mut LayoutEngine) -> Result<Option<RoomId>> {
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };
        engine.commit_move(drag.room, drag.original)?;
        Ok(Some(drag.room))
    }

    /// Forget a room that left the plan.
    pub fn forget(&mut self, id: RoomId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.is_some_and(|d| d.room == id) {
            self.drag = None;
        }
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FloorPlanError;
    use crate::model::{RoomDraft, RoomType, SizeI};

    fn engine_with(rooms: &[(&str, i32, i32)]) -> LayoutEngine {
        let mut engine = LayoutEngine::default();
        for &(name, x, y) in rooms {
            engine
                .add_room(RoomDraft {
                    kind: RoomType::Bedroom,
                    name: name.to_string(),
                    pos: PointI::new(x, y),
                    size: SizeI { w: 100, h: 100 },
                })
                .unwrap();
        }
        engine
    }

    #[test]
    fn test_press_on_room_selects_and_captures() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();

        let id = ctl.pointer_down(&mut engine, PointI::new(30, 40)).unwrap();
        assert_eq!(ctl.selected(), Some(id));
        assert_eq!(ctl.state(), InteractionState::Selecting);
        let cap = ctl.capture().unwrap();
        assert_eq!(cap.offset, PointI::new(30, 40));
        assert_eq!(cap.original, PointI::new(0, 0));
    }

    #[test]
    fn test_press_on_empty_space_clears_selection() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        ctl.pointer_down(&mut engine, PointI::new(10, 10));
        assert!(ctl.pointer_down(&mut engine, PointI::new(400, 400)).is_none());
        assert_eq!(ctl.selected(), None);
        assert_eq!(ctl.state(), InteractionState::Idle);
    }

    #[test]
    fn test_press_on_far_corner_counts_as_inside() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        assert!(ctl.pointer_down(&mut engine, PointI::new(100, 100)).is_some());
    }

    #[test]
    fn test_drag_follows_pointer_minus_offset() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        let id = ctl.pointer_down(&mut engine, PointI::new(30, 40)).unwrap();

        assert!(ctl.pointer_move(&mut engine, PointI::new(257, 143)));
        assert_eq!(ctl.state(), InteractionState::Dragging);
        // No snapping while dragging.
        assert_eq!(engine.plan().room(id).unwrap().pos, PointI::new(227, 103));
    }

    #[test]
    fn test_release_commits_snapped_position_and_keeps_selection() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        let id = ctl.pointer_down(&mut engine, PointI::new(30, 40)).unwrap();
        ctl.pointer_move(&mut engine, PointI::new(257, 143));

        assert_eq!(ctl.pointer_up(&mut engine).unwrap(), Some(id));
        assert_eq!(engine.plan().room(id).unwrap().pos, PointI::new(220, 100));
        assert_eq!(ctl.selected(), Some(id));
        assert_eq!(ctl.state(), InteractionState::Idle);
    }

    #[test]
    fn test_release_over_other_room_rolls_back() {
        let mut engine = engine_with(&[("A", 0, 0), ("B", 300, 200)]);
        let mut ctl = InteractionController::new();
        let b = ctl.pointer_down(&mut engine, PointI::new(350, 250)).unwrap();
        ctl.pointer_move(&mut engine, PointI::new(90, 70));
        ctl.pointer_move(&mut engine, PointI::new(60, 60));

        let err = ctl.pointer_up(&mut engine).unwrap_err();
        assert!(matches!(err, FloorPlanError::Overlap { .. }));
        assert_eq!(engine.plan().room(b).unwrap().pos, PointI::new(300, 200));
        assert_eq!(ctl.state(), InteractionState::Idle);
        assert_eq!(ctl.selected(), Some(b));
    }

    #[test]
    fn test_move_and_release_without_capture_are_noops() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        assert!(!ctl.pointer_move(&mut engine, PointI::new(50, 50)));
        assert_eq!(ctl.pointer_up(&mut engine).unwrap(), None);
        assert_eq!(engine.plan().rooms()[0].pos, PointI::new(0, 0));
    }

    #[test]
    fn test_press_during_unreleased_drag_rolls_it_back() {
        let mut engine = engine_with(&[("A", 0, 0), ("B", 100, 0)]);
        let mut ctl = InteractionController::new();
        let b = ctl.pointer_down(&mut engine, PointI::new(150, 50)).unwrap();
        ctl.pointer_move(&mut engine, PointI::new(90, 60));

        assert!(ctl.pointer_down(&mut engine, PointI::new(500, 500)).is_none());
        assert_eq!(engine.plan().room(b).unwrap().pos, PointI::new(100, 0));
        assert_eq!(ctl.state(), InteractionState::Idle);
        assert_eq!(ctl.pointer_up(&mut engine).unwrap(), None);
    }

    #[test]
    fn test_press_during_unreleased_drag_commits_valid_preview() {
        let mut engine = engine_with(&[("A", 0, 0), ("B", 100, 0)]);
        let mut ctl = InteractionController::new();
        let b = ctl.pointer_down(&mut engine, PointI::new(150, 50)).unwrap();
        ctl.pointer_move(&mut engine, PointI::new(453, 349));

        // The new press lands on the dropped room and captures it afresh.
        assert_eq!(ctl.pointer_down(&mut engine, PointI::new(420, 320)), Some(b));
        assert_eq!(engine.plan().room(b).unwrap().pos, PointI::new(400, 300));
        assert_eq!(ctl.capture().unwrap().original, PointI::new(400, 300));
    }

    #[test]
    fn test_forget_drops_selection_and_capture() {
        let mut engine = engine_with(&[("A", 0, 0)]);
        let mut ctl = InteractionController::new();
        let id = ctl.pointer_down(&mut engine, PointI::new(10, 10)).unwrap();
        ctl.forget(id);
        assert_eq!(ctl.selected(), None);
        assert!(ctl.capture().is_none());
    }
}
