//! Render snapshot for the presentation layer.
//!
//! These structs are serialized to JSON and handed to the front-end, which
//! draws the grid, rooms, doors and the selection highlight from them.

use serde::Serialize;

use crate::error::FloorPlanError;
use crate::layout::LayoutEngine;
use crate::model::{PointI, RectI, RoomId, SizeI};

/// Horizontal gap between a selected room's right edge and its caption.
const CAPTION_GAP_X: i32 = 5;
/// Caption sits this far above the room's top edge.
const CAPTION_RISE_Y: i32 = 5;

/// A room ready to be drawn
#[derive(Debug, Clone, Serialize)]
pub struct RoomOutput {
    pub id: RoomId,
    pub name: String,
    /// Type label as saved ("Living Room", "Garage", ...)
    pub kind: String,
    /// Fill color, `#RRGGBB`
    pub color: String,
    pub bounds: RectI,
    pub selected: bool,
}

/// A door line between its two endpoints
#[derive(Debug, Clone, Serialize)]
pub struct DoorOutput {
    pub start: PointI,
    pub end: PointI,
    pub room1: String,
    /// None for doors leading outside
    pub room2: Option<String>,
    pub outside: bool,
}

/// Highlight and info bubble for the selected room
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOutput {
    pub id: RoomId,
    pub bounds: RectI,
    /// "<name> (<type>): <w>x<h>"
    pub caption: String,
    /// Top-left of the caption bubble
    pub caption_anchor: PointI,
}

/// Error information for the host to display
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// Stable error tag, e.g. "overlap"
    pub kind: String,
    pub message: String,
    /// 1-based line number for file format errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl From<&FloorPlanError> for ErrorInfo {
    fn from(err: &FloorPlanError) -> Self {
        let line = match err {
            FloorPlanError::Format { line, .. } => Some(*line),
            _ => None,
        };
        ErrorInfo { kind: err.kind().to_string(), message: err.to_string(), line }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub grid_unit: i32,
    pub canvas: SizeI,
    pub rooms: Vec<RoomOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<DoorOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<SelectionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl PlanOutput {
    pub fn with_error(mut self, err: &FloorPlanError) -> Self {
        self.error = Some(ErrorInfo::from(err));
        self
    }
}

/// Build a read-only snapshot of the plan, rooms in z-order.
pub fn snapshot(engine: &LayoutEngine, selected: Option<RoomId>) -> PlanOutput {
    let plan = engine.plan();
    let cfg = engine.config();

    let rooms = plan
        .rooms()
        .iter()
        .map(|r| RoomOutput {
            id: r.id,
            name: r.name.clone(),
            kind: r.kind.label().to_string(),
            color: r.color().to_hex(),
            bounds: r.bounds(),
            selected: Some(r.id) == selected,
        })
        .collect();

    let doors = plan
        .doors()
        .iter()
        .filter_map(|d| {
            let room1 = plan.room(d.room1)?.name.clone();
            let room2 = match d.room2 {
                Some(id) => Some(plan.room(id)?.name.clone()),
                None => None,
            };
            Some(DoorOutput { start: d.start, end: d.end, room1, room2, outside: d.is_outside() })
        })
        .collect();

    let selected = selected.and_then(|id| plan.room(id)).map(|r| {
        let bounds = r.bounds();
        SelectionOutput {
            id: r.id,
            bounds,
            caption: r.caption(),
            caption_anchor: PointI {
                x: bounds.right().saturating_add(CAPTION_GAP_X),
                y: bounds.y.saturating_sub(CAPTION_RISE_Y),
            },
        }
    });

    PlanOutput {
        grid_unit: cfg.grid(),
        canvas: cfg.canvas,
        rooms,
        doors,
        selected,
        error: None,
    }
}
