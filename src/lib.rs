//! Spatial editing core for a 2D floor-plan editor.
//!
//! Rooms are grid-snapped rectangles that never overlap; doors are symbolic
//! connectors between named rooms or to the outside. The presentation layer
//! forwards pointer gestures and button actions to an [`Editor`] and draws
//! from its [`PlanOutput`] snapshot.

pub mod codec;
pub mod editor;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod output;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use editor::Editor;
pub use error::{FloorPlanError, Result};
pub use interaction::{DragCapture, InteractionController, InteractionState};
pub use layout::{LayoutConfig, LayoutEngine, OUTSIDE, Plan, snap_to_grid};
pub use model::{Color, Door, PointI, RectI, Room, RoomDraft, RoomId, RoomType, SizeI};
pub use output::{DoorOutput, ErrorInfo, PlanOutput, RoomOutput, SelectionOutput};

#[cfg(target_arch = "wasm32")]
pub use wasm::FloorPlanEditor;
