//! WASM bindings for the floorplan-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Every mutating call returns the fresh render snapshot as JSON; failures are
//! reported in its `error` field and echoed to the browser console.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::editor::Editor;
use crate::error::FloorPlanError;
use crate::layout::LayoutConfig;
use crate::model::RoomType;
use crate::output::PlanOutput;

fn console_error(msg: &str) {
    console::error_1(&JsValue::from_str(msg));
}

fn to_json(output: &PlanOutput) -> String {
    serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
}

#[wasm_bindgen]
pub struct FloorPlanEditor {
    inner: Editor,
}

impl Default for FloorPlanEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorPlanEditor {
    fn respond(&self, result: Result<(), FloorPlanError>) -> String {
        let output = self.inner.snapshot();
        match result {
            Ok(()) => to_json(&output),
            Err(e) => {
                console_error(&format!("Floor plan error: {}", e));
                to_json(&output.with_error(&e))
            }
        }
    }
}

#[wasm_bindgen]
impl FloorPlanEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FloorPlanEditor {
        FloorPlanEditor { inner: Editor::default() }
    }

    /// Create an editor from a JSON `LayoutConfig`. Missing fields take their
    /// defaults; an unreadable config falls back to the defaults entirely.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> FloorPlanEditor {
        let cfg = match serde_json::from_str::<LayoutConfig>(config_json) {
            Ok(cfg) => cfg,
            Err(e) => {
                console_error(&format!("Invalid layout config, using defaults: {}", e));
                LayoutConfig::default()
            }
        };
        FloorPlanEditor { inner: Editor::new(cfg) }
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.inner.snapshot())
    }

    /// `kind` is a type label such as "Bedroom" or "Living Room".
    #[wasm_bindgen(js_name = addRoom)]
    pub fn add_room(&mut self, kind: &str, width: i32, height: i32, name: &str) -> String {
        let result = self.inner.add_room(RoomType::from_label(kind), width, height, name).map(|_| ());
        self.respond(result)
    }

    /// `name2` may be "outside" for an exterior door.
    #[wasm_bindgen(js_name = connectRooms)]
    pub fn connect_rooms(&mut self, name1: &str, name2: &str) -> String {
        let result = self.inner.connect_rooms(name1, name2).map(|_| ());
        self.respond(result)
    }

    #[wasm_bindgen(js_name = deleteSelectedRoom)]
    pub fn delete_selected_room(&mut self) -> String {
        let result = self.inner.delete_selected_room().map(|_| ());
        self.respond(result)
    }

    #[wasm_bindgen(js_name = clearAllRooms)]
    pub fn clear_all_rooms(&mut self) -> String {
        self.inner.clear_all_rooms();
        self.snapshot()
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: i32, y: i32) -> String {
        self.inner.pointer_down(x, y);
        self.snapshot()
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: i32, y: i32) -> String {
        self.inner.pointer_move(x, y);
        self.snapshot()
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> String {
        let result = self.inner.pointer_up().map(|_| ());
        self.respond(result)
    }

    /// The plan in save-file format.
    pub fn save(&self) -> String {
        self.inner.save_to_string()
    }

    /// Load a plan from save-file text. On failure the current plan is kept.
    pub fn load(&mut self, text: &str) -> String {
        let result = self.inner.load_str(text);
        self.respond(result)
    }
}
