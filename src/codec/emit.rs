//! Emit the room list in plan-file format.

use std::io::Write;

use tracing::warn;

use crate::error::Result;
use crate::model::Room;

use super::{HEADER, SEPARATOR};

/// Render the whole file: header plus one line per room, in plan order.
pub fn emit_plan(rooms: &[Room]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for room in rooms {
        emit_room(room, &mut out);
    }
    out
}

/// Write the file to any sink.
pub fn write_plan<W: Write>(mut writer: W, rooms: &[Room]) -> Result<()> {
    writer.write_all(emit_plan(rooms).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn emit_room(room: &Room, out: &mut String) {
    if room.name.contains(SEPARATOR) || room.name.contains('\n') {
        warn!(room = %room.name, "room name contains a record separator and will not load back intact");
    }
    out.push_str(&format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}\n",
        room.kind.label(),
        room.pos.x,
        room.pos.y,
        room.size.w,
        room.size.h,
        room.name,
        sep = SEPARATOR,
    ));
}
