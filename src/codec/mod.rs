//! Flat text persistence for the room list.
//!
//! ```text
//! FLOORPLAN
//! Kitchen,0,0,100,100,K1
//! Living Room,100,0,200,100,Lounge
//! ```
//!
//! Line 1 is the literal header; every other line is one room as
//! `type,x,y,width,height,name`. Doors are not persisted.
//!
//! There is no escaping: a comma in a room name splits the record, and only the
//! text up to that comma is read back as the name. Changing that would need a
//! new header, since files written today must keep loading.

mod emit;
mod parse;

pub use emit::{emit_plan, write_plan};
pub use parse::{parse_plan, read_plan};

/// First line of every plan file. Compared case-sensitively.
pub const HEADER: &str = "FLOORPLAN";

/// Field separator within a room record.
pub const SEPARATOR: char = ',';
