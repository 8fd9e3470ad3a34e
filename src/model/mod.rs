mod geometry;
mod room;

pub use geometry::{PointI, RectI, SizeI};
pub use room::{Color, Door, Room, RoomDraft, RoomId, RoomType};
