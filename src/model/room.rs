//! Rooms, doors, and the fixed room-type enumeration.
//!
//! A room's type only decides its default fill color. Layout never looks at it.

use serde::Serialize;
use std::fmt;

use super::geometry::{PointI, RectI, SizeI};

/// Stable handle for a room. Survives deletes of other rooms, unlike a vector index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Room type as written in the save format.
///
/// `Other` keeps whatever label it was created or loaded with so an unknown
/// type written by someone else survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomType {
    Bedroom,
    Bathroom,
    LivingRoom,
    Kitchen,
    Other(String),
}

/// (label, type) pairs for the known types. Labels are matched case-sensitively.
const KNOWN_LABELS: &[(&str, RoomType)] = &[
    ("Bedroom", RoomType::Bedroom),
    ("Bathroom", RoomType::Bathroom),
    ("Living Room", RoomType::LivingRoom),
    ("Kitchen", RoomType::Kitchen),
];

impl RoomType {
    pub fn from_label(label: &str) -> RoomType {
        KNOWN_LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, t)| t.clone())
            .unwrap_or_else(|| RoomType::Other(label.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            RoomType::Bedroom => "Bedroom",
            RoomType::Bathroom => "Bathroom",
            RoomType::LivingRoom => "Living Room",
            RoomType::Kitchen => "Kitchen",
            RoomType::Other(label) => label,
        }
    }

    pub fn default_color(&self) -> Color {
        match self {
            RoomType::Bedroom => Color::rgb(0x24, 0x7B, 0xA0),
            RoomType::Bathroom => Color::rgb(0x70, 0xC1, 0xB3),
            RoomType::LivingRoom => Color::rgb(0xF3, 0xFF, 0xBD),
            RoomType::Kitchen => Color::rgb(0xFF, 0x16, 0x54),
            RoomType::Other(_) => Color::GRAY,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything needed to place a room, before the engine assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    pub kind: RoomType,
    pub name: String,
    pub pos: PointI,
    pub size: SizeI,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub kind: RoomType,
    pub name: String,
    /// Top-left corner.
    pub pos: PointI,
    pub size: SizeI,
}

impl Room {
    pub fn bounds(&self) -> RectI {
        RectI::at(self.pos, self.size)
    }

    pub fn color(&self) -> Color {
        self.kind.default_color()
    }

    /// Case-insensitive name match, the lookup rule for door endpoints.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Caption shown next to the selected room.
    pub fn caption(&self) -> String {
        format!("{} ({}): {}x{}", self.name, self.kind, self.size.w, self.size.h)
    }
}

/// A symbolic connector between a room and either another room or the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub start: PointI,
    pub end: PointI,
    pub room1: RoomId,
    /// `None` means the door leads outside.
    pub room2: Option<RoomId>,
}

impl Door {
    pub fn is_outside(&self) -> bool {
        self.room2.is_none()
    }

    pub fn references(&self, id: RoomId) -> bool {
        self.room1 == id || self.room2 == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_roundtrip() {
        for kind in [RoomType::Bedroom, RoomType::Bathroom, RoomType::LivingRoom, RoomType::Kitchen] {
            assert_eq!(RoomType::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn test_unknown_label_keeps_text_and_is_gray() {
        let kind = RoomType::from_label("Garage");
        assert_eq!(kind, RoomType::Other("Garage".to_string()));
        assert_eq!(kind.label(), "Garage");
        assert_eq!(kind.default_color(), Color::GRAY);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(RoomType::from_label("kitchen"), RoomType::Other("kitchen".to_string()));
        assert_eq!(RoomType::from_label("LivingRoom"), RoomType::Other("LivingRoom".to_string()));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(RoomType::Bedroom.default_color().to_hex(), "#247BA0");
        assert_eq!(RoomType::Kitchen.default_color().to_hex(), "#FF1654");
        assert_eq!(Color::GRAY.to_hex(), "#808080");
    }

    #[test]
    fn test_caption() {
        let room = Room {
            id: RoomId(1),
            kind: RoomType::LivingRoom,
            name: "Lounge".to_string(),
            pos: PointI::new(0, 0),
            size: SizeI { w: 120, h: 80 },
        };
        assert_eq!(room.caption(), "Lounge (Living Room): 120x80");
        assert!(room.is_named("LOUNGE"));
    }
}
