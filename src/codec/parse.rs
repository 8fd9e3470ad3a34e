//! Parse a plan file into validated room drafts.
//!
//! The whole file is checked before anything is returned, so callers can swap
//! the result into a live plan without ever seeing a half-loaded state.
//!
//! Rejected (as `Format`, with the 1-based line number):
//! - a first line other than the exact header
//! - fewer than six fields, or a non-integer coordinate / dimension
//! - a non-positive width or height, or an empty name
//! - a far edge (`x + width`, `y + height`) past the `i32` range
//! - a name already used by an earlier line (case-insensitive)
//! - a room overlapping an earlier line's room
//!
//! Blank lines are skipped. Fields after the sixth are ignored.

use std::io::Read;

use crate::error::{FloorPlanError, Result};
use crate::model::{PointI, RectI, RoomDraft, RoomType, SizeI};

use super::{HEADER, SEPARATOR};

pub fn parse_plan(input: &str) -> Result<Vec<RoomDraft>> {
    let mut lines = input.lines();
    match lines.next() {
        Some(HEADER) => {}
        Some(other) => {
            return Err(FloorPlanError::format(1, format!("expected `{HEADER}` header, found `{other}`")));
        }
        None => return Err(FloorPlanError::format(1, "missing header")),
    }

    let mut rooms: Vec<RoomDraft> = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        if line.is_empty() {
            continue;
        }
        let draft = parse_record(line, line_no)?;

        if rooms.iter().any(|r| r.name.to_lowercase() == draft.name.to_lowercase()) {
            return Err(FloorPlanError::format(line_no, format!("duplicate room name `{}`", draft.name)));
        }
        let rect = RectI::at(draft.pos, draft.size);
        if let Some(other) = rooms.iter().find(|r| RectI::at(r.pos, r.size).overlaps(&rect)) {
            return Err(FloorPlanError::format(
                line_no,
                format!("room `{}` overlaps `{}`", draft.name, other.name),
            ));
        }
        rooms.push(draft);
    }
    Ok(rooms)
}

/// Read everything from `reader`, then parse it.
pub fn read_plan<R: Read>(mut reader: R) -> Result<Vec<RoomDraft>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_plan(&input)
}

fn parse_record(line: &str, line_no: usize) -> Result<RoomDraft> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < 6 {
        return Err(FloorPlanError::format(
            line_no,
            format!("expected 6 fields (type,x,y,width,height,name), found {}", parts.len()),
        ));
    }

    let int = |field: &str, value: &str| -> Result<i32> {
        value
            .parse::<i32>()
            .map_err(|_| FloorPlanError::format(line_no, format!("invalid {field} `{value}`")))
    };
    let x = int("x", parts[1])?;
    let y = int("y", parts[2])?;
    let w = int("width", parts[3])?;
    let h = int("height", parts[4])?;

    let size = SizeI { w, h };
    if !size.is_positive() {
        return Err(FloorPlanError::format(line_no, format!("dimensions must be positive, found {w}x{h}")));
    }
    let name = parts[5];
    if name.trim().is_empty() {
        return Err(FloorPlanError::format(line_no, "room name is empty"));
    }
    if RectI::checked_at(PointI { x, y }, size).is_none() {
        return Err(FloorPlanError::format(line_no, format!("room `{name}` extends past the coordinate range")));
    }

    Ok(RoomDraft {
        kind: RoomType::from_label(parts[0]),
        name: name.to_string(),
        pos: PointI { x, y },
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::emit_plan;
    use crate::model::{Room, RoomId};
    use proptest::prelude::*;

    fn format_line(err: FloorPlanError) -> usize {
        match err {
            FloorPlanError::Format { line, .. } => line,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_simple_plan() {
        let rooms = parse_plan("FLOORPLAN\nKitchen,0,0,100,100,K1\nLiving Room,100,0,200,100,Lounge\n").unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].kind, RoomType::Kitchen);
        assert_eq!(rooms[0].name, "K1");
        assert_eq!(rooms[1].kind, RoomType::LivingRoom);
        assert_eq!(rooms[1].pos, PointI::new(100, 0));
        assert_eq!(rooms[1].size, SizeI { w: 200, h: 100 });
    }

    #[test]
    fn test_header_only_is_empty_plan() {
        assert!(parse_plan("FLOORPLAN\n").unwrap().is_empty());
        assert!(parse_plan("FLOORPLAN").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_header_rejected() {
        assert_eq!(format_line(parse_plan("FLOOR\nKitchen,0,0,100,100,K1\n").unwrap_err()), 1);
        assert_eq!(format_line(parse_plan("floorplan\n").unwrap_err()), 1);
        assert_eq!(format_line(parse_plan("").unwrap_err()), 1);
    }

    #[test]
    fn test_crlf_line_endings_accepted() {
        let rooms = parse_plan("FLOORPLAN\r\nBedroom,0,0,100,100,B1\r\n").unwrap();
        assert_eq!(rooms[0].name, "B1");
    }

    #[test]
    fn test_bad_numbers_rejected_with_line() {
        let input = "FLOORPLAN\nKitchen,0,0,100,100,K1\nKitchen,abc,0,100,100,K2\n";
        assert_eq!(format_line(parse_plan(input).unwrap_err()), 3);
        let input = "FLOORPLAN\nKitchen,0,0, 100,100,K1\n";
        assert_eq!(format_line(parse_plan(input).unwrap_err()), 2);
    }

    #[test]
    fn test_short_record_rejected() {
        assert_eq!(format_line(parse_plan("FLOORPLAN\nKitchen,0,0,100,100\n").unwrap_err()), 2);
        assert_eq!(format_line(parse_plan("FLOORPLAN\nKitchen,0,0,100,100,\n").unwrap_err()), 2);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(parse_plan("FLOORPLAN\nKitchen,0,0,0,100,K1\n").is_err());
        assert!(parse_plan("FLOORPLAN\nKitchen,0,0,100,-1,K1\n").is_err());
    }

    #[test]
    fn test_overlap_and_duplicates_rejected() {
        let input = "FLOORPLAN\nKitchen,0,0,100,100,K1\nBedroom,50,50,100,100,B1\n";
        assert_eq!(format_line(parse_plan(input).unwrap_err()), 3);
        let input = "FLOORPLAN\nKitchen,0,0,100,100,K1\nBedroom,100,0,100,100,k1\n";
        assert_eq!(format_line(parse_plan(input).unwrap_err()), 3);
    }

    #[test]
    fn test_far_edge_past_coordinate_range_rejected() {
        let input = "FLOORPLAN\nKitchen,0,0,100,100,K1\nKitchen,2147483600,0,100,100,K2\n";
        assert_eq!(format_line(parse_plan(input).unwrap_err()), 3);
        assert!(parse_plan("FLOORPLAN\nKitchen,0,2147483548,10,100,K1\n").is_err());
        // A far edge of exactly i32::MAX still fits.
        assert!(parse_plan("FLOORPLAN\nKitchen,2147483547,0,100,10,K1\n").is_ok());
    }

    #[test]
    fn test_comma_in_name_truncates() {
        let rooms = parse_plan("FLOORPLAN\nKitchen,0,0,100,100,Big, Kitchen\n").unwrap();
        assert_eq!(rooms[0].name, "Big");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rooms = parse_plan("FLOORPLAN\n\nKitchen,0,0,100,100,K1\n\n").unwrap();
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn test_unknown_type_kept() {
        let rooms = parse_plan("FLOORPLAN\nGarage,0,0,100,100,G\n").unwrap();
        assert_eq!(rooms[0].kind, RoomType::Other("Garage".to_string()));
    }

    #[test]
    fn test_read_plan_from_reader() {
        let input: &[u8] = b"FLOORPLAN\nBathroom,0,0,40,60,Bath\n";
        let rooms = read_plan(input).unwrap();
        assert_eq!(rooms[0].kind, RoomType::Bathroom);
    }

    fn arb_kind() -> impl Strategy<Value = RoomType> {
        prop_oneof![
            Just(RoomType::Bedroom),
            Just(RoomType::Bathroom),
            Just(RoomType::LivingRoom),
            Just(RoomType::Kitchen),
            "[A-Z][a-z]{2,8}".prop_map(|l| RoomType::from_label(&l)),
        ]
    }

    proptest! {
        #[test]
        fn save_then_load_reproduces_rooms(
            specs in proptest::collection::vec((arb_kind(), 1i32..120, 1i32..120, "[A-Za-z0-9 ]{0,8}"), 0..12)
        ) {
            // Lay rooms out in one row so they never overlap.
            let mut x = -200;
            let rooms: Vec<Room> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (kind, w, h, suffix))| {
                    let room = Room {
                        id: RoomId(i as u64),
                        kind,
                        name: format!("R{i}-{suffix}"),
                        pos: PointI::new(x, -40),
                        size: SizeI { w, h },
                    };
                    x += w;
                    room
                })
                .collect();

            let loaded = parse_plan(&emit_plan(&rooms)).unwrap();
            prop_assert_eq!(loaded.len(), rooms.len());
            for (a, b) in rooms.iter().zip(&loaded) {
                prop_assert_eq!(&a.kind, &b.kind);
                prop_assert_eq!(a.pos, b.pos);
                prop_assert_eq!(a.size, b.size);
                prop_assert_eq!(&a.name, &b.name);
            }
        }
    }
}
