use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: PointI) -> PointI {
        PointI { x: self.x.saturating_sub(origin.x), y: self.y.saturating_sub(origin.y) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

impl SizeI {
    pub fn is_positive(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    pub fn at(pos: PointI, size: SizeI) -> Self {
        Self { x: pos.x, y: pos.y, w: size.w, h: size.h }
    }

    /// `None` when the far edges do not fit in `i32`.
    pub fn checked_at(pos: PointI, size: SizeI) -> Option<Self> {
        pos.x.checked_add(size.w)?;
        pos.y.checked_add(size.h)?;
        Some(Self::at(pos, size))
    }

    // Saturating so unvalidated drag previews near the coordinate limits stay
    // comparable; committed rooms always pass `checked_at`.
    pub fn right(&self) -> i32 { self.x.saturating_add(self.w) }
    pub fn bottom(&self) -> i32 { self.y.saturating_add(self.h) }

    /// Strict interior intersection. Rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &RectI) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Point containment, inclusive on all four edges.
    pub fn contains(&self, p: PointI) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Midpoint of the left edge (integer division on the height).
    pub fn left_mid(&self) -> PointI {
        PointI { x: self.x, y: self.y.saturating_add(self.h / 2) }
    }

    /// Midpoint of the right edge (integer division on the height).
    pub fn right_mid(&self) -> PointI {
        PointI { x: self.right(), y: self.y.saturating_add(self.h / 2) }
    }
}
