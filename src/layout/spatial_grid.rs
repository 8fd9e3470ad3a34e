// Bucketed room index for the free-slot search.
//
// The search probes every grid corner of the canvas; checking each probe
// against every room is O(cells * rooms). Bucketing rooms by coarse cell keeps
// each probe to the handful of rooms near it.

use std::collections::{HashMap, HashSet};

use crate::model::{RectI, RoomId};

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Side length of each bucket.
    cell_size: i32,
    /// Bucket coordinates -> rooms whose bounds touch that bucket.
    cells: HashMap<(i32, i32), Vec<(RoomId, RectI)>>,
}

impl SpatialGrid {
    /// Cell size should be roughly the size of the largest room.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            cells: HashMap::new(),
        }
    }

    fn cell_range(&self, rect: &RectI) -> impl Iterator<Item = (i32, i32)> {
        let min_x = rect.x.div_euclid(self.cell_size);
        let max_x = (rect.right() - 1).div_euclid(self.cell_size);
        let min_y = rect.y.div_euclid(self.cell_size);
        let max_y = (rect.bottom() - 1).div_euclid(self.cell_size);

        (min_x..=max_x).flat_map(move |cx| (min_y..=max_y).map(move |cy| (cx, cy)))
    }

    pub fn insert(&mut self, id: RoomId, rect: RectI) {
        let cells: Vec<(i32, i32)> = self.cell_range(&rect).collect();
        for cell in cells {
            self.cells.entry(cell).or_default().push((id, rect));
        }
    }

    /// Rooms sharing a bucket with `rect`. May contain false positives.
    pub fn query(&self, rect: &RectI) -> Vec<(RoomId, RectI)> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();

        for cell in self.cell_range(rect) {
            if let Some(entries) = self.cells.get(&cell) {
                for &(id, r) in entries {
                    if seen.insert(id) {
                        result.push((id, r));
                    }
                }
            }
        }
        result
    }

    pub fn overlaps_any(&self, rect: &RectI) -> bool {
        self.query(rect).iter().any(|(_, r)| rect.overlaps(r))
    }
}
