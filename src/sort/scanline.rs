use crate::bounds::BoundingBox;
use log::debug;

/// Direction a scan line travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sweep {
    /// Horizontal probe moving down the sheet.
    Down,
    /// Vertical probe moving right across the sheet.
    Right,
}

impl Sweep {
    /// Box span along the travel direction.
    #[inline]
    fn along(self, b: &BoundingBox) -> (usize, usize) {
        match self {
            Sweep::Down => (b.y, b.bottom()),
            Sweep::Right => (b.x, b.right()),
        }
    }

    /// Box span along the probe.
    #[inline]
    fn across(self, b: &BoundingBox) -> (usize, usize) {
        match self {
            Sweep::Down => (b.x, b.right()),
            Sweep::Right => (b.y, b.bottom()),
        }
    }
}

pub(super) struct RowResolver {
    boxes: Vec<BoundingBox>,
    placed: Vec<bool>,
    order: Vec<usize>,
    extent: (usize, usize),
    next_row: usize,
    passes: usize,
}

impl RowResolver {
    pub(super) fn new(mut boxes: Vec<BoundingBox>) -> Self {
        boxes.sort_by_key(|b| b.center_x() + b.center_y());
        let extent = boxes.iter().fold((0, 0), |(w, h), b| {
            (w.max(b.right()), h.max(b.bottom()))
        });
        let n = boxes.len();
        Self {
            boxes,
            placed: vec![false; n],
            order: Vec::with_capacity(n),
            extent,
            next_row: 0,
            passes: 0,
        }
    }

    pub(super) fn rows(&self) -> usize {
        self.next_row
    }

    pub(super) fn passes(&self) -> usize {
        self.passes
    }

    /// Resolve rows anchored at the top-left-most unplaced box. Returns
    /// `false` once every box is placed.
    pub(super) fn resolve_pass(&mut self) -> bool {
        let Some(anchor) = self.placed.iter().position(|&p| !p) else {
            return false;
        };
        if self.passes > 0 {
            debug!(
                "sort: {} boxes unreached, anchoring pass {} at {:?}",
                self.placed.iter().filter(|&&p| !p).count(),
                self.passes,
                self.boxes[anchor].id
            );
        }
        self.passes += 1;
        self.placed[anchor] = true;

        let a = &self.boxes[anchor];
        let (from, lo, hi) = (a.bottom(), a.x, a.right());
        let mut pivots = vec![anchor];
        pivots.extend(self.sweep(Sweep::Down, from, lo, hi));

        for pivot in pivots {
            let row = self.next_row;
            self.next_row += 1;
            self.assign(pivot, row, 0);

            let p = &self.boxes[pivot];
            let (from, lo, hi) = (p.right(), p.y, p.bottom());
            for (k, idx) in self.sweep(Sweep::Right, from, lo, hi).into_iter().enumerate() {
                self.assign(idx, row, k + 1);
            }
        }
        true
    }

    /// Move a scan line from `from` in direction `dir`, probing `[lo, hi)`.
    /// Every unplaced box met is marked placed and returned in hit order.
    fn sweep(&mut self, dir: Sweep, from: usize, lo: usize, hi: usize) -> Vec<usize> {
        let limit = match dir {
            Sweep::Down => self.extent.1,
            Sweep::Right => self.extent.0,
        };
        let mut hits = Vec::new();
        let mut pos = from;
        while pos < limit {
            if let Some(idx) = self.hit(dir, pos, lo, hi) {
                self.placed[idx] = true;
                hits.push(idx);
                // jump past the box so it is not met again
                pos = dir.along(&self.boxes[idx]).1;
            } else if let Some(next) = self.next_start(dir, pos, lo, hi) {
                pos = next;
            } else {
                break;
            }
        }
        hits
    }

    /// First unplaced box under the probe at `pos`, walking the probe from
    /// `lo` towards `hi`. Ties on the probe go to the earlier box.
    fn hit(&self, dir: Sweep, pos: usize, lo: usize, hi: usize) -> Option<usize> {
        self.unplaced()
            .filter(|(_, b)| {
                let (a0, a1) = dir.along(b);
                let (c0, c1) = dir.across(b);
                a0 <= pos && pos < a1 && c0 < hi && c1 > lo
            })
            .min_by_key(|&(idx, b)| (dir.across(b).0.max(lo), idx))
            .map(|(idx, _)| idx)
    }

    /// Nearest position past `pos` where an unplaced box enters the probe.
    fn next_start(&self, dir: Sweep, pos: usize, lo: usize, hi: usize) -> Option<usize> {
        self.unplaced()
            .filter(|(_, b)| {
                let (c0, c1) = dir.across(b);
                dir.along(b).0 > pos && c0 < hi && c1 > lo
            })
            .map(|(_, b)| dir.along(b).0)
            .min()
    }

    fn unplaced(&self) -> impl Iterator<Item = (usize, &BoundingBox)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.placed[*idx])
    }

    fn assign(&mut self, idx: usize, row: usize, column: usize) {
        let b = &mut self.boxes[idx];
        b.row = Some(row);
        b.column = Some(column);
        self.order.push(idx);
    }

    pub(super) fn into_sorted(self) -> Vec<BoundingBox> {
        let mut slots: Vec<Option<BoundingBox>> = self.boxes.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&idx| slots[idx].take())
            .collect()
    }
}
