use crate::bounds::BoundingBox;

/// Running extent of the region being flood-filled.
pub(crate) struct RegionAccumulator {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
    pub pixels: usize,
}

impl RegionAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            min_x: usize::MAX,
            min_y: usize::MAX,
            max_x: 0,
            max_y: 0,
            pixels: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn push(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixels += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.pixels
    }

    /// Exact bounds of all pushed pixels, `None` while empty.
    pub(crate) fn bounds(&self) -> Option<BoundingBox> {
        (self.pixels > 0)
            .then(|| BoundingBox::from_corners(self.min_x, self.min_y, self.max_x, self.max_y))
    }
}
