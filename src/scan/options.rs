use crate::bounds::BoundingBox;
use serde::{Deserialize, Serialize};

/// How far apart two boxes are when deciding particle adoption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceMetric {
    /// Distance between the top-left corners.
    #[default]
    TopLeft,
    /// Gap between the nearest edges; better for particles beside large sprites.
    Edge,
}

impl DistanceMetric {
    #[inline]
    pub fn measure(self, a: &BoundingBox, b: &BoundingBox) -> usize {
        match self {
            DistanceMetric::TopLeft => a.distance(b),
            DistanceMetric::Edge => a.edge_distance(b),
        }
    }
}

/// Pixel neighbourhood used by the flood fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Connectivity {
    /// Up, down, left, right.
    #[default]
    Four,
    /// Also the diagonals.
    Eight,
}

const FOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const EIGHT_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Connectivity {
    pub(crate) fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &FOUR_OFFSETS,
            Connectivity::Eight => &EIGHT_OFFSETS,
        }
    }
}

/// Options controlling component extraction and particle merging.
///
/// - `particle_size`: regions with `width * height` at most this value are
///   particles and get folded into a larger neighbour. `0` disables merging.
/// - `particle_distance`: maximum distance (see `distance_metric`) between a
///   particle and the sprite adopting it. Intersecting boxes always qualify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanOptions {
    /// Maximum area of a particle in pixels.
    pub particle_size: usize,
    /// Maximum particle-to-sprite distance in pixels.
    pub particle_distance: usize,
    pub distance_metric: DistanceMetric,
    pub connectivity: Connectivity,
}

impl ScanOptions {
    pub fn with_particles(mut self, size: usize, distance: usize) -> Self {
        self.particle_size = size;
        self.particle_distance = distance;
        self
    }
}
