use super::options::ScanOptions;
use crate::bounds::{BoundingBox, SpriteId};

/// How a box already in the accepted set combines with the box being settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fold {
    /// The accepted box is a particle and gets absorbed.
    Existing,
    /// The settled box is a particle and the accepted box adopts it.
    Candidate,
    /// A grown box now overlaps the accepted box; the two become one.
    Overlap,
}

/// Accepted set of boxes with particle adoption on insertion.
///
/// Boxes stay in the order they were accepted; an adopted box is removed and
/// its extent folded into the adopter. A box that grew is settled again, so
/// merging never leaves two accepted boxes overlapping.
pub(super) struct ParticleMerger {
    options: ScanOptions,
    accepted: Vec<BoundingBox>,
    absorbed: usize,
}

impl ParticleMerger {
    pub(super) fn new(options: ScanOptions) -> Self {
        Self {
            options,
            accepted: Vec::new(),
            absorbed: 0,
        }
    }

    /// Merge a freshly found region into the accepted set.
    pub(super) fn offer(&mut self, candidate: BoundingBox) {
        let slot = self.accepted.len();
        self.settle(candidate, slot, false);
    }

    /// Fold `b` into the accepted set and insert the survivor at `slot`.
    ///
    /// Every fold removes one accepted box, so the loop ends. Once `b` has
    /// grown it also swallows any accepted box it now overlaps, whatever the
    /// sizes.
    fn settle(&mut self, mut b: BoundingBox, mut slot: usize, mut grown: bool) {
        while let Some((i, fold)) = self.find_fold(&b, grown) {
            match fold {
                Fold::Existing | Fold::Overlap => {
                    let other = self.accepted.remove(i);
                    b.cover(&other);
                    if fold == Fold::Overlap {
                        slot = slot.min(i);
                    } else if i < slot {
                        slot -= 1;
                    }
                }
                Fold::Candidate => {
                    let mut host = self.accepted.remove(i);
                    host.cover(&b);
                    b = host;
                    slot = i;
                }
            }
            self.absorbed += 1;
            grown = true;
        }
        let slot = slot.min(self.accepted.len());
        self.accepted.insert(slot, b);
    }

    /// First accepted box, in acceptance order, that `b` folds with.
    fn find_fold(&self, b: &BoundingBox, grown: bool) -> Option<(usize, Fold)> {
        self.accepted.iter().enumerate().find_map(|(i, existing)| {
            if grown && existing.intersects(b) {
                return Some((i, Fold::Overlap));
            }
            if existing.same_extent(b) || !self.is_near(existing, b) {
                return None;
            }
            self.fold_of(existing, b).map(|fold| (i, fold))
        })
    }

    fn is_near(&self, a: &BoundingBox, b: &BoundingBox) -> bool {
        a.intersects(b)
            || self.options.distance_metric.measure(a, b) <= self.options.particle_distance
    }

    /// The strictly smaller box is a particle when its area is within the
    /// threshold. Equal areas have no particle.
    fn fold_of(&self, existing: &BoundingBox, candidate: &BoundingBox) -> Option<Fold> {
        let (small, role) = match existing.size().cmp(&candidate.size()) {
            std::cmp::Ordering::Less => (existing, Fold::Existing),
            std::cmp::Ordering::Greater => (candidate, Fold::Candidate),
            std::cmp::Ordering::Equal => return None,
        };
        (small.size() <= self.options.particle_size).then_some(role)
    }

    pub(super) fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Final accepted set with ids numbered in acceptance order.
    pub(super) fn into_boxes(self) -> Vec<BoundingBox> {
        let mut boxes = self.accepted;
        for (idx, b) in boxes.iter_mut().enumerate() {
            b.id = SpriteId(idx as u32);
        }
        boxes
    }
}
