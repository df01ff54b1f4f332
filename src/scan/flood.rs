use super::merge::ParticleMerger;
use super::options::ScanOptions;
use super::region::RegionAccumulator;
use super::{ScanResult, ScanStats};
use crate::background::BackgroundPredicate;
use crate::bounds::BoundingBox;
use crate::image::{ImageView, PixelBuffer};
use std::collections::VecDeque;
use std::time::Instant;

pub(super) struct ComponentScanner<'a, P: ?Sized> {
    view: PixelBuffer<'a>,
    background: &'a P,
    offsets: &'static [(isize, isize)],
    visited: Vec<u8>,
    queue: VecDeque<(usize, usize)>,
    region: RegionAccumulator,
    merger: ParticleMerger,
    regions: usize,
    foreground_pixels: usize,
}

impl<'a, P: BackgroundPredicate + ?Sized> ComponentScanner<'a, P> {
    /// `view` must already be validated.
    pub(super) fn new(view: PixelBuffer<'a>, background: &'a P, options: ScanOptions) -> Self {
        Self {
            view,
            background,
            offsets: options.connectivity.offsets(),
            visited: vec![0u8; view.pixel_count()],
            queue: VecDeque::with_capacity(64),
            region: RegionAccumulator::new(),
            merger: ParticleMerger::new(options),
            regions: 0,
            foreground_pixels: 0,
        }
    }

    pub(super) fn scan(mut self) -> ScanResult {
        let start = Instant::now();
        let view = self.view;
        for (y, row) in view.rows().enumerate() {
            for (x, &px) in row.iter().enumerate() {
                if self.visited[y * view.w + x] != 0 || self.background.is_background(px) {
                    continue;
                }
                if let Some(region) = self.flood_fill(x, y) {
                    self.regions += 1;
                    self.merger.offer(region);
                }
            }
        }

        let stats = ScanStats {
            regions: self.regions,
            particles_merged: self.merger.absorbed(),
            foreground_pixels: self.foreground_pixels,
        };
        let boxes = self.merger.into_boxes();
        ScanResult {
            boxes,
            stats,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Breadth-first fill from a foreground seed, returning the exact bounds
    /// of the connected region.
    fn flood_fill(&mut self, x0: usize, y0: usize) -> Option<BoundingBox> {
        let w = self.view.w;
        let h = self.view.h;
        self.region.reset();
        self.queue.clear();

        self.visited[y0 * w + x0] = 1;
        self.queue.push_back((x0, y0));

        while let Some((x, y)) = self.queue.pop_front() {
            self.region.push(x, y);

            for &(dx, dy) in self.offsets {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let (nx, ny) = (xn as usize, yn as usize);
                let neighbor_idx = ny * w + nx;
                if self.visited[neighbor_idx] != 0 {
                    continue;
                }
                if self.background.is_background(self.view.get(nx, ny)) {
                    continue;
                }
                self.visited[neighbor_idx] = 1;
                self.queue.push_back((nx, ny));
            }
        }

        self.foreground_pixels += self.region.len();
        self.region.bounds()
    }
}
