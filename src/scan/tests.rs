use super::*;
use crate::background::Background;
use crate::error::SplitError;

const OPAQUE: u32 = 0xFF20_40C0;

fn sheet(width: usize, height: usize, rects: &[(usize, usize, usize, usize)]) -> Vec<u32> {
    let mut px = vec![0u32; width * height];
    for &(x0, y0, w, h) in rects {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                px[y * width + x] = OPAQUE;
            }
        }
    }
    px
}

fn scan(pixels: &[u32], width: usize, height: usize, options: ScanOptions) -> ScanResult {
    let view = PixelBuffer::new(pixels, width, height).unwrap();
    scan_components(view, &Background::TRANSPARENT, &options).unwrap()
}

fn extents(boxes: &[BoundingBox]) -> Vec<(usize, usize, usize, usize)> {
    boxes.iter().map(|b| (b.x, b.y, b.width, b.height)).collect()
}

#[test]
fn far_apart_pixels_are_separate_boxes() {
    let px = sheet(4, 4, &[(0, 0, 1, 1), (3, 3, 1, 1)]);
    let res = scan(&px, 4, 4, ScanOptions::default());
    assert_eq!(extents(&res.boxes), vec![(0, 0, 1, 1), (3, 3, 1, 1)]);
    assert_eq!(res.boxes[0].id.0, 0);
    assert_eq!(res.boxes[1].id.0, 1);
    assert!(res.boxes.iter().all(|b| b.row.is_none() && b.column.is_none()));
    assert_eq!(res.stats.regions, 2);
    assert_eq!(res.stats.foreground_pixels, 2);
}

#[test]
fn region_bounds_are_exact_when_growing_left_of_the_seed() {
    // Mirrored L: the seed is the top of the right bar, the foot extends left.
    let px = sheet(8, 8, &[(5, 1, 1, 5), (1, 5, 5, 1)]);
    let res = scan(&px, 8, 8, ScanOptions::default());
    assert_eq!(extents(&res.boxes), vec![(1, 1, 5, 5)]);
    assert_eq!(res.stats.foreground_pixels, 9);
}

#[test]
fn concave_shape_is_one_region() {
    let px = sheet(8, 8, &[(1, 1, 1, 5), (1, 5, 5, 1), (5, 1, 1, 5)]);
    let res = scan(&px, 8, 8, ScanOptions::default());
    assert_eq!(extents(&res.boxes), vec![(1, 1, 5, 5)]);
}

#[test]
fn diagonal_neighbours_need_eight_connectivity() {
    let px = sheet(3, 3, &[(0, 0, 1, 1), (1, 1, 1, 1)]);
    let four = scan(&px, 3, 3, ScanOptions::default());
    assert_eq!(four.boxes.len(), 2);

    let eight = scan(
        &px,
        3,
        3,
        ScanOptions {
            connectivity: Connectivity::Eight,
            ..Default::default()
        },
    );
    assert_eq!(extents(&eight.boxes), vec![(0, 0, 2, 2)]);
}

#[test]
fn particle_found_after_sprite_is_absorbed() {
    let px = sheet(20, 20, &[(2, 2, 8, 8), (11, 4, 1, 1)]);
    let res = scan(&px, 20, 20, ScanOptions::default().with_particles(1, 10));
    assert_eq!(extents(&res.boxes), vec![(2, 2, 10, 8)]);
    assert_eq!(res.stats.regions, 2);
    assert_eq!(res.stats.particles_merged, 1);
}

#[test]
fn particle_found_before_sprite_is_replaced() {
    let px = sheet(20, 20, &[(5, 0, 1, 1), (2, 2, 8, 8)]);
    let res = scan(&px, 20, 20, ScanOptions::default().with_particles(1, 10));
    assert_eq!(extents(&res.boxes), vec![(2, 0, 8, 10)]);
    assert_eq!(res.boxes[0].id.0, 0);
}

#[test]
fn particle_beyond_distance_stays_separate() {
    let px = sheet(20, 20, &[(2, 2, 8, 8), (11, 4, 1, 1)]);
    let res = scan(&px, 20, 20, ScanOptions::default().with_particles(1, 5));
    assert_eq!(extents(&res.boxes), vec![(2, 2, 8, 8), (11, 4, 1, 1)]);
    assert_eq!(res.stats.particles_merged, 0);
}

#[test]
fn merging_is_disabled_by_default() {
    let px = sheet(20, 20, &[(2, 2, 8, 8), (3, 11, 1, 1)]);
    let res = scan(&px, 20, 20, ScanOptions::default());
    assert_eq!(res.boxes.len(), 2);
}

#[test]
fn equal_areas_are_never_merged() {
    let px = sheet(6, 2, &[(0, 0, 1, 1), (2, 0, 1, 1)]);
    let res = scan(&px, 6, 2, ScanOptions::default().with_particles(4, 10));
    assert_eq!(extents(&res.boxes), vec![(0, 0, 1, 1), (2, 0, 1, 1)]);
}

#[test]
fn particle_inside_a_ring_is_absorbed_by_intersection() {
    let ring = [(2, 2, 6, 1), (2, 7, 6, 1), (2, 3, 1, 4), (7, 3, 1, 4)];
    let mut rects = ring.to_vec();
    rects.push((4, 4, 1, 1));
    let px = sheet(10, 10, &rects);

    let kept = scan(&px, 10, 10, ScanOptions::default());
    assert_eq!(extents(&kept.boxes), vec![(2, 2, 6, 6), (4, 4, 1, 1)]);

    let merged = scan(&px, 10, 10, ScanOptions::default().with_particles(1, 0));
    assert_eq!(extents(&merged.boxes), vec![(2, 2, 6, 6)]);
}

fn assert_disjoint(boxes: &[BoundingBox]) {
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn grown_box_swallows_what_it_now_overlaps() {
    // The particle at (6, 5) stretches the first sprite over the second one.
    let px = sheet(10, 10, &[(0, 0, 3, 3), (3, 3, 2, 2), (6, 5, 1, 1)]);
    let res = scan(&px, 10, 10, ScanOptions::default().with_particles(1, 8));
    assert_eq!(extents(&res.boxes), vec![(0, 0, 7, 6)]);
    assert_eq!(res.boxes[0].id.0, 0);
    assert_eq!(res.stats.regions, 3);
    assert_eq!(res.stats.particles_merged, 2);
}

#[test]
fn merged_boxes_never_overlap() {
    let px = sheet(
        30,
        30,
        &[
            (1, 1, 5, 5),
            (8, 1, 5, 5),
            (14, 3, 1, 1),
            (6, 6, 1, 1),
            (1, 10, 6, 4),
            (15, 15, 8, 8),
            (14, 23, 1, 1),
        ],
    );
    let res = scan(&px, 30, 30, ScanOptions::default().with_particles(2, 8));
    assert_eq!(
        extents(&res.boxes),
        vec![(1, 1, 6, 6), (8, 1, 7, 5), (1, 10, 6, 4), (14, 15, 9, 9)]
    );
    assert_eq!(res.stats.particles_merged, 3);
    assert_disjoint(&res.boxes);
}

#[test]
fn edge_metric_reaches_particles_beside_large_sprites() {
    let px = sheet(30, 30, &[(0, 0, 20, 20), (21, 5, 1, 1)]);
    let top_left = scan(&px, 30, 30, ScanOptions::default().with_particles(1, 3));
    assert_eq!(top_left.boxes.len(), 2);

    let edge = scan(
        &px,
        30,
        30,
        ScanOptions {
            distance_metric: DistanceMetric::Edge,
            ..ScanOptions::default().with_particles(1, 3)
        },
    );
    assert_eq!(extents(&edge.boxes), vec![(0, 0, 22, 20)]);
}

#[test]
fn caller_buffer_is_untouched_and_scans_repeat() {
    let px = sheet(16, 16, &[(1, 1, 3, 3), (8, 2, 4, 5), (2, 10, 6, 2)]);
    let before = px.clone();
    let first = scan(&px, 16, 16, ScanOptions::default());
    assert_eq!(px, before);
    let second = scan(&px, 16, 16, ScanOptions::default());
    assert_eq!(first.boxes, second.boxes);
    assert!(first.boxes.iter().all(|b| b.width >= 1 && b.height >= 1));
}

#[test]
fn closure_predicate_on_solid_background() {
    let (w, h) = (5usize, 3usize);
    let mut px = vec![0xFFFF_FFFFu32; w * h];
    px[w + 1] = 0xFF00_0000;
    px[w + 2] = 0xFF00_0000;
    let view = PixelBuffer::new(&px, w, h).unwrap();
    let white = |p: u32| p == 0xFFFF_FFFF;
    let res = scan_components(view, &white, &ScanOptions::default()).unwrap();
    assert_eq!(extents(&res.boxes), vec![(1, 1, 2, 1)]);

    let res = scan_components(view, &Background::WHITE, &ScanOptions::default()).unwrap();
    assert_eq!(extents(&res.boxes), vec![(1, 1, 2, 1)]);
}

#[test]
fn strided_region_is_scanned_in_view_coordinates() {
    let px = sheet(8, 4, &[(5, 1, 2, 2)]);
    let view = PixelBuffer::with_stride(&px[4..], 4, 4, 8).unwrap();
    let res = scan_components(view, &Background::TRANSPARENT, &ScanOptions::default()).unwrap();
    assert_eq!(extents(&res.boxes), vec![(1, 1, 2, 2)]);
}

#[test]
fn invalid_views_fail_before_scanning() {
    let px = vec![OPAQUE; 10];
    let view = PixelBuffer {
        w: 3,
        h: 3,
        stride: 3,
        data: &px,
    };
    let err = scan_components(view, &Background::TRANSPARENT, &ScanOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        SplitError::InvalidDimensions {
            width: 3,
            height: 3,
            len: 10
        }
    );

    let empty: [u32; 0] = [];
    let view = PixelBuffer {
        w: 3,
        h: 3,
        stride: 3,
        data: &empty,
    };
    let err = scan_components(view, &Background::TRANSPARENT, &ScanOptions::default())
        .unwrap_err();
    assert_eq!(err, SplitError::NullBuffer);
}
