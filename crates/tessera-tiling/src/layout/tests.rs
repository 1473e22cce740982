use super::*;
use tessera_common::Rect;

const SIZES: &[(u32, u32)] = &[
    (1920, 1080),
    (2560, 1440),
    (1366, 768),
    (1001, 777),
    (3, 3),
    (1, 1),
];

fn total_width(rects: &[Rect]) -> u32 {
    rects.iter().map(|r| r.width).sum()
}

fn assert_no_overlap(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

fn assert_inside(rects: &[Rect], width: u32, height: u32) {
    for r in rects {
        assert!(r.right() <= width, "{r:?} exceeds width {width}");
        assert!(r.bottom() <= height, "{r:?} exceeds height {height}");
    }
}

#[test]
fn kind_by_count() {
    assert_eq!(LayoutKind::for_count(0), LayoutKind::Empty);
    assert_eq!(LayoutKind::for_count(1), LayoutKind::Columns);
    assert_eq!(LayoutKind::for_count(2), LayoutKind::Columns);
    assert_eq!(LayoutKind::for_count(3), LayoutKind::Tower);
    assert_eq!(LayoutKind::for_count(4), LayoutKind::Grid);
    assert_eq!(LayoutKind::for_count(5), LayoutKind::FivePane);
    assert_eq!(LayoutKind::for_count(6), LayoutKind::Grid);
    assert_eq!(LayoutKind::for_count(11), LayoutKind::Grid);
}

#[test]
fn zero_panes_is_empty() {
    assert!(compute_layout(0, 1920, 1080).is_empty());
}

#[test]
fn single_pane_fills_container() {
    for &(w, h) in SIZES {
        assert_eq!(compute_layout(1, w, h), vec![Rect::new(0, 0, w, h)]);
    }
}

#[test]
fn two_panes_split_width() {
    for &(w, h) in SIZES {
        let rects = compute_layout(2, w, h);
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.height == h && r.y == 0));
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[1].x, rects[0].width);
        let sum = total_width(&rects);
        assert!(w - sum <= 2, "width {w}, sum {sum}");
        assert_no_overlap(&rects);
    }
}

#[test]
fn two_panes_odd_width_drifts_by_one() {
    let rects = compute_layout(2, 1001, 500);
    assert_eq!(rects[0], Rect::new(0, 0, 500, 500));
    assert_eq!(rects[1], Rect::new(500, 0, 500, 500));
}

#[test]
fn tower_has_wider_center() {
    let rects = compute_layout(3, 1920, 1080);
    // floor(640 * 0.866...) = 554
    assert_eq!(rects[0], Rect::new(0, 0, 554, 1080));
    assert_eq!(rects[1], Rect::new(554, 0, 812, 1080));
    assert_eq!(rects[2], Rect::new(1366, 0, 554, 1080));
    assert!(rects[1].width > rects[0].width);
    assert_eq!(rects[0].width, rects[2].width);
}

#[test]
fn tower_tiles_full_width() {
    for &(w, h) in SIZES {
        let rects = compute_layout(3, w, h);
        assert_eq!(rects.len(), 3);
        assert_eq!(total_width(&rects), w);
        assert_eq!(rects[2].right(), w);
        assert!(rects.iter().all(|r| r.height == h));
        assert_no_overlap(&rects);
    }
}

#[test]
fn five_pane_center_and_corners() {
    for &(w, h) in SIZES {
        let rects = compute_layout(5, w, h);
        assert_eq!(rects.len(), 5);

        let center = rects[2];
        assert_eq!(center.y, 0);
        assert_eq!(center.height, h);

        for i in [0, 1, 3, 4] {
            assert_eq!(rects[i].height, h / 2);
        }
        assert_eq!(rects[0].y, 0);
        assert_eq!(rects[1].y, h / 2);
        assert_eq!(rects[3].y, 0);
        assert_eq!(rects[4].y, h / 2);

        assert_eq!(rects[0].x, rects[1].x);
        assert_eq!(rects[3].x, rects[4].x);
        assert_eq!(rects[0].width + center.width + rects[3].width, w);
        assert_inside(&rects, w, h);
        assert_no_overlap(&rects);
    }
}

#[test]
fn five_pane_reference_values() {
    let rects = compute_layout(5, 1920, 1080);
    assert_eq!(rects[0], Rect::new(0, 0, 554, 540));
    assert_eq!(rects[1], Rect::new(0, 540, 554, 540));
    assert_eq!(rects[2], Rect::new(554, 0, 812, 1080));
    assert_eq!(rects[3], Rect::new(1366, 0, 554, 540));
    assert_eq!(rects[4], Rect::new(1366, 540, 554, 540));
}

#[test]
fn grid_places_every_pane() {
    for n in [4usize, 6, 7, 8, 9, 10, 11, 12, 15] {
        for &(w, h) in &[(1920u32, 1080u32), (1001, 777)] {
            let rects = compute_layout(n, w, h);
            assert_eq!(rects.len(), n, "n = {n}");
            assert!(rects.iter().all(|r| r.area() > 0), "n = {n}");
            assert_inside(&rects, w, h);
            assert_no_overlap(&rects);
        }
    }
}

#[test]
fn grid_seven_panes_rows() {
    let rects = compute_layout(7, 1600, 900);
    let top: Vec<_> = rects.iter().filter(|r| r.y == 0).collect();
    let bottom: Vec<_> = rects.iter().filter(|r| r.y == 450).collect();
    assert_eq!(top.len(), 4);
    assert_eq!(bottom.len(), 3);
    assert!(top.iter().all(|r| r.width == 400 && r.height == 450));
    assert!(bottom.iter().all(|r| r.width == 533));
    // row-major: pane 4 starts the bottom row
    assert_eq!(rects[4], Rect::new(0, 450, 533, 450));
    assert_eq!(rects[6], Rect::new(1066, 450, 533, 450));
}

#[test]
fn grid_four_panes_is_two_by_two() {
    let rects = compute_layout(4, 1000, 600);
    assert_eq!(
        rects,
        vec![
            Rect::new(0, 0, 500, 300),
            Rect::new(500, 0, 500, 300),
            Rect::new(0, 300, 500, 300),
            Rect::new(500, 300, 500, 300),
        ]
    );
}

#[test]
fn degenerate_container_yields_zero_area() {
    for n in 0..=9 {
        let rects = compute_layout(n, 0, 0);
        assert_eq!(rects.len(), n);
        assert!(rects.iter().all(|r| r.area() == 0));

        let rects = compute_layout(n, 0, 1080);
        assert!(rects.iter().all(|r| r.width == 0 && r.x == 0));

        let rects = compute_layout(n, 1920, 0);
        assert!(rects.iter().all(|r| r.height == 0));
    }
}

#[test]
fn more_panes_than_pixels_stays_well_formed() {
    let rects = compute_layout(9, 3, 1);
    assert_eq!(rects.len(), 9);
    assert_inside(&rects, 3, 1);
}

#[test]
fn recomputation_is_deterministic() {
    let engine = TilingEngine::new(5);
    assert_eq!(engine.kind(), LayoutKind::FivePane);
    assert_eq!(engine.compute(1280, 720), engine.compute(1280, 720));
    assert_ne!(engine.compute(1280, 720), engine.compute(1920, 1080));
}

#[test]
fn layout_kind_serializes_snake_case() {
    let json = serde_json::to_string(&LayoutKind::FivePane).unwrap();
    assert_eq!(json, "\"five_pane\"");
}
