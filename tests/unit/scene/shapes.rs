use super::*;
use kurbo::{PathEl, Shape as _};

fn building(style: BuildingStyle) -> Building {
    Building {
        x: 100.0,
        width: 140.0,
        height: 300.0,
        tilt_deg: 0.0,
        style,
    }
}

#[test]
fn panel_count_has_floor_of_three() {
    assert_eq!(panel_count(20.0), 3);
    assert_eq!(panel_count(83.9), 3);
    assert_eq!(panel_count(112.0), 4);
    assert_eq!(panel_count(220.0), 7);
}

#[test]
fn straight_consumes_no_draws() {
    let mut a = SceneRng::new(5);
    let mut b = SceneRng::new(5);
    let _ = shape_building(&mut a, &building(BuildingStyle::Straight), 0, 400.0);
    assert_eq!(a.next_u32(), b.next_u32());
}

#[test]
fn cantilever_consumes_three_draws_and_curve_one() {
    let mut a = SceneRng::new(5);
    let mut b = SceneRng::new(5);
    let _ = shape_building(&mut a, &building(BuildingStyle::Cantilever), 0, 400.0);
    for _ in 0..3 {
        b.next_u32();
    }
    assert_eq!(a.next_u32(), b.next_u32());

    let mut a = SceneRng::new(5);
    let mut b = SceneRng::new(5);
    let _ = shape_building(&mut a, &building(BuildingStyle::Curve), 0, 400.0);
    b.next_u32();
    assert_eq!(a.next_u32(), b.next_u32());
}

#[test]
fn untilted_slab_is_axis_aligned() {
    let mut rng = SceneRng::new(1);
    let Silhouette::Tower(t) = shape_building(&mut rng, &building(BuildingStyle::Straight), 0, 400.0)
    else {
        panic!("straight building must shape as a tower");
    };
    assert_eq!(t.outline[0], Point::new(100.0, 100.0));
    assert_eq!(t.outline[1], Point::new(240.0, 100.0));
    assert_eq!(t.outline[2], Point::new(240.0, 400.0));
    assert_eq!(t.outline[3], Point::new(100.0, 400.0));
    assert_eq!(t.panels.len(), 5);
    assert!(t.cantilever.is_none());
    assert_eq!(t.accent.hue, NeonHue::Primary);
    assert!((t.accent.segment.from.y - 166.0).abs() < 1e-9);
    assert!((t.accent.segment.to.y - 184.0).abs() < 1e-9);
}

#[test]
fn tilt_skews_top_edge_only() {
    let mut b = building(BuildingStyle::Straight);
    b.tilt_deg = 5.0;
    let mut rng = SceneRng::new(1);
    let Silhouette::Tower(t) = shape_building(&mut rng, &b, 1, 400.0) else {
        panic!("expected tower");
    };
    let skew = 5f64.to_radians().tan() * 300.0;
    assert!((t.outline[0].x - (100.0 + skew)).abs() < 1e-9);
    assert_eq!(t.outline[3].x, 100.0);
    for p in &t.panels {
        assert!((p.from.x - p.to.x - skew).abs() < 1e-9);
    }
    assert_eq!(t.accent.hue, NeonHue::Secondary);
}

#[test]
fn cantilever_box_stays_in_documented_band() {
    for seed in 0..64u32 {
        let mut rng = SceneRng::new(seed);
        let b = building(BuildingStyle::Cantilever);
        let Silhouette::Tower(t) = shape_building(&mut rng, &b, 0, 400.0) else {
            panic!("expected tower");
        };
        let c = t.cantilever.expect("cantilever box");
        let top = 100.0;
        let cy = c.outline[0].y;
        assert!(cy >= top + 0.28 * b.height - 1e-9);
        assert!(cy <= top + 0.46 * b.height + 1e-9);

        let overhang = c.outline[3].x - c.outline[0].x;
        assert!(overhang >= 0.18 * b.width - 1e-9 && overhang <= 0.36 * b.width + 1e-9);
        assert_eq!(c.accent.hue, NeonHue::Primary);
        assert_eq!(c.accent.segment.from.y, cy);
    }
}

#[test]
fn curve_outline_is_two_cubics_and_a_flat_top() {
    let mut rng = SceneRng::new(11);
    let b = building(BuildingStyle::Curve);
    let Silhouette::Curve(c) = shape_building(&mut rng, &b, 2, 400.0) else {
        panic!("expected curve");
    };
    let els = c.outline.elements();
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els[1], PathEl::CurveTo(..)));
    assert!(matches!(els[2], PathEl::LineTo(_)));
    assert!(matches!(els[3], PathEl::CurveTo(..)));
    assert!(matches!(els[4], PathEl::ClosePath));

    assert_eq!(c.accent.segment.from.y, 100.0);
    assert!(c.accent.segment.from.x < c.accent.segment.to.x);
    assert_eq!(c.accent.hue, NeonHue::Primary);
    assert_eq!(c.panels.len(), 5);
    for p in &c.panels {
        assert_eq!(p.from.x, p.to.x);
    }

    let bbox = c.outline.bounding_box();
    assert!((bbox.y1 - 400.0).abs() < 1e-9);
}
