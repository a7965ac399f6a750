use super::*;

#[test]
fn style_thresholds_are_exact() {
    assert_eq!(BuildingStyle::from_pick(0.0), BuildingStyle::Curve);
    assert_eq!(BuildingStyle::from_pick(0.179_999), BuildingStyle::Curve);
    assert_eq!(BuildingStyle::from_pick(0.18), BuildingStyle::Cantilever);
    assert_eq!(BuildingStyle::from_pick(0.419_999), BuildingStyle::Cantilever);
    assert_eq!(BuildingStyle::from_pick(0.42), BuildingStyle::Straight);
    assert_eq!(BuildingStyle::from_pick(0.999_999), BuildingStyle::Straight);
}

#[test]
fn style_names_are_lowercase() {
    assert_eq!(BuildingStyle::Straight.as_str(), "straight");
    assert_eq!(BuildingStyle::Cantilever.as_str(), "cantilever");
    assert_eq!(BuildingStyle::Curve.as_str(), "curve");
    assert_eq!(
        serde_json::to_string(&BuildingStyle::Cantilever).unwrap(),
        "\"cantilever\""
    );
}

#[test]
fn neon_hue_alternates_by_parity() {
    assert_eq!(NeonHue::for_index(0), NeonHue::Primary);
    assert_eq!(NeonHue::for_index(1), NeonHue::Secondary);
    assert_eq!(NeonHue::for_index(2), NeonHue::Primary);
    assert_eq!(NeonHue::for_index(7), NeonHue::Secondary);
}

#[test]
fn neon_hue_resolves_palette_roles() {
    let p = Palette::default();
    assert_eq!(NeonHue::Primary.color(&p), p.neon_primary);
    assert_eq!(NeonHue::Secondary.color(&p), p.neon_secondary);
}

#[test]
fn building_right_edge() {
    let b = Building {
        x: 40.0,
        width: 100.5,
        height: 300.0,
        tilt_deg: 0.0,
        style: BuildingStyle::Straight,
    };
    assert_eq!(b.right(), 140.5);
}

#[test]
fn silhouette_lists_cantilever_accent_after_strip() {
    let strip = NeonStroke {
        segment: Segment::new(0.0, 10.0, 50.0, 12.0),
        hue: NeonHue::Secondary,
        opacity: 0.7,
    };
    let cant = NeonStroke {
        segment: Segment::horizontal(-5.0, 60.0, 30.0),
        hue: NeonHue::Primary,
        opacity: 0.55,
    };
    let s = Silhouette::Tower(TowerShape {
        outline: [Point::ZERO; 4],
        panels: vec![],
        accent: strip,
        cantilever: Some(CantileverBox {
            outline: [Point::ZERO; 4],
            accent: cant,
        }),
    });
    assert_eq!(s.neon_strokes(), vec![strip, cant]);
}
