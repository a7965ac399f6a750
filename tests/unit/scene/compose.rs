use super::*;
use crate::scene::layers::LAYER_COUNT;
use crate::scene::model::{BuildingStyle, Silhouette};

#[test]
fn horizon_sits_at_fifty_eight_percent() {
    assert_eq!(horizon_y(900.0), 522.0);
    assert!((horizon_y(100.0) - 58.0).abs() < 1e-9);
}

#[test]
fn grid_lines_span_horizon_to_bottom() {
    let lines = grid_lines(1600.0, 900.0, 32.0, 522.0);
    assert_eq!(lines.len(), GRID_LINE_COUNT);
    assert_eq!(lines[0].from.y, 528.0);
    assert_eq!(lines[GRID_LINE_COUNT - 1].from.y, 894.0);
    for pair in lines.windows(2) {
        assert!(pair[0].from.y < pair[1].from.y);
    }
    assert!(lines.iter().all(|l| l.from.x == 32.0 && l.to.x == 1568.0));
}

#[test]
fn neon_lines_stay_in_band() {
    let mut rng = SceneRng::new(77);
    let lines = neon_lines(&mut rng, 1600.0, 900.0, 32.0, 522.0);
    assert_eq!(lines.len(), NEON_LINE_COUNT);
    for l in &lines {
        assert!(l.y >= 522.0 - 360.0 && l.y < 522.0 + 45.0);
        assert!((32.0..1568.0).contains(&l.x1));
        assert!((32.0..1568.0).contains(&l.x2));
    }
}

#[test]
fn seed_one_end_to_end() {
    let scene = generate(&SceneConfig::default()).unwrap();
    assert_eq!(scene.horizon_y(), 522.0);
    assert_eq!(scene.layers().len(), LAYER_COUNT);

    let first = &scene.layers()[0];
    assert!((6..=14).contains(&first.buildings.len()));
    assert_eq!(first.buildings.len(), 10);
    assert_eq!(first.depth, 0.0);
    assert_eq!(first.opacity, 1.0);
    assert_eq!(first.base_y, 342.0);
    assert!(first.buildings.iter().all(|b| matches!(
        b.style,
        BuildingStyle::Straight | BuildingStyle::Cantilever | BuildingStyle::Curve
    )));
}

#[test]
fn silhouettes_match_building_styles() {
    let scene = generate(&SceneConfig::with_seed(201)).unwrap();
    for layer in scene.layers() {
        assert_eq!(layer.buildings.len(), layer.silhouettes.len());
        for (b, s) in layer.buildings.iter().zip(&layer.silhouettes) {
            match (b.style, s) {
                (BuildingStyle::Curve, Silhouette::Curve(_)) => {}
                (BuildingStyle::Straight, Silhouette::Tower(t)) => assert!(t.cantilever.is_none()),
                (BuildingStyle::Cantilever, Silhouette::Tower(t)) => {
                    assert!(t.cantilever.is_some())
                }
                (style, _) => panic!("style {style:?} shaped with wrong silhouette"),
            }
        }
    }
}

#[test]
fn generation_is_repeatable() {
    let cfg = SceneConfig::with_seed(441);
    assert_eq!(generate(&cfg).unwrap(), generate(&cfg).unwrap());
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    let cfg = SceneConfig {
        padding: 900.0,
        ..SceneConfig::default()
    };
    assert!(generate(&cfg).is_err());
}
