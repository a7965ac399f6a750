use super::*;

#[test]
fn depths_span_unit_interval() {
    assert_eq!(layer_depth(0), 0.0);
    assert_eq!(layer_depth(LAYER_COUNT - 1), 1.0);
    assert!(layer_depth(1) < layer_depth(2));
}

#[test]
fn budgets_shrink_with_depth() {
    let budgets: Vec<usize> = (0..LAYER_COUNT)
        .map(|i| building_budget(layer_depth(i)))
        .collect();
    assert_eq!(budgets, vec![14, 11, 8, 6]);
}

#[test]
fn opacity_and_baseline_follow_depth() {
    assert_eq!(layer_opacity(0.0), 1.0);
    assert!((layer_opacity(1.0) - 0.68).abs() < 1e-12);
    assert_eq!(layer_base_y(522.0, 0.0), 342.0);
    assert_eq!(layer_base_y(522.0, 1.0), 482.0);
}

#[test]
fn seed_one_first_band_matches_reference() {
    let mut rng = SceneRng::new(1);
    let layers = build_layers(&mut rng, 1600.0, 32.0);
    assert_eq!(layers.len(), LAYER_COUNT);

    let counts: Vec<usize> = layers.iter().map(|l| l.buildings.len()).collect();
    assert_eq!(counts, vec![10, 10, 8, 6]);

    // First cursor draw: 32 + 0.62707... * 40.
    let first = layers[0].buildings[0];
    assert!((first.x - 57.082_957_623_5).abs() < 1e-6);
    assert_eq!(first.style, BuildingStyle::Cantilever);
    assert_eq!(layers[0].buildings[1].style, BuildingStyle::Straight);
}

#[test]
fn buildings_never_overlap_and_stay_inside_padding() {
    for seed in 0..200u32 {
        let mut rng = SceneRng::new(seed);
        for layer in build_layers(&mut rng, 1600.0, 32.0) {
            let mut prev_right: Option<f64> = None;
            for b in &layer.buildings {
                assert!(b.x >= 32.0, "seed {seed}: x {} < padding", b.x);
                assert!(b.right() <= 1568.0, "seed {seed}: right {}", b.right());
                if let Some(r) = prev_right {
                    assert!(b.x >= r + 16.0 - 1e-9, "seed {seed}: gap too small");
                }
                prev_right = Some(b.right());
            }
        }
    }
}

#[test]
fn sizes_recede_with_depth_bounds() {
    let mut rng = SceneRng::new(58);
    for layer in build_layers(&mut rng, 1600.0, 32.0) {
        let near = 1.0 - layer.depth;
        let max_w = 220.0 * lerp(0.35, 1.0, near);
        let max_h = 540.0 * lerp(0.4, 1.0, near);
        for b in &layer.buildings {
            assert!(b.width <= max_w + 1e-9);
            assert!(b.height <= max_h + 1e-9);
            assert!((-6.0..6.0).contains(&b.tilt_deg));
        }
    }
}

#[test]
fn narrow_canvas_yields_short_or_empty_bands() {
    let mut rng = SceneRng::new(9);
    let layers = build_layers(&mut rng, 120.0, 8.0);
    for layer in &layers {
        for b in &layer.buildings {
            assert!(b.right() <= 112.0);
        }
    }
}
