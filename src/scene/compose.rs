use crate::{
    foundation::core::Segment,
    foundation::error::GlassCityResult,
    foundation::math::lerp,
    random::rng::SceneRng,
    scene::config::SceneConfig,
    scene::layers::{LayerPlacement, build_layers, layer_base_y, layer_opacity},
    scene::model::{Layer, NeonHue, NeonLine, Scene},
    scene::shapes::shape_building,
};

/// Horizon position as a fraction of the output height.
pub const HORIZON_FRACTION: f64 = 0.58;
/// Horizontal perspective lines between horizon and bottom edge.
pub const GRID_LINE_COUNT: usize = 12;
/// Decorative neon lines per scene.
pub const NEON_LINE_COUNT: usize = 10;
/// Opacity of the final dark overlay.
pub const VIGNETTE_OPACITY: f64 = 0.08;

/// Generate a scene from a configuration.
///
/// Validates the configuration, then draws from a fresh stream seeded with `config.seed` in a
/// fixed order: layer placement, neon lines, then per-building shape details (layer order, then
/// building order). Identical configurations always produce identical scenes.
#[tracing::instrument(skip(config), fields(seed = config.seed, width = config.width, height = config.height))]
pub fn generate(config: &SceneConfig) -> GlassCityResult<Scene> {
    config.validate()?;
    let canvas = config.canvas()?;

    let width = canvas.width_f64();
    let height = canvas.height_f64();
    let padding = config.padding;
    let horizon_y = horizon_y(height);

    let mut rng = SceneRng::new(config.seed);

    let placements = build_layers(&mut rng, width, padding);
    let neon_lines = neon_lines(&mut rng, width, height, padding, horizon_y);
    let layers = shape_layers(&mut rng, placements, horizon_y);

    tracing::debug!(
        buildings = ?layers.iter().map(|l| l.buildings.len()).collect::<Vec<_>>(),
        "placed layers"
    );

    Ok(Scene {
        canvas,
        seed: config.seed,
        padding,
        palette: config.palette,
        horizon_y,
        grid_lines: grid_lines(width, height, padding, horizon_y),
        layers,
        neon_lines,
    })
}

/// Horizon y for an output height.
pub fn horizon_y(height: f64) -> f64 {
    height * HORIZON_FRACTION
}

/// Perspective lines evenly spread from just below the horizon to just above the bottom edge.
pub fn grid_lines(width: f64, height: f64, padding: f64, horizon_y: f64) -> Vec<Segment> {
    let last = (GRID_LINE_COUNT - 1) as f64;
    (0..GRID_LINE_COUNT)
        .map(|i| {
            let y = lerp(horizon_y + 6.0, height - 6.0, i as f64 / last);
            Segment::horizontal(padding, width - padding, y)
        })
        .collect()
}

/// Neon accents in a band from `0.4 * height` above the horizon to `0.05 * height` below it.
pub fn neon_lines(
    rng: &mut SceneRng,
    width: f64,
    height: f64,
    padding: f64,
    horizon_y: f64,
) -> Vec<NeonLine> {
    (0..NEON_LINE_COUNT)
        .map(|_| {
            let y = rng.range(horizon_y - height * 0.4, horizon_y + height * 0.05);
            let x1 = rng.range(padding, width - padding);
            let x2 = rng.range(padding, width - padding);
            let hue = if rng.next_f64() > 0.5 {
                NeonHue::Primary
            } else {
                NeonHue::Secondary
            };
            NeonLine { x1, x2, y, hue }
        })
        .collect()
}

fn shape_layers(rng: &mut SceneRng, placements: Vec<LayerPlacement>, horizon_y: f64) -> Vec<Layer> {
    placements
        .into_iter()
        .map(|placement| {
            let base_y = layer_base_y(horizon_y, placement.depth);
            let silhouettes = placement
                .buildings
                .iter()
                .enumerate()
                .map(|(i, b)| shape_building(rng, b, i, base_y))
                .collect();
            Layer {
                depth: placement.depth,
                opacity: layer_opacity(placement.depth),
                base_y,
                buildings: placement.buildings,
                silhouettes,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
