use crate::{
    foundation::math::lerp,
    random::rng::SceneRng,
    scene::model::{Building, BuildingStyle},
};

/// Number of depth bands in every scene.
pub const LAYER_COUNT: usize = 4;

/// Buildings placed in one depth band, before shaping.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerPlacement {
    /// Depth fraction, `0` foremost.
    pub depth: f64,
    /// Buildings left to right.
    pub buildings: Vec<Building>,
}

/// Depth fraction of band `index`: evenly spaced over `[0, 1]`.
pub fn layer_depth(index: usize) -> f64 {
    index as f64 / (LAYER_COUNT - 1) as f64
}

/// Upper bound on buildings in a band: 14 in front down to 6 at the back.
pub fn building_budget(depth: f64) -> usize {
    lerp(6.0, 14.0, 1.0 - depth).floor() as usize
}

/// Group opacity of a band; farther bands are more transparent.
pub fn layer_opacity(depth: f64) -> f64 {
    lerp(0.68, 1.0, 1.0 - depth)
}

/// Ground line of a band. Nearer bands stand lower, farther ones closer to the horizon.
pub fn layer_base_y(horizon_y: f64, depth: f64) -> f64 {
    horizon_y - lerp(40.0, 180.0, 1.0 - depth)
}

/// Place buildings for every band, foreground first.
pub fn build_layers(rng: &mut SceneRng, width: f64, padding: f64) -> Vec<LayerPlacement> {
    (0..LAYER_COUNT)
        .map(|i| {
            let depth = layer_depth(i);
            LayerPlacement {
                depth,
                buildings: place_layer(rng, depth, width, padding),
            }
        })
        .collect()
}

/// Place one band's run of buildings left to right.
///
/// Draw order per building is fixed (width, height, gap, tilt, style) so streams replay
/// identically. Placement stops at the budget, when the cursor passes `width - padding`, or when
/// the freshly drawn building would overflow it; that building's draws are still consumed.
pub fn place_layer(rng: &mut SceneRng, depth: f64, width: f64, padding: f64) -> Vec<Building> {
    let near = 1.0 - depth;
    let budget = building_budget(depth);
    let width_scale = lerp(0.35, 1.0, near);
    let height_scale = lerp(0.4, 1.0, near);
    let max_x = width - padding;

    let mut x = padding + rng.next_f64() * 40.0;
    let mut buildings = Vec::with_capacity(budget);

    while buildings.len() < budget && x < max_x {
        let w = rng.range(60.0, 220.0) * width_scale;
        let h = rng.range(140.0, 540.0) * height_scale;
        let gap = rng.range(16.0, 42.0);
        let tilt_deg = rng.range(-6.0, 6.0);
        let style = BuildingStyle::from_pick(rng.next_f64());

        if x + w > max_x {
            break;
        }

        buildings.push(Building {
            x,
            width: w,
            height: h,
            tilt_deg,
            style,
        });
        x += w + gap;
    }

    buildings
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layers.rs"]
mod tests;
