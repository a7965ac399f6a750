use crate::{
    foundation::core::{BezPath, Point, Segment},
    foundation::math::lerp,
    random::rng::SceneRng,
    scene::model::{
        Building, BuildingStyle, CantileverBox, CurveShape, NeonHue, NeonStroke, Silhouette,
        TowerShape,
    },
};

const PANEL_SPACING: f64 = 28.0;
const MIN_PANELS: usize = 3;

const STRIP_OPACITY: f64 = 0.7;
const CANTILEVER_OPACITY: f64 = 0.55;
const CURVE_EDGE_OPACITY: f64 = 0.65;

/// Number of vertical panel divisions for a footprint width.
pub fn panel_count(width: f64) -> usize {
    ((width / PANEL_SPACING).floor() as usize).max(MIN_PANELS)
}

/// Evenly spaced interior fractions `(k + 1) / (count + 1)`.
fn panel_fractions(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |k| (k + 1) as f64 / (count + 1) as f64)
}

/// Turn one placed building into geometry.
///
/// `index` is the building's position in its layer and selects the accent hue by parity.
/// Curve buildings draw one value from `rng` (bulge), cantilever buildings draw three (box width,
/// overhang, vertical position), straight buildings draw none.
pub fn shape_building(
    rng: &mut SceneRng,
    building: &Building,
    index: usize,
    base_y: f64,
) -> Silhouette {
    let hue = NeonHue::for_index(index);
    match building.style {
        BuildingStyle::Curve => Silhouette::Curve(curve_tower(rng, building, hue, base_y)),
        BuildingStyle::Straight => Silhouette::Tower(slab_tower(building, hue, base_y, None)),
        BuildingStyle::Cantilever => {
            let cantilever = cantilever_box(rng, building, base_y);
            Silhouette::Tower(slab_tower(building, hue, base_y, Some(cantilever)))
        }
    }
}

fn slab_tower(
    b: &Building,
    hue: NeonHue,
    base_y: f64,
    cantilever: Option<CantileverBox>,
) -> TowerShape {
    let top = base_y - b.height;
    let bottom = base_y;
    let left = b.x;
    let right = b.right();
    let skew = b.tilt_deg.to_radians().tan() * b.height;

    let outline = [
        Point::new(left + skew, top),
        Point::new(right + skew, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ];

    let panels = panel_fractions(panel_count(b.width))
        .map(|t| {
            Segment::new(
                lerp(left + skew, right + skew, t),
                top,
                lerp(left, right, t),
                bottom,
            )
        })
        .collect();

    let accent = NeonStroke {
        segment: Segment::new(left, top + b.height * 0.22, right, top + b.height * 0.28),
        hue,
        opacity: STRIP_OPACITY,
    };

    TowerShape {
        outline,
        panels,
        accent,
        cantilever,
    }
}

/// Offset box anchored near the parent's upper third, overhanging to the left.
fn cantilever_box(rng: &mut SceneRng, b: &Building, base_y: f64) -> CantileverBox {
    let top = base_y - b.height;
    let w = b.width;
    let h = b.height;

    let cant_h = h * 0.18;
    let cant_w = w * (0.65 + rng.next_f64() * 0.15);
    let overhang = w * (0.18 + rng.next_f64() * 0.18);
    let cy = top + h * (0.28 + rng.next_f64() * 0.18);
    let cx = b.x + w * 0.25 - overhang;

    CantileverBox {
        outline: [
            Point::new(cx, cy),
            Point::new(cx + cant_w, cy - cant_h * 0.12),
            Point::new(cx + cant_w + overhang, cy + cant_h),
            Point::new(cx + overhang, cy + cant_h * 1.12),
        ],
        accent: NeonStroke {
            segment: Segment::horizontal(cx, cx + cant_w + overhang, cy),
            hue: NeonHue::Primary,
            opacity: CANTILEVER_OPACITY,
        },
    }
}

fn curve_tower(rng: &mut SceneRng, b: &Building, hue: NeonHue, base_y: f64) -> CurveShape {
    let top = base_y - b.height;
    let bottom = base_y;
    let w = b.width;
    let h = b.height;
    let left = b.x;
    let right = b.right();

    let bulge = (rng.next_f64() * 0.6 + 0.2) * w;
    let cx = left + w * 0.5;
    let left_top = cx - w * 0.35 - bulge * 0.3;
    let right_top = cx + w * 0.35 + bulge * 0.6;

    let mut outline = BezPath::new();
    outline.move_to((left, bottom));
    outline.curve_to(
        (left + bulge * 0.2, bottom - h * 0.6),
        (left_top, top + h * 0.25),
        (left_top, top),
    );
    outline.line_to((right_top, top));
    outline.curve_to(
        (right - bulge * 0.2, bottom - h * 0.6),
        (right, bottom),
        (right, bottom),
    );
    outline.close_path();

    let panels = panel_fractions(panel_count(w))
        .map(|t| {
            let px = left + w * t;
            Segment::new(px, top, px, bottom)
        })
        .collect();

    CurveShape {
        outline,
        panels,
        accent: NeonStroke {
            segment: Segment::horizontal(left_top, right_top, top),
            hue,
            opacity: CURVE_EDGE_OPACITY,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
