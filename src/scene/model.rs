use crate::{
    foundation::core::{BezPath, Canvas, Point, Segment},
    scene::palette::{Color, Palette},
};

/// Structural silhouette family of a building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingStyle {
    /// Tilted glass slab.
    Straight,
    /// Slab with an offset cantilevered box near its upper third.
    Cantilever,
    /// S-curved tower.
    Curve,
}

impl BuildingStyle {
    /// Classify one uniform draw: `< 0.18` curve, `< 0.42` cantilever, otherwise straight.
    pub fn from_pick(pick: f64) -> Self {
        if pick < 0.18 {
            Self::Curve
        } else if pick < 0.42 {
            Self::Cantilever
        } else {
            Self::Straight
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Cantilever => "cantilever",
            Self::Curve => "curve",
        }
    }
}

/// Which of the two palette neon colours a stroke uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeonHue {
    /// `Palette::neon_primary`.
    Primary,
    /// `Palette::neon_secondary`.
    Secondary,
}

impl NeonHue {
    /// Alternate hues by building index: even primary, odd secondary.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }

    /// Resolve against a palette.
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Self::Primary => palette.neon_primary,
            Self::Secondary => palette.neon_secondary,
        }
    }
}

/// One placed building in a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Building {
    /// Left edge of the footprint.
    pub x: f64,
    /// Footprint width.
    pub width: f64,
    /// Height above the layer baseline.
    pub height: f64,
    /// Signed tilt in degrees, applied as a horizontal skew of the top edge.
    pub tilt_deg: f64,
    /// Silhouette family.
    pub style: BuildingStyle,
}

impl Building {
    /// Right edge of the footprint.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A glowing stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NeonStroke {
    /// Stroke geometry.
    pub segment: Segment,
    /// Palette hue.
    pub hue: NeonHue,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Offset volume overlaid on a cantilever building.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CantileverBox {
    /// Quadrilateral outline, clockwise from the upper-left corner.
    pub outline: [Point; 4],
    /// Primary-hue edge line.
    pub accent: NeonStroke,
}

/// Straight or cantilever silhouette.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TowerShape {
    /// Skewed quadrilateral: top-left, top-right, bottom-right, bottom-left.
    pub outline: [Point; 4],
    /// Vertical panel divisions following the skew.
    pub panels: Vec<Segment>,
    /// Accent strip across the upper band.
    pub accent: NeonStroke,
    /// Present only for [`BuildingStyle::Cantilever`].
    pub cantilever: Option<CantileverBox>,
}

/// S-curved silhouette.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CurveShape {
    /// Closed outline made of two cubic segments joined by the flat top.
    pub outline: BezPath,
    /// Vertical panel divisions.
    pub panels: Vec<Segment>,
    /// Highlight along the top edge.
    pub accent: NeonStroke,
}

/// Drawable geometry of one building.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Silhouette {
    /// Straight or cantilever building.
    Tower(TowerShape),
    /// Curve building.
    Curve(CurveShape),
}

impl Silhouette {
    /// Neon strokes carried by this silhouette, in draw order.
    pub fn neon_strokes(&self) -> Vec<NeonStroke> {
        match self {
            Self::Tower(t) => {
                let mut out = vec![t.accent];
                if let Some(c) = &t.cantilever {
                    out.push(c.accent);
                }
                out
            }
            Self::Curve(c) => vec![c.accent],
        }
    }
}

/// One depth band of buildings.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Depth fraction, `0` foremost and `1` farthest.
    pub depth: f64,
    /// Group opacity.
    pub opacity: f64,
    /// Ground line the buildings stand on.
    pub base_y: f64,
    /// Buildings in placement order (left to right).
    pub buildings: Vec<Building>,
    /// Geometry for each building, same order as `buildings`.
    pub silhouettes: Vec<Silhouette>,
}

/// Decorative horizon accent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NeonLine {
    /// First x coordinate.
    pub x1: f64,
    /// Second x coordinate.
    pub x2: f64,
    /// Shared y coordinate.
    pub y: f64,
    /// Palette hue.
    pub hue: NeonHue,
}

/// A fully generated skyline. Read-only once produced by [`crate::generate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub(crate) canvas: Canvas,
    pub(crate) seed: u32,
    pub(crate) padding: f64,
    pub(crate) palette: Palette,
    pub(crate) horizon_y: f64,
    pub(crate) grid_lines: Vec<Segment>,
    pub(crate) layers: Vec<Layer>,
    pub(crate) neon_lines: Vec<NeonLine>,
}

impl Scene {
    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Seed the scene was generated from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Horizontal inset used during placement.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Colours used by the scene.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Where the ground plane begins.
    pub fn horizon_y(&self) -> f64 {
        self.horizon_y
    }

    /// Horizontal perspective lines below the horizon, top to bottom.
    pub fn grid_lines(&self) -> &[Segment] {
        &self.grid_lines
    }

    /// Layers ordered foreground (`depth == 0`) to background.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Decorative neon lines in draw order.
    pub fn neon_lines(&self) -> &[NeonLine] {
        &self.neon_lines
    }

    /// Every building across all layers, foreground first.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.layers.iter().flat_map(|l| l.buildings.iter())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
