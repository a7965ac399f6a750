//! Glasscity draws seeded "futuristic glass city" skylines as standalone SVG documents.
//!
//! The pipeline is a pure function of a [`SceneConfig`]:
//!
//! - [`generate`] places four depth layers of buildings, neon lines and backdrop geometry from one
//!   seeded [`SceneRng`] stream, producing a [`Scene`]
//! - [`render_svg`] serializes a scene; the same config always yields byte-identical markup
//! - [`rasterize_svg`] and [`render_pack`] cover PNG output and batches of preset seeds
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod pack;
mod random;
mod render;
mod scene;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Segment};
pub use crate::foundation::error::{GlassCityError, GlassCityResult};
pub use crate::foundation::math::lerp;
pub use crate::random::rng::SceneRng;

pub use crate::pack::{
    GALLERY_SEEDS, PackEntry, PackItem, PackOpts, SECTION_PRESETS, gallery_entries, render_pack,
    section_entries,
};
pub use crate::render::raster::{RasterImage, parse_svg, rasterize_svg};
pub use crate::render::svg::{ARIA_LABEL, SvgOptions, generate_svg, render_svg, render_svg_with};
pub use crate::scene::compose::{
    GRID_LINE_COUNT, HORIZON_FRACTION, NEON_LINE_COUNT, VIGNETTE_OPACITY, generate, grid_lines,
    horizon_y, neon_lines,
};
pub use crate::scene::config::{
    DEFAULT_HEIGHT, DEFAULT_PADDING, DEFAULT_SEED, DEFAULT_WIDTH, SceneConfig, SceneConfigBuilder,
};
pub use crate::scene::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use crate::scene::layers::{
    LAYER_COUNT, LayerPlacement, build_layers, building_budget, layer_base_y, layer_depth,
    layer_opacity, place_layer,
};
pub use crate::scene::model::{
    Building, BuildingStyle, CantileverBox, CurveShape, Layer, NeonHue, NeonLine, NeonStroke,
    Scene, Silhouette, TowerShape,
};
pub use crate::scene::palette::{Color, Palette};
pub use crate::scene::shapes::{panel_count, shape_building};
