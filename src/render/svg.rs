use std::fmt;

use kurbo::PathEl;

use crate::{
    foundation::core::{BezPath, Point, Segment},
    foundation::error::{GlassCityError, GlassCityResult},
    scene::compose::{VIGNETTE_OPACITY, generate},
    scene::config::SceneConfig,
    scene::model::{CantileverBox, CurveShape, Layer, NeonStroke, Scene, Silhouette, TowerShape},
    scene::palette::Color,
};

/// Accessible label carried by every document.
pub const ARIA_LABEL: &str = "Futuristic architectural glass city";

const EDGE_STROKE_OPACITY: f64 = 0.133;
const GRID_STROKE_OPACITY: f64 = 0.2;
const NEON_LINE_OPACITY: f64 = 0.8;
const NEON_STROKE_WIDTH: f64 = 2.0;
const GLOW_STD_DEVIATION: f64 = 4.0;

/// Options for SVG serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgOptions {
    id_prefix: String,
}

impl SvgOptions {
    /// Prefix every gradient/filter/clip id with `prefix`, so several scenes can be inlined into
    /// one HTML page without id collisions. Allowed characters: ASCII alphanumerics, `-`, `_`.
    pub fn with_id_prefix(prefix: impl Into<String>) -> GlassCityResult<Self> {
        let id_prefix = prefix.into();
        if !id_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(GlassCityError::validation(format!(
                "svg id prefix '{id_prefix}' must contain only [A-Za-z0-9_-]"
            )));
        }
        Ok(Self { id_prefix })
    }

    /// Current id prefix (empty by default).
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }
}

/// Serialize a scene as a standalone SVG document.
pub fn render_svg(scene: &Scene) -> String {
    render_svg_with(scene, &SvgOptions::default())
}

/// Generate and serialize in one call.
pub fn generate_svg(config: &SceneConfig) -> GlassCityResult<String> {
    Ok(render_svg(&generate(config)?))
}

/// Serialize a scene with explicit options.
pub fn render_svg_with(scene: &Scene, opts: &SvgOptions) -> String {
    SvgDocument { scene, opts }.to_string()
}

struct SvgDocument<'a> {
    scene: &'a Scene,
    opts: &'a SvgOptions,
}

impl SvgDocument<'_> {
    fn id(&self, name: &str) -> String {
        format!("{}{name}", self.opts.id_prefix)
    }

    fn url(&self, name: &str) -> String {
        format!("url(#{})", self.id(name))
    }

    fn write_defs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.scene;
        let p = s.palette();
        let canvas = s.canvas();
        let (w, h) = (canvas.width_f64(), canvas.height_f64());
        let horizon = s.horizon_y();

        f.write_str("<defs>")?;

        write!(
            f,
            r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#,
            self.id("sky")
        )?;
        stop(f, "0%", p.sky_accent, None)?;
        stop(f, "55%", p.sky_mid, None)?;
        stop(f, "100%", p.sky_base, None)?;
        f.write_str("</linearGradient>")?;

        write!(
            f,
            r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#,
            self.id("glass")
        )?;
        stop(f, "0%", p.glass_fill, Some(0.9))?;
        stop(f, "50%", p.glass_fill, Some(0.35))?;
        stop(f, "100%", p.glass_fill_deep, Some(0.8))?;
        f.write_str("</linearGradient>")?;

        write!(
            f,
            r#"<linearGradient id="{}" x1="0" y1="0" x2="1" y2="0">"#,
            self.id("reflect")
        )?;
        let white = Color::rgb(255, 255, 255);
        stop(f, "0%", white, Some(0.18))?;
        stop(f, "30%", white, Some(0.05))?;
        stop(f, "100%", white, Some(0.0))?;
        f.write_str("</linearGradient>")?;

        // Panel lines are vertical or nearly so; bounding-box units would collapse.
        write!(
            f,
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{}" y2="{}">"#,
            self.id("panel"),
            num(w),
            num(h)
        )?;
        stop(f, "0%", white, Some(0.35))?;
        stop(f, "100%", white, Some(0.02))?;
        f.write_str("</linearGradient>")?;

        // User-space region: neon strokes are zero-height boxes.
        write!(
            f,
            r#"<filter id="{}" filterUnits="userSpaceOnUse" x="0" y="0" width="{}" height="{}">"#,
            self.id("glow"),
            num(w),
            num(h)
        )?;
        write!(
            f,
            r#"<feGaussianBlur stdDeviation="{}" result="coloredBlur"/>"#,
            num(GLOW_STD_DEVIATION)
        )?;
        f.write_str(
            r#"<feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
        )?;
        f.write_str("</filter>")?;

        write!(
            f,
            r#"<radialGradient id="{}" cx="75%" cy="18%" r="35%">"#,
            self.id("sun")
        )?;
        stop(f, "0%", p.warm_highlight, Some(0.45))?;
        stop(f, "60%", p.warm_highlight, Some(0.08))?;
        stop(f, "100%", p.warm_highlight, Some(0.0))?;
        f.write_str("</radialGradient>")?;

        write!(
            f,
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}">"#,
            self.id("ground"),
            num(horizon),
            num(h)
        )?;
        stop(f, "0%", Color::rgb(0x0b, 0x12, 0x20), Some(0.55))?;
        stop(f, "100%", Color::rgb(0x03, 0x07, 0x12), Some(0.95))?;
        f.write_str("</linearGradient>")?;

        write!(
            f,
            r#"<clipPath id="{}"><rect x="0" y="{}" width="{}" height="{}"/></clipPath>"#,
            self.id("belowHorizon"),
            num(horizon),
            num(w),
            num(h - horizon)
        )?;

        f.write_str("</defs>")
    }

    fn write_backdrop(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.scene;
        let canvas = s.canvas();
        let (w, h) = (num(canvas.width_f64()), num(canvas.height_f64()));
        let horizon = s.horizon_y();

        write!(
            f,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            self.url("sky")
        )?;
        write!(
            f,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            self.url("sun")
        )?;

        write!(f, r#"<g clip-path="{}">"#, self.url("belowHorizon"))?;
        write!(
            f,
            r#"<rect x="0" y="{}" width="{w}" height="{}" fill="{}"/>"#,
            num(horizon),
            num(canvas.height_f64() - horizon),
            self.url("ground")
        )?;
        let grid = s.palette().neon_primary;
        for line in s.grid_lines() {
            write!(f, "<line ")?;
            segment_attrs(f, line)?;
            write!(
                f,
                r#" stroke="{grid}" stroke-opacity="{}" stroke-width="1"/>"#,
                num(GRID_STROKE_OPACITY)
            )?;
        }
        f.write_str("</g>")
    }

    fn write_layer(&self, f: &mut fmt::Formatter<'_>, layer: &Layer) -> fmt::Result {
        write!(f, r#"<g opacity="{}">"#, num(layer.opacity))?;
        for silhouette in &layer.silhouettes {
            match silhouette {
                Silhouette::Tower(t) => self.write_tower(f, t)?,
                Silhouette::Curve(c) => self.write_curve(f, c)?,
            }
        }
        f.write_str("</g>")
    }

    fn write_tower(&self, f: &mut fmt::Formatter<'_>, t: &TowerShape) -> fmt::Result {
        f.write_str("<g>")?;
        self.write_glass_polygon(f, &t.outline)?;
        for panel in &t.panels {
            self.write_panel(f, panel)?;
        }
        self.write_neon(f, &t.accent)?;
        if let Some(c) = &t.cantilever {
            self.write_cantilever(f, c)?;
        }
        f.write_str("</g>")
    }

    fn write_cantilever(&self, f: &mut fmt::Formatter<'_>, c: &CantileverBox) -> fmt::Result {
        f.write_str("<g>")?;
        self.write_glass_polygon(f, &c.outline)?;
        self.write_neon(f, &c.accent)?;
        f.write_str("</g>")
    }

    fn write_curve(&self, f: &mut fmt::Formatter<'_>, c: &CurveShape) -> fmt::Result {
        let d = path_data(&c.outline);
        f.write_str("<g>")?;
        write!(
            f,
            r##"<path d="{d}" fill="{}" stroke="#ffffff" stroke-opacity="{}" stroke-width="1"/>"##,
            self.url("glass"),
            num(EDGE_STROKE_OPACITY)
        )?;
        write!(f, r#"<path d="{d}" fill="{}"/>"#, self.url("reflect"))?;
        for panel in &c.panels {
            self.write_panel(f, panel)?;
        }
        self.write_neon(f, &c.accent)?;
        f.write_str("</g>")
    }

    /// Fill pass then reflection pass over the same outline.
    fn write_glass_polygon(&self, f: &mut fmt::Formatter<'_>, outline: &[Point; 4]) -> fmt::Result {
        let pts = points_attr(outline);
        write!(
            f,
            r##"<polygon points="{pts}" fill="{}" stroke="#ffffff" stroke-opacity="{}" stroke-width="1"/>"##,
            self.url("glass"),
            num(EDGE_STROKE_OPACITY)
        )?;
        write!(
            f,
            r#"<polygon points="{pts}" fill="{}"/>"#,
            self.url("reflect")
        )
    }

    fn write_panel(&self, f: &mut fmt::Formatter<'_>, panel: &Segment) -> fmt::Result {
        f.write_str("<line ")?;
        segment_attrs(f, panel)?;
        write!(f, r#" stroke="{}" stroke-width="1"/>"#, self.url("panel"))
    }

    fn write_neon(&self, f: &mut fmt::Formatter<'_>, stroke: &NeonStroke) -> fmt::Result {
        f.write_str("<line ")?;
        segment_attrs(f, &stroke.segment)?;
        write!(
            f,
            r#" stroke="{}" stroke-opacity="{}" stroke-width="{}" filter="{}"/>"#,
            stroke.hue.color(self.scene.palette()),
            num(stroke.opacity),
            num(NEON_STROKE_WIDTH),
            self.url("glow")
        )
    }

    fn write_neon_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.scene.palette();
        for line in self.scene.neon_lines() {
            write!(f, r#"<g filter="{}"><line "#, self.url("glow"))?;
            segment_attrs(f, &Segment::horizontal(line.x1, line.x2, line.y))?;
            write!(
                f,
                r#" stroke="{}" stroke-opacity="{}" stroke-width="{}"/></g>"#,
                line.hue.color(palette),
                num(NEON_LINE_OPACITY),
                num(NEON_STROKE_WIDTH)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canvas = self.scene.canvas();
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="{ARIA_LABEL}">"#,
            w = canvas.width,
            h = canvas.height
        )?;
        self.write_defs(f)?;
        self.write_backdrop(f)?;

        // Back to front.
        for layer in self.scene.layers().iter().rev() {
            self.write_layer(f, layer)?;
        }

        self.write_neon_lines(f)?;

        write!(
            f,
            r##"<rect x="0" y="0" width="{}" height="{}" fill="#000000" opacity="{}"/>"##,
            canvas.width,
            canvas.height,
            num(VIGNETTE_OPACITY)
        )?;
        f.write_str("</svg>\n")
    }
}

fn stop(f: &mut fmt::Formatter<'_>, offset: &str, color: Color, opacity: Option<f64>) -> fmt::Result {
    write!(f, r#"<stop offset="{offset}" stop-color="{color}""#)?;
    if let Some(o) = opacity {
        write!(f, r#" stop-opacity="{}""#, num(o))?;
    }
    f.write_str("/>")
}

fn segment_attrs(f: &mut fmt::Formatter<'_>, s: &Segment) -> fmt::Result {
    write!(
        f,
        r#"x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(s.from.x),
        num(s.from.y),
        num(s.to.x),
        num(s.to.y)
    )
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&num(p.x));
        out.push(',');
        out.push_str(&num(p.y));
    }
    out
}

/// SVG path data with the same number formatting as every other attribute.
pub(crate) fn path_data(path: &BezPath) -> String {
    let pt = |p: Point| format!("{},{}", num(p.x), num(p.y));
    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        let part = match *el {
            PathEl::MoveTo(p) => format!("M {}", pt(p)),
            PathEl::LineTo(p) => format!("L {}", pt(p)),
            PathEl::QuadTo(p1, p2) => format!("Q {} {}", pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => format!("C {} {} {}", pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => "Z".to_owned(),
        };
        out.push_str(&part);
    }
    out
}

/// Format a coordinate with at most three decimals, no trailing zeros and no negative zero.
pub(crate) fn num(v: f64) -> String {
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
