use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GlassCityError, GlassCityResult};

const MAX_DIM: u32 = 16_384;

/// Straight (non-premultiplied) RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    /// RGBA at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG at `path`, creating parent directories.
    pub fn write_png(&self, path: &Path) -> GlassCityResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Parse SVG markup into a `usvg` tree.
pub fn parse_svg(svg: &str) -> GlassCityResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize SVG markup at `scale` times its intrinsic size.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, scale: f64) -> GlassCityResult<RasterImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GlassCityError::validation(format!(
            "raster scale must be finite and > 0, got {scale}"
        )));
    }

    let tree = parse_svg(svg)?;
    let size = tree.size();
    let width = to_px(f64::from(size.width()) * scale)?;
    let height = to_px(f64::from(size.height()) * scale)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(GlassCityError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GlassCityError::render("failed to allocate pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let mut rgba8 = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba8.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    tracing::debug!(width, height, "rasterized svg");
    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

fn to_px(v: f64) -> GlassCityResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(GlassCityError::render("svg has invalid width/height"));
    }
    Ok((v.round() as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
