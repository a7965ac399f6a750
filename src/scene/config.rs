use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{GlassCityError, GlassCityResult},
    scene::palette::Palette,
};

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 1600;
/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 900;
/// Default seed.
pub const DEFAULT_SEED: u32 = 1;
/// Default horizontal inset in pixels.
pub const DEFAULT_PADDING: f64 = 32.0;

/// Generator options.
///
/// Every field has a default; JSON input may omit any key. A supplied `palette` must be complete
/// (see [`Palette`]), and unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Seed for the scene's random stream.
    pub seed: u32,
    /// Colour roles.
    pub palette: Palette,
    /// Horizontal inset kept free of buildings on both sides.
    pub padding: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            palette: Palette::default(),
            padding: DEFAULT_PADDING,
        }
    }
}

impl SceneConfig {
    /// Default configuration with a different seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Start a validated builder from the defaults.
    pub fn builder() -> SceneConfigBuilder {
        SceneConfigBuilder::new()
    }

    /// Output surface described by `width`/`height`.
    pub fn canvas(&self) -> GlassCityResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check geometry before any generation happens.
    pub fn validate(&self) -> GlassCityResult<()> {
        let canvas = self.canvas()?;
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(GlassCityError::validation(
                "padding must be finite and >= 0",
            ));
        }
        if self.padding * 2.0 >= canvas.width_f64() {
            return Err(GlassCityError::validation(format!(
                "padding {} leaves no drawable width on a {}px canvas",
                self.padding, self.width
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> GlassCityResult<Self> {
        let cfg = Self::parse_json_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> GlassCityResult<Self> {
        let cfg = Self::read_path(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file without checking geometry.
    ///
    /// For callers that override fields afterwards; call [`SceneConfig::validate`] before use.
    pub fn read_path(path: &Path) -> GlassCityResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::parse_json_str(&s)
    }

    fn parse_json_str(s: &str) -> GlassCityResult<Self> {
        serde_json::from_str(s).map_err(|e| GlassCityError::serde(format!("parse scene config: {e}")))
    }
}

/// Chained construction of a [`SceneConfig`], validated on [`SceneConfigBuilder::build`].
#[derive(Clone, Debug)]
pub struct SceneConfigBuilder {
    cfg: SceneConfig,
}

impl Default for SceneConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfigBuilder {
    /// Builder seeded with [`SceneConfig::default`].
    pub fn new() -> Self {
        Self {
            cfg: SceneConfig::default(),
        }
    }

    /// Builder starting from an existing configuration.
    pub fn from_config(cfg: SceneConfig) -> Self {
        Self { cfg }
    }

    /// Set the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set output width and height.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.cfg.width = width;
        self.cfg.height = height;
        self
    }

    /// Set the horizontal inset.
    pub fn padding(mut self, padding: f64) -> Self {
        self.cfg.padding = padding;
        self
    }

    /// Replace the whole palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> GlassCityResult<SceneConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
