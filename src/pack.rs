use rayon::prelude::*;

use crate::{
    foundation::error::{GlassCityError, GlassCityResult},
    render::svg::{SvgOptions, render_svg_with},
    scene::{
        compose::generate,
        config::SceneConfig,
        fingerprint::{SceneFingerprint, fingerprint_scene},
    },
};

/// Named seeds for the page sections of the demo site, in page order.
pub const SECTION_PRESETS: [(&str, u32); 9] = [
    ("hero", 101),
    ("about", 201),
    ("services", 301),
    ("portfolio", 401),
    ("features", 501),
    ("team", 601),
    ("testimonials", 701),
    ("contact", 801),
    ("footer", 901),
];

/// Seeds for the gallery grid.
pub const GALLERY_SEEDS: [u32; 6] = [11, 23, 37, 49, 58, 67];

/// One scene to render in a pack.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PackEntry {
    /// Stable label, also used for output file names and SVG id prefixes.
    pub label: String,
    /// Seed overriding the base config.
    pub seed: u32,
}

impl PackEntry {
    /// Build an entry.
    pub fn new(label: impl Into<String>, seed: u32) -> Self {
        Self {
            label: label.into(),
            seed,
        }
    }
}

/// Entries for [`SECTION_PRESETS`].
pub fn section_entries() -> Vec<PackEntry> {
    SECTION_PRESETS
        .iter()
        .map(|(label, seed)| PackEntry::new(*label, *seed))
        .collect()
}

/// Entries for [`GALLERY_SEEDS`], labelled `gallery-<seed>`.
pub fn gallery_entries() -> Vec<PackEntry> {
    GALLERY_SEEDS
        .iter()
        .map(|seed| PackEntry::new(format!("gallery-{seed}"), *seed))
        .collect()
}

/// Options for [`render_pack`].
#[derive(Clone, Debug)]
pub struct PackOpts {
    /// Size, padding and palette shared by every entry; its seed is ignored.
    pub base: SceneConfig,
    /// Generate entries on a rayon pool.
    pub parallel: bool,
    /// Pool size when `parallel` is set (`None` = rayon default, `0` rejected).
    pub threads: Option<usize>,
    /// Prefix SVG ids with `<label>-` so the documents can share one HTML page.
    pub prefix_ids: bool,
}

impl Default for PackOpts {
    fn default() -> Self {
        Self {
            base: SceneConfig::default(),
            parallel: false,
            threads: None,
            prefix_ids: true,
        }
    }
}

/// A rendered pack entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PackItem {
    /// Entry label.
    pub label: String,
    /// Seed used.
    pub seed: u32,
    /// SVG document.
    pub svg: String,
    /// Placement fingerprint of the generated scene.
    pub fingerprint: SceneFingerprint,
}

/// Render every entry, in input order.
///
/// Output does not depend on `parallel` or `threads`: each entry owns its own seeded stream.
#[tracing::instrument(skip(entries, opts), fields(entries = entries.len(), parallel = opts.parallel))]
pub fn render_pack(entries: &[PackEntry], opts: &PackOpts) -> GlassCityResult<Vec<PackItem>> {
    opts.base.validate()?;

    let items = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            entries
                .par_iter()
                .map(|entry| render_entry(entry, opts))
                .collect::<Vec<_>>()
        })
    } else {
        entries
            .iter()
            .map(|entry| render_entry(entry, opts))
            .collect::<Vec<_>>()
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(item?);
    }
    tracing::debug!(items = out.len(), "rendered pack");
    Ok(out)
}

fn render_entry(entry: &PackEntry, opts: &PackOpts) -> GlassCityResult<PackItem> {
    let config = SceneConfig {
        seed: entry.seed,
        ..opts.base.clone()
    };
    let scene = generate(&config)?;
    let svg_opts = if opts.prefix_ids {
        SvgOptions::with_id_prefix(format!("{}-", entry.label))?
    } else {
        SvgOptions::default()
    };
    Ok(PackItem {
        label: entry.label.clone(),
        seed: entry.seed,
        svg: render_svg_with(&scene, &svg_opts),
        fingerprint: fingerprint_scene(&scene),
    })
}

fn build_thread_pool(threads: Option<usize>) -> GlassCityResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GlassCityError::validation(
            "pack 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlassCityError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pack/pack.rs"]
mod tests;
