//! Procedural skyline generation.
//!
//! A scene is produced in three stages that share one seeded stream: layer placement
//! (`layers`), decorative neon lines and backdrop (`compose`), and per-building geometry
//! (`shapes`).

pub(crate) mod compose;
pub(crate) mod config;
pub(crate) mod fingerprint;
pub(crate) mod layers;
pub(crate) mod model;
pub(crate) mod palette;
pub(crate) mod shapes;
