//! Geteilte, layer-neutrale Bausteine: Bézier-Geometrie und Optionen.

pub mod bezier_geometry;
pub mod options;

pub use options::PathOptions;
pub use options::{DEFAULT_RESOLUTION, DEFAULT_SPACING};
