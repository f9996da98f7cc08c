//! Geometrie-Erzeugung aus resampelten Pfadpunkten.

mod road;

pub use road::{texture_repeat, RoadMesh};
