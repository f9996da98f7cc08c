//! Bezier Path Editor Library.
//! Spline-Modell, Resampling und Bearbeitungs-Sitzung als Library für Hosts und Tests.

pub mod app;
pub mod core;
pub mod mesh;
pub mod shared;

pub use crate::app::{PathCommand, PathController, PathEditorState, PathIntent};
pub use crate::core::{PointRole, Spline, SplineState};
pub use crate::mesh::RoadMesh;
pub use crate::shared::PathOptions;
