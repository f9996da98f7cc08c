//! Core-Domänentypen: das Spline-Modell mit seinen Invarianten.

pub mod spline;

pub use spline::{PointRole, Spline, SplineState};
