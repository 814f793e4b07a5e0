//! Core-Domänentypen: Bézier-Mathematik, Kurvenmodell, Canvas-Geometrie, Sampler.

/// Reine Funktionen auf kubischen Bézier-Segmenten
pub mod bezier;
pub mod canvas;
pub mod curve;
pub mod sampler;

pub use bezier::{
    closest_point_on_segment, evaluate, solve_y_for_x, split, ClosestPoint, CubicSegment,
};
pub use canvas::CanvasGeometry;
pub use curve::{ControlPair, Curve, Handle, InsertRejection};
pub use sampler::{sample, SampleParams};
