//! Bezier-Wave-Editor Library.
//! Editor-Kern für stückweise kubische Bézier-Kurven, die zu einer
//! quantisierten Wellenform fester Länge abgetastet werden.
//! Rendering und Eingabe-Plumbing liegen beim Host.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, HostCallbacks};
pub use core::{CanvasGeometry, ControlPair, CubicSegment, Curve, Handle, SampleParams};
pub use shared::{
    format_output, EditorOptions, OutputFormat, QuantizeMode, QuantizeOptions, Quantizer,
    RenderScene, Selection,
};
