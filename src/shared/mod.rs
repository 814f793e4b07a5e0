//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod output_format;
mod quantize;
mod render_scene;
mod selection;

pub use options::{EditorOptions, OutputFormat, QuantizeMode, QuantizeOptions};
pub use options::{CANVAS_HEIGHT, CANVAS_WIDTH};
pub use output_format::format_output;
pub use quantize::Quantizer;
pub use render_scene::RenderScene;
pub use selection::Selection;
