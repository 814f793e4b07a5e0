//! Optionale Host-Anbindung: Quantisierung, Render- und Ausgabe-Callback.

use crate::shared::RenderScene;

/// Quantisierungsfunktion des Hosts (Rohwert → Ausgabewert).
pub type QuantizeFn = Box<dyn Fn(f32) -> f32>;
/// Wird nach jeder sichtbaren Änderung mit der aktuellen Szene aufgerufen.
pub type RenderFn = Box<dyn FnMut(&RenderScene)>;
/// Wird nach jeder Neuabtastung mit Werten und formatiertem Text aufgerufen.
pub type OutputFn = Box<dyn FnMut(&[f32], &str)>;

/// Callbacks, die der Host beim Erstellen des Controllers injiziert.
///
/// Alle Einträge sind optional: fehlt die Quantisierung, greift die
/// konfigurierte Standard-Quantisierung; fehlende Callbacks werden übersprungen.
#[derive(Default)]
pub struct HostCallbacks {
    pub quantize: Option<QuantizeFn>,
    pub on_render: Option<RenderFn>,
    pub on_output: Option<OutputFn>,
}

impl HostCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantize(mut self, quantize: impl Fn(f32) -> f32 + 'static) -> Self {
        self.quantize = Some(Box::new(quantize));
        self
    }

    pub fn with_render(mut self, on_render: impl FnMut(&RenderScene) + 'static) -> Self {
        self.on_render = Some(Box::new(on_render));
        self
    }

    pub fn with_output(mut self, on_output: impl FnMut(&[f32], &str) + 'static) -> Self {
        self.on_output = Some(Box::new(on_output));
        self
    }
}
