use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben vom Host ohne direkte Mutationslogik.
/// Positionen sind bereits in Canvas-Koordinaten (Pixel, Ursprung oben links).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Canvas-Größe hat sich geändert (Kurve wird neu initialisiert)
    CanvasResized { width: f32, height: f32 },
    /// Zeiger gedrückt (Maus / Touch-Start)
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt (nur während eines Drags relevant)
    PointerMoved { pos: Vec2 },
    /// Zeiger losgelassen (Maus / Touch-Ende)
    PointerReleased,
    /// Kurve auf die flache Standardkurve zurücksetzen
    ResetCurveRequested,
    /// Optionen wurden im Host geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Aktuelle Optionen als TOML neben der Binary speichern
    OptionsSaveRequested,
}
