use crate::shared::EditorOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kurve für die gegebene Canvas-Größe neu aufbauen (verwirft alle Punkte)
    InitializeCurve { width: f32, height: f32 },
    /// Drag-Lifecycle Start: Treffer prüfen, sonst Anker einfügen
    BeginDrag { pos: Vec2 },
    /// Drag-Lifecycle Update: gegriffenen Punkt verschieben
    UpdateDrag { pos: Vec2 },
    /// Drag-Lifecycle Ende
    EndDrag,
    /// Anker auf dem nächstgelegenen Segment einfügen
    InsertAnchor { pos: Vec2 },
    /// Ausgabe neu abtasten, ohne die Kurve zu verändern
    Resample,
    /// Neue Laufzeit-Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen persistieren (`path = None` → Standardpfad neben der Binary)
    SaveOptions { path: Option<PathBuf> },
}
