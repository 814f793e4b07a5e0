//! Application State — zentrale Datenhaltung des Editors.

use super::use_cases::drag::DragState;
use super::CommandLog;
use crate::core::{CanvasGeometry, Curve};
use crate::shared::{EditorOptions, Selection, CANVAS_HEIGHT, CANVAS_WIDTH};
use glam::Vec2;

/// Hauptzustand des Editors.
///
/// Wird ausschließlich über den `AppController` mutiert; alle Operationen
/// laufen synchron innerhalb eines Host-Callbacks durch.
pub struct AppState {
    /// Die bearbeitete Kurve
    pub curve: Curve,
    /// Aktuelle Canvas-Geometrie
    pub canvas: CanvasGeometry,
    /// Selektierter Punkt
    pub selection: Selection,
    /// Aktiver Drag (None = Idle)
    pub drag: Option<DragState>,
    /// Zuletzt abgetastete Ausgabewerte
    pub output: Vec<f32>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Kurve hat sich geändert, Ausgabe muss neu abgetastet werden
    pub needs_resample: bool,
    /// Host soll neu zeichnen
    pub needs_redraw: bool,
}

impl AppState {
    /// Erstellt einen State mit Standardoptionen und Standard-Canvas.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen State mit den gegebenen Optionen und flacher Standardkurve.
    pub fn with_options(options: EditorOptions) -> Self {
        let canvas = CanvasGeometry::new(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            options.effective_output_length(),
            options.value_range,
        );
        Self {
            curve: Curve::new(canvas.domain_width, canvas.domain_height),
            canvas,
            selection: Selection::None,
            drag: None,
            output: Vec::new(),
            options,
            command_log: CommandLog::new(),
            needs_resample: true,
            needs_redraw: true,
        }
    }

    /// True solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Position des selektierten Punkts (None bei leerer oder veralteter Selektion).
    pub fn selected_position(&self) -> Option<Vec2> {
        match self.selection {
            Selection::None => None,
            Selection::Anchor { index } => self.curve.anchors().get(index).copied(),
            Selection::Control { index, handle } => {
                self.curve.controls().get(index).map(|pair| pair.get(handle))
            }
        }
    }

    /// Markiert die Kurve als geändert (Abtastung + Neuzeichnen folgen).
    pub fn mark_curve_changed(&mut self) {
        self.needs_resample = true;
        self.needs_redraw = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
