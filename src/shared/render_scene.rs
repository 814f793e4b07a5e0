//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use super::options::EditorOptions;
use crate::core::{CanvasGeometry, ControlPair};
use crate::shared::Selection;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Canvas-Geometrie zum Zeitpunkt des Frames
    pub canvas: CanvasGeometry,
    /// Anker der Kurve in Pixel-Koordinaten
    pub anchors: Vec<Vec2>,
    /// Steuerpunkt-Paare (eins pro Segment)
    pub controls: Vec<ControlPair>,
    /// Aktuelle Selektion (für Hervorhebung)
    pub selection: Selection,
    /// Ob gerade ein Punkt gezogen wird
    pub dragging: bool,
    /// Zuletzt abgetastete Werte (Balken-/Stufendarstellung)
    pub output: Vec<f32>,
    /// Laufzeit-Optionen für Marker-Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine zeichenbare Kurve vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.anchors.len() >= 2
    }
}
