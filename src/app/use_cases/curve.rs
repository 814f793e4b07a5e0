//! Use-Case: Kurve initialisieren und Anker einfügen.

use crate::core::{CanvasGeometry, InsertRejection};
use crate::shared::Selection;
use crate::AppState;
use glam::Vec2;

/// Baut die flache Standardkurve für die gegebene Canvas-Größe neu auf.
///
/// Verwirft alle bisherigen Punkte, die Selektion und einen laufenden Drag.
pub fn initialize_curve(state: &mut AppState, width: f32, height: f32) {
    state.canvas = CanvasGeometry::new(
        width,
        height,
        state.options.effective_output_length(),
        state.options.value_range,
    );
    state.curve.initialize(width, height);
    state.selection = Selection::None;
    state.drag = None;
    state.mark_curve_changed();

    log::info!("Kurve initialisiert ({:.0} x {:.0} px)", width, height);
}

/// Fügt einen Anker auf dem nächstgelegenen Segment ein und selektiert ihn.
///
/// Liegt kein Segment innerhalb der Einfüge-Toleranz oder fiele der neue
/// Anker auf einen bestehenden, bleibt die Kurve unverändert.
/// Gibt den Index des neuen Ankers zurück.
pub fn insert_anchor(state: &mut AppState, pos: Vec2) -> Option<usize> {
    let result = state.curve.insert_anchor(
        pos,
        state.options.insert_tolerance_px,
        state.options.closest_point_steps,
    );

    match result {
        Ok(index) => {
            state.selection = Selection::Anchor { index };
            state.mark_curve_changed();
            log::info!(
                "Anker {} bei ({:.1}, {:.1}) eingefügt",
                index,
                state.curve.anchors()[index].x,
                state.curve.anchors()[index].y
            );
            Some(index)
        }
        Err(InsertRejection::NoSegmentInRange) => None,
        Err(InsertRejection::TooCloseToAnchor { segment }) => {
            log::debug!(
                "Einfügen auf Segment {} verworfen: Anker läge auf einem bestehenden",
                segment
            );
            None
        }
    }
}
