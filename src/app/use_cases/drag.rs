//! Use-Case: Drag-Lifecycle für Anker und Steuerpunkte.
//!
//! `Idle → Dragging` bei Treffer, `Dragging → Idle` beim Loslassen.
//! Ein Klick ins Leere bleibt `Idle` und versucht stattdessen einen Anker einzufügen.

use super::curve::insert_anchor;
use super::hit_test::hit_test;
use crate::shared::Selection;
use crate::AppState;
use glam::Vec2;

/// Zustand eines laufenden Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Zeiger minus Punktposition beim Greifen
    pub offset: Vec2,
}

/// Startet einen Drag auf dem Punkt unter `pos`.
///
/// Ohne Treffer wird die Selektion geleert und ein Anker auf der Kurve
/// eingefügt (falls nah genug). Gibt `true` zurück, wenn ein Drag begonnen hat.
pub fn begin_drag(state: &mut AppState, pos: Vec2) -> bool {
    let hit = hit_test(&state.curve, pos, &state.options);
    state.selection = hit;

    let Some(point) = state.selected_position() else {
        state.needs_redraw = true;
        insert_anchor(state, pos);
        return false;
    };

    state.drag = Some(DragState { offset: pos - point });
    state.needs_redraw = true;
    log::debug!("Drag gestartet: {:?}", hit);
    true
}

/// Verschiebt den gegriffenen Punkt. Ohne aktiven Drag ein No-op.
///
/// Die Zielposition wird auf den Canvas geklemmt. Erster und letzter Anker
/// behalten ihre X-Koordinate. Anker ziehen ihre angrenzenden Steuerpunkte
/// mit; Steuerpunkte bewegen sich unabhängig.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    let Some(drag) = state.drag else {
        return;
    };
    let target = state.canvas.clamp(pos - drag.offset);

    match state.selection {
        Selection::None => return,
        Selection::Anchor { index } => {
            let Some(&old) = state.curve.anchors().get(index) else {
                return;
            };
            let new_pos = if state.curve.is_endpoint(index) {
                Vec2::new(old.x, target.y)
            } else {
                target
            };
            state.curve.move_anchor(index, new_pos);
        }
        Selection::Control { index, handle } => {
            let Some(pair) = state.curve.control_mut(index) else {
                return;
            };
            *pair.get_mut(handle) = target;
        }
    }

    state.mark_curve_changed();
}

/// Beendet den Drag (unabhängig davon, ob sich etwas bewegt hat).
pub fn end_drag(state: &mut AppState) {
    if state.drag.take().is_some() {
        state.needs_redraw = true;
    }
}
