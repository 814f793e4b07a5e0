//! Handler für den Drag-Lifecycle (Zeiger gedrückt / bewegt / losgelassen).

use crate::app::use_cases;
use crate::app::AppState;

/// Zeiger gedrückt: Punkt greifen oder Anker einfügen.
pub fn begin(state: &mut AppState, pos: glam::Vec2) {
    if state.is_dragging() {
        // Fehlendes PointerReleased (z.B. Touch abgebrochen): alten Drag beenden
        use_cases::drag::end_drag(state);
    }
    use_cases::drag::begin_drag(state, pos);
}

/// Zeiger bewegt während eines Drags.
pub fn update(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::update_drag(state, pos);
}

/// Zeiger losgelassen.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
