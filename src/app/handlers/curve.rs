//! Handler für Kurven-Lifecycle und Anker-Einfügen.

use crate::app::use_cases;
use crate::app::AppState;

/// Baut die Kurve für die neue Canvas-Größe neu auf.
pub fn initialize(state: &mut AppState, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        log::warn!(
            "Canvas-Größe {:.0} x {:.0} ungültig, Kurve bleibt unverändert",
            width,
            height
        );
        return;
    }
    use_cases::curve::initialize_curve(state, width, height);
}

/// Fügt einen Anker an der nächstgelegenen Kurvenstelle ein.
pub fn insert_anchor(state: &mut AppState, pos: glam::Vec2) {
    use_cases::curve::insert_anchor(state, pos);
}
