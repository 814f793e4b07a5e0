//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        canvas: state.canvas,
        anchors: state.curve.anchors().to_vec(),
        controls: state.curve.controls().to_vec(),
        selection: state.selection,
        dragging: state.is_dragging(),
        output: state.output.clone(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::shared::Selection;

    #[test]
    fn build_spiegelt_kurve_und_selektion() {
        let mut state = AppState::new();
        state.selection = Selection::Anchor { index: 1 };
        state.output = vec![1.0, 2.0];

        let scene = build(&state);

        assert!(scene.has_curve());
        assert_eq!(scene.anchors, state.curve.anchors());
        assert_eq!(scene.controls.len(), 1);
        assert_eq!(scene.selection, Selection::Anchor { index: 1 });
        assert!(!scene.dragging);
        assert_eq!(scene.output, vec![1.0, 2.0]);
    }
}
