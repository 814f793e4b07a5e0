#![no_main]

use bezier_wave_editor::{AppController, AppIntent, AppState, EditorOptions};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

const WIDTH: f32 = 256.0;
const HEIGHT: f32 = 128.0;

/// Je drei Bytes: Art des Ereignisses, X, Y (leicht über den Canvas hinaus).
fn decode(chunk: &[u8]) -> Option<AppIntent> {
    let [kind, x, y] = *chunk else {
        return None;
    };
    let pos = Vec2::new(x as f32 * 1.25 - 16.0, y as f32 * 0.625 - 8.0);
    Some(match kind % 5 {
        0 => AppIntent::PointerPressed { pos },
        1 | 2 => AppIntent::PointerMoved { pos },
        3 => AppIntent::PointerReleased,
        _ => AppIntent::ResetCurveRequested,
    })
}

fuzz_target!(|data: &[u8]| {
    let options = EditorOptions {
        output_length: 16,
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::CanvasResized {
            width: WIDTH,
            height: HEIGHT,
        },
    );

    for intent in data.chunks(3).filter_map(decode) {
        let _ = controller.handle_intent(&mut state, intent);

        let anchors = state.curve.anchors();
        assert!(anchors.len() >= 2);
        assert_eq!(state.curve.controls().len(), anchors.len() - 1);
        assert_eq!(anchors[0].x, 0.0);
        assert_eq!(anchors[anchors.len() - 1].x, WIDTH);
        assert_eq!(state.output.len(), 16);
        assert!(state.output.iter().all(|v| v.is_finite()));
    }
});
