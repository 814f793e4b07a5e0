//! Use-Case: Ausgabe-Array aus der aktuellen Kurve neu berechnen.

use crate::core::sample;
use crate::AppState;

/// Tastet die Kurve vollständig neu ab und ersetzt `state.output`.
///
/// Der Ersatzwert für entartete Kurven ist der quantisierte Wert der Mittellinie.
pub fn resample(state: &mut AppState, quantize: &dyn Fn(f32) -> f32) {
    let canvas = state.canvas;
    let default_value = quantize(canvas.raw_value_at(canvas.center_y()));
    let params = canvas.sample_params(state.options.solve_tolerance, default_value);

    state.output = sample(&state.curve, &params, quantize);
    state.needs_resample = false;
    state.needs_redraw = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::curve::initialize_curve;

    #[test]
    fn resample_ersetzt_ausgabe_vollstaendig() {
        let mut state = AppState::new();
        state.options.output_length = 10;
        state.options.value_range = 10.0;
        initialize_curve(&mut state, 300.0, 100.0);

        resample(&mut state, &|raw| raw);

        assert_eq!(state.output.len(), 10);
        assert!(state.output.iter().all(|&v| (v - 5.0).abs() < 1e-4));
        assert!(!state.needs_resample);
    }
}
