//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasResized { width, height } => {
            vec![AppCommand::InitializeCurve { width, height }]
        }
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginDrag { pos }],
        AppIntent::PointerMoved { pos } => {
            // Bewegungen ohne aktiven Drag werden verworfen
            if state.is_dragging() {
                vec![AppCommand::UpdateDrag { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ResetCurveRequested => vec![AppCommand::InitializeCurve {
            width: state.canvas.domain_width,
            height: state.canvas.domain_height,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsSaveRequested => vec![AppCommand::SaveOptions { path: None }],
    }
}
