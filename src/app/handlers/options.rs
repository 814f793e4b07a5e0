//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Übernimmt neue Optionen und passt das Ausgaberaster an.
///
/// Die Kurve selbst bleibt erhalten; nur die Abtastung wird erneuert.
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate()?;
    if options.output_length < 2 {
        log::warn!(
            "output_length {} zu klein, verwende {}",
            options.output_length,
            options.effective_output_length()
        );
    }

    state.canvas.output_length = options.effective_output_length();
    state.canvas.value_range = options.value_range;
    state.options = options;
    state.mark_curve_changed();
    Ok(())
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save(state: &AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(EditorOptions::config_path);
    state.options.save_to_file(&path)
}
