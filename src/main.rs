//! Bezier-Wave-Editor (Headless-Host).
//!
//! Lädt die Optionen, baut Controller und State auf und gibt die
//! abgetastete Wellenform aus. Optional wird ein Zeiger-Skript abgespielt:
//!
//! ```text
//! resize 512 256
//! down 256 128
//! move 256 40
//! up
//! ```

use anyhow::Context;
use bezier_wave_editor::{AppController, AppIntent, AppState, EditorOptions, HostCallbacks};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier-Wave-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let host = HostCallbacks::new()
            .with_output(|_values, text| println!("{text}"))
            .with_render(|scene| {
                log::debug!(
                    "Redraw: {} Anker, Selektion {:?}",
                    scene.anchors.len(),
                    scene.selection
                )
            });
        let mut controller = AppController::with_host(host);
        let mut state = AppState::with_options(options);

        match std::env::args().nth(1) {
            Some(path) => {
                let script = std::fs::read_to_string(&path)
                    .with_context(|| format!("Skript {} nicht lesbar", path))?;
                Self::play_script(&mut controller, &mut state, &script)?;
            }
            None => controller.refresh(&mut state),
        }

        Ok(())
    }

    fn play_script(
        controller: &mut AppController,
        state: &mut AppState,
        script: &str,
    ) -> anyhow::Result<()> {
        for (line_no, line) in script.lines().enumerate() {
            let intent = parse_script_line(line)
                .with_context(|| format!("Zeile {}: {:?}", line_no + 1, line))?;
            if let Some(intent) = intent {
                controller.handle_intent(state, intent)?;
            }
        }
        Ok(())
    }
}

/// Übersetzt eine Skriptzeile in einen Intent (Leerzeilen und `#`-Kommentare → None).
fn parse_script_line(line: &str) -> anyhow::Result<Option<AppIntent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default();
    let numbers = parts
        .map(|p| p.parse::<f32>().with_context(|| format!("keine Zahl: {p}")))
        .collect::<anyhow::Result<Vec<f32>>>()?;

    let intent = match (keyword, numbers.as_slice()) {
        ("resize", &[width, height]) => AppIntent::CanvasResized { width, height },
        ("down", &[x, y]) => AppIntent::PointerPressed {
            pos: Vec2::new(x, y),
        },
        ("move", &[x, y]) => AppIntent::PointerMoved {
            pos: Vec2::new(x, y),
        },
        ("up", &[]) => AppIntent::PointerReleased,
        ("reset", &[]) => AppIntent::ResetCurveRequested,
        _ => anyhow::bail!("unbekannter Befehl"),
    };
    Ok(Some(intent))
}
