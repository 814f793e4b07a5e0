//! Application Controller für zentrale Event-Verarbeitung.

use super::host::HostCallbacks;
use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{format_output, Quantizer, RenderScene};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
///
/// Nach jedem Intent wird synchron nachgezogen: geänderte Kurve → Neuabtastung
/// → Ausgabe-Callback → Render-Callback.
#[derive(Default)]
pub struct AppController {
    host: HostCallbacks,
}

impl AppController {
    /// Erstellt einen Controller ohne Host-Callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit den Callbacks des Hosts.
    pub fn with_host(host: HostCallbacks) -> Self {
        Self { host }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        self.refresh(state);

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::InitializeCurve { width, height } => {
                handlers::curve::initialize(state, width, height)
            }
            AppCommand::InsertAnchor { pos } => handlers::curve::insert_anchor(state, pos),
            AppCommand::Resample => state.mark_curve_changed(),

            // === Drag ===
            AppCommand::BeginDrag { pos } => handlers::drag::begin(state, pos),
            AppCommand::UpdateDrag { pos } => handlers::drag::update(state, pos),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options)?,
            AppCommand::SaveOptions { path } => handlers::options::save(state, path)?,
        }

        Ok(())
    }

    /// Tastet bei Bedarf neu ab und benachrichtigt den Host.
    ///
    /// Wird nach jedem Intent automatisch aufgerufen; Hosts, die Commands
    /// direkt ausführen, rufen es selbst auf.
    pub fn refresh(&mut self, state: &mut AppState) {
        if state.needs_resample {
            match self.host.quantize.as_deref() {
                Some(quantize) => use_cases::sampling::resample(state, quantize),
                None => {
                    let quantizer = Quantizer::new(state.options.quantize);
                    use_cases::sampling::resample(state, &|raw| quantizer.apply(raw));
                }
            }
            if let Some(on_output) = self.host.on_output.as_mut() {
                let text = format_output(&state.output, &state.options.output_format);
                on_output(&state.output, &text);
            }
        }

        if state.needs_redraw {
            state.needs_redraw = false;
            if let Some(on_render) = self.host.on_render.as_mut() {
                on_render(&render_scene::build(state));
            }
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
