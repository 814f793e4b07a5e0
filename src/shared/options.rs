//! Zentrale Konfiguration für den Bezier-Wave-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::bezier::{CLOSEST_POINT_STEPS, SOLVE_TOLERANCE};
use serde::{Deserialize, Serialize};

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Standard-Länge des Ausgabe-Arrays.
pub const OUTPUT_LENGTH: usize = 32;
/// Wertebereich über die volle Canvas-Höhe (4-Bit-Wavetable: 0..=15).
pub const VALUE_RANGE: f32 = 15.0;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Breite des editierbaren Bereichs (Pixel).
pub const CANVAS_WIDTH: f32 = 512.0;
/// Standard-Höhe des editierbaren Bereichs (Pixel).
pub const CANVAS_HEIGHT: f32 = 256.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Kantenlänge des quadratischen Anker-Markers (Pixel).
pub const ANCHOR_SIZE_PX: f32 = 8.0;
/// Zusätzlicher Trefferabstand um Anker und Steuerpunkte (Pixel).
pub const HIT_THRESHOLD_PX: f32 = 6.0;
/// Maximaler Abstand eines Klicks zur Kurve, um einen Anker einzufügen (Pixel).
pub const INSERT_TOLERANCE_PX: f32 = 10.0;

// ── Quantisierung ───────────────────────────────────────────────────

/// Rundungsart für Rohwerte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantizeMode {
    /// Auf nächste Ganzzahl runden
    #[default]
    Round,
    /// Abrunden
    Floor,
    /// Aufrunden
    Ceil,
    /// Rohwert unverändert lassen (nur klemmen)
    None,
}

/// Quantisierung der Ausgabewerte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizeOptions {
    pub mode: QuantizeMode,
    /// Kleinster erlaubter Ausgabewert
    pub min: f32,
    /// Größter erlaubter Ausgabewert
    pub max: f32,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            mode: QuantizeMode::Round,
            min: 0.0,
            max: VALUE_RANGE,
        }
    }
}

// ── Textausgabe ─────────────────────────────────────────────────────

/// Formatierung der veröffentlichten Werte-Liste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormat {
    /// Trennzeichen zwischen den Werten
    pub separator: String,
    /// Ganzzahlige Werte als Hex-Ziffern ausgeben (Wavetable-Schreibweise)
    #[serde(default)]
    pub hex: bool,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            hex: false,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_wave_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Ausgabe ─────────────────────────────────────────────────
    /// Länge des Ausgabe-Arrays
    pub output_length: usize,
    /// Wertebereich über die volle Canvas-Höhe
    pub value_range: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Kantenlänge der Anker-Marker in Pixeln
    pub anchor_size_px: f32,
    /// Trefferabstand für Anker und Steuerpunkte in Pixeln
    pub hit_threshold_px: f32,
    /// Maximaler Klickabstand zur Kurve für das Einfügen eines Ankers
    pub insert_tolerance_px: f32,

    // ── Abtastung ───────────────────────────────────────────────
    /// X-Toleranz der Y-für-X-Bisektion (Pixel)
    #[serde(default = "default_solve_tolerance")]
    pub solve_tolerance: f32,
    /// Unterteilung bei der Nächster-Punkt-Suche
    #[serde(default = "default_closest_point_steps")]
    pub closest_point_steps: usize,

    // ── Werte ───────────────────────────────────────────────────
    #[serde(default)]
    pub quantize: QuantizeOptions,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            output_length: OUTPUT_LENGTH,
            value_range: VALUE_RANGE,

            anchor_size_px: ANCHOR_SIZE_PX,
            hit_threshold_px: HIT_THRESHOLD_PX,
            insert_tolerance_px: INSERT_TOLERANCE_PX,

            solve_tolerance: SOLVE_TOLERANCE,
            closest_point_steps: CLOSEST_POINT_STEPS,

            quantize: QuantizeOptions::default(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Serde-Default für `solve_tolerance` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_solve_tolerance() -> f32 {
    SOLVE_TOLERANCE
}

/// Serde-Default für `closest_point_steps`.
fn default_closest_point_steps() -> usize {
    CLOSEST_POINT_STEPS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_wave_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_wave_editor.toml")
    }

    /// Prüft alle Zahlenwerte, die in Abtastung oder Quantisierung eingehen.
    ///
    /// NaN und Unendlich werden abgelehnt, ebenso ein nicht positiver
    /// Wertebereich oder eine nicht positive Bisektions-Toleranz.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.value_range.is_finite() && self.value_range > 0.0) {
            anyhow::bail!("value_range muss positiv sein (ist {})", self.value_range);
        }
        if !(self.solve_tolerance.is_finite() && self.solve_tolerance > 0.0) {
            anyhow::bail!("solve_tolerance muss positiv sein (ist {})", self.solve_tolerance);
        }
        let finite = [
            ("quantize.min", self.quantize.min),
            ("quantize.max", self.quantize.max),
            ("anchor_size_px", self.anchor_size_px),
            ("hit_threshold_px", self.hit_threshold_px),
            ("insert_tolerance_px", self.insert_tolerance_px),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            anyhow::bail!("{} muss endlich sein (ist {})", name, value);
        }
        Ok(())
    }

    /// Ausgabelänge, auf das erlaubte Minimum (2) angehoben.
    pub fn effective_output_length(&self) -> usize {
        self.output_length.max(2)
    }
}
