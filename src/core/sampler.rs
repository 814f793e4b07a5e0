//! Abtastung der Kurve zu einem Wertearray fester Länge (Wellenform).

use super::bezier::solve_y_for_x;
use super::curve::Curve;
use glam::Vec2;

/// Geometrie-Parameter einer Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParams {
    /// Anzahl der Ausgabewerte
    pub output_length: usize,
    /// Breite einer Ausgabe-Spalte in Pixeln
    pub cell_width: f32,
    /// Höhe des editierbaren Bereichs in Pixeln
    pub domain_height: f32,
    /// Pixel pro Werteinheit (vertikal)
    pub step_height: f32,
    /// X-Toleranz für Bisektion und Segment-Grenzen
    pub tolerance: f32,
    /// Ersatzwert für alle Spalten, falls die Kurve weniger als zwei Anker hat
    pub default_value: f32,
}

/// Monotoner Segment-Cursor über die X-Koordinaten der Anker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SegmentCursor {
    index: usize,
}

impl SegmentCursor {
    /// Liefert den Segmentindex für `target_x`.
    ///
    /// Liegt `target_x` vor dem Anfang des aktuellen Segments, beginnt die
    /// Suche wieder bei Segment 0. Danach wird vorgerückt, solange `target_x`
    /// hinter dem Segmentende liegt; das letzte Segment ist die Obergrenze.
    fn seek(&mut self, anchors: &[Vec2], target_x: f32) -> usize {
        let last_segment = anchors.len().saturating_sub(2);
        if self.index > 0 && anchors.get(self.index).is_some_and(|a| target_x < a.x) {
            self.index = 0;
        }
        while self.index < last_segment && target_x > anchors[self.index + 1].x {
            self.index += 1;
        }
        self.index = self.index.min(last_segment);
        self.index
    }
}

/// Tastet `curve` spaltenmittig ab und quantisiert jeden Rohwert mit `quantize`.
///
/// Spalte `i` liegt bei `x = (i + 0.5) * cell_width`. Der Segment-Cursor
/// läuft monoton mit: bei aufsteigendem X wird er nur vorgerückt, bei einem
/// Rücksprung vor den Segmentanfang beginnt die Suche wieder bei Segment 0.
/// Insgesamt also ein linearer Durchlauf statt einer Suche pro Spalte.
///
/// Rohwert: `(domain_height - y) / step_height` (Canvas-Oberkante = Maximalwert).
pub fn sample(curve: &Curve, params: &SampleParams, quantize: impl Fn(f32) -> f32) -> Vec<f32> {
    let anchors = curve.anchors();
    if anchors.len() < 2 || curve.segment_count() == 0 {
        log::warn!(
            "Kurve hat nur {} Anker, Ausgabe wird mit {} gefüllt",
            anchors.len(),
            params.default_value
        );
        return vec![params.default_value; params.output_length];
    }

    let tol = params.tolerance;
    let mut cursor = SegmentCursor::default();
    let mut values = Vec::with_capacity(params.output_length);

    for i in 0..params.output_length {
        let target_x = (i as f32 + 0.5) * params.cell_width;

        let Some(seg) = curve.segment(cursor.seek(anchors, target_x)) else {
            values.push(params.default_value);
            continue;
        };
        let (min_x, max_x) = seg.x_extent();

        let y = if (seg.p0.x - seg.p3.x).abs() < tol {
            // Quasi-senkrechtes Segment
            if (target_x - seg.p0.x).abs() <= params.cell_width / 2.0 {
                (seg.p0.y + seg.p3.y) / 2.0
            } else if target_x < seg.p0.x {
                seg.p0.y
            } else {
                seg.p3.y
            }
        } else if target_x >= min_x - tol && target_x <= max_x + tol {
            solve_y_for_x(target_x, seg.p0, seg.p1, seg.p2, seg.p3, tol)
        } else if target_x < min_x {
            if seg.p0.x <= seg.p3.x {
                seg.p0.y
            } else {
                seg.p3.y
            }
        } else if seg.p0.x >= seg.p3.x {
            seg.p0.y
        } else {
            seg.p3.y
        };

        let raw = (params.domain_height - y) / params.step_height;
        values.push(quantize(raw));
    }

    values
}
