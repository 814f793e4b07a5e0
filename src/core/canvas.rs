//! Canvas-Geometrie: editierbarer Bereich und Umrechnung Pixel ↔ Wert.

use super::sampler::SampleParams;
use glam::Vec2;

/// Pixelgrenzen des editierbaren Bereichs und Raster der Ausgabe.
///
/// Wird vom Host pro Aufruf geliefert und kann sich (z.B. bei Resize)
/// zwischen zwei Aufrufen ändern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Breite des editierbaren Bereichs in Pixeln
    pub domain_width: f32,
    /// Höhe des editierbaren Bereichs in Pixeln
    pub domain_height: f32,
    /// Anzahl der Ausgabewerte (≥ 2)
    pub output_length: usize,
    /// Wertebereich, den die Höhe abdeckt (Canvas-Oberkante = `value_range`)
    pub value_range: f32,
}

impl CanvasGeometry {
    pub fn new(domain_width: f32, domain_height: f32, output_length: usize, value_range: f32) -> Self {
        Self {
            domain_width,
            domain_height,
            output_length,
            value_range,
        }
    }

    /// Breite einer Ausgabe-Spalte.
    pub fn cell_width(&self) -> f32 {
        self.domain_width / self.output_length.max(1) as f32
    }

    /// Vertikale Pixel pro Werteinheit.
    pub fn step_height(&self) -> f32 {
        if self.value_range > 0.0 {
            self.domain_height / self.value_range
        } else {
            self.domain_height.max(1.0)
        }
    }

    /// Y der Mittellinie (Startlage der Standardkurve).
    pub fn center_y(&self) -> f32 {
        self.domain_height / 2.0
    }

    /// Rohwert (unquantisiert) an einer Y-Position. Y ist gegenüber dem Wert invertiert.
    pub fn raw_value_at(&self, y: f32) -> f32 {
        (self.domain_height - y) / self.step_height()
    }

    /// Klemmt eine Position auf den editierbaren Bereich.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, self.domain_width.max(0.0)),
            pos.y.clamp(0.0, self.domain_height.max(0.0)),
        )
    }

    /// Parameter-Bundle für den Sampler.
    pub fn sample_params(&self, tolerance: f32, default_value: f32) -> SampleParams {
        SampleParams {
            output_length: self.output_length,
            cell_width: self.cell_width(),
            domain_height: self.domain_height,
            step_height: self.step_height(),
            tolerance,
            default_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abgeleitete_groessen() {
        let canvas = CanvasGeometry::new(300.0, 100.0, 10, 10.0);
        assert_eq!(canvas.cell_width(), 30.0);
        assert_eq!(canvas.step_height(), 10.0);
        assert_eq!(canvas.center_y(), 50.0);
        assert_eq!(canvas.raw_value_at(50.0), 5.0);
        assert_eq!(canvas.raw_value_at(0.0), 10.0);
    }

    #[test]
    fn test_clamp_auf_canvas() {
        let canvas = CanvasGeometry::new(300.0, 100.0, 10, 10.0);
        assert_eq!(canvas.clamp(Vec2::new(-5.0, 120.0)), Vec2::new(0.0, 100.0));
        assert_eq!(canvas.clamp(Vec2::new(400.0, -1.0)), Vec2::new(300.0, 0.0));
        assert_eq!(canvas.clamp(Vec2::new(12.0, 34.0)), Vec2::new(12.0, 34.0));
    }
}
