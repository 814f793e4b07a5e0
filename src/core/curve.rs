//! Kurvenmodell: geordnete Anker und ein Steuerpunkt-Paar pro Segment.

use super::bezier::{closest_point_on_segment, CubicSegment};
use glam::Vec2;

/// Mindest-Abstand² (Pixel²) eines neuen Ankers zu seinen Nachbarn.
pub const MIN_ANCHOR_DISTANCE_SQUARED: f32 = 1.0;

/// Welcher Steuerpunkt eines Paars gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    One,
    Two,
}

/// Steuerpunkt-Paar eines Segments (Anker i → Anker i+1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Steuerpunkt am Segmentanfang
    pub cp1: Vec2,
    /// Steuerpunkt am Segmentende
    pub cp2: Vec2,
}

impl ControlPair {
    pub fn new(cp1: Vec2, cp2: Vec2) -> Self {
        Self { cp1, cp2 }
    }

    /// Position des gewählten Steuerpunkts.
    pub fn get(&self, handle: Handle) -> Vec2 {
        match handle {
            Handle::One => self.cp1,
            Handle::Two => self.cp2,
        }
    }

    /// Mutable Referenz auf den gewählten Steuerpunkt.
    pub fn get_mut(&mut self, handle: Handle) -> &mut Vec2 {
        match handle {
            Handle::One => &mut self.cp1,
            Handle::Two => &mut self.cp2,
        }
    }
}

/// Grund, warum ein Einfügeversuch nichts verändert hat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertRejection {
    /// Kein Segment innerhalb der Toleranz
    NoSegmentInRange,
    /// Teilpunkt fällt (fast) auf einen bestehenden Anker
    TooCloseToAnchor { segment: usize },
}

/// Stückweise kubische Bézier-Kurve im Pixelraum des Canvas.
///
/// Invariante: `controls.len() == anchors.len() - 1` (bei mindestens einem Anker).
/// Die Anker sind nach aufsteigendem X geordnet; erzwungen wird das nicht,
/// der Sampler setzt es aber voraus.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    anchors: Vec<Vec2>,
    controls: Vec<ControlPair>,
}

impl Curve {
    /// Erstellt die flache Standardkurve für die gegebene Canvas-Größe.
    pub fn new(domain_width: f32, domain_height: f32) -> Self {
        let mut curve = Self::default();
        curve.initialize(domain_width, domain_height);
        curve
    }

    /// Baut eine Kurve aus vorhandenen Punkten (z.B. für Tests oder Host-Presets).
    ///
    /// Gibt `None` zurück, wenn die Paar-Anzahl nicht zur Anker-Anzahl passt.
    pub fn from_parts(anchors: Vec<Vec2>, controls: Vec<ControlPair>) -> Option<Self> {
        let consistent = if anchors.is_empty() {
            controls.is_empty()
        } else {
            controls.len() == anchors.len() - 1
        };
        consistent.then_some(Self { anchors, controls })
    }

    /// Setzt die Kurve vollständig zurück: zwei Anker auf der Mittellinie,
    /// Steuerpunkte bei einem und zwei Dritteln der Breite.
    pub fn initialize(&mut self, domain_width: f32, domain_height: f32) {
        let mid_y = domain_height / 2.0;
        self.anchors = vec![Vec2::new(0.0, mid_y), Vec2::new(domain_width, mid_y)];
        self.controls = vec![ControlPair::new(
            Vec2::new(domain_width / 3.0, mid_y),
            Vec2::new(2.0 * domain_width / 3.0, mid_y),
        )];
    }

    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    pub fn controls(&self) -> &[ControlPair] {
        &self.controls
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn segment_count(&self) -> usize {
        self.controls.len()
    }

    /// Segment `index` als vollständiges 4-Punkt-Segment.
    pub fn segment(&self, index: usize) -> Option<CubicSegment> {
        let pair = self.controls.get(index)?;
        let start = *self.anchors.get(index)?;
        let end = *self.anchors.get(index + 1)?;
        Some(CubicSegment::new(start, pair.cp1, pair.cp2, end))
    }

    /// Iteriert über alle Segmente in Reihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        (0..self.segment_count()).filter_map(move |i| self.segment(i))
    }

    /// True für den ersten und letzten Anker (X fixiert).
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.anchors.len()
    }

    pub(crate) fn control_mut(&mut self, index: usize) -> Option<&mut ControlPair> {
        self.controls.get_mut(index)
    }

    /// Verschiebt Anker `index` auf `new_pos` und zieht die angrenzenden
    /// Steuerpunkte (cp2 des vorherigen, cp1 des nächsten Segments) um dasselbe
    /// Delta mit. Die jeweils anderen Steuerpunkte bleiben unverändert.
    pub fn move_anchor(&mut self, index: usize, new_pos: Vec2) {
        let Some(anchor) = self.anchors.get_mut(index) else {
            return;
        };
        let delta = new_pos - *anchor;
        *anchor = new_pos;

        if index > 0 {
            if let Some(prev) = self.controls.get_mut(index - 1) {
                prev.cp2 += delta;
            }
        }
        if let Some(next) = self.controls.get_mut(index) {
            next.cp1 += delta;
        }
    }

    /// Sucht das Segment mit dem global nächsten Abtastpunkt zu `position`.
    ///
    /// Liefert `(segment_index, t)`, wenn der Abstand höchstens `hit_tolerance` beträgt.
    pub fn nearest_segment(
        &self,
        position: Vec2,
        hit_tolerance: f32,
        steps: usize,
    ) -> Option<(usize, f32)> {
        let max_distance_squared = hit_tolerance * hit_tolerance;
        let mut best: Option<(usize, f32, f32)> = None;

        for (index, seg) in self.segments().enumerate() {
            let hit = closest_point_on_segment(position, seg.p0, seg.p1, seg.p2, seg.p3, steps);
            if hit.distance_squared > max_distance_squared {
                continue;
            }
            if best.is_none_or(|(_, _, d)| hit.distance_squared < d) {
                best = Some((index, hit.t, hit.distance_squared));
            }
        }

        best.map(|(index, t, _)| (index, t))
    }

    /// Fügt einen Anker auf dem nächstgelegenen Segment ein.
    ///
    /// Das Segment wird bei `t` geteilt: neuer Anker am Teilpunkt, zwei neue
    /// Steuerpunkt-Paare ersetzen das alte. Gibt den Index des neuen Ankers zurück.
    pub fn insert_anchor(
        &mut self,
        position: Vec2,
        hit_tolerance: f32,
        steps: usize,
    ) -> Result<usize, InsertRejection> {
        let (segment, t) = self
            .nearest_segment(position, hit_tolerance, steps)
            .ok_or(InsertRejection::NoSegmentInRange)?;
        let seg = self
            .segment(segment)
            .ok_or(InsertRejection::NoSegmentInRange)?;

        let (left, right) = seg.split_at(t);
        let split_point = left.p3;
        if split_point.distance_squared(seg.p0) < MIN_ANCHOR_DISTANCE_SQUARED
            || split_point.distance_squared(seg.p3) < MIN_ANCHOR_DISTANCE_SQUARED
        {
            return Err(InsertRejection::TooCloseToAnchor { segment });
        }

        let new_index = segment + 1;
        self.anchors.insert(new_index, split_point);
        self.controls[segment] = ControlPair::new(left.p1, left.p2);
        self.controls
            .insert(new_index, ControlPair::new(right.p1, right.p2));

        Ok(new_index)
    }
}

#[cfg(test)]
mod tests;
