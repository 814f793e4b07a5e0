//! Bézier-Mathematik: Auswertung, De-Casteljau-Teilung, Y-für-X-Bisektion
//! und Nächster-Punkt-Suche für kubische Segmente.

use glam::Vec2;

/// Standard-Toleranz (Pixel) für [`solve_y_for_x`].
pub const SOLVE_TOLERANCE: f32 = 0.01;
/// Maximale Bisektions-Iterationen in [`solve_y_for_x`].
pub const SOLVE_MAX_ITERATIONS: usize = 100;
/// Standard-Unterteilung für [`closest_point_on_segment`].
pub const CLOSEST_POINT_STEPS: usize = 30;

/// Vollständiges kubisches Segment (4 Punkte).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicSegment {
    /// Erstellt ein Segment aus Anker, beiden Steuerpunkten und End-Anker.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Position bei Parameter `t` (siehe [`evaluate`]).
    pub fn point_at(&self, t: f32) -> Vec2 {
        evaluate(t, self.p0, self.p1, self.p2, self.p3)
    }

    /// Teilt das Segment bei `t` (siehe [`split`]).
    pub fn split_at(&self, t: f32) -> (CubicSegment, CubicSegment) {
        split(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Kleinste und größte X-Koordinate der beiden Endpunkte.
    pub fn x_extent(&self) -> (f32, f32) {
        (self.p0.x.min(self.p3.x), self.p0.x.max(self.p3.x))
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird nicht geklemmt: Werte außerhalb von [0, 1] extrapolieren.
pub fn evaluate(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Teilt ein kubisches Segment bei `t` nach De Casteljau.
///
/// Beide Hälften sind exakt (keine Neuabtastung). Der gemeinsame Punkt ist
/// `evaluate(t, ..)`: Endpunkt der ersten und Startpunkt der zweiten Hälfte.
pub fn split(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> (CubicSegment, CubicSegment) {
    let p01 = p0.lerp(p1, t);
    let p12 = p1.lerp(p2, t);
    let p23 = p2.lerp(p3, t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let mid = p012.lerp(p123, t);

    (
        CubicSegment::new(p0, p01, p012, mid),
        CubicSegment::new(mid, p123, p23, p3),
    )
}

/// Bestimmt Y an der Stelle `x` per Bisektion über `t`.
///
/// Setzt voraus, dass X entlang des Segments monoton verläuft (gilt solange
/// die Anker aufsteigende X-Werte haben). Die Schrittrichtung richtet sich nur
/// nach `p3.x > p0.x`; ein S-förmiger X-Verlauf innerhalb eines Segments
/// liefert lediglich eine Näherung.
///
/// Liegt `x` innerhalb der Toleranz an (oder jenseits) einem Endpunkt, wird
/// dessen Y direkt zurückgegeben.
pub fn solve_y_for_x(x: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, tolerance: f32) -> f32 {
    let ascending = p3.x > p0.x;

    if ascending {
        if x <= p0.x + tolerance {
            return p0.y;
        }
        if x >= p3.x - tolerance {
            return p3.y;
        }
    } else {
        if x >= p0.x - tolerance {
            return p0.y;
        }
        if x <= p3.x + tolerance {
            return p3.y;
        }
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..SOLVE_MAX_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        let point = evaluate(mid, p0, p1, p2, p3);
        if (point.x - x).abs() < tolerance {
            return point.y;
        }
        let before_target = if ascending { point.x < x } else { point.x > x };
        if before_target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    evaluate((lo + hi) * 0.5, p0, p1, p2, p3).y
}

/// Ergebnis von [`closest_point_on_segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// Kurvenparameter des besten Abtastpunkts
    pub t: f32,
    /// Quadrierter Abstand zum Suchpunkt
    pub distance_squared: f32,
}

/// Nächster Abtastpunkt des Segments zu `p` (gleichmäßige Abtastung, nicht adaptiv).
///
/// Geprüft werden `t = i / steps` für `i = 0..=steps`. Nur für die
/// Trefferprüfung beim Einfügen gedacht, keine exakte Projektion.
pub fn closest_point_on_segment(
    p: Vec2,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    steps: usize,
) -> ClosestPoint {
    let steps = steps.max(1);
    let mut best = ClosestPoint {
        t: 0.0,
        distance_squared: p.distance_squared(p0),
    };
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let distance_squared = p.distance_squared(evaluate(t, p0, p1, p2, p3));
        if distance_squared < best.distance_squared {
            best = ClosestPoint {
                t,
                distance_squared,
            };
        }
    }
    best
}
