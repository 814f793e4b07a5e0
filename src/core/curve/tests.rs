use super::*;
use crate::core::bezier::CLOSEST_POINT_STEPS;
use approx::assert_relative_eq;

fn default_curve() -> Curve {
    Curve::new(300.0, 100.0)
}

// ── Initialisierung ──

#[test]
fn test_initialize_flache_standardkurve() {
    let curve = default_curve();
    assert_eq!(
        curve.anchors(),
        &[Vec2::new(0.0, 50.0), Vec2::new(300.0, 50.0)]
    );
    assert_eq!(curve.controls().len(), 1);
    assert_relative_eq!(curve.controls()[0].cp1.x, 100.0);
    assert_relative_eq!(curve.controls()[0].cp2.x, 200.0);
    assert_eq!(curve.controls()[0].cp1.y, 50.0);
    assert_eq!(curve.controls()[0].cp2.y, 50.0);
}

#[test]
fn test_initialize_verwirft_vorherigen_zustand() {
    let mut curve = default_curve();
    curve
        .insert_anchor(Vec2::new(150.0, 50.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("Einfügen auf der Kurve muss gelingen");
    assert_eq!(curve.anchor_count(), 3);

    curve.initialize(600.0, 200.0);
    assert_eq!(curve.anchor_count(), 2);
    assert_eq!(curve.segment_count(), 1);
    assert_eq!(curve.anchors()[1], Vec2::new(600.0, 100.0));
}

#[test]
fn test_from_parts_prueft_invariante() {
    let anchors = vec![Vec2::ZERO, Vec2::new(10.0, 0.0)];
    assert!(Curve::from_parts(anchors.clone(), vec![]).is_none());
    let pair = ControlPair::new(Vec2::new(3.0, 0.0), Vec2::new(7.0, 0.0));
    assert!(Curve::from_parts(anchors, vec![pair]).is_some());
    assert!(Curve::from_parts(vec![], vec![]).is_some());
}

// ── Einfügen ──

#[test]
fn test_insert_anchor_in_der_mitte() {
    let mut curve = default_curve();
    let index = curve
        .insert_anchor(Vec2::new(150.0, 50.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("Einfügen muss gelingen");

    assert_eq!(index, 1);
    assert_eq!(curve.anchor_count(), 3);
    assert_eq!(curve.segment_count(), 2);
    assert!((curve.anchors()[1] - Vec2::new(150.0, 50.0)).length() < 1e-3);
    // Teilung der gleichmäßigen Geraden: Steuerpunkte auf Sechsteln
    assert!((curve.controls()[0].cp1 - Vec2::new(50.0, 50.0)).length() < 1e-3);
    assert!((curve.controls()[0].cp2 - Vec2::new(100.0, 50.0)).length() < 1e-3);
    assert!((curve.controls()[1].cp1 - Vec2::new(200.0, 50.0)).length() < 1e-3);
    assert!((curve.controls()[1].cp2 - Vec2::new(250.0, 50.0)).length() < 1e-3);
}

#[test]
fn test_insert_anchor_ausserhalb_toleranz_ist_noop() {
    let mut curve = default_curve();
    let before = curve.clone();
    let result = curve.insert_anchor(Vec2::new(150.0, 90.0), 10.0, CLOSEST_POINT_STEPS);
    assert_eq!(result, Err(InsertRejection::NoSegmentInRange));
    assert_eq!(curve, before);
}

#[test]
fn test_insert_anchor_zu_nah_am_endpunkt_wird_abgelehnt() {
    let mut curve = default_curve();
    let before = curve.clone();
    let result = curve.insert_anchor(Vec2::new(1.0, 50.0), 10.0, CLOSEST_POINT_STEPS);
    assert_eq!(result, Err(InsertRejection::TooCloseToAnchor { segment: 0 }));
    assert_eq!(curve, before);

    let result = curve.insert_anchor(Vec2::new(299.5, 50.0), 10.0, CLOSEST_POINT_STEPS);
    assert_eq!(result, Err(InsertRejection::TooCloseToAnchor { segment: 0 }));
    assert_eq!(curve, before);
}

#[test]
fn test_insert_anchor_waehlt_globales_minimum() {
    let mut curve = default_curve();
    curve
        .insert_anchor(Vec2::new(150.0, 50.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("erstes Einfügen");
    let index = curve
        .insert_anchor(Vec2::new(75.0, 55.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("zweites Einfügen");

    assert_eq!(index, 1);
    assert_eq!(curve.anchor_count(), 4);
    assert_eq!(curve.segment_count(), 3);
    assert!((curve.anchors()[1] - Vec2::new(75.0, 50.0)).length() < 1e-3);
    let xs: Vec<f32> = curve.anchors().iter().map(|a| a.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]), "Anker aufsteigend: {xs:?}");
}

#[test]
fn test_insert_anchor_erhaelt_kurvenform() {
    let anchors = vec![Vec2::new(0.0, 80.0), Vec2::new(200.0, 20.0)];
    let pair = ControlPair::new(Vec2::new(60.0, 0.0), Vec2::new(140.0, 100.0));
    let mut curve = Curve::from_parts(anchors, vec![pair]).expect("gültige Kurve");
    let original = curve.segment(0).expect("Segment 0");

    let on_curve = original.point_at(0.4);
    curve
        .insert_anchor(on_curve, 5.0, CLOSEST_POINT_STEPS)
        .expect("Punkt liegt auf der Kurve");

    let left = curve.segment(0).expect("linke Hälfte");
    let right = curve.segment(1).expect("rechte Hälfte");
    assert_eq!(left.p3, right.p0);
    assert!((left.point_at(0.5) - original.point_at(0.2)).length() < 1e-2);
}

// ── Anker verschieben ──

#[test]
fn test_move_anchor_zieht_angrenzende_steuerpunkte_mit() {
    let mut curve = default_curve();
    curve
        .insert_anchor(Vec2::new(150.0, 50.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("Einfügen");
    let before = curve.clone();

    curve.move_anchor(1, Vec2::new(160.0, 20.0));
    let delta = Vec2::new(10.0, -30.0);

    assert_eq!(curve.controls()[0].cp2, before.controls()[0].cp2 + delta);
    assert_eq!(curve.controls()[1].cp1, before.controls()[1].cp1 + delta);
    assert_eq!(curve.controls()[0].cp1, before.controls()[0].cp1);
    assert_eq!(curve.controls()[1].cp2, before.controls()[1].cp2);
}

#[test]
fn test_move_anchor_ungueltiger_index_ist_noop() {
    let mut curve = default_curve();
    let before = curve.clone();
    curve.move_anchor(7, Vec2::new(1.0, 1.0));
    assert_eq!(curve, before);
}

#[test]
fn test_is_endpoint() {
    let mut curve = default_curve();
    curve
        .insert_anchor(Vec2::new(150.0, 50.0), 10.0, CLOSEST_POINT_STEPS)
        .expect("Einfügen");
    assert!(curve.is_endpoint(0));
    assert!(!curve.is_endpoint(1));
    assert!(curve.is_endpoint(2));
}
