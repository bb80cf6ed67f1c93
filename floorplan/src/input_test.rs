use super::*;
use crate::shapes::{ShapeKind, build_shape};

// =============================================================
// Step
// =============================================================

#[test]
fn step_default_is_layouts() {
    assert_eq!(Step::default(), Step::Layouts);
}

#[test]
fn step_next_walks_workflow_and_stops() {
    let mut step = Step::Layouts;
    let mut seen = vec![step];
    for _ in 0..6 {
        step = step.next();
        seen.push(step);
    }
    assert_eq!(&seen[..5], &Step::ALL);
    assert_eq!(step, Step::Colors);
}

#[test]
fn step_prev_stops_at_first() {
    assert_eq!(Step::Patterns.prev(), Step::Layouts);
    assert_eq!(Step::Layouts.prev(), Step::Layouts);
    assert_eq!(Step::Colors.prev(), Step::Edges);
}

#[test]
fn step_gates_interactions() {
    assert!(Step::Layouts.allows_reshape());
    assert!(!Step::Patterns.allows_reshape());
    assert!(Step::Colors.allows_paint());
    assert!(!Step::Edges.allows_paint());
}

#[test]
fn step_ids_round_trip() {
    for step in Step::ALL {
        assert_eq!(step.id().parse::<Step>().unwrap(), step);
    }
    assert!("sidebar".parse::<Step>().is_err());
}

#[test]
fn step_serializes_as_sidebar_id() {
    assert_eq!(serde_json::to_string(&Step::TileTypes).unwrap(), "\"tileTypes\"");
}

// =============================================================
// Handle
// =============================================================

#[test]
fn handle_serializes_with_kind_and_index() {
    let json = serde_json::to_value(Handle::Segment(3)).unwrap();
    assert_eq!(json["kind"], "segment");
    assert_eq!(json["index"], 3);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.step, Step::Layouts);
    assert_eq!(ui.paint_color, "#ff0000");
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert_eq!(InputState::default().active_handle(), None);
}

#[test]
fn begin_snapshots_polygon() {
    let mut poly = build_shape(ShapeKind::Rectangle, 100.0, 100.0, 0.0, 0.0);
    let state = InputState::begin(Handle::Vertex(2), Point::new(1.0, 2.0), &poly);
    poly.set_vertex(2, Point::new(500.0, 500.0));

    let InputState::DraggingVertex { index, start_display, baseline } = state else {
        panic!("expected vertex drag");
    };
    assert_eq!(index, 2);
    assert_eq!(start_display, Point::new(1.0, 2.0));
    assert_eq!(baseline.vertices[2], Point::new(100.0, 100.0));
}

#[test]
fn begin_segment_reports_handle() {
    let poly = build_shape(ShapeKind::LShape, 100.0, 100.0, 0.0, 0.0);
    let state = InputState::begin(Handle::Segment(4), Point::default(), &poly);
    assert!(!state.is_idle());
    assert_eq!(state.active_handle(), Some(Handle::Segment(4)));
}
