use super::helpers::*;

use ombre::prelude::*;

#[test]
fn default_gradient_matches_reference_string() {
    let editor = GradientEditor::default();
    assert_eq!(editor.css(), DEFAULT_CSS);
    assert_eq!(editor.compute_gradient_css(), DEFAULT_CSS);
}

#[test]
fn stops_are_sorted_regardless_of_insertion_order() {
    let state = GradientState::new(
        vec![
            ColorStop::new(80.0, "#bbe1fa"),
            ColorStop::new(20.0, "#4a154b"),
            ColorStop::new(60.0, "#3282b8"),
            ColorStop::new(40.0, "#2d1b69"),
        ],
        45.0,
    );
    assert_eq!(state.to_css(), DEFAULT_CSS);
}

#[test]
fn equal_positions_keep_insertion_order() {
    let state = GradientState::new(
        vec![
            ColorStop::new(50.0, "#aaaaaa"),
            ColorStop::new(50.0, "#bbbbbb"),
            ColorStop::new(10.0, "#cccccc"),
        ],
        90.0,
    );
    assert_eq!(
        state.to_css(),
        "linear-gradient(90deg, #cccccc 10%, #aaaaaa 50%, #bbbbbb 50%)"
    );
}

#[test]
fn one_segment_per_stop_in_ascending_order() {
    let state = GradientState::new(
        vec![
            ColorStop::new(70.0, "#111111"),
            ColorStop::new(5.0, "#222222"),
            ColorStop::new(70.0, "#333333"),
            ColorStop::new(35.5, "#444444"),
            ColorStop::new(100.0, "#555555"),
        ],
        45.0,
    );
    let css = state.to_css();
    let body = css
        .strip_prefix("linear-gradient(45deg, ")
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("css should be wrapped in linear-gradient");

    let segments: Vec<&str> = body.split(", ").collect();
    assert_eq!(segments.len(), state.len());

    let positions: Vec<f32> = segments
        .iter()
        .map(|segment| {
            let (_, pct) = segment.split_once(' ').expect("segment has a position");
            pct.trim_end_matches('%').parse().expect("numeric position")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn render_is_idempotent() {
    let mut editor = GradientEditor::default();
    editor.render();
    let first = editor.css().to_string();
    editor.render();
    assert_eq!(editor.css(), first);
    assert_eq!(editor.markers().len(), 4);
}

#[test]
fn render_projects_markers_in_collection_order() {
    let state = GradientState::new(
        vec![ColorStop::new(90.0, "#ffffff"), ColorStop::new(10.0, "#000000")],
        45.0,
    );
    let editor = GradientEditor::new(state, Palette::default());
    let markers = editor.markers();
    assert_eq!(markers[0].index, 0);
    assert_eq!(markers[0].left_percent, 90.0);
    assert_eq!(markers[1].index, 1);
    assert_eq!(markers[1].left_percent, 10.0);
    assert!(markers.iter().all(|marker| !marker.dragging));
}

#[test]
fn malformed_colors_pass_through() {
    let state = GradientState::new(
        vec![ColorStop::new(30.0, "not-a-color"), ColorStop::new(60.0, "#zzz")],
        0.0,
    );
    assert_eq!(
        state.to_css(),
        "linear-gradient(0deg, not-a-color 30%, #zzz 60%)"
    );
}

#[test]
fn fractional_positions_print_without_padding() {
    let state = GradientState::new(vec![ColorStop::new(33.5, "#123456")], 12.5);
    assert_eq!(state.to_css(), "linear-gradient(12.5deg, #123456 33.5%)");
}

#[test]
fn declaration_wraps_gradient_for_clipboard() {
    let editor = GradientEditor::default();
    assert_eq!(
        editor.css_declaration(),
        format!("background: {DEFAULT_CSS};")
    );
}

#[test]
fn stop_positions_are_clamped_on_construction() {
    assert_eq!(ColorStop::new(150.0, "#fff").position, 100.0);
    assert_eq!(ColorStop::new(-5.0, "#fff").position, 0.0);
    assert_eq!(ColorStop::new(f32::NAN, "#fff").position, 0.0);
    assert_eq!(ColorStop::new(-0.0, "#fff").position.to_string(), "0");
}

#[test]
fn rotating_wraps_into_a_full_turn() {
    let mut editor = GradientEditor::default();
    editor.rotate(-60.0);
    assert_eq!(editor.angle(), 345.0);
    assert!(editor.css().starts_with("linear-gradient(345deg, "));

    editor.rotate(30.0);
    assert_eq!(editor.angle(), 15.0);
}
