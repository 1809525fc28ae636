use super::helpers::*;

use bevy::ecs::system::RunSystemOnce;
use bevy::input::InputPlugin;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use ombre::prelude::*;
use ombre_editor::ui::widgets::button::EditorButton;
use ombre_editor::ui::widgets::floating_panel::{
    EditorFloatingPanel, handle_panel_drag, press_origin, sync_panel_position,
};

fn create_panel_app() -> App {
    let mut app = create_minimal_app();
    app.add_plugins(InputPlugin)
        .add_systems(Update, (handle_panel_drag, sync_panel_position).chain());
    app
}

fn spawn_hovered_panel(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            EditorFloatingPanel,
            PanelDrag::at(position),
            Hovered(true),
            Node {
                position_type: PositionType::Absolute,
                left: px(position.x),
                top: px(position.y),
                ..default()
            },
        ))
        .id()
}

fn touch(app: &mut App, phase: TouchPhase, position: Vec2) {
    app.world_mut().write_message(TouchInput {
        phase,
        position,
        window: Entity::PLACEHOLDER,
        force: None,
        id: 0,
    });
    app.update();
}

fn panel_drag(app: &App, panel: Entity) -> PanelDrag {
    app.world().get::<PanelDrag>(panel).unwrap().clone()
}

fn origin_of(app: &mut App, panel: Entity) -> PressOrigin {
    app.world_mut()
        .run_system_once(
            move |children: Query<&Children>, buttons: Query<&Hovered, With<EditorButton>>| {
                press_origin(panel, &children, &buttons)
            },
        )
        .unwrap()
}

#[test]
fn touch_drags_panel_by_cumulative_delta() {
    let mut app = create_panel_app();
    let panel = spawn_hovered_panel(&mut app, Vec2::new(10.0, 10.0));

    touch(&mut app, TouchPhase::Started, Vec2::new(20.0, 20.0));
    assert!(panel_drag(&app, panel).is_dragging());

    touch(&mut app, TouchPhase::Moved, Vec2::new(120.0, 70.0));
    assert_eq!(panel_drag(&app, panel).position(), Vec2::new(110.0, 60.0));

    let node = app.world().get::<Node>(panel).unwrap();
    assert_eq!(node.left, px(110.0));
    assert_eq!(node.top, px(60.0));

    touch(&mut app, TouchPhase::Ended, Vec2::new(120.0, 70.0));
    let drag = panel_drag(&app, panel);
    assert!(!drag.is_dragging());
    assert_eq!(drag.position(), Vec2::new(110.0, 60.0));
}

#[test]
fn touch_outside_panels_does_nothing() {
    let mut app = create_panel_app();
    let panel = app
        .world_mut()
        .spawn((EditorFloatingPanel, PanelDrag::at(Vec2::ZERO), Hovered(false)))
        .id();

    touch(&mut app, TouchPhase::Started, Vec2::new(5.0, 5.0));
    touch(&mut app, TouchPhase::Moved, Vec2::new(50.0, 50.0));

    let drag = panel_drag(&app, panel);
    assert!(!drag.is_dragging());
    assert_eq!(drag.position(), Vec2::ZERO);
}

#[test]
fn hovered_button_keeps_the_press() {
    let mut app = create_panel_app();
    let panel = spawn_hovered_panel(&mut app, Vec2::new(10.0, 10.0));
    let button = app
        .world_mut()
        .spawn((EditorButton, Hovered(true), ChildOf(panel)))
        .id();

    assert_eq!(origin_of(&mut app, panel), PressOrigin::Interactive);

    touch(&mut app, TouchPhase::Started, Vec2::new(20.0, 20.0));
    touch(&mut app, TouchPhase::Moved, Vec2::new(90.0, 90.0));

    let drag = panel_drag(&app, panel);
    assert!(!drag.is_dragging());
    assert_eq!(drag.position(), Vec2::new(10.0, 10.0));

    app.world_mut().entity_mut(button).insert(Hovered(false));
    assert_eq!(origin_of(&mut app, panel), PressOrigin::Chrome);
}

#[test]
fn nested_button_is_found_below_the_panel() {
    let mut app = create_panel_app();
    let panel = spawn_hovered_panel(&mut app, Vec2::ZERO);
    let row = app.world_mut().spawn((Node::default(), ChildOf(panel))).id();
    app.world_mut()
        .spawn((EditorButton, Hovered(true), ChildOf(row)));

    assert_eq!(origin_of(&mut app, panel), PressOrigin::Interactive);
}
