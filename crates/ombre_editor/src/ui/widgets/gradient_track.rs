use bevy::picking::events::Click;
use bevy::picking::hover::Hovered;
use bevy::picking::pointer::PointerButton;
use bevy::picking::prelude::Pickable;
use bevy::prelude::*;
use bevy::ui::{
    BackgroundGradient, ColorStop as UiColorStop, Gradient as UiGradient, LinearGradient,
    UiGlobalTransform,
};
use bevy::window::SystemCursorIcon;
use ombre::editor::{GradientEditor, PointerTarget};
use ombre::gradient::GradientState;
use ombre::track::TrackRect;

use crate::plugin::PaletteRng;
use crate::ui::tokens::{BORDER_COLOR, PRIMARY_COLOR};
use crate::ui::widgets::cursor::{ActiveCursor, HoverCursor};
use crate::ui::widgets::floating_panel::EditorFloatingPanel;

const TRACK_HEIGHT: f32 = 40.0;
const TRACK_PADDING: f32 = 12.0;
const PREVIEW_HEIGHT: f32 = 220.0;
const MARKER_SIZE: f32 = 22.0;
const MARKER_BORDER: f32 = 3.0;
const BORDER_RADIUS: f32 = 6.0;
const TRACK_ANGLE: f32 = 90.0;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            setup_gradient_track,
            respawn_markers_on_render,
            update_marker_positions,
            update_marker_borders,
            update_gradient_previews,
            end_drags_on_release,
        ),
    );
}

#[derive(Component)]
pub struct EditorGradientTrack;

/// Spawns a gradient editor: a large preview plus the marker track.
pub fn gradient_track(editor: GradientEditor) -> impl Bundle {
    (
        EditorGradientTrack,
        editor,
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: px(16.0),
            width: percent(100),
            ..default()
        },
    )
}

/// A node painted with the editor's gradient.
///
/// `angle` overrides the editor angle; the track uses it so the strip always
/// runs left to right under the markers.
#[derive(Component)]
pub struct GradientPreview {
    pub editor: Entity,
    pub angle: Option<f32>,
}

#[derive(Component)]
pub struct TrackBar(pub Entity);

/// Container the markers are positioned in, by percentage of its width.
#[derive(Component)]
pub struct MarkerArea {
    pub editor: Entity,
    generation: u64,
}

#[derive(Component, Clone, Copy)]
pub struct StopMarker {
    pub editor: Entity,
    pub index: usize,
}

#[derive(Component, Default)]
pub struct Dragging;

pub fn setup_gradient_track(
    mut commands: Commands,
    tracks: Query<(Entity, &GradientEditor), Added<EditorGradientTrack>>,
) {
    for (entity, editor) in &tracks {
        let preview = commands
            .spawn((
                GradientPreview {
                    editor: entity,
                    angle: None,
                },
                Node {
                    width: percent(100),
                    height: px(PREVIEW_HEIGHT),
                    border_radius: BorderRadius::all(px(BORDER_RADIUS)),
                    ..default()
                },
                BackgroundColor(BORDER_COLOR.into()),
            ))
            .id();
        if let Some(gradient) = preview_gradient(editor.state(), editor.angle()) {
            commands.entity(preview).insert(gradient);
        }

        let bar = commands
            .spawn((
                TrackBar(entity),
                Hovered::default(),
                Node {
                    width: percent(100),
                    height: px(TRACK_HEIGHT),
                    ..default()
                },
            ))
            .observe(on_track_click)
            .id();

        let strip_gradient = preview_gradient(editor.state(), TRACK_ANGLE);
        commands.entity(bar).with_children(|bar_parent| {
            let mut strip = bar_parent.spawn((
                GradientPreview {
                    editor: entity,
                    angle: Some(TRACK_ANGLE),
                },
                Pickable::IGNORE,
                Node {
                    position_type: PositionType::Absolute,
                    left: px(0.0),
                    right: px(0.0),
                    height: percent(100),
                    border_radius: BorderRadius::all(px(BORDER_RADIUS)),
                    ..default()
                },
                BackgroundColor(BORDER_COLOR.into()),
            ));
            if let Some(gradient) = strip_gradient {
                strip.insert(gradient);
            }

            bar_parent
                .spawn((
                    MarkerArea {
                        editor: entity,
                        generation: editor.render_generation(),
                    },
                    Pickable::IGNORE,
                    Node {
                        position_type: PositionType::Absolute,
                        left: px(TRACK_PADDING),
                        right: px(TRACK_PADDING),
                        top: px(0.0),
                        bottom: px(0.0),
                        ..default()
                    },
                ))
                .with_children(|area| spawn_markers(area, entity, editor));
        });

        commands.entity(entity).add_children(&[preview, bar]);
    }
}

fn parse_color(hex: &str) -> Option<Color> {
    Srgba::hex(hex).ok().map(Color::from)
}

/// Builds the UI gradient for `state`.
///
/// Returns `None` if any stop color is unparseable; the caller then keeps
/// whatever was drawn before, the way a browser drops an invalid style value.
pub fn preview_gradient(state: &GradientState, angle: f32) -> Option<BackgroundGradient> {
    if state.is_empty() {
        return None;
    }
    let stops = state
        .sorted_stops()
        .into_iter()
        .map(|stop| {
            let color = parse_color(&stop.color)?;
            Some(UiColorStop::new(color, percent(stop.position)))
        })
        .collect::<Option<Vec<_>>>()?;

    Some(BackgroundGradient(vec![UiGradient::Linear(
        LinearGradient::new(angle.to_radians(), stops),
    )]))
}

fn spawn_markers(parent: &mut ChildSpawnerCommands, editor_entity: Entity, editor: &GradientEditor) {
    for marker in editor.markers() {
        let color = parse_color(&marker.color).unwrap_or(Color::NONE);
        parent
            .spawn((
                StopMarker {
                    editor: editor_entity,
                    index: marker.index,
                },
                HoverCursor(SystemCursorIcon::Grab),
                Pickable::default(),
                Hovered::default(),
                Node {
                    position_type: PositionType::Absolute,
                    width: px(MARKER_SIZE),
                    height: px(MARKER_SIZE),
                    left: percent(marker.left_percent),
                    top: px((TRACK_HEIGHT - MARKER_SIZE) / 2.0),
                    margin: UiRect::left(px(-MARKER_SIZE / 2.0)),
                    border: UiRect::all(px(MARKER_BORDER)),
                    border_radius: BorderRadius::MAX,
                    ..default()
                },
                BackgroundColor(color),
                BorderColor::all(BORDER_COLOR),
            ))
            .observe(on_marker_press)
            .observe(on_marker_drag)
            .observe(on_marker_drag_end);
    }
}

fn track_rect(computed: &ComputedNode, transform: &UiGlobalTransform) -> TrackRect {
    let scale = computed.inverse_scale_factor();
    TrackRect::from_center(transform.translation.x * scale, computed.size().x * scale)
}

fn find_track(
    areas: &Query<(&MarkerArea, &ComputedNode, &UiGlobalTransform)>,
    editor: Entity,
) -> Option<TrackRect> {
    areas
        .iter()
        .find(|(area, _, _)| area.editor == editor)
        .map(|(_, computed, transform)| track_rect(computed, transform))
}

fn on_track_click(
    event: On<Pointer<Click>>,
    bars: Query<&TrackBar>,
    markers: Query<(&StopMarker, &Hovered)>,
    panels: Query<&Hovered, With<EditorFloatingPanel>>,
    areas: Query<(&MarkerArea, &ComputedNode, &UiGlobalTransform)>,
    mut editors: Query<&mut GradientEditor>,
    mut rng: ResMut<PaletteRng>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok(bar) = bars.get(event.event_target()) else {
        return;
    };

    let target = if let Some((marker, _)) = markers
        .iter()
        .find(|(marker, hovered)| marker.editor == bar.0 && hovered.get())
    {
        PointerTarget::Marker(marker.index)
    } else if panels.iter().any(|hovered| hovered.get()) {
        PointerTarget::Panel
    } else {
        PointerTarget::Track
    };

    let Some(track) = find_track(&areas, bar.0) else {
        return;
    };
    let Ok(mut editor) = editors.get_mut(bar.0) else {
        return;
    };

    editor.add_stop_at(event.pointer_location.position.x, target, track, &mut rng.0);
}

fn on_marker_press(
    event: On<Pointer<Press>>,
    mut commands: Commands,
    markers: Query<&StopMarker>,
    mut editors: Query<&mut GradientEditor>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok(marker) = markers.get(event.event_target()) else {
        return;
    };
    let Ok(mut editor) = editors.get_mut(marker.editor) else {
        return;
    };
    if editor.start_drag(marker.index) {
        commands
            .entity(event.event_target())
            .insert((Dragging, ActiveCursor(SystemCursorIcon::Grabbing)));
    }
}

fn on_marker_drag(
    event: On<Pointer<Drag>>,
    markers: Query<&StopMarker, With<Dragging>>,
    areas: Query<(&MarkerArea, &ComputedNode, &UiGlobalTransform)>,
    mut editors: Query<&mut GradientEditor>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok(marker) = markers.get(event.event_target()) else {
        return;
    };
    let Some(track) = find_track(&areas, marker.editor) else {
        return;
    };
    let Ok(mut editor) = editors.get_mut(marker.editor) else {
        return;
    };

    editor.continue_drag(event.pointer_location.position.x, track);
}

fn on_marker_drag_end(
    event: On<Pointer<DragEnd>>,
    mut commands: Commands,
    markers: Query<&StopMarker>,
    mut editors: Query<&mut GradientEditor>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok(marker) = markers.get(event.event_target()) else {
        return;
    };

    commands
        .entity(event.event_target())
        .remove::<(Dragging, ActiveCursor)>();

    if let Ok(mut editor) = editors.get_mut(marker.editor) {
        editor.end_drag();
    }
}

/// Ends any marker drag when the pointer is released anywhere in the window.
pub fn end_drags_on_release(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut editors: Query<&mut GradientEditor>,
    dragging: Query<Entity, With<Dragging>>,
) {
    if !mouse.just_released(MouseButton::Left) && !touches.any_just_released() {
        return;
    }

    for mut editor in &mut editors {
        if editor.drag_state().is_dragging() {
            editor.end_drag();
        }
    }

    for entity in &dragging {
        commands
            .entity(entity)
            .remove::<(Dragging, ActiveCursor)>();
    }
}

/// Rebuilds the markers of every editor that went through a full render.
pub fn respawn_markers_on_render(
    mut commands: Commands,
    editors: Query<(Entity, &GradientEditor), Changed<GradientEditor>>,
    mut areas: Query<(Entity, &mut MarkerArea)>,
    markers: Query<(Entity, &StopMarker)>,
) {
    for (editor_entity, editor) in &editors {
        for (area_entity, mut area) in &mut areas {
            if area.editor != editor_entity || area.generation == editor.render_generation() {
                continue;
            }
            area.generation = editor.render_generation();

            for (marker_entity, marker) in &markers {
                if marker.editor == editor_entity {
                    commands.entity(marker_entity).despawn();
                }
            }

            commands
                .entity(area_entity)
                .with_children(|parent| spawn_markers(parent, editor_entity, editor));
        }
    }
}

pub fn update_marker_positions(
    editors: Query<(Entity, &GradientEditor), Changed<GradientEditor>>,
    mut markers: Query<(&StopMarker, &mut Node)>,
) {
    for (editor_entity, editor) in &editors {
        for (marker, mut node) in &mut markers {
            if marker.editor != editor_entity {
                continue;
            }
            let Some(projected) = editor.markers().get(marker.index) else {
                continue;
            };
            node.left = percent(projected.left_percent);
        }
    }
}

fn update_marker_borders(
    editors: Query<Ref<GradientEditor>>,
    mut markers: Query<(&StopMarker, Ref<Hovered>, &mut BorderColor)>,
) {
    for (marker, hovered, mut border) in &mut markers {
        let Ok(editor) = editors.get(marker.editor) else {
            continue;
        };
        if !editor.is_changed() && !hovered.is_changed() {
            continue;
        }
        let dragging = editor
            .markers()
            .get(marker.index)
            .is_some_and(|projected| projected.dragging);

        let color = if dragging {
            PRIMARY_COLOR
        } else if hovered.get() {
            PRIMARY_COLOR.lighter(0.1)
        } else {
            BORDER_COLOR
        };
        *border = BorderColor::all(color);
    }
}

pub fn update_gradient_previews(
    mut commands: Commands,
    editors: Query<(Entity, &GradientEditor), Changed<GradientEditor>>,
    previews: Query<(Entity, &GradientPreview)>,
) {
    for (editor_entity, editor) in &editors {
        for (preview_entity, preview) in &previews {
            if preview.editor != editor_entity {
                continue;
            }
            let angle = preview.angle.unwrap_or(editor.angle());
            match preview_gradient(editor.state(), angle) {
                Some(gradient) => {
                    commands.entity(preview_entity).insert(gradient);
                }
                None => debug!("ignoring unparseable gradient {}", editor.css()),
            }
        }
    }
}
