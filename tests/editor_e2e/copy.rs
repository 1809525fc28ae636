use std::time::Duration;

use super::helpers::*;

use bevy::prelude::*;
use ombre::prelude::*;
use ombre_editor::clipboard::EditorClipboard;
use ombre_editor::ui::components::css_output::{
    self, CopyCssButton, CopyStatus, CssText, PendingCopy,
};
use ombre_editor::ui::widgets::button::ButtonClickEvent;

struct CopyFixture {
    app: App,
    editor: Entity,
    status: Entity,
    button: Entity,
}

fn create_copy_app(clipboard: MemoryClipboard) -> CopyFixture {
    let mut app = create_minimal_app();
    app.insert_resource(EditorClipboard::new(clipboard))
        .add_plugins(css_output::plugin);

    let editor = app.world_mut().spawn(GradientEditor::default()).id();
    let status = app
        .world_mut()
        .spawn((
            CopyStatus::new(Duration::from_secs(2), "copied"),
            Text::default(),
        ))
        .id();
    let button = app
        .world_mut()
        .spawn(CopyCssButton { editor, status })
        .id();

    CopyFixture {
        app,
        editor,
        status,
        button,
    }
}

fn status_text(app: &App, status: Entity) -> String {
    app.world().get::<Text>(status).unwrap().0.clone()
}

fn pending_copies(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<PendingCopy>>()
        .iter(app.world())
        .count()
}

#[test]
fn copy_writes_declaration_and_shows_status() {
    let clipboard = MemoryClipboard::new();
    let mut fixture = create_copy_app(clipboard.clone());

    fixture
        .app
        .world_mut()
        .trigger(ButtonClickEvent {
            entity: fixture.button,
        });
    let status = fixture.status;
    let shown = run_until(&mut fixture.app, 200, |app| {
        status_text(app, status) == "copied"
    });

    assert!(shown);
    assert_eq!(
        clipboard.last(),
        Some(format!("background: {DEFAULT_CSS};"))
    );
}

#[test]
fn copy_uses_current_gradient() {
    let clipboard = MemoryClipboard::new();
    let mut fixture = create_copy_app(clipboard.clone());

    fixture
        .app
        .world_mut()
        .get_mut::<GradientEditor>(fixture.editor)
        .unwrap()
        .set_angle(90.0);
    fixture
        .app
        .world_mut()
        .trigger(ButtonClickEvent {
            entity: fixture.button,
        });
    run_until(&mut fixture.app, 200, |app| pending_copies(app) == 0);

    let copied = clipboard.last().unwrap();
    assert!(copied.starts_with("background: linear-gradient(90deg, "));
    assert!(copied.ends_with(");"));
}

#[test]
fn failed_copy_keeps_status_hidden() {
    let mut fixture = create_copy_app(MemoryClipboard::failing());

    fixture
        .app
        .world_mut()
        .trigger(ButtonClickEvent {
            entity: fixture.button,
        });
    fixture.app.update();
    let settled = run_until(&mut fixture.app, 200, |app| pending_copies(app) == 0);

    assert!(settled);
    assert_eq!(status_text(&fixture.app, fixture.status), "");
}

#[test]
fn css_text_mirrors_editor() {
    let mut fixture = create_copy_app(MemoryClipboard::new());
    let text = fixture
        .app
        .world_mut()
        .spawn((CssText(fixture.editor), Text::default()))
        .id();

    fixture.app.update();
    assert_eq!(fixture.app.world().get::<Text>(text).unwrap().0, DEFAULT_CSS);

    fixture
        .app
        .world_mut()
        .get_mut::<GradientEditor>(fixture.editor)
        .unwrap()
        .rotate(15.0);
    fixture.app.update();
    assert!(
        fixture
            .app
            .world()
            .get::<Text>(text)
            .unwrap()
            .0
            .starts_with("linear-gradient(60deg, ")
    );
}
