use bevy::color::palettes::tailwind;
use bevy::picking::hover::Hovered;
use bevy::prelude::*;

use crate::ui::tokens::{
    CORNER_RADIUS_LG, PRIMARY_COLOR, TEXT_BODY_COLOR, TEXT_DISPLAY_COLOR, TEXT_SIZE,
};

#[derive(EntityEvent)]
pub struct ButtonClickEvent {
    pub entity: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, (setup_button, handle_hover, handle_button_click));
}

#[derive(Component)]
pub struct EditorButton;

#[derive(Component, Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

impl ButtonVariant {
    pub fn bg_color(&self) -> Srgba {
        match self {
            Self::Default => tailwind::ZINC_700,
            Self::Primary => PRIMARY_COLOR,
        }
    }
    pub fn bg_opacity(&self, hovered: bool) -> f32 {
        match (self, hovered) {
            (Self::Default, false) => 0.5,
            (Self::Default, true) => 0.8,
            (Self::Primary, false) => 1.0,
            (Self::Primary, true) => 0.9,
        }
    }
    pub fn text_color(&self) -> Srgba {
        match self {
            Self::Default => TEXT_BODY_COLOR,
            Self::Primary => TEXT_DISPLAY_COLOR,
        }
    }
    pub fn border_color(&self) -> Srgba {
        match self {
            Self::Default => tailwind::ZINC_700,
            Self::Primary => PRIMARY_COLOR,
        }
    }
}

#[derive(Component)]
struct ButtonLabel(String);

#[derive(Default)]
pub struct ButtonProps {
    pub content: String,
    pub variant: ButtonVariant,
}

impl ButtonProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..default()
        }
    }
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

pub fn button(props: ButtonProps) -> impl Bundle {
    let ButtonProps { content, variant } = props;

    (
        Button,
        EditorButton,
        variant,
        ButtonLabel(content),
        Hovered::default(),
        Node {
            height: px(28.0),
            padding: UiRect::axes(px(12.0), px(0.0)),
            border: UiRect::all(px(1.0)),
            border_radius: BorderRadius::all(CORNER_RADIUS_LG),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(
            variant
                .bg_color()
                .with_alpha(variant.bg_opacity(false))
                .into(),
        ),
        BorderColor::all(variant.border_color()),
    )
}

fn setup_button(
    mut commands: Commands,
    buttons: Query<(Entity, &ButtonLabel, &ButtonVariant), Added<ButtonLabel>>,
) {
    for (entity, label, variant) in &buttons {
        if label.0.is_empty() {
            continue;
        }
        commands.entity(entity).with_child((
            Text::new(&label.0),
            TextFont {
                font_size: TEXT_SIZE,
                ..default()
            },
            TextColor(variant.text_color().into()),
        ));
    }
}

fn handle_hover(
    mut buttons: Query<
        (&ButtonVariant, &Hovered, &mut BackgroundColor),
        (Changed<Hovered>, With<EditorButton>),
    >,
) {
    for (variant, hovered, mut bg) in &mut buttons {
        bg.0 = variant
            .bg_color()
            .with_alpha(variant.bg_opacity(hovered.get()))
            .into();
    }
}

fn handle_button_click(
    interactions: Query<(Entity, &Interaction), (Changed<Interaction>, With<EditorButton>)>,
    mut commands: Commands,
) {
    for (entity, interaction) in &interactions {
        if *interaction == Interaction::Pressed {
            commands.trigger(ButtonClickEvent { entity });
        }
    }
}
