use bevy::prelude::*;
use constants::timing::REVEAL_SLIDE_PX;

use super::reveal::{RevealFade, RevealSlide};
use super::theme;
use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::{PageSection, SectionId};

/// Background colours of a button per interaction state.
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonStyle {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl ButtonStyle {
    pub fn solid(normal: Color, hovered: Color) -> Self {
        Self {
            normal,
            hovered,
            pressed: hovered,
        }
    }

    pub fn color(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hovered,
            Interaction::None => self.normal,
        }
    }
}

/// Border colour swap for hoverable cards.
#[derive(Component, Debug, Clone, Copy)]
pub struct HoverBorder {
    pub normal: Color,
    pub hovered: Color,
}

pub fn update_button_styles(
    mut buttons: Query<
        (&Interaction, &ButtonStyle, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, style, mut background) in &mut buttons {
        *background = BackgroundColor(style.color(*interaction));
    }
}

pub fn update_hover_borders(
    mut cards: Query<(&Interaction, &HoverBorder, &mut BorderColor), Changed<Interaction>>,
) {
    for (interaction, hover, mut border) in &mut cards {
        *border = BorderColor(match interaction {
            Interaction::None => hover.normal,
            _ => hover.hovered,
        });
    }
}

/// Text that starts transparent and fades in with its section's reveal.
pub fn faded_text(
    text: impl Into<String>,
    section: SectionId,
    font_size: f32,
    color: Color,
) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color.with_alpha(0.0)),
        RevealFade {
            section,
            base_alpha: color.alpha(),
        },
    )
}

/// Spawn the content string behind `field`, tagged with its [`ContentRef`].
pub fn spawn_content_text(
    parent: &mut ChildSpawnerCommands,
    content: &PortfolioContent,
    section: SectionId,
    field: ContentRef,
    font_size: f32,
    color: Color,
) {
    let Some(text) = field.resolve(content) else {
        warn!("No content behind {:?}, skipping text", field);
        return;
    };
    parent.spawn((field, faded_text(text, section, font_size, color)));
}

pub fn spawn_label(
    parent: &mut ChildSpawnerCommands,
    section: SectionId,
    text: impl Into<String>,
    font_size: f32,
    color: Color,
) {
    parent.spawn(faded_text(text, section, font_size, color));
}

/// Full-width section root with a sliding content column inside.
pub fn spawn_section(
    page: &mut ChildSpawnerCommands,
    section: SectionId,
    background: Color,
    max_width: f32,
    build: impl FnOnce(&mut ChildSpawnerCommands),
) {
    page.spawn((
        PageSection(section),
        Name::new(format!("Section:{section}")),
        Node {
            width: Val::Percent(100.0),
            min_height: Val::Vh(100.0),
            flex_shrink: 0.0,
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            padding: UiRect::axes(
                Val::Px(theme::SECTION_PADDING_X),
                Val::Px(theme::SECTION_PADDING_Y),
            ),
            ..default()
        },
        BackgroundColor(background),
    ))
    .with_children(|root| {
        root.spawn((
            RevealSlide(section),
            Node {
                width: Val::Percent(100.0),
                max_width: Val::Px(max_width),
                position_type: PositionType::Relative,
                top: Val::Px(REVEAL_SLIDE_PX),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(build);
    });
}

pub fn spawn_section_heading(
    parent: &mut ChildSpawnerCommands,
    section: SectionId,
    title: &str,
    color: Color,
    margin_bottom: f32,
) {
    parent.spawn((
        Node {
            margin: UiRect::bottom(Val::Px(margin_bottom)),
            ..default()
        },
        faded_text(title, section, theme::FONT_SECTION_TITLE, color),
        TextLayout::new_with_justify(JustifyText::Center),
    ));
}

pub fn column_node(gap: f32) -> Node {
    Node {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(gap),
        ..default()
    }
}

pub fn wrap_row_node(gap: f32) -> Node {
    Node {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        align_items: AlignItems::Center,
        column_gap: Val::Px(gap),
        row_gap: Val::Px(gap),
        ..default()
    }
}

pub fn card_node(padding: f32) -> Node {
    Node {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        padding: UiRect::all(Val::Px(padding)),
        border: UiRect::all(Val::Px(1.0)),
        ..default()
    }
}

/// Small rounded chip showing one tag.
pub fn spawn_tag(
    parent: &mut ChildSpawnerCommands,
    content: &PortfolioContent,
    section: SectionId,
    field: ContentRef,
    background: Color,
    text_color: Color,
) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(background),
            BorderColor(text_color.with_alpha(0.3)),
            BorderRadius::all(Val::Px(theme::CHIP_RADIUS)),
        ))
        .with_children(|chip| {
            spawn_content_text(chip, content, section, field, theme::FONT_TAG, text_color);
        });
}

/// Clickable button with a text label. `action` carries what a press does.
pub fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    section: SectionId,
    label: &str,
    style: ButtonStyle,
    border: Option<Color>,
    action: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Name::new(format!("Button:{label}")),
            action,
            style,
            Node {
                padding: UiRect::axes(Val::Px(32.0), Val::Px(16.0)),
                border: UiRect::all(Val::Px(if border.is_some() { 2.0 } else { 0.0 })),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(style.normal),
            BorderColor(border.unwrap_or(Color::NONE)),
            BorderRadius::all(Val::Px(theme::BUTTON_RADIUS)),
        ))
        .with_children(|button| {
            spawn_label(button, section, label, theme::FONT_LEAD, Color::WHITE);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_style_per_interaction() {
        let style = ButtonStyle {
            normal: Color::BLACK,
            hovered: Color::WHITE,
            pressed: Color::NONE,
        };
        assert_eq!(style.color(Interaction::None), Color::BLACK);
        assert_eq!(style.color(Interaction::Hovered), Color::WHITE);
        assert_eq!(style.color(Interaction::Pressed), Color::NONE);
    }

    #[test]
    fn test_faded_text_starts_transparent() {
        let mut world = World::new();
        let entity = world
            .spawn(faded_text("hi", SectionId::About, 12.0, Color::srgba(1.0, 1.0, 1.0, 0.8)))
            .id();

        let color = world.get::<TextColor>(entity).unwrap();
        assert_eq!(color.0.alpha(), 0.0);
        let fade = world.get::<RevealFade>(entity).unwrap();
        assert!((fade.base_alpha - 0.8).abs() < 1e-6);
    }
}
