use bevy::prelude::*;
use constants::palette::{
    HEADER_BORDER, HEADER_SCROLLED, NAV_ACTIVE_BG, NAV_HOVER_BG, PURPLE_400, TEXT_GRAY_300,
    TEXT_WHITE,
};
use constants::scroll::HEADER_HEIGHT_PX;

use super::links::ScrollTarget;
use super::theme;
use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::{ScrollObserver, SectionId};

#[derive(Component)]
pub struct HeaderBar;

/// Nav button for one section.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavItem(pub SectionId);

/// Text inside a [`NavItem`].
#[derive(Component, Debug, Clone, Copy)]
pub struct NavLabel(pub SectionId);

/// Background and bottom border of the header bar.
pub fn header_colors(scrolled: bool) -> (Color, Color) {
    if scrolled {
        (HEADER_SCROLLED, HEADER_BORDER)
    } else {
        (Color::NONE, Color::NONE)
    }
}

/// Background and text colour of a nav item.
pub fn nav_colors(active: bool, interaction: Interaction) -> (Color, Color) {
    match (active, interaction) {
        (true, _) => (NAV_ACTIVE_BG, TEXT_WHITE),
        (false, Interaction::None) => (Color::NONE, TEXT_GRAY_300),
        (false, _) => (NAV_HOVER_BG, TEXT_WHITE),
    }
}

pub fn spawn_header(commands: &mut Commands, content: &PortfolioContent) {
    commands
        .spawn((
            HeaderBar,
            Name::new("Header"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(HEADER_HEIGHT_PX),
                padding: UiRect::horizontal(Val::Px(theme::SECTION_PADDING_X)),
                border: UiRect::bottom(Val::Px(1.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::NONE),
            BorderColor(Color::NONE),
            GlobalZIndex(10),
        ))
        .with_children(|bar| {
            bar.spawn((
                Button,
                Name::new("Logo"),
                ScrollTarget(SectionId::Landing),
                Node::default(),
            ))
            .with_children(|logo| {
                logo.spawn((
                    ContentRef::Initials,
                    Text::new(content.profile.initials.clone()),
                    TextFont {
                        font_size: theme::FONT_LOGO,
                        ..default()
                    },
                    TextColor(PURPLE_400),
                ));
            });

            bar.spawn(Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(8.0),
                ..default()
            })
            .with_children(|nav| {
                for section in &SectionId::ALL[1..] {
                    spawn_nav_item(nav, *section);
                }
            });
        });
}

fn spawn_nav_item(nav: &mut ChildSpawnerCommands, section: SectionId) {
    let (background, text) = nav_colors(false, Interaction::None);
    nav.spawn((
        Button,
        NavItem(section),
        ScrollTarget(section),
        Name::new(format!("Nav:{section}")),
        Node {
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(background),
        BorderRadius::all(Val::Px(theme::CHIP_RADIUS)),
    ))
    .with_children(|item| {
        item.spawn((
            NavLabel(section),
            Text::new(section.nav_label()),
            TextFont {
                font_size: theme::FONT_SMALL,
                ..default()
            },
            TextColor(text),
        ));
    });
}

pub fn update_header_style(
    observer: Res<ScrollObserver>,
    mut bars: Query<(&mut BackgroundColor, &mut BorderColor), With<HeaderBar>>,
) {
    let (background, border) = header_colors(observer.scrolled());
    for (mut bar_background, mut bar_border) in &mut bars {
        bar_background.set_if_neq(BackgroundColor(background));
        bar_border.set_if_neq(BorderColor(border));
    }
}

pub fn update_nav_items(
    observer: Res<ScrollObserver>,
    mut items: Query<(&NavItem, &Interaction, &mut BackgroundColor)>,
    mut labels: Query<(&NavLabel, &mut TextColor)>,
) {
    let active = observer.active();
    let mut text_colors = [TEXT_GRAY_300; SectionId::ALL.len()];

    for (item, interaction, mut background) in &mut items {
        let (fill, text) = nav_colors(item.0 == active, *interaction);
        background.set_if_neq(BackgroundColor(fill));
        text_colors[item.0.index()] = text;
    }

    for (label, mut color) in &mut labels {
        color.set_if_neq(TextColor(text_colors[label.0.index()]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_transparent_until_scrolled() {
        assert_eq!(header_colors(false), (Color::NONE, Color::NONE));
        assert_eq!(header_colors(true), (HEADER_SCROLLED, HEADER_BORDER));
    }

    #[test]
    fn test_active_item_wins_over_hover() {
        assert_eq!(nav_colors(true, Interaction::None), (NAV_ACTIVE_BG, TEXT_WHITE));
        assert_eq!(nav_colors(true, Interaction::Hovered), (NAV_ACTIVE_BG, TEXT_WHITE));
        assert_eq!(nav_colors(false, Interaction::Hovered), (NAV_HOVER_BG, TEXT_WHITE));
        assert_eq!(
            nav_colors(false, Interaction::None),
            (Color::NONE, TEXT_GRAY_300)
        );
    }

    #[test]
    fn test_header_has_logo_and_five_nav_items() {
        let content = PortfolioContent::embedded().unwrap();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, &world);
            spawn_header(&mut commands, &content);
        }
        queue.apply(&mut world);

        let mut items = world.query::<&NavItem>();
        let sections: Vec<_> = items.iter(&world).map(|item| item.0).collect();
        assert_eq!(sections.len(), 5);
        assert!(!sections.contains(&SectionId::Landing));

        let mut logo = world.query::<(&ContentRef, &Text)>();
        let (field, text) = logo.single(&world).unwrap();
        assert_eq!(*field, ContentRef::Initials);
        assert_eq!(text.0, content.profile.initials);
    }
}
