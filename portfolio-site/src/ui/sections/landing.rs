use bevy::prelude::*;
use constants::background::{GRID_CELL_PX, GRID_SPAN_PX};
use constants::palette::{
    GRID_LINE, NAV_HOVER_BG, PURPLE_400, PURPLE_600, TEXT_GRAY_300, TEXT_GRAY_400, TEXT_WHITE,
};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::{PageSection, SectionId};
use crate::ui::links::ScrollTarget;
use crate::ui::reveal::{LandingGrid, LandingHero};
use crate::ui::theme;
use crate::ui::widgets::{
    ButtonStyle, spawn_button, spawn_content_text, spawn_label, wrap_row_node,
};

const SECTION: SectionId = SectionId::Landing;

/// Full-height hero over a transparent background so the 3D scene shows.
pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    page.spawn((
        PageSection(SECTION),
        Name::new("Section:landing"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Vh(100.0),
            flex_shrink: 0.0,
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            padding: UiRect::horizontal(Val::Px(theme::SECTION_PADDING_X)),
            overflow: Overflow::clip(),
            ..default()
        },
        BackgroundColor(Color::NONE),
    ))
    .with_children(|section| {
        spawn_grid(section);

        section
            .spawn((
                LandingHero,
                Node {
                    position_type: PositionType::Relative,
                    top: Val::Px(0.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(24.0),
                    ..default()
                },
            ))
            .with_children(|hero| {
                hero.spawn(Node {
                    display: Display::Flex,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(24.0),
                    ..default()
                })
                .with_children(|name| {
                    let colors = [TEXT_WHITE, PURPLE_400];
                    for (i, _) in content.profile.name_words().enumerate() {
                        spawn_content_text(
                            name,
                            content,
                            SECTION,
                            ContentRef::NameWord(i),
                            theme::FONT_HERO,
                            colors[i % colors.len()],
                        );
                    }
                });

                spawn_content_text(
                    hero,
                    content,
                    SECTION,
                    ContentRef::Title,
                    theme::FONT_HERO_TITLE,
                    TEXT_GRAY_300,
                );
                spawn_content_text(
                    hero,
                    content,
                    SECTION,
                    ContentRef::Subtitle,
                    theme::FONT_LEAD,
                    TEXT_GRAY_400,
                );

                hero.spawn(Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..wrap_row_node(16.0)
                })
                .with_children(|actions| {
                    spawn_button(
                        actions,
                        SECTION,
                        "View My Work",
                        ButtonStyle::solid(PURPLE_600, PURPLE_400),
                        None,
                        ScrollTarget(SectionId::Projects),
                    );
                    spawn_button(
                        actions,
                        SECTION,
                        "Get In Touch",
                        ButtonStyle::solid(Color::NONE, NAV_HOVER_BG),
                        Some(PURPLE_600),
                        ScrollTarget(SectionId::Contact),
                    );
                });

                hero.spawn((
                    Button,
                    Name::new("Button:Scroll to explore"),
                    ScrollTarget(SectionId::About),
                    Node {
                        margin: UiRect::top(Val::Px(48.0)),
                        ..default()
                    },
                ))
                .with_children(|hint| {
                    spawn_label(
                        hint,
                        SECTION,
                        "Scroll to explore",
                        theme::FONT_SMALL,
                        TEXT_GRAY_400,
                    );
                });
            });
    });
}

/// Offsets (px) of grid lines one cell apart, from 0 up to and including `span`.
pub fn grid_line_offsets(cell: f32, span: f32) -> impl Iterator<Item = f32> {
    let count = if cell > 0.0 && span >= 0.0 {
        (span / cell).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| i as f32 * cell)
}

/// Faint square grid covering the section. Taller than the section so the
/// parallax shift never exposes its bottom edge.
fn spawn_grid(section: &mut ChildSpawnerCommands) {
    section
        .spawn((
            LandingGrid,
            Name::new("LandingGrid"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(125.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|grid| {
            for x in grid_line_offsets(GRID_CELL_PX, GRID_SPAN_PX) {
                grid.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(x),
                        width: Val::Px(1.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(GRID_LINE),
                ));
            }
            for y in grid_line_offsets(GRID_CELL_PX, GRID_SPAN_PX) {
                grid.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(y),
                        width: Val::Percent(100.0),
                        height: Val::Px(1.0),
                        ..default()
                    },
                    BackgroundColor(GRID_LINE),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_cover_span() {
        let offsets: Vec<f32> = grid_line_offsets(50.0, 200.0).collect();
        assert_eq!(offsets, vec![0.0, 50.0, 100.0, 150.0, 200.0]);

        assert_eq!(grid_line_offsets(50.0, 3200.0).count(), 65);
        assert_eq!(grid_line_offsets(0.0, 100.0).count(), 0);
    }
}
