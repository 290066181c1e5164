use bevy::prelude::*;
use constants::palette::{
    CARD_BORDER, PAGE_BLACK, PAGE_GRAY_800, PAGE_GRAY_900, PURPLE_400, TEXT_GRAY_300,
    TEXT_GRAY_400, TEXT_WHITE,
};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::SectionId;
use crate::ui::theme;
use crate::ui::widgets::{
    column_node, spawn_content_text, spawn_label, spawn_section, spawn_section_heading, spawn_tag,
    wrap_row_node,
};

const SECTION: SectionId = SectionId::Projects;

/// Even rows put the text left of the visual panel, odd rows mirror it.
pub fn row_direction(index: usize) -> FlexDirection {
    if index % 2 == 0 {
        FlexDirection::Row
    } else {
        FlexDirection::RowReverse
    }
}

pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    spawn_section(page, SECTION, PAGE_BLACK, theme::CONTENT_MAX_WIDTH, |column| {
        spawn_section_heading(column, SECTION, "Featured Projects", PURPLE_400, 80.0);

        column
            .spawn(Node {
                width: Val::Percent(100.0),
                ..column_node(128.0)
            })
            .with_children(|list| {
                for index in 0..content.projects.len() {
                    spawn_project(list, content, index);
                }
            });
    });
}

fn spawn_project(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, index: usize) {
    let project = &content.projects[index];
    let (from, to) = theme::gradient_colors(&project.gradient);

    parent
        .spawn((
            Name::new(format!("Project:{index}")),
            Node {
                width: Val::Percent(100.0),
                display: Display::Flex,
                flex_direction: row_direction(index),
                flex_wrap: FlexWrap::Wrap,
                align_items: AlignItems::Center,
                column_gap: Val::Px(64.0),
                row_gap: Val::Px(32.0),
                ..default()
            },
        ))
        .with_children(|row| {
            row.spawn(Node {
                flex_grow: 1.0,
                flex_basis: Val::Px(360.0),
                ..column_node(20.0)
            })
            .with_children(|text| {
                spawn_content_text(
                    text,
                    content,
                    SECTION,
                    ContentRef::ProjectTitle(index),
                    theme::FONT_PROJECT_TITLE,
                    TEXT_WHITE,
                );
                spawn_content_text(
                    text,
                    content,
                    SECTION,
                    ContentRef::ProjectSubtitle(index),
                    theme::FONT_LEAD,
                    TEXT_GRAY_400,
                );
                spawn_content_text(
                    text,
                    content,
                    SECTION,
                    ContentRef::ProjectDescription(index),
                    theme::FONT_BODY,
                    TEXT_GRAY_300,
                );

                text.spawn((
                    Name::new("ImpactBadge"),
                    Node {
                        align_self: AlignSelf::FlexStart,
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(from),
                    BorderColor(to),
                    BorderRadius::MAX,
                ))
                .with_children(|badge| {
                    spawn_content_text(
                        badge,
                        content,
                        SECTION,
                        ContentRef::ProjectImpact(index),
                        theme::FONT_BODY,
                        TEXT_WHITE,
                    );
                });

                text.spawn(wrap_row_node(8.0)).with_children(|tags| {
                    for tag in 0..project.tags.len() {
                        spawn_tag(
                            tags,
                            content,
                            SECTION,
                            ContentRef::ProjectTag { entry: index, index: tag },
                            PAGE_GRAY_800,
                            TEXT_GRAY_300,
                        );
                    }
                });

                spawn_label(text, SECTION, "Learn More ->", theme::FONT_BODY, PURPLE_400);
            });

            spawn_visual_panel(row, index, from, to);
        });
}

/// Decorative card in the project's gradient colours.
fn spawn_visual_panel(parent: &mut ChildSpawnerCommands, index: usize, from: Color, to: Color) {
    parent
        .spawn((
            Name::new("ProjectVisual"),
            Node {
                flex_grow: 1.0,
                flex_basis: Val::Px(320.0),
                max_width: Val::Px(512.0),
                height: Val::Px(320.0),
                padding: UiRect::all(Val::Px(32.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(PAGE_GRAY_900),
            BorderColor(to),
            BorderRadius::all(Val::Px(theme::CARD_RADIUS)),
        ))
        .with_children(|panel| {
            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..column_node(16.0)
                    },
                    BackgroundColor(PAGE_GRAY_800),
                    BorderColor(CARD_BORDER),
                    BorderRadius::all(Val::Px(theme::BUTTON_RADIUS)),
                ))
                .with_children(|inner| {
                    inner
                        .spawn((
                            Node {
                                width: Val::Px(64.0),
                                height: Val::Px(64.0),
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(3.0)),
                                ..default()
                            },
                            BackgroundColor(from),
                            BorderColor(to),
                            BorderRadius::all(Val::Px(theme::BUTTON_RADIUS)),
                        ))
                        .with_children(|icon| {
                            spawn_label(icon, SECTION, "</>", theme::FONT_LEAD, TEXT_WHITE);
                        });
                    spawn_label(
                        inner,
                        SECTION,
                        format!("{:02}", index + 1),
                        theme::FONT_CARD_TITLE,
                        TEXT_GRAY_400,
                    );
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_alternate() {
        assert_eq!(row_direction(0), FlexDirection::Row);
        assert_eq!(row_direction(1), FlexDirection::RowReverse);
        assert_eq!(row_direction(2), FlexDirection::Row);
    }
}
