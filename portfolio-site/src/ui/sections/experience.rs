use bevy::prelude::*;
use constants::palette::{
    BLUE_600, CARD_BORDER, CARD_SURFACE, PAGE_GRAY_800, PAGE_GRAY_900, PURPLE_400, PURPLE_600,
    TAG_PURPLE_BG, TAG_PURPLE_TEXT, TEXT_GRAY_300, TEXT_GRAY_400, TEXT_WHITE,
};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::SectionId;
use crate::ui::theme;
use crate::ui::widgets::{
    HoverBorder, card_node, column_node, spawn_content_text, spawn_label, spawn_section,
    spawn_section_heading, spawn_tag, wrap_row_node,
};

const SECTION: SectionId = SectionId::Experience;

/// Side (px) of the badge left of each timeline card.
const BADGE_SIZE: f32 = 64.0;

pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    spawn_section(page, SECTION, PAGE_GRAY_900, theme::NARROW_MAX_WIDTH, |column| {
        spawn_section_heading(column, SECTION, "Experience", PURPLE_400, 64.0);

        column
            .spawn((
                Name::new("Timeline"),
                Node {
                    width: Val::Percent(100.0),
                    ..column_node(64.0)
                },
            ))
            .with_children(|timeline| {
                timeline.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(BADGE_SIZE / 2.0),
                        top: Val::Px(BADGE_SIZE / 2.0),
                        bottom: Val::Px(BADGE_SIZE / 2.0),
                        width: Val::Px(2.0),
                        ..default()
                    },
                    BackgroundColor(PURPLE_600.with_alpha(0.5)),
                ));

                for index in 0..content.experience.len() {
                    spawn_entry(timeline, content, index);
                }
            });
    });
}

fn spawn_entry(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, index: usize) {
    let tag_count = content.experience[index].tags.len();

    parent
        .spawn((
            Name::new(format!("Experience:{index}")),
            Node {
                position_type: PositionType::Relative,
                padding: UiRect::left(Val::Px(BADGE_SIZE + 16.0)),
                ..default()
            },
        ))
        .with_children(|entry| {
            entry
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(0.0),
                        top: Val::Px(0.0),
                        width: Val::Px(BADGE_SIZE),
                        height: Val::Px(BADGE_SIZE),
                        border: UiRect::all(Val::Px(4.0)),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(BLUE_600),
                    BorderColor(PAGE_GRAY_900),
                    BorderRadius::all(Val::Px(theme::BUTTON_RADIUS)),
                ))
                .with_children(|badge| {
                    spawn_label(badge, SECTION, "[=]", theme::FONT_CARD_TITLE, TEXT_WHITE);
                });

            entry
                .spawn((
                    Interaction::default(),
                    HoverBorder {
                        normal: CARD_BORDER,
                        hovered: PURPLE_400,
                    },
                    Node {
                        flex_grow: 1.0,
                        row_gap: Val::Px(16.0),
                        ..card_node(32.0)
                    },
                    BackgroundColor(CARD_SURFACE),
                    BorderColor(CARD_BORDER),
                    BorderRadius::all(Val::Px(theme::CARD_RADIUS)),
                ))
                .with_children(|card| {
                    card.spawn(Node {
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::FlexStart,
                        ..wrap_row_node(16.0)
                    })
                    .with_children(|heading| {
                        heading
                            .spawn(column_node(4.0))
                            .with_children(|names| {
                                spawn_content_text(
                                    names,
                                    content,
                                    SECTION,
                                    ContentRef::ExperienceRole(index),
                                    theme::FONT_CARD_TITLE,
                                    TEXT_WHITE,
                                );
                                spawn_content_text(
                                    names,
                                    content,
                                    SECTION,
                                    ContentRef::ExperienceCompany(index),
                                    theme::FONT_LEAD,
                                    PURPLE_400,
                                );
                            });

                        heading
                            .spawn((
                                Node {
                                    padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                                    flex_shrink: 0.0,
                                    ..default()
                                },
                                BackgroundColor(PAGE_GRAY_800),
                                BorderRadius::all(Val::Px(theme::CHIP_RADIUS)),
                            ))
                            .with_children(|dates| {
                                spawn_content_text(
                                    dates,
                                    content,
                                    SECTION,
                                    ContentRef::ExperienceDates(index),
                                    theme::FONT_SMALL,
                                    TEXT_GRAY_400,
                                );
                            });
                    });

                    spawn_content_text(
                        card,
                        content,
                        SECTION,
                        ContentRef::ExperienceDescription(index),
                        theme::FONT_BODY,
                        TEXT_GRAY_300,
                    );

                    card.spawn(wrap_row_node(8.0)).with_children(|tags| {
                        for tag in 0..tag_count {
                            spawn_tag(
                                tags,
                                content,
                                SECTION,
                                ContentRef::ExperienceTag { entry: index, index: tag },
                                TAG_PURPLE_BG,
                                TAG_PURPLE_TEXT,
                            );
                        }
                    });
                });
        });
}
