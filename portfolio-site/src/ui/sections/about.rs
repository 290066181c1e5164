use bevy::prelude::*;
use constants::palette::{
    CARD_BORDER, CARD_SURFACE, PAGE_BLACK, PAGE_GRAY_800, PAGE_GRAY_900, PURPLE_400,
    TEXT_GRAY_300, TEXT_GRAY_400, TEXT_WHITE,
};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::SectionId;
use crate::ui::theme;
use crate::ui::widgets::{
    HoverBorder, card_node, column_node, spawn_content_text, spawn_label, spawn_section,
    spawn_section_heading, wrap_row_node,
};

const SECTION: SectionId = SectionId::About;

pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    spawn_section(page, SECTION, PAGE_BLACK, theme::CONTENT_MAX_WIDTH, |column| {
        spawn_section_heading(column, SECTION, "About Me", PURPLE_400, 64.0);

        column
            .spawn(Node {
                justify_content: JustifyContent::Center,
                margin: UiRect::bottom(Val::Px(64.0)),
                ..wrap_row_node(24.0)
            })
            .with_children(|stats| {
                for (i, stat) in content.stats.iter().enumerate() {
                    spawn_stat_card(stats, content, i, stat.icon.glyph());
                }
            });

        column
            .spawn(Node {
                width: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..wrap_row_node(64.0)
            })
            .with_children(|body| {
                spawn_portrait(body, content);

                body.spawn(Node {
                    max_width: Val::Px(672.0),
                    flex_grow: 1.0,
                    flex_basis: Val::Px(320.0),
                    ..column_node(24.0)
                })
                .with_children(|text| {
                    spawn_content_text(
                        text,
                        content,
                        SECTION,
                        ContentRef::About,
                        theme::FONT_LEAD,
                        TEXT_GRAY_300,
                    );
                    spawn_label(
                        text,
                        SECTION,
                        "Key Achievements",
                        theme::FONT_CARD_TITLE,
                        PURPLE_400,
                    );
                    for i in 0..content.achievements.len() {
                        spawn_achievement(text, content, i);
                    }
                });
            });
    });
}

fn spawn_stat_card(
    parent: &mut ChildSpawnerCommands,
    content: &PortfolioContent,
    index: usize,
    glyph: &str,
) {
    parent
        .spawn((
            Name::new(format!("Stat:{index}")),
            Interaction::default(),
            HoverBorder {
                normal: CARD_BORDER,
                hovered: PURPLE_400,
            },
            Node {
                width: Val::Px(200.0),
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..card_node(24.0)
            },
            BackgroundColor(CARD_SURFACE),
            BorderColor(CARD_BORDER),
            BorderRadius::all(Val::Px(theme::CARD_RADIUS)),
        ))
        .with_children(|card| {
            spawn_label(card, SECTION, glyph, theme::FONT_CARD_TITLE, PURPLE_400);
            spawn_content_text(
                card,
                content,
                SECTION,
                ContentRef::StatValue(index),
                theme::FONT_STAT_VALUE,
                TEXT_WHITE,
            );
            spawn_content_text(
                card,
                content,
                SECTION,
                ContentRef::StatLabel(index),
                theme::FONT_SMALL,
                TEXT_GRAY_400,
            );
        });
}

/// Square placeholder with the initials where a photo would go.
fn spawn_portrait(parent: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    parent
        .spawn((
            Name::new("Portrait"),
            Node {
                width: Val::Px(theme::PORTRAIT_SIZE),
                height: Val::Px(theme::PORTRAIT_SIZE),
                flex_shrink: 0.0,
                border: UiRect::all(Val::Px(4.0)),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(PAGE_GRAY_900),
            BorderColor(PAGE_GRAY_800),
            BorderRadius::all(Val::Px(24.0)),
        ))
        .with_children(|portrait| {
            spawn_content_text(
                portrait,
                content,
                SECTION,
                ContentRef::Initials,
                theme::FONT_HERO,
                TEXT_WHITE,
            );
        });
}

fn spawn_achievement(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, index: usize) {
    parent
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::FlexStart,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(8.0),
                    height: Val::Px(8.0),
                    margin: UiRect::top(Val::Px(8.0)),
                    flex_shrink: 0.0,
                    ..default()
                },
                BackgroundColor(PURPLE_400),
                BorderRadius::MAX,
            ));
            spawn_content_text(
                row,
                content,
                SECTION,
                ContentRef::Achievement(index),
                theme::FONT_BODY,
                TEXT_GRAY_300,
            );
        });
}
