use bevy::prelude::*;
use constants::palette::{CARD_BORDER, CARD_SURFACE, PAGE_GRAY_900, PURPLE_400, TEXT_GRAY_300};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::SectionId;
use crate::ui::theme;
use crate::ui::widgets::{
    HoverBorder, card_node, column_node, faded_text, spawn_content_text, spawn_section,
    spawn_section_heading,
};

const SECTION: SectionId = SectionId::Skills;

pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    spawn_section(page, SECTION, PAGE_GRAY_900, theme::CONTENT_MAX_WIDTH, |column| {
        spawn_section_heading(column, SECTION, "Technical Arsenal", PURPLE_400, 80.0);

        column
            .spawn(Node {
                width: Val::Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                align_items: AlignItems::FlexStart,
                column_gap: Val::Px(32.0),
                row_gap: Val::Px(32.0),
                ..default()
            })
            .with_children(|grid| {
                for (category, entry) in content.skills.iter().enumerate() {
                    grid.spawn((
                        Name::new(format!("SkillCategory:{category}")),
                        Node {
                            flex_grow: 1.0,
                            flex_basis: Val::Px(240.0),
                            ..column_node(12.0)
                        },
                    ))
                    .with_children(|list| {
                        list.spawn((
                            Node {
                                margin: UiRect::bottom(Val::Px(12.0)),
                                align_self: AlignSelf::Center,
                                ..default()
                            },
                            faded_text(
                                entry.name.clone(),
                                SECTION,
                                theme::FONT_LEAD,
                                PURPLE_400,
                            ),
                            ContentRef::SkillCategory(category),
                        ));

                        for index in 0..entry.skills.len() {
                            spawn_skill(list, content, category, index);
                        }
                    });
                }
            });
    });
}

fn spawn_skill(
    parent: &mut ChildSpawnerCommands,
    content: &PortfolioContent,
    category: usize,
    index: usize,
) {
    parent
        .spawn((
            Interaction::default(),
            HoverBorder {
                normal: CARD_BORDER,
                hovered: PURPLE_400,
            },
            Node {
                align_items: AlignItems::Center,
                ..card_node(12.0)
            },
            BackgroundColor(CARD_SURFACE),
            BorderColor(CARD_BORDER),
            BorderRadius::all(Val::Px(theme::CHIP_RADIUS)),
        ))
        .with_children(|chip| {
            spawn_content_text(
                chip,
                content,
                SECTION,
                ContentRef::Skill { category, index },
                theme::FONT_BODY,
                TEXT_GRAY_300,
            );
        });
}
