use bevy::prelude::*;
use constants::palette::{
    CARD_BORDER, CARD_SURFACE, NAV_HOVER_BG, PAGE_BLACK, PINK_600, PURPLE_400, PURPLE_600,
    TEXT_GRAY_400,
};

use crate::content::{ContentRef, PortfolioContent};
use crate::engine::scroll::SectionId;
use crate::ui::links::ExternalLink;
use crate::ui::theme;
use crate::ui::widgets::{
    ButtonStyle, HoverBorder, faded_text, spawn_button, spawn_content_text, spawn_section,
    spawn_section_heading, wrap_row_node,
};

const SECTION: SectionId = SectionId::Contact;

pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    spawn_section(page, SECTION, PAGE_BLACK, theme::NARROW_MAX_WIDTH, |column| {
        spawn_section_heading(column, SECTION, "Let's Connect", PURPLE_400, 32.0);

        column
            .spawn(Node {
                max_width: Val::Px(672.0),
                margin: UiRect::bottom(Val::Px(48.0)),
                ..default()
            })
            .with_children(|blurb| {
                blurb.spawn((
                    ContentRef::ContactBlurb,
                    faded_text(
                        content.contact.blurb.clone(),
                        SECTION,
                        theme::FONT_LEAD,
                        TEXT_GRAY_400,
                    ),
                    TextLayout::new_with_justify(JustifyText::Center),
                ));
            });

        column
            .spawn(Node {
                justify_content: JustifyContent::Center,
                margin: UiRect::bottom(Val::Px(48.0)),
                ..wrap_row_node(24.0)
            })
            .with_children(|actions| {
                spawn_button(
                    actions,
                    SECTION,
                    "Send Email",
                    ButtonStyle::solid(PURPLE_600, PINK_600),
                    None,
                    ExternalLink::new(content.contact.mailto()),
                );
                spawn_button(
                    actions,
                    SECTION,
                    "View GitHub",
                    ButtonStyle::solid(Color::NONE, NAV_HOVER_BG),
                    Some(PURPLE_600.with_alpha(0.5)),
                    ExternalLink::new(content.contact.github.clone()),
                );
            });

        column
            .spawn(Node {
                justify_content: JustifyContent::Center,
                ..wrap_row_node(32.0)
            })
            .with_children(|socials| {
                for (index, link) in content.contact.links.iter().enumerate() {
                    spawn_social_link(socials, content, index, &link.href);
                }
            });
    });
}

fn spawn_social_link(
    parent: &mut ChildSpawnerCommands,
    content: &PortfolioContent,
    index: usize,
    href: &str,
) {
    parent
        .spawn((
            Button,
            Name::new(format!("Social:{index}")),
            ExternalLink::new(href),
            ButtonStyle::solid(CARD_SURFACE, NAV_HOVER_BG),
            HoverBorder {
                normal: CARD_BORDER,
                hovered: PURPLE_400,
            },
            Node {
                padding: UiRect::axes(Val::Px(20.0), Val::Px(14.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(CARD_SURFACE),
            BorderColor(CARD_BORDER),
            BorderRadius::all(Val::Px(theme::BUTTON_RADIUS)),
        ))
        .with_children(|button| {
            spawn_content_text(
                button,
                content,
                SECTION,
                ContentRef::SocialLabel(index),
                theme::FONT_SMALL,
                TEXT_GRAY_400,
            );
        });
}
