use bevy::prelude::*;
use chrono::Datelike;
use constants::palette::{PAGE_BLACK, PAGE_GRAY_800, TEXT_GRAY_500};

use crate::content::PortfolioContent;
use crate::engine::scroll::ScrollTrailer;
use crate::ui::theme;

pub fn footer_text(year: i32, name: &str) -> String {
    format!("© {year} {name}. Crafted with innovation.")
}

/// Closing strip after the contact section. Counts toward scroll height only.
pub fn spawn(page: &mut ChildSpawnerCommands, content: &PortfolioContent) {
    let year = chrono::Local::now().year();

    page.spawn((
        ScrollTrailer,
        Name::new("Footer"),
        Node {
            width: Val::Percent(100.0),
            flex_shrink: 0.0,
            padding: UiRect::all(Val::Px(32.0)),
            border: UiRect::top(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(PAGE_BLACK),
        BorderColor(PAGE_GRAY_800),
    ))
    .with_children(|footer| {
        footer.spawn((
            Text::new(footer_text(year, &content.profile.name)),
            TextFont {
                font_size: theme::FONT_SMALL,
                ..default()
            },
            TextColor(TEXT_GRAY_500),
        ));
    });
}
