use bevy::prelude::*;

use super::header::spawn_header;
use super::sections::{about, contact, experience, footer, landing, projects, skills};
use crate::content::PortfolioContent;
use crate::engine::scroll::PageRoot;

/// Mount the header overlay and the scrollable page with every section in
/// document order.
pub fn spawn_page(mut commands: Commands, content: Res<PortfolioContent>) {
    info!("Mounting page");

    spawn_header(&mut commands, &content);

    commands
        .spawn((
            PageRoot,
            Name::new("Page"),
            Node {
                width: Val::Vw(100.0),
                height: Val::Vh(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
        ))
        .with_children(|page| {
            landing::spawn(page, &content);
            about::spawn(page, &content);
            experience::spawn(page, &content);
            projects::spawn(page, &content);
            skills::spawn(page, &content);
            contact::spawn(page, &content);
            footer::spawn(page, &content);
        });
}
