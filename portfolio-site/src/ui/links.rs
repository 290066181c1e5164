use bevy::prelude::*;

use crate::content::records::is_placeholder_href;
use crate::engine::scroll::{ScrollToSection, SectionId};

/// Pressing this button scrolls the page to a section.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget(pub SectionId);

/// Pressing this button follows an external href.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: String,
}

impl ExternalLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct OpenLink {
    pub href: String,
}

/// A real href was handed to the browser.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct LinkFollowed {
    pub href: String,
}

pub fn handle_action_buttons(
    buttons: Query<
        (&Interaction, Option<&ScrollTarget>, Option<&ExternalLink>),
        (Changed<Interaction>, With<Button>),
    >,
    mut scroll_requests: EventWriter<ScrollToSection>,
    mut open_requests: EventWriter<OpenLink>,
) {
    for (interaction, target, link) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Some(ScrollTarget(section)) = target {
            scroll_requests.write(ScrollToSection(*section));
        }
        if let Some(link) = link {
            open_requests.write(OpenLink {
                href: link.href.clone(),
            });
        }
    }
}

/// Follow real hrefs. Placeholder hrefs do nothing.
pub fn open_links(
    mut requests: EventReader<OpenLink>,
    mut followed: EventWriter<LinkFollowed>,
) {
    for OpenLink { href } in requests.read() {
        if is_placeholder_href(href) {
            debug!("Ignoring placeholder link");
            continue;
        }

        navigate(href);
        followed.write(LinkFollowed { href: href.clone() });
    }
}

fn navigate(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            warn!("Window object not available, cannot open {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            error!("Failed to open {}: {:?}", href, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Opening link: {}", href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<OpenLink>()
            .add_event::<LinkFollowed>()
            .add_event::<ScrollToSection>()
            .add_systems(Update, (handle_action_buttons, open_links).chain());
        app
    }

    fn followed(app: &mut App) -> Vec<String> {
        app.world_mut()
            .resource_mut::<Events<LinkFollowed>>()
            .drain()
            .map(|event| event.href)
            .collect()
    }

    #[test]
    fn test_placeholder_links_are_ignored() {
        let mut app = link_app();
        app.world_mut().send_event(OpenLink {
            href: "#".to_string(),
        });
        app.world_mut().send_event(OpenLink {
            href: String::new(),
        });
        app.update();

        assert!(followed(&mut app).is_empty());
    }

    #[test]
    fn test_real_link_is_followed_once() {
        let mut app = link_app();
        app.world_mut().send_event(OpenLink {
            href: "mailto:lekshmi@example.com".to_string(),
        });
        app.update();
        app.update();

        assert_eq!(followed(&mut app), vec!["mailto:lekshmi@example.com"]);
    }

    #[test]
    fn test_pressed_buttons_emit_their_actions() {
        let mut app = link_app();
        app.world_mut().spawn((
            Button,
            Interaction::Pressed,
            ExternalLink::new("https://github.com/example"),
        ));
        app.world_mut()
            .spawn((Button, Interaction::Pressed, ScrollTarget(SectionId::Contact)));
        app.world_mut()
            .spawn((Button, Interaction::Hovered, ScrollTarget(SectionId::About)));
        app.update();

        let scrolls: Vec<SectionId> = app
            .world_mut()
            .resource_mut::<Events<ScrollToSection>>()
            .drain()
            .map(|request| request.0)
            .collect();
        assert_eq!(scrolls, vec![SectionId::Contact]);
        assert_eq!(followed(&mut app), vec!["https://github.com/example"]);
    }
}
