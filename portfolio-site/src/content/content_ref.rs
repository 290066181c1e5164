use bevy::prelude::*;

use super::records::PortfolioContent;

/// Names the source field a spawned text entity displays.
///
/// Every text node built from [`PortfolioContent`] carries one of these, so the
/// rendered page can be checked field by field against the content it came from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRef {
    NameWord(usize),
    Initials,
    Title,
    Subtitle,
    About,
    StatValue(usize),
    StatLabel(usize),
    ExperienceRole(usize),
    ExperienceCompany(usize),
    ExperienceDates(usize),
    ExperienceDescription(usize),
    ExperienceTag { entry: usize, index: usize },
    ProjectTitle(usize),
    ProjectSubtitle(usize),
    ProjectDescription(usize),
    ProjectImpact(usize),
    ProjectTag { entry: usize, index: usize },
    SkillCategory(usize),
    Skill { category: usize, index: usize },
    Achievement(usize),
    ContactBlurb,
    SocialLabel(usize),
}

impl ContentRef {
    /// Source string for this field, or `None` if the index is out of range.
    pub fn resolve<'a>(&self, content: &'a PortfolioContent) -> Option<&'a str> {
        let text = match *self {
            ContentRef::NameWord(i) => return content.profile.name_words().nth(i),
            ContentRef::Initials => &content.profile.initials,
            ContentRef::Title => &content.profile.title,
            ContentRef::Subtitle => &content.profile.subtitle,
            ContentRef::About => &content.profile.about,
            ContentRef::StatValue(i) => &content.stats.get(i)?.value,
            ContentRef::StatLabel(i) => &content.stats.get(i)?.label,
            ContentRef::ExperienceRole(i) => &content.experience.get(i)?.role,
            ContentRef::ExperienceCompany(i) => &content.experience.get(i)?.company,
            ContentRef::ExperienceDates(i) => &content.experience.get(i)?.dates,
            ContentRef::ExperienceDescription(i) => &content.experience.get(i)?.description,
            ContentRef::ExperienceTag { entry, index } => {
                content.experience.get(entry)?.tags.get(index)?
            }
            ContentRef::ProjectTitle(i) => &content.projects.get(i)?.title,
            ContentRef::ProjectSubtitle(i) => &content.projects.get(i)?.subtitle,
            ContentRef::ProjectDescription(i) => &content.projects.get(i)?.description,
            ContentRef::ProjectImpact(i) => &content.projects.get(i)?.impact,
            ContentRef::ProjectTag { entry, index } => {
                content.projects.get(entry)?.tags.get(index)?
            }
            ContentRef::SkillCategory(i) => &content.skills.get(i)?.name,
            ContentRef::Skill { category, index } => {
                content.skills.get(category)?.skills.get(index)?
            }
            ContentRef::Achievement(i) => content.achievements.get(i)?,
            ContentRef::ContactBlurb => &content.contact.blurb,
            ContentRef::SocialLabel(i) => &content.contact.links.get(i)?.label,
        };
        Some(text.as_str())
    }
}
