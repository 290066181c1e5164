use bevy::prelude::*;
use serde::Deserialize;

use super::error::ContentError;

const EMBEDDED_CONTENT: &str = include_str!("../../assets/portfolio.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub title: String,
    pub subtitle: String,
    pub about: String,
}

impl Profile {
    /// Name split on whitespace, one entry per animated word on the landing hero.
    pub fn name_words(&self) -> impl Iterator<Item = &str> {
        self.name.split_whitespace()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Award,
    Code,
    Briefcase,
}

impl StatIcon {
    /// ASCII glyph drawn above the stat; the default UI font has no icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::Award => "*",
            StatIcon::Code => "</>",
            StatIcon::Briefcase => "[=]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: StatIcon,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub dates: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub impact: String,
    pub tags: Vec<String>,
    /// Gradient identifier such as `"purple-blue"`, resolved by the UI theme.
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_href(&self.href)
    }
}

/// `"#"` and empty hrefs are dead links kept for layout only.
pub fn is_placeholder_href(href: &str) -> bool {
    let href = href.trim();
    href.is_empty() || href == "#"
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub blurb: String,
    /// Target of the "View GitHub" button.
    pub github: String,
    pub links: Vec<SocialLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the page displays. Read-only after startup.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub achievements: Vec<String>,
    pub contact: Contact,
}

impl PortfolioContent {
    /// Content compiled into the binary from `assets/portfolio.json`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Reject documents that would render as empty or broken blocks.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }

        if let Some(index) = self.experience.iter().position(|e| e.tags.is_empty()) {
            return Err(ContentError::UntaggedExperience { index });
        }

        if let Some(index) = self.projects.iter().position(|p| p.tags.is_empty()) {
            return Err(ContentError::UntaggedProject { index });
        }

        if self.skills.is_empty() {
            return Err(ContentError::NoSkillCategories);
        }

        if let Some(category) = self.skills.iter().find(|c| c.skills.is_empty()) {
            return Err(ContentError::EmptySkillCategory {
                name: category.name.clone(),
            });
        }

        if !self.contact.email.contains('@') {
            return Err(ContentError::InvalidEmail(self.contact.email.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioContent {
        PortfolioContent::embedded().expect("embedded content must parse")
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = sample();
        assert_eq!(content.profile.name, "Lekshmi Madhusudhanan");
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.experience.len(), 2);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.achievements.len(), 5);
    }

    #[test]
    fn test_skill_category_order_is_preserved() {
        let names: Vec<_> = sample().skills.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Languages", "ML/AI", "Finance", "Tools"]);
    }

    #[test]
    fn test_name_words() {
        let content = sample();
        let words: Vec<_> = content.profile.name_words().collect();
        assert_eq!(words, ["Lekshmi", "Madhusudhanan"]);
    }

    #[test]
    fn test_placeholder_links() {
        let content = sample();
        let placeholders: Vec<_> = content
            .contact
            .links
            .iter()
            .map(SocialLink::is_placeholder)
            .collect();
        assert_eq!(placeholders, [false, true, true]);
        assert!(is_placeholder_href(&content.contact.github));
        assert_eq!(content.contact.mailto(), "mailto:lekshmi@example.com");
    }

    #[test]
    fn test_rejects_empty_tag_list() {
        let mut content = sample();
        content.projects[2].tags.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UntaggedProject { index: 2 })
        ));
    }

    #[test]
    fn test_rejects_empty_skill_category() {
        let mut content = sample();
        content.skills[1].skills.clear();
        match content.validate() {
            Err(ContentError::EmptySkillCategory { name }) => assert_eq!(name, "ML/AI"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut content = sample();
        content.contact.email = "nobody".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = PortfolioContent::from_json("{ \"profile\": 3 }");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
