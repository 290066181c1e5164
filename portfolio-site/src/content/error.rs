#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("profile name is empty")]
    EmptyName,
    #[error("experience entry {index} has no tags")]
    UntaggedExperience { index: usize },
    #[error("project {index} has no tags")]
    UntaggedProject { index: usize },
    #[error("no skill categories defined")]
    NoSkillCategories,
    #[error("skill category `{name}` is empty")]
    EmptySkillCategory { name: String },
    #[error("contact email `{0}` is not an address")]
    InvalidEmail(String),
}
