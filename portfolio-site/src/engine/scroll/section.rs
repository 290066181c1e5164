use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Landing,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Landing,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Landing => "landing",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// Label on the header navigation button.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Landing => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root node of a page section.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSection(pub SectionId);
