//! Site Models
//!
//! Data structures for the static portfolio content.

use serde::{Deserialize, Serialize};

/// Accent gradient applied to a project slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Blue to purple
    Ocean,
    /// Green to teal
    Meadow,
    /// Orange to red
    Ember,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Ocean => "accent-ocean",
            Accent::Meadow => "accent-meadow",
            Accent::Ember => "accent-ember",
        }
    }
}

/// A portfolio project entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display title
    pub title: String,
    /// Short pitch, inline markdown allowed
    pub summary: String,
    /// Cover image URL
    pub image: String,
    /// Tech stack shown as badges
    pub technologies: Vec<String>,
    /// Deployed demo, if one exists
    pub live_url: Option<String>,
    /// Source repository
    pub repo_url: String,
    /// Slide accent gradient
    pub accent: Accent,
}

/// External channel kinds used for contact and social rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Github,
    Linkedin,
    Email,
}

/// A single contact/social row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub channel: Channel,
    /// Visible text, e.g. "github.com/winston"
    pub label: String,
    /// Target href (https or mailto)
    pub url: String,
}

/// Site owner profile shown in the hero and about sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Hero tagline, inline markdown allowed
    pub tagline: String,
    /// Portrait image URL
    pub portrait: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

/// Tutoring promo content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutoringOffer {
    pub heading: String,
    /// Pitch paragraph, inline markdown allowed
    pub pitch: String,
    /// Subjects shown as badges
    pub topics: Vec<String>,
    /// Subject line for the inquiry mailto link
    pub inquiry_subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_class_mapping() {
        assert_eq!(Accent::Ocean.class(), "accent-ocean");
        assert_eq!(Accent::Meadow.class(), "accent-meadow");
        assert_eq!(Accent::Ember.class(), "accent-ember");
    }
}
