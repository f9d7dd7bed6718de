use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::nav::Section;
use crate::segments::{try_link_segments, try_split_trigger, SplitError};

pub static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| match SiteContent::load() {
    Ok(content) => content,
    Err(e) => {
        log::error!("falling back to empty site content: {e}");
        SiteContent::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub projects_note: String,
    pub contact_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: Section,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactPopup {
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub text: String,
    pub link_word: String,
    pub popup: FactPopup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub full_description: String,
    #[serde(default)]
    pub link_words: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    pub objectives: Vec<String>,
    pub outcomes: Vec<String>,
    /// Resting tilt of the pinned card, in degrees.
    #[serde(default)]
    pub rotation: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub platform: String,
    pub handle: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: &'static str, reason: String },
    #[error("Fact {index} is malformed: {source}")]
    Fact { index: usize, source: SplitError },
    #[error("Fact {index} uses its link word {count} times")]
    RepeatedLinkWord { index: usize, count: usize },
    #[error("Project '{title}' is malformed: {source}")]
    Project { title: String, source: SplitError },
    #[error("Navigation is missing section '{0}'")]
    MissingSection(Section),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub navigation: Vec<NavigationItem>,
    pub facts: Vec<Fact>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactMethod>,
}

fn parse_file<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&data.data).map_err(|e| ContentError::ParseError {
        file,
        reason: e.to_string(),
    })
}

impl SiteContent {
    /// Parses the embedded content files.
    ///
    /// Parsing does not validate authoring rules; see [`SiteContent::validate`].
    pub fn load() -> Result<Self, ContentError> {
        let content = SiteContent {
            profile: parse_file("profile.json")?,
            navigation: parse_file("navigation.json")?,
            facts: parse_file("facts.json")?,
            projects: parse_file("projects.json")?,
            contacts: parse_file("contacts.json")?,
        };
        log::debug!(
            "loaded {} facts, {} projects, {} contacts",
            content.facts.len(),
            content.projects.len(),
            content.contacts.len()
        );
        Ok(content)
    }

    /// Collects every authoring defect in the content.
    ///
    /// Rendering degrades gracefully on these, so the test suite is where they fail loudly.
    pub fn validate(&self) -> Vec<ContentError> {
        let mut errors = Vec::new();

        for section in Section::ALL {
            if !self.navigation.iter().any(|item| item.id == section) {
                errors.push(ContentError::MissingSection(section));
            }
        }

        for (index, fact) in self.facts.iter().enumerate() {
            if let Err(source) = try_split_trigger(&fact.text, &fact.link_word) {
                errors.push(ContentError::Fact { index, source });
                continue;
            }
            let count = fact.text.matches(fact.link_word.as_str()).count();
            if count != 1 {
                errors.push(ContentError::RepeatedLinkWord { index, count });
            }
        }

        for project in &self.projects {
            if let Err(source) =
                try_link_segments(&project.full_description, &project.link_words, &project.links)
            {
                errors.push(ContentError::Project {
                    title: project.title.clone(),
                    source,
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{link_segments, split_trigger, Segment};

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.navigation.len(), 4);
        assert!(!content.facts.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.contacts.is_empty());
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = SiteContent::load().expect("embedded content should parse");
        let errors = content.validate();
        assert!(errors.is_empty(), "content defects: {errors:?}");
    }

    #[test]
    fn test_embedded_text_rejoins_with_links_in_order() {
        for fact in &SITE_CONTENT.facts {
            let segments = split_trigger(&fact.text, &fact.link_word).segments();
            let joined = segments.iter().map(Segment::text).collect::<String>();
            assert_eq!(joined, fact.text);
            assert!(segments.contains(&Segment::Trigger(fact.link_word.as_str())));
        }

        for project in &SITE_CONTENT.projects {
            let segments =
                link_segments(&project.full_description, &project.link_words, &project.links);
            let joined = segments.iter().map(Segment::text).collect::<String>();
            assert_eq!(joined, project.full_description, "{}", project.title);

            let (labels, hrefs): (Vec<&str>, Vec<&str>) = segments
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Link { label, href } => Some((*label, *href)),
                    _ => None,
                })
                .unzip();
            assert_eq!(labels, project.link_words, "{}", project.title);
            assert_eq!(hrefs, project.links, "{}", project.title);
        }
    }

    #[test]
    fn test_navigation_is_in_display_order() {
        let ids = SITE_CONTENT
            .navigation
            .iter()
            .map(|item| item.id)
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                Section::Home,
                Section::Projects,
                Section::FunFacts,
                Section::Contact
            ]
        );
    }

    #[test]
    fn test_project_type_field() {
        let json = r#"{
            "title": "t", "description": "d", "image": "i", "tags": [], "date": "2024",
            "type": "research", "fullDescription": "f", "objectives": [], "outcomes": []
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, "research");
        assert!(project.link_words.is_empty());
        assert!(project.links.is_empty());
        assert_eq!(project.rotation, 0);
    }

    #[test]
    fn test_validate_flags_defects() {
        let mut content = SiteContent::load().unwrap();
        content.navigation.retain(|item| item.id != Section::Contact);
        content.facts[0].link_word = "glacier".to_string();
        content.facts[1].text = "cube cube".to_string();
        content.facts[1].link_word = "cube".to_string();
        content.projects[0].link_words.push("nowhere".to_string());
        content.projects[0].links.push("https://example.com".to_string());

        let errors = content.validate();
        assert!(errors.contains(&ContentError::MissingSection(Section::Contact)));
        assert!(errors.contains(&ContentError::Fact {
            index: 0,
            source: SplitError::MissingWord("glacier".to_string()),
        }));
        assert!(errors.contains(&ContentError::RepeatedLinkWord { index: 1, count: 2 }));
        assert!(errors.iter().any(|e| matches!(
            e,
            ContentError::Project { source: SplitError::MissingWord(w), .. } if w == "nowhere"
        )));
    }
}
