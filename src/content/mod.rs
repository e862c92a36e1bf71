//! Read-only reference data: project records and the fixed text tables.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Iframe,
    Video,
    Image,
}

/// Where a project's demo lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Demo {
    #[serde(rename = "type")]
    pub kind: DemoKind,
    pub source: String,
}

/// One portfolio project. `id` is unique within a [`Content`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub demo: Demo,
}

impl ProjectRecord {
    /// Live deployment URL; `#` placeholders count as missing.
    pub fn live_link(&self) -> Option<&str> {
        self.live_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != "#")
    }
}

/// On-disk shape of a content file. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ContentFile {
    projects: Option<Vec<ProjectRecord>>,
    help: Option<Vec<String>>,
    skills: Option<Vec<String>>,
    contact: Option<Vec<String>>,
    about: Option<Vec<String>>,
    resume: Option<Vec<String>>,
    welcome: Option<Vec<String>>,
}

/// All static tables the interpreter reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub projects: Vec<ProjectRecord>,
    pub help: Vec<String>,
    pub skills: Vec<String>,
    pub contact: Vec<String>,
    pub about: Vec<String>,
    pub resume: Vec<String>,
    /// Banner that opens every fresh session.
    pub welcome: Vec<String>,
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Content {
    pub fn builtin() -> Self {
        Self {
            projects: builtin::projects(),
            help: builtin::help(),
            skills: builtin::skills(),
            contact: builtin::contact(),
            about: builtin::about(),
            resume: builtin::resume(),
            welcome: builtin::welcome(),
        }
    }

    /// Parse a JSON content document, filling omitted tables from the built-in set.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        let builtin = Self::builtin();

        let content = Self {
            projects: file.projects.unwrap_or(builtin.projects),
            help: file.help.unwrap_or(builtin.help),
            skills: file.skills.unwrap_or(builtin.skills),
            contact: file.contact.unwrap_or(builtin.contact),
            about: file.about.unwrap_or(builtin.about),
            resume: file.resume.unwrap_or(builtin.resume),
            welcome: file.welcome.unwrap_or(builtin.welcome),
        };
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Exact, case-sensitive lookup by id.
    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(ContentError::EmptyProjectId(project.name.clone()));
            }
            // `open` takes a single whitespace-delimited word.
            if project.id.contains(char::is_whitespace) {
                return Err(ContentError::InvalidProjectId(project.id.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_ids_are_unique() {
        let content = Content::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.project("career-coach").map(|p| p.name.as_str()), Some("Career Coach"));
        assert!(content.project("Career-Coach").is_none());
    }

    #[test]
    fn partial_file_keeps_builtin_tables() {
        let json = r#"{
            "projects": [{
                "id": "ray",
                "name": "Ray Tracer",
                "tagline": "Pixels.",
                "description": "A small path tracer.",
                "technologies": ["Rust"],
                "liveUrl": "https://example.com/ray",
                "demo": { "type": "video", "source": "ray.mp4" }
            }],
            "about": ["Just me."]
        }"#;
        let content = Content::from_json_str(json).unwrap();
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].demo.kind, DemoKind::Video);
        assert_eq!(content.projects[0].github_url, None);
        assert_eq!(content.about, vec!["Just me.".to_string()]);
        assert_eq!(content.help, Content::builtin().help);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{ "projects": [
            { "id": "a", "name": "A", "tagline": "", "description": "", "demo": { "type": "image", "source": "" } },
            { "id": "a", "name": "B", "tagline": "", "description": "", "demo": { "type": "image", "source": "" } }
        ] }"#;
        let err = Content::from_json_str(json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(id) if id == "a"));
    }

    #[test]
    fn blank_id_is_rejected() {
        let json = r#"{ "projects": [
            { "id": " ", "name": "Nameless", "tagline": "", "description": "", "demo": { "type": "image", "source": "" } }
        ] }"#;
        assert!(matches!(
            Content::from_json_str(json),
            Err(ContentError::EmptyProjectId(_))
        ));
    }

    #[test]
    fn id_with_whitespace_is_rejected() {
        let json = r#"{ "projects": [
            { "id": "my project", "name": "Mine", "tagline": "", "description": "", "demo": { "type": "image", "source": "" } }
        ] }"#;
        let err = Content::from_json_str(json).unwrap_err();
        assert!(matches!(err, ContentError::InvalidProjectId(id) if id == "my project"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "skills": ["Rust: everything"] }}"#).unwrap();
        let content = Content::load(file.path()).unwrap();
        assert_eq!(content.skills, vec!["Rust: everything".to_string()]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Content::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn placeholder_live_url_is_hidden() {
        let content = Content::builtin();
        assert_eq!(content.project("career-coach").unwrap().live_link(), None);
    }
}
