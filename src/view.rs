//! Chooses the content panel shown beside the terminal.

use crate::content::{Content, ProjectRecord};
use crate::session::{SessionState, View};

/// The panel to render, borrowing whatever content it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
    Welcome,
    Help(&'a [String]),
    Projects(&'a [ProjectRecord]),
    Skills(&'a [String]),
    About(&'a [String]),
    Contact(&'a [String]),
    Resume(&'a [String]),
    ProjectDetail(&'a ProjectRecord),
}

/// Derive the panel from the session. Terminal history plays no part.
pub fn select<'a>(state: &SessionState, content: &'a Content) -> Panel<'a> {
    match state.view() {
        View::Welcome => Panel::Welcome,
        View::Help => Panel::Help(&content.help),
        View::Projects => Panel::Projects(&content.projects),
        View::Skills => Panel::Skills(&content.skills),
        View::About => Panel::About(&content.about),
        View::Contact => Panel::Contact(&content.contact),
        View::Resume => Panel::Resume(&content.resume),
        View::ProjectDetail => state
            .selection()
            .and_then(|id| content.project(id))
            .map_or(Panel::Welcome, Panel::ProjectDetail),
    }
}

/// Group skill lines of the form `Category: a, b` into (category, items).
///
/// Lines without a category continue the previous group.
pub fn skill_groups(lines: &[String]) -> Vec<(String, String)> {
    let mut groups: Vec<(String, String)> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.split_once(':') {
            Some((category, items)) if !line.starts_with(char::is_whitespace) => {
                groups.push((category.trim().to_string(), items.trim().to_string()));
            }
            _ => match groups.last_mut() {
                Some((_, items)) => {
                    if !items.is_empty() && !items.ends_with(',') {
                        items.push(',');
                    }
                    if !items.is_empty() {
                        items.push(' ');
                    }
                    items.push_str(trimmed);
                }
                None => groups.push((String::new(), trimmed.to_string())),
            },
        }
    }
    groups
}

/// Plain-text project card used by text frontends.
pub fn detail_lines(project: &ProjectRecord) -> Vec<String> {
    let mut lines = vec![
        format!("== {} ==", project.name),
        project.tagline.clone(),
        String::new(),
        project.description.clone(),
        String::new(),
        format!("Tech Stack: {}", project.technologies.join(", ")),
    ];
    if let Some(github) = &project.github_url {
        lines.push(format!("Source: {github}"));
    }
    if let Some(live) = project.live_link() {
        lines.push(format!("Live: {live}"));
    }
    lines
}
