//! Session state for one terminal session and the deltas that replace it.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Display kind of a history line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Input,
    Output,
    Error,
}

/// One line of terminal history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    kind: EntryKind,
    text: String,
}

impl Entry {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Input,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Output,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Error,
            text: text.into(),
        }
    }

    /// Empty output line used as a separator after each command.
    pub fn blank() -> Self {
        Self::output(String::new())
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Simulated working directory. Root is the only directory with children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Root,
    Projects,
    Skills,
    Contact,
    About,
}

impl Location {
    /// The leaf directories, in listing order.
    pub const CHILDREN: [Location; 4] = [
        Location::Projects,
        Location::Skills,
        Location::Contact,
        Location::About,
    ];

    /// Resolve a directory name such as `projects`. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CHILDREN.into_iter().find(|loc| loc.name() == name)
    }

    /// Bare directory name; empty for root.
    pub fn name(self) -> &'static str {
        match self {
            Location::Root => "",
            Location::Projects => "projects",
            Location::Skills => "skills",
            Location::Contact => "contact",
            Location::About => "about",
        }
    }

    /// Absolute path, `/` or `/<name>`.
    pub fn path(self) -> String {
        format!("/{}", self.name())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Tag naming the content panel shown beside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Welcome,
    Help,
    Projects,
    Skills,
    About,
    Contact,
    Resume,
    ProjectDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Standard,
    Void,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Standard => Theme::Void,
            Theme::Void => Theme::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Standard => "standard",
            Theme::Void => "void",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Theme::Standard),
            "void" => Ok(Theme::Void),
            _ => Err(ConfigError::InvalidTheme(s.to_string())),
        }
    }
}

/// Requests that reach beyond the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Replace the session with a fresh one and replay the boot sequence.
    Reboot,
    /// Close the terminal.
    Exit,
}

/// Navigation, selection, view and theme changes carried by one dispatch.
///
/// `None` leaves the field alone. For `selection`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    pub location: Option<Location>,
    pub selection: Option<Option<String>>,
    pub view: Option<View>,
    pub theme: Option<Theme>,
}

impl Change {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn view(view: View) -> Self {
        Self {
            view: Some(view),
            ..Self::default()
        }
    }
}

/// Everything a single dispatch does to the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Entries appended to the history, after any reset.
    pub entries: Vec<Entry>,
    /// Empty the history before appending.
    pub reset_history: bool,
    pub change: Change,
    pub signal: Option<Signal>,
}

impl Dispatch {
    pub fn is_noop(&self) -> bool {
        *self == Dispatch::default()
    }
}

/// History, location, selection, view and theme of one session.
///
/// Each dispatch consumes the current value and produces the next one, so a
/// command either applies completely or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    history: Vec<Entry>,
    location: Location,
    selection: Option<String>,
    view: View,
    theme: Theme,
}

impl SessionState {
    /// Fresh session whose history starts with the banner lines.
    pub fn new(banner: &[String], theme: Theme) -> Self {
        Self {
            history: banner.iter().cloned().map(Entry::output).collect(),
            theme,
            ..Self::default()
        }
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Id of the project opened with `open`, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Produce the next session state from a dispatch.
    pub fn apply(self, dispatch: Dispatch) -> Self {
        let Dispatch {
            entries,
            reset_history,
            change,
            signal: _,
        } = dispatch;

        let mut history = if reset_history { Vec::new() } else { self.history };
        history.extend(entries);

        let location = change.location.unwrap_or(self.location);
        let mut selection = match change.selection {
            Some(next) => next,
            None => self.selection,
        };
        // Selection only lives inside /projects.
        if location != Location::Projects {
            selection = None;
        }

        Self {
            history,
            location,
            selection,
            view: change.view.unwrap_or(self.view),
            theme: change.theme.unwrap_or(self.theme),
        }
    }
}
