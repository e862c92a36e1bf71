//! Colours for each theme, shared by the GUI and console frontends.

use crate::session::{EntryKind, Theme};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub prompt: Rgb,
    pub location: Rgb,
    pub input: Rgb,
    pub output: Rgb,
    pub error: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
}

const STANDARD: Palette = Palette {
    background: Rgb(3, 7, 18),
    border: Rgb(22, 78, 99),
    prompt: Rgb(74, 222, 128),
    location: Rgb(96, 165, 250),
    input: Rgb(34, 211, 238),
    output: Rgb(165, 243, 252),
    error: Rgb(248, 113, 113),
    accent: Rgb(34, 211, 238),
    muted: Rgb(100, 116, 139),
};

const VOID: Palette = Palette {
    background: Rgb(10, 0, 0),
    border: Rgb(127, 29, 29),
    prompt: Rgb(220, 38, 38),
    location: Rgb(153, 27, 27),
    input: Rgb(239, 68, 68),
    output: Rgb(153, 27, 27),
    error: Rgb(254, 202, 202),
    accent: Rgb(239, 68, 68),
    muted: Rgb(87, 83, 78),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Standard => &STANDARD,
            Theme::Void => &VOID,
        }
    }

    pub fn entry(&self, kind: EntryKind) -> Rgb {
        match kind {
            EntryKind::Input => self.input,
            EntryKind::Output => self.output,
            EntryKind::Error => self.error,
        }
    }
}

/// The `user@theme` and `~path` halves of the prompt, for coloured rendering.
pub fn prompt_parts(theme: Theme, path: &str) -> (String, String) {
    (format!("diizzy@{theme}"), format!("~{path}"))
}

/// Prompt shown before the input line, e.g. `diizzy@standard:~/projects$`.
pub fn prompt(theme: Theme, path: &str) -> String {
    let (user, location) = prompt_parts(theme, path);
    format!("{user}:{location}$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Location;

    #[test]
    fn errors_stand_out_from_output() {
        for theme in [Theme::Standard, Theme::Void] {
            let palette = Palette::for_theme(theme);
            assert_ne!(palette.entry(EntryKind::Error), palette.entry(EntryKind::Output));
        }
    }

    #[test]
    fn prompt_names_theme_and_path() {
        assert_eq!(
            prompt(Theme::Void, &Location::Projects.path()),
            "diizzy@void:~/projects$"
        );
        assert_eq!(prompt(Theme::Standard, &Location::Root.path()), "diizzy@standard:~/$");
        assert_eq!(
            prompt_parts(Theme::Standard, "/about"),
            ("diizzy@standard".to_string(), "~/about".to_string())
        );
    }
}
