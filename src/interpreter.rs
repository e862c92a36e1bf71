//! The command interpreter.
//!
//! `dispatch` is a pure function of the input line and the current session
//! state: it looks the command word up in the registry, runs the matching
//! handler and returns a [`Dispatch`] describing the entries to append and the
//! state changes to make. It never renders anything and never fails; user
//! mistakes come back as error entries.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::command::{self, CommandKind};
use crate::content::Content;
use crate::session::{Change, Dispatch, Entry, Location, SessionState, Signal, Theme, View};

/// Source of the current time for `whoami`.
pub type Clock = fn() -> DateTime<Utc>;

/// What a handler wants done.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    /// Echo the input, print `lines`, add a separator.
    Output { lines: Vec<Entry>, change: Change },
    /// Empty the history without echoing anything.
    Reset { change: Change },
    Signal(Signal),
}

impl Reply {
    fn lines(lines: Vec<Entry>, change: Change) -> Self {
        Reply::Output { lines, change }
    }

    fn error(text: String) -> Self {
        Reply::Output {
            lines: vec![Entry::error(text)],
            change: Change::none(),
        }
    }

    fn into_dispatch(self, raw: &str) -> Dispatch {
        match self {
            Reply::Output { lines, change } => {
                let mut entries = Vec::with_capacity(lines.len() + 2);
                entries.push(Entry::input(raw));
                entries.extend(lines);
                entries.push(Entry::blank());
                Dispatch {
                    entries,
                    change,
                    ..Dispatch::default()
                }
            }
            Reply::Reset { change } => Dispatch {
                reset_history: true,
                change,
                ..Dispatch::default()
            },
            Reply::Signal(signal) => Dispatch {
                signal: Some(signal),
                ..Dispatch::default()
            },
        }
    }
}

/// Read-only inputs available to a handler.
struct Context<'a> {
    content: &'a Content,
    state: &'a SessionState,
    now: DateTime<Utc>,
}

type Handler = fn(&[&str], &Context<'_>) -> Reply;

fn handler(kind: CommandKind) -> Handler {
    match kind {
        CommandKind::Help => help,
        CommandKind::Projects => projects,
        CommandKind::Skills => skills,
        CommandKind::About => about,
        CommandKind::Contact => contact,
        CommandKind::Resume => resume,
        CommandKind::Whoami => whoami,
        CommandKind::Clear => clear,
        CommandKind::Ls => ls,
        CommandKind::Cd => cd,
        CommandKind::Open => open,
        CommandKind::Reboot => reboot,
        CommandKind::Exit => exit,
        CommandKind::Diizzy => diizzy,
    }
}

pub struct Interpreter {
    content: Arc<Content>,
    clock: Clock,
}

impl Interpreter {
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            content,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Interpret one submitted line against the current state.
    pub fn dispatch(&self, line: &str, state: &SessionState) -> Dispatch {
        let Some(parsed) = command::parse(line) else {
            return Dispatch::default();
        };

        let ctx = Context {
            content: &self.content,
            state,
            now: (self.clock)(),
        };

        let reply = match CommandKind::from_name(&parsed.name) {
            Some(kind) => {
                debug!(command = kind.name(), args = parsed.args.len(), "dispatch");
                handler(kind)(&parsed.args, &ctx)
            }
            None => {
                debug!(input = parsed.raw, "unrecognized command");
                Reply::error(format!(
                    "Command not found: {}. Type \"help\" for available commands.",
                    parsed.raw
                ))
            }
        };

        reply.into_dispatch(parsed.raw)
    }
}

fn output_lines(lines: &[String]) -> Vec<Entry> {
    lines.iter().cloned().map(Entry::output).collect()
}

fn help(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::lines(output_lines(&ctx.content.help), Change::view(View::Help))
}

fn projects(_: &[&str], ctx: &Context<'_>) -> Reply {
    let mut lines = vec![Entry::output("DIRECTORY LISTING OF /PROJECTS")];
    lines.extend(
        ctx.content
            .projects
            .iter()
            .map(|p| Entry::output(format!("drwx-xr-x  {:<16}  {}", p.id, p.tagline))),
    );
    lines.push(Entry::output("Hint: use 'open [id]' to view details."));
    Reply::lines(lines, Change::view(View::Projects))
}

fn skills(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::lines(output_lines(&ctx.content.skills), Change::view(View::Skills))
}

fn about(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::lines(output_lines(&ctx.content.about), Change::view(View::About))
}

fn contact(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::lines(output_lines(&ctx.content.contact), Change::view(View::Contact))
}

fn resume(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::lines(output_lines(&ctx.content.resume), Change::view(View::Resume))
}

fn whoami(_: &[&str], ctx: &Context<'_>) -> Reply {
    let (user, group) = match ctx.state.theme() {
        Theme::Standard => ("guest", "visitors"),
        Theme::Void => ("UNKNOWN_ENTITY", "VOID_WALKERS"),
    };
    Reply::lines(
        vec![
            Entry::output(format!("USER: {user}")),
            Entry::output(format!("GROUP: {group}")),
            Entry::output(format!(
                "SESSION: {}",
                ctx.now.to_rfc3339_opts(SecondsFormat::Millis, true)
            )),
        ],
        Change::none(),
    )
}

fn clear(_: &[&str], _: &Context<'_>) -> Reply {
    Reply::Reset {
        change: Change::none(),
    }
}

fn diizzy(_: &[&str], ctx: &Context<'_>) -> Reply {
    Reply::Reset {
        change: Change {
            theme: Some(ctx.state.theme().toggled()),
            view: Some(View::Welcome),
            ..Change::none()
        },
    }
}

fn reboot(_: &[&str], _: &Context<'_>) -> Reply {
    Reply::Signal(Signal::Reboot)
}

fn exit(_: &[&str], _: &Context<'_>) -> Reply {
    Reply::Signal(Signal::Exit)
}

fn ls(_: &[&str], ctx: &Context<'_>) -> Reply {
    let lines = match ctx.state.location() {
        Location::Root => Location::CHILDREN
            .iter()
            .map(|loc| Entry::output(format!("{}/", loc.name())))
            .collect(),
        Location::Projects => ctx
            .content
            .projects
            .iter()
            .map(|p| Entry::output(p.id.clone()))
            .collect(),
        other => vec![Entry::output(format!("{}/", other.name()))],
    };
    Reply::lines(lines, Change::none())
}

fn resolve_dir(target: &str) -> Option<Location> {
    match target {
        "" | "/" | "~" | ".." | "../" => Some(Location::Root),
        name => Location::from_name(name.strip_suffix('/').unwrap_or(name)),
    }
}

fn cd(args: &[&str], ctx: &Context<'_>) -> Reply {
    let target = args.first().copied().unwrap_or("");
    let Some(location) = resolve_dir(target) else {
        return Reply::error(format!("cd: no such file or directory: {target}"));
    };

    let mut change = Change {
        location: Some(location),
        selection: Some(None),
        ..Change::none()
    };
    // The detail panel has nothing to show once the selection is gone.
    if ctx.state.view() == View::ProjectDetail {
        change.view = Some(View::Welcome);
    }

    Reply::lines(
        vec![Entry::output(format!("Changed directory to {}", location.path()))],
        change,
    )
}

fn open(args: &[&str], ctx: &Context<'_>) -> Reply {
    if ctx.state.location() != Location::Projects {
        return Reply::error(
            "'open' command can only be used from the /projects directory.".to_string(),
        );
    }

    let id = args.first().copied().unwrap_or("");
    match ctx.content.project(id) {
        Some(project) => Reply::lines(
            vec![Entry::output(format!("Opening project: {}", project.name))],
            Change {
                selection: Some(Some(project.id.clone())),
                view: Some(View::ProjectDetail),
                ..Change::none()
            },
        ),
        None => Reply::error(format!("Error: Project with ID \"{id}\" not found.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EntryKind;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn interpreter() -> Interpreter {
        Interpreter::new(Arc::new(Content::builtin())).with_clock(fixed_now)
    }

    fn run(interp: &Interpreter, state: SessionState, line: &str) -> (SessionState, Dispatch) {
        let dispatch = interp.dispatch(line, &state);
        (state.apply(dispatch.clone()), dispatch)
    }

    fn texts(dispatch: &Dispatch) -> Vec<&str> {
        dispatch.entries.iter().map(Entry::text).collect()
    }

    #[test]
    fn empty_line_is_a_true_noop() {
        let interp = interpreter();
        let state = SessionState::default();
        assert!(interp.dispatch("", &state).is_noop());
        assert!(interp.dispatch("    ", &state).is_noop());
    }

    #[test]
    fn output_is_framed_by_echo_and_separator() {
        let interp = interpreter();
        let dispatch = interp.dispatch("  help ", &SessionState::default());
        let first = dispatch.entries.first().unwrap();
        let last = dispatch.entries.last().unwrap();
        assert_eq!(first.kind(), EntryKind::Input);
        assert_eq!(first.text(), "help");
        assert_eq!(last.kind(), EntryKind::Output);
        assert_eq!(last.text(), "");
        assert_eq!(dispatch.change.view, Some(View::Help));
    }

    #[test]
    fn unknown_command_reports_the_input() {
        let interp = interpreter();
        let dispatch = interp.dispatch("sudo rm -rf", &SessionState::default());
        let errors: Vec<_> = dispatch
            .entries
            .iter()
            .filter(|e| e.kind() == EntryKind::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].text(),
            "Command not found: sudo rm -rf. Type \"help\" for available commands."
        );
        assert_eq!(dispatch.change, Change::none());
    }

    #[test]
    fn command_names_ignore_case() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "CD projects");
        assert_eq!(state.location(), Location::Projects);
    }

    #[test]
    fn cd_accepts_root_aliases_and_trailing_slash() {
        let interp = interpreter();
        for target in ["cd", "cd /", "cd ~", "cd ..", "cd ../"] {
            let (state, _) = run(&interp, SessionState::default(), "cd skills");
            let (state, dispatch) = run(&interp, state, target);
            assert_eq!(state.location(), Location::Root, "{target}");
            assert_eq!(texts(&dispatch)[1], "Changed directory to /");
        }
        let (state, _) = run(&interp, SessionState::default(), "cd projects/");
        assert_eq!(state.location(), Location::Projects);
    }

    #[test]
    fn cd_is_case_sensitive_on_names() {
        let interp = interpreter();
        let (state, dispatch) = run(&interp, SessionState::default(), "cd Projects");
        assert_eq!(state.location(), Location::Root);
        assert_eq!(dispatch.entries[1].kind(), EntryKind::Error);
        assert_eq!(texts(&dispatch)[1], "cd: no such file or directory: Projects");
    }

    #[test]
    fn failed_cd_keeps_the_selection() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "cd projects");
        let (state, _) = run(&interp, state, "open saive");
        let (state, _) = run(&interp, state, "cd nowhere");
        assert_eq!(state.selection(), Some("saive"));
        assert_eq!(state.view(), View::ProjectDetail);
    }

    #[test]
    fn cd_away_from_detail_returns_to_welcome() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "cd projects");
        let (state, _) = run(&interp, state, "open deyapify");
        let (state, _) = run(&interp, state, "cd projects");
        assert_eq!(state.selection(), None);
        assert_eq!(state.view(), View::Welcome);
    }

    #[test]
    fn cd_keeps_unrelated_views() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "skills");
        let (state, _) = run(&interp, state, "cd about");
        assert_eq!(state.view(), View::Skills);
    }

    #[test]
    fn open_requires_projects_directory() {
        let interp = interpreter();
        for dir in ["", "skills", "contact", "about"] {
            let (state, _) = run(&interp, SessionState::default(), &format!("cd {dir}"));
            let (state, dispatch) = run(&interp, state, "open career-coach");
            assert_eq!(state.selection(), None);
            assert_eq!(
                texts(&dispatch)[1],
                "'open' command can only be used from the /projects directory."
            );
        }
    }

    #[test]
    fn open_matches_ids_exactly() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "cd projects");
        let (state, dispatch) = run(&interp, state, "open Career-Coach");
        assert_eq!(state.selection(), None);
        assert_eq!(
            texts(&dispatch)[1],
            "Error: Project with ID \"Career-Coach\" not found."
        );

        let (state, dispatch) = run(&interp, state, "open career-coach");
        assert_eq!(state.selection(), Some("career-coach"));
        assert_eq!(state.view(), View::ProjectDetail);
        assert_eq!(texts(&dispatch)[1], "Opening project: Career Coach");
    }

    #[test]
    fn open_without_id_is_a_miss() {
        let interp = interpreter();
        let (state, _) = run(&interp, SessionState::default(), "cd projects");
        let (_, dispatch) = run(&interp, state, "open");
        assert_eq!(texts(&dispatch)[1], "Error: Project with ID \"\" not found.");
    }

    #[test]
    fn ls_depends_on_location() {
        let interp = interpreter();
        let (state, dispatch) = run(&interp, SessionState::default(), "ls");
        assert_eq!(
            texts(&dispatch)[1..5],
            ["projects/", "skills/", "contact/", "about/"]
        );

        let (state, _) = run(&interp, state, "cd projects");
        let (state, dispatch) = run(&interp, state, "ls");
        assert_eq!(dispatch.entries.len(), 2 + Content::builtin().projects.len());
        assert_eq!(texts(&dispatch)[1], "career-coach");

        let (state, _) = run(&interp, state, "cd contact");
        let (_, dispatch) = run(&interp, state, "ls");
        assert_eq!(texts(&dispatch)[1..dispatch.entries.len() - 1], ["contact/"]);
    }

    #[test]
    fn projects_lists_ids_and_taglines() {
        let interp = interpreter();
        let dispatch = interp.dispatch("projects", &SessionState::default());
        let text = texts(&dispatch).join("\n");
        assert!(text.contains("DIRECTORY LISTING OF /PROJECTS"));
        assert!(text.contains("project-icarus"));
        assert!(text.contains("Collaborative task management."));
        assert_eq!(dispatch.change.view, Some(View::Projects));
    }

    #[test]
    fn whoami_reflects_theme_and_clock() {
        let interp = interpreter();
        let dispatch = interp.dispatch("whoami", &SessionState::default());
        assert_eq!(
            texts(&dispatch)[1..4],
            ["USER: guest", "GROUP: visitors", "SESSION: 2026-10-19T12:00:00.000Z"]
        );

        let void = SessionState::new(&[], Theme::Void);
        let dispatch = interp.dispatch("whoami", &void);
        assert_eq!(texts(&dispatch)[1], "USER: UNKNOWN_ENTITY");
    }

    #[test]
    fn clear_and_diizzy_reset_history() {
        let interp = interpreter();
        let state = SessionState::new(&Content::builtin().welcome, Theme::Standard);
        let (state, dispatch) = run(&interp, state, "clear");
        assert!(dispatch.entries.is_empty());
        assert!(state.history().is_empty());

        let (state, _) = run(&interp, state, "cd projects");
        let (state, _) = run(&interp, state, "open saive");
        assert_eq!(state.view(), View::ProjectDetail);
        let (state, _) = run(&interp, state, "diizzy");
        assert!(state.history().is_empty());
        assert_eq!(state.theme(), Theme::Void);
        assert_eq!(state.view(), View::Welcome);
    }

    #[test]
    fn signals_carry_no_entries() {
        let interp = interpreter();
        let dispatch = interp.dispatch("reboot", &SessionState::default());
        assert_eq!(dispatch.signal, Some(Signal::Reboot));
        assert!(dispatch.entries.is_empty());
        let dispatch = interp.dispatch("EXIT", &SessionState::default());
        assert_eq!(dispatch.signal, Some(Signal::Exit));
    }

    #[test]
    fn content_commands_set_their_views() {
        let interp = interpreter();
        for (line, view) in [
            ("skills", View::Skills),
            ("about", View::About),
            ("contact", View::Contact),
            ("resume", View::Resume),
        ] {
            let dispatch = interp.dispatch(line, &SessionState::default());
            assert_eq!(dispatch.change.view, Some(view), "{line}");
        }
        let dispatch = interp.dispatch("whoami", &SessionState::default());
        assert_eq!(dispatch.change.view, None);
    }
}
