use std::sync::Arc;

use tracing::{debug, info};

use crate::content::Content;
use crate::interpreter::Interpreter;
use crate::session::{SessionState, Signal, Theme};
use crate::view::{self, Panel};

/// Owner of one terminal session.
///
/// Frontends hand every submitted line to [`Shell::submit`]; the shell runs
/// the interpreter and swaps in the resulting state.
pub struct Shell {
    interpreter: Interpreter,
    state: SessionState,
    theme: Theme,
}

impl Shell {
    pub fn new(content: Arc<Content>, theme: Theme) -> Self {
        Self::with_interpreter(Interpreter::new(content), theme)
    }

    pub fn with_interpreter(interpreter: Interpreter, theme: Theme) -> Self {
        let state = SessionState::new(&interpreter.content().welcome, theme);
        Self {
            interpreter,
            state,
            theme,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        self.interpreter.content()
    }

    /// Panel to show beside the terminal.
    pub fn panel(&self) -> Panel<'_> {
        view::select(&self.state, self.interpreter.content())
    }

    /// Run one line. Returns the signal the frontend has to act on, if any.
    pub fn submit(&mut self, line: &str) -> Option<Signal> {
        let dispatch = self.interpreter.dispatch(line, &self.state);
        if dispatch.is_noop() {
            return None;
        }

        let signal = dispatch.signal;
        if signal == Some(Signal::Reboot) {
            info!("rebooting terminal session");
            self.reset();
        } else {
            let state = std::mem::take(&mut self.state);
            self.state = state.apply(dispatch);
        }

        debug!(
            location = %self.state.location(),
            view = ?self.state.view(),
            theme = %self.state.theme(),
            history = self.state.history().len(),
            "session updated"
        );
        signal
    }

    /// Drop the current session and start over with the banner.
    fn reset(&mut self) {
        self.state = SessionState::new(&self.interpreter.content().welcome, self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Location, View};

    fn shell() -> Shell {
        Shell::new(Arc::new(Content::builtin()), Theme::Standard)
    }

    #[test]
    fn starts_with_banner() {
        let shell = shell();
        assert_eq!(shell.state().history().len(), Content::builtin().welcome.len());
        assert!(matches!(shell.panel(), Panel::Welcome));
    }

    #[test]
    fn blank_submit_changes_nothing() {
        let mut shell = shell();
        let before = shell.state().clone();
        assert_eq!(shell.submit("   "), None);
        assert_eq!(shell.state(), &before);
    }

    #[test]
    fn reboot_restores_a_fresh_session() {
        let mut shell = shell();
        shell.submit("cd projects");
        shell.submit("open saive");
        shell.submit("diizzy");
        assert_eq!(shell.state().theme(), Theme::Void);

        assert_eq!(shell.submit("reboot"), Some(Signal::Reboot));
        assert_eq!(shell.state().location(), Location::Root);
        assert_eq!(shell.state().selection(), None);
        assert_eq!(shell.state().view(), View::Welcome);
        assert_eq!(shell.state().theme(), Theme::Standard);
        assert_eq!(shell.state().history().len(), Content::builtin().welcome.len());
    }

    #[test]
    fn exit_leaves_state_untouched() {
        let mut shell = shell();
        shell.submit("cd about");
        let before = shell.state().clone();
        assert_eq!(shell.submit("exit"), Some(Signal::Exit));
        assert_eq!(shell.state(), &before);
    }
}
