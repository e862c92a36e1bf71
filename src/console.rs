//! Line-oriented frontend for a plain terminal.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use tracing::{info, warn};

use crate::boot::{BootPhase, BootSequence};
use crate::session::{EntryKind, Signal, Theme, View};
use crate::shell::Shell;
use crate::theme::{self, Palette, Rgb};
use crate::view;

fn fg(rgb: Rgb) -> SetForegroundColor {
    SetForegroundColor(Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    })
}

/// REPL over any reader and writer. Stdin and stdout in production.
pub struct Console<R, W> {
    shell: Shell,
    input: R,
    out: W,
    skip_boot: bool,
    // Print typed lines back, for input that the terminal did not echo.
    echo_input: bool,
    // History entries already on screen.
    printed: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(shell: Shell, input: R, out: W, skip_boot: bool) -> Self {
        Self {
            shell,
            input,
            out,
            skip_boot,
            echo_input: false,
            printed: 0,
        }
    }

    /// Echo submitted lines, e.g. when stdin is a pipe rather than a tty.
    pub fn with_echo(mut self, echo_input: bool) -> Self {
        self.echo_input = echo_input;
        self
    }

    /// Read and run lines until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.boot()?;
        self.redraw()?;

        loop {
            self.write_prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                queue!(self.out, Print("\r\n"))?;
                break;
            }

            let before = self.snapshot();
            match self.shell.submit(line.trim_end_matches(['\r', '\n'])) {
                Some(Signal::Exit) => {
                    info!("console session ended");
                    break;
                }
                Some(Signal::Reboot) => {
                    self.boot()?;
                    self.redraw()?;
                    continue;
                }
                None => {}
            }

            let state = self.shell.state();
            if state.history().len() < self.printed || state.theme() != before.theme {
                self.redraw()?;
            } else {
                self.print_new()?;
            }
            self.print_detail_if_opened(&before)?;
        }

        if let Err(err) = self.out.flush() {
            warn!(error = %err, "failed to flush console output");
        }
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        let state = self.shell.state();
        Snapshot {
            view: state.view(),
            selection: state.selection().map(str::to_string),
            theme: state.theme(),
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_theme(self.shell.state().theme())
    }

    /// Type out the boot lines as they are revealed.
    fn boot(&mut self) -> io::Result<()> {
        if self.skip_boot {
            return Ok(());
        }
        let accent = self.palette().accent;
        let mut boot = BootSequence::new(Instant::now());
        let mut shown: Vec<usize> = Vec::new();

        queue!(self.out, fg(accent))?;
        while matches!(boot.phase(), BootPhase::Typing | BootPhase::Pause) {
            boot.tick(Instant::now());
            for (i, line) in boot.visible_lines().iter().enumerate() {
                if i >= shown.len() {
                    if i > 0 {
                        queue!(self.out, Print("\r\n"))?;
                    }
                    queue!(self.out, Print("> "))?;
                    shown.push(0);
                }
                let count = line.chars().count();
                if count > shown[i] {
                    let rest: String = line.chars().skip(shown[i]).collect();
                    queue!(self.out, Print(rest))?;
                    shown[i] = count;
                }
            }
            self.out.flush()?;
            if let Some(deadline) = boot.next_deadline() {
                thread::sleep(deadline.saturating_duration_since(Instant::now()));
            }
        }
        queue!(self.out, ResetColor, Print("\r\n"))?;
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.printed = 0;
        self.print_entries(true)
    }

    fn print_new(&mut self) -> io::Result<()> {
        // A tty has already shown what was typed.
        self.print_entries(self.echo_input)
    }

    fn print_entries(&mut self, with_input: bool) -> io::Result<()> {
        let palette = Palette::for_theme(self.shell.state().theme());
        let history = self.shell.state().history();
        for entry in &history[self.printed..] {
            let rgb = palette.entry(entry.kind());
            match entry.kind() {
                EntryKind::Input if !with_input => continue,
                EntryKind::Input => queue!(
                    self.out,
                    fg(rgb),
                    SetAttribute(Attribute::Bold),
                    Print(format!("$ {}", entry.text())),
                    SetAttribute(Attribute::Reset),
                    Print("\r\n")
                )?,
                _ => queue!(self.out, fg(rgb), Print(entry.text()), Print("\r\n"))?,
            }
        }
        queue!(self.out, ResetColor)?;
        self.printed = history.len();
        Ok(())
    }

    fn print_detail_if_opened(&mut self, before: &Snapshot) -> io::Result<()> {
        let state = self.shell.state();
        let opened = state.view() == View::ProjectDetail
            && (before.view != View::ProjectDetail
                || before.selection.as_deref() != state.selection());
        if !opened {
            return Ok(());
        }
        let Some(project) = state.selection().and_then(|id| self.shell.content().project(id))
        else {
            return Ok(());
        };

        let palette = Palette::for_theme(state.theme());
        for line in view::detail_lines(project) {
            queue!(self.out, fg(palette.accent), Print(line), Print("\r\n"))?;
        }
        queue!(self.out, ResetColor, Print("\r\n"))?;
        Ok(())
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        let state = self.shell.state();
        let palette = Palette::for_theme(state.theme());
        let prompt = theme::prompt(state.theme(), &state.location().path());
        queue!(
            self.out,
            fg(palette.prompt),
            Print(prompt),
            Print(" "),
            ResetColor
        )?;
        self.out.flush()
    }
}

struct Snapshot {
    view: View,
    selection: Option<String>,
    theme: Theme,
}
