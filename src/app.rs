use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{debug, info};

use crate::boot::BootSequence;
use crate::complete::Completion;
use crate::config::Config;
use crate::content::ProjectRecord;
use crate::input::{CommandRecall, LineBuffer};
use crate::session::{EntryKind, Signal, Theme};
use crate::shell::Shell;
use crate::theme::{self, Palette, Rgb};
use crate::view::{self, Panel};

const FONT_SIZE: f32 = 15.0;
const CURSOR_BLINK: Duration = Duration::from_millis(500);

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn mono(text: impl Into<String>, rgb: Rgb) -> egui::RichText {
    egui::RichText::new(text)
        .font(egui::FontId::monospace(FONT_SIZE))
        .color(color(rgb))
}

/// Dual-pane portfolio terminal: command line on the left, viewport on the right.
pub struct PortfolioApp {
    shell: Shell,
    line: LineBuffer,
    recall: CommandRecall,
    completion: Completion,
    show_suggestions: bool,
    boot: Option<BootSequence>,
    skip_boot: bool,
    submit_cooldown: Duration,
    locked_until: Option<Instant>,
    show_cursor: bool,
    last_cursor_blink: Instant,
}

impl PortfolioApp {
    pub fn new(shell: Shell, config: &Config) -> Self {
        let now = Instant::now();
        Self {
            shell,
            line: LineBuffer::default(),
            recall: CommandRecall::default(),
            completion: Completion::default(),
            show_suggestions: false,
            boot: (!config.skip_boot).then(|| BootSequence::new(now)),
            skip_boot: config.skip_boot,
            submit_cooldown: config.submit_cooldown,
            locked_until: None,
            show_cursor: true,
            last_cursor_blink: now,
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_theme(self.shell.state().theme())
    }

    fn refresh_suggestions(&mut self) {
        self.completion.refresh(self.line.text(), self.shell.content());
        self.show_suggestions = !self.completion.suggestions().is_empty();
    }

    fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.completion.clear();
    }

    fn submit(&mut self, ctx: &egui::Context, now: Instant) {
        if self.locked_until.is_some_and(|until| now < until) {
            debug!("submit ignored during cooldown");
            return;
        }
        let line = self.line.take();
        self.hide_suggestions();
        self.recall.push(&line);
        self.run(ctx, &line, now);
    }

    fn run(&mut self, ctx: &egui::Context, line: &str, now: Instant) {
        let signal = self.shell.submit(line);
        self.locked_until = Some(now + self.submit_cooldown);
        match signal {
            Some(Signal::Exit) => {
                info!("closing terminal");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Some(Signal::Reboot) => {
                self.line.clear();
                self.recall = CommandRecall::default();
                self.boot = (!self.skip_boot).then(|| BootSequence::new(now));
            }
            None => {}
        }
    }

    fn handle_key(
        &mut self,
        ctx: &egui::Context,
        key: egui::Key,
        modifiers: egui::Modifiers,
        now: Instant,
    ) {
        if modifiers.ctrl {
            match key {
                egui::Key::C => {
                    self.line.clear();
                    self.hide_suggestions();
                }
                egui::Key::D => self.run(ctx, "exit", now),
                egui::Key::L => self.run(ctx, "clear", now),
                _ => {}
            }
            return;
        }

        match key {
            egui::Key::Enter => self.submit(ctx, now),
            egui::Key::Backspace => {
                if self.line.backspace() {
                    self.refresh_suggestions();
                }
            }
            egui::Key::Delete => {
                if self.line.delete() {
                    self.refresh_suggestions();
                }
            }
            egui::Key::ArrowLeft => self.line.left(),
            egui::Key::ArrowRight => self.line.right(),
            egui::Key::Home => self.line.home(),
            egui::Key::End => self.line.end(),
            egui::Key::ArrowUp => {
                self.show_suggestions = false;
                if let Some(previous) = self.recall.older() {
                    self.line.set(previous);
                }
            }
            egui::Key::ArrowDown => {
                self.show_suggestions = false;
                if let Some(next) = self.recall.newer() {
                    self.line.set(next);
                }
            }
            egui::Key::Tab => {
                if !self.show_suggestions {
                    self.refresh_suggestions();
                }
                if let Some(completed) = self.completion.advance() {
                    self.line.set(completed);
                }
            }
            egui::Key::Escape => self.hide_suggestions(),
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        // Copy the events out so handlers can talk to the context.
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => self.handle_key(ctx, key, modifiers, now),
                egui::Event::Text(text) => {
                    self.line.insert_str(&text);
                    self.refresh_suggestions();
                }
                _ => {}
            }
        }
    }

    fn show_boot(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        let palette = self.palette();
        let Some(boot) = self.boot.as_mut() else {
            return false;
        };
        boot.tick(now);
        let skip = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if skip {
            boot.finish();
        }
        if boot.is_done() {
            self.boot = None;
            return false;
        }

        let openness = boot.openness(now);
        let lines = boot.visible_lines();
        let typing = boot.is_typing();
        if let Some(deadline) = boot.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if openness < 1.0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let full = ui.available_width().min(640.0);
                ui.add_space(ui.available_height() * 0.3);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(full * openness.max(0.02));
                    egui::Frame::none()
                        .fill(color(palette.background))
                        .stroke(egui::Stroke::new(1.0, color(palette.border)))
                        .inner_margin(egui::Margin::same(16.0))
                        .rounding(egui::Rounding::same(4.0))
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                                let last = lines.len().saturating_sub(1);
                                for (i, line) in lines.iter().enumerate() {
                                    let mut text = format!("> {line}");
                                    if typing && i == last {
                                        text.push('█');
                                    }
                                    ui.label(mono(text, palette.accent));
                                }
                            });
                        });
                });
            });
        true
    }

    fn show_terminal(&self, ui: &mut egui::Ui, palette: &Palette) {
        let state = self.shell.state();
        let theme = state.theme();

        ui.label(mono(
            format!("BASH -- /bin/zsh -- 80x24 -- {}", theme.as_str().to_uppercase()),
            palette.accent,
        ));
        ui.separator();

        let input_height = 28.0 + if self.show_suggestions { 22.0 * 5.0 } else { 0.0 };
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .max_height((ui.available_height() - input_height).max(0.0))
            .show(ui, |ui| {
                for entry in state.history() {
                    let rgb = palette.entry(entry.kind());
                    match entry.kind() {
                        EntryKind::Input => {
                            ui.add_space(6.0);
                            ui.label(mono(format!("$ {}", entry.text()), rgb).strong());
                        }
                        _ => {
                            ui.label(mono(entry.text(), rgb));
                        }
                    }
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            let (user, location) = theme::prompt_parts(theme, &state.location().path());
            ui.label(mono(user, palette.prompt).strong());
            ui.label(mono(":", Rgb(255, 255, 255)));
            ui.label(mono(location, palette.location));
            ui.label(mono("$ ", palette.prompt));

            let mut display = self.line.text().to_string();
            if self.show_cursor {
                display.insert(self.line.cursor(), '█');
            }
            ui.label(mono(display, palette.input).strong());
        });

        if self.show_suggestions {
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    for (i, suggestion) in self.completion.suggestions().iter().enumerate() {
                        let rgb = if self.completion.selected() == Some(i) {
                            palette.prompt
                        } else {
                            palette.muted
                        };
                        ui.label(mono(suggestion.as_str(), rgb));
                    }
                });
            });
        }
    }

    fn show_viewport(&self, ui: &mut egui::Ui, palette: &Palette) {
        let theme = self.shell.state().theme();
        ui.horizontal(|ui| {
            ui.label(mono("VISUAL_OUTPUT_BUFFER", palette.accent));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = match theme {
                    Theme::Standard => "LIVE_FEED",
                    Theme::Void => "UNSTABLE",
                };
                ui.label(mono(status, palette.output).small());
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.shell.panel() {
                Panel::Welcome => show_idle(ui, palette, theme),
                Panel::Help(lines) => show_lines(ui, palette, "COMMAND REFERENCE", lines),
                Panel::Projects(projects) => show_projects(ui, palette, projects),
                Panel::Skills(lines) => show_skills(ui, palette, lines),
                Panel::About(lines) => show_lines(ui, palette, "ABOUT", lines),
                Panel::Contact(lines) => show_lines(ui, palette, "CONTACT", lines),
                Panel::Resume(lines) => show_lines(ui, palette, "RESUME", lines),
                Panel::ProjectDetail(project) => show_project(ui, palette, project),
            });
    }
}

fn pane(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(color(palette.background))
        .stroke(egui::Stroke::new(1.0, color(palette.border)))
        .inner_margin(egui::Margin::same(12.0))
        .outer_margin(egui::Margin::same(4.0))
        .rounding(egui::Rounding::same(6.0))
}

fn heading(ui: &mut egui::Ui, palette: &Palette, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .font(egui::FontId::monospace(20.0))
            .color(color(palette.accent))
            .strong(),
    );
    ui.add_space(8.0);
}

fn show_idle(ui: &mut egui::Ui, palette: &Palette, theme: Theme) {
    let caption = match theme {
        Theme::Standard => "VIEWPORT IDLE",
        Theme::Void => "VIEWPORT CORRUPTED",
    };
    ui.add_space(ui.available_height() * 0.35);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(caption)
                .font(egui::FontId::monospace(22.0))
                .color(color(palette.border))
                .strong(),
        );
        ui.label(mono("Awaiting Terminal Input...", palette.border).small());
    });
}

fn show_lines(ui: &mut egui::Ui, palette: &Palette, title: &str, lines: &[String]) {
    heading(ui, palette, title);
    for line in lines {
        ui.label(mono(line.as_str(), palette.output));
    }
}

fn show_projects(ui: &mut egui::Ui, palette: &Palette, projects: &[ProjectRecord]) {
    heading(ui, palette, "PROJECTS");
    for project in projects {
        egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, color(palette.border)))
            .inner_margin(egui::Margin::same(10.0))
            .rounding(egui::Rounding::same(4.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(mono(project.name.as_str(), palette.accent).strong());
                    ui.label(mono(format!("[{}]", project.id), palette.muted));
                });
                ui.label(mono(project.tagline.as_str(), palette.output));
                ui.label(mono(project.technologies.join(" · "), palette.muted).small());
            });
        ui.add_space(6.0);
    }
    ui.label(mono("cd projects, then open [id] for details", palette.muted).small());
}

fn show_skills(ui: &mut egui::Ui, palette: &Palette, lines: &[String]) {
    heading(ui, palette, "SKILL MATRIX");
    for (category, items) in view::skill_groups(lines) {
        if !category.is_empty() {
            ui.label(mono(category, palette.prompt).strong());
        }
        ui.horizontal_wrapped(|ui| {
            for item in items.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, color(palette.border)))
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(mono(item, palette.output));
                    });
            }
        });
        ui.add_space(10.0);
    }
}

fn show_project(ui: &mut egui::Ui, palette: &Palette, project: &ProjectRecord) {
    heading(ui, palette, &project.name);
    ui.label(mono(project.tagline.as_str(), palette.prompt));
    ui.add_space(8.0);
    ui.label(mono(project.description.as_str(), palette.output));
    ui.add_space(12.0);

    ui.label(mono("TECH STACK", palette.muted).small());
    ui.horizontal_wrapped(|ui| {
        for tech in &project.technologies {
            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, color(palette.border)))
                .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                .show(ui, |ui| {
                    ui.label(mono(tech.as_str(), palette.output));
                });
        }
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if let Some(github) = &project.github_url {
            ui.hyperlink_to(mono("SOURCE CODE", palette.accent), github);
        }
        if let Some(live) = project.live_link() {
            ui.hyperlink_to(mono("LIVE DEMO", palette.accent), live);
        }
    });
    ui.label(mono(format!("demo: {}", project.demo.source), palette.muted).small());
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.show_boot(ctx, now) {
            return;
        }

        if now.duration_since(self.last_cursor_blink) > CURSOR_BLINK {
            self.show_cursor = !self.show_cursor;
            self.last_cursor_blink = now;
        }
        ctx.request_repaint_after(CURSOR_BLINK);

        self.handle_input(ctx, now);
        if self.boot.is_some() {
            // A reboot was just requested.
            ctx.request_repaint();
            return;
        }

        let palette = self.palette();
        egui::SidePanel::left("terminal")
            .resizable(true)
            .default_width(ctx.screen_rect().width() * 0.5)
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                pane(palette).show(ui, |ui| self.show_terminal(ui, palette));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                pane(palette).show(ui, |ui| self.show_viewport(ui, palette));
            });
    }
}
