//! The boot sequence shown before the terminal opens.
//!
//! Lines are typed out one character at a time with a short random pause
//! between lines, then the box holds and collapses. Progress only moves when
//! `tick` is called with a later instant, so the sequence is deterministic for
//! a given RNG seed.

use std::time::{Duration, Instant};

pub const BOOT_LINES: [&str; 8] = [
    "INITIATING PROTOCOL_01...",
    "SYSTEM STATUS: ONLINE",
    "LOADING VISUAL INTERFACE... [SYNCED]",
    "DEPLOYING USER MODULE: DIIZZY.EXE",
    "SYNCHRONIZING ARCHIVES... [GRANTED]",
    "ESTABLISHING NEURAL LINK... [CONNECTED]",
    "SYSTEM DIAGNOSTICS... [OK]",
    "SYSTEM READY.",
];

const CHAR_INTERVAL: Duration = Duration::from_millis(25);
const HOLD: Duration = Duration::from_millis(800);
const COLLAPSE: Duration = Duration::from_millis(1000);
// Pause between lines, in milliseconds.
const PAUSE_MIN_MS: u64 = 100;
const PAUSE_MAX_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Typing,
    Pause,
    Hold,
    Collapsing,
    Done,
}

#[derive(Debug)]
pub struct BootSequence {
    lines: Vec<String>,
    line: usize,
    chars: usize,
    phase: BootPhase,
    next_at: Instant,
    phase_started: Instant,
    rng: fastrand::Rng,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        Self::with_rng(now, fastrand::Rng::new())
    }

    pub fn with_rng(now: Instant, rng: fastrand::Rng) -> Self {
        Self {
            lines: BOOT_LINES.iter().map(|s| s.to_string()).collect(),
            line: 0,
            chars: 0,
            phase: BootPhase::Typing,
            next_at: now + CHAR_INTERVAL,
            phase_started: now,
            rng,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == BootPhase::Done
    }

    /// When the next visible change happens.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            BootPhase::Done => None,
            _ => Some(self.next_at),
        }
    }

    /// Jump straight to the end.
    pub fn finish(&mut self) {
        self.line = self.lines.len();
        self.chars = 0;
        self.phase = BootPhase::Done;
    }

    /// Catch up with `now`, possibly crossing several steps.
    pub fn tick(&mut self, now: Instant) {
        while self.phase != BootPhase::Done && now >= self.next_at {
            let at = self.next_at;
            self.step(at);
        }
    }

    fn step(&mut self, at: Instant) {
        match self.phase {
            BootPhase::Typing => {
                let len = self.lines[self.line].chars().count();
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    let pause = self.rng.u64(PAUSE_MIN_MS..PAUSE_MAX_MS);
                    self.enter(BootPhase::Pause, at, Duration::from_millis(pause));
                } else {
                    self.next_at = at + CHAR_INTERVAL;
                }
            }
            BootPhase::Pause => {
                self.line += 1;
                self.chars = 0;
                if self.line >= self.lines.len() {
                    self.enter(BootPhase::Hold, at, HOLD);
                } else {
                    self.enter(BootPhase::Typing, at, CHAR_INTERVAL);
                }
            }
            BootPhase::Hold => self.enter(BootPhase::Collapsing, at, COLLAPSE),
            BootPhase::Collapsing => self.phase = BootPhase::Done,
            BootPhase::Done => {}
        }
    }

    fn enter(&mut self, phase: BootPhase, at: Instant, wait: Duration) {
        self.phase = phase;
        self.phase_started = at;
        self.next_at = at + wait;
    }

    /// Finished lines plus the partially typed current one.
    pub fn visible_lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self.lines.iter().take(self.line).cloned().collect();
        if let Some(current) = self.lines.get(self.line) {
            out.push(current.chars().take(self.chars).collect());
        }
        out
    }

    /// True while a line is still being typed, for drawing a cursor.
    pub fn is_typing(&self) -> bool {
        self.phase == BootPhase::Typing
    }

    /// Remaining width of the boot box, 1.0 until the collapse starts.
    pub fn openness(&self, now: Instant) -> f32 {
        match self.phase {
            BootPhase::Collapsing => {
                let elapsed = now.saturating_duration_since(self.phase_started);
                1.0 - (elapsed.as_secs_f32() / COLLAPSE.as_secs_f32()).min(1.0)
            }
            BootPhase::Done => 0.0,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(now: Instant) -> BootSequence {
        BootSequence::with_rng(now, fastrand::Rng::with_seed(7))
    }

    #[test]
    fn types_one_char_per_interval() {
        let start = Instant::now();
        let mut boot = seeded(start);
        assert_eq!(boot.visible_lines(), vec![String::new()]);

        boot.tick(start + CHAR_INTERVAL * 4);
        assert_eq!(boot.visible_lines(), vec!["INIT".to_string()]);
        assert!(boot.is_typing());
    }

    #[test]
    fn pauses_between_lines_within_bounds() {
        let start = Instant::now();
        let mut boot = seeded(start);
        let first_len = BOOT_LINES[0].len() as u32;
        let typed = start + CHAR_INTERVAL * first_len;
        boot.tick(typed);
        assert_eq!(boot.phase(), BootPhase::Pause);

        let pause = boot.next_deadline().unwrap() - typed;
        assert!(pause >= Duration::from_millis(PAUSE_MIN_MS));
        assert!(pause < Duration::from_millis(PAUSE_MAX_MS));
    }

    #[test]
    fn runs_to_completion() {
        let start = Instant::now();
        let mut boot = seeded(start);
        boot.tick(start + Duration::from_secs(60));
        assert!(boot.is_done());
        assert_eq!(boot.next_deadline(), None);
        assert_eq!(boot.visible_lines().len(), BOOT_LINES.len());
        assert_eq!(boot.openness(start + Duration::from_secs(60)), 0.0);
    }

    #[test]
    fn collapse_shrinks_the_box() {
        let start = Instant::now();
        let mut boot = seeded(start);
        let mut now = start;
        while boot.phase() != BootPhase::Collapsing {
            now = boot.next_deadline().unwrap();
            boot.tick(now);
        }
        assert_eq!(boot.openness(now), 1.0);
        let half = boot.openness(now + COLLAPSE / 2);
        assert!(half > 0.4 && half < 0.6);
    }

    #[test]
    fn finish_skips_ahead() {
        let mut boot = seeded(Instant::now());
        boot.finish();
        assert!(boot.is_done());
        assert_eq!(boot.visible_lines().len(), BOOT_LINES.len());
    }
}
