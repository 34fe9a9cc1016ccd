//! Line revealer state machine.
//!
//! Plays a sequence of [`Line`]s back as if they were being produced by a
//! live terminal. Typed lines appear one character at a time in the typing
//! buffer, dwell for their delay, then commit; other lines commit after
//! their delay. Exactly one step is ever pending, so cancelling a run is a
//! matter of dropping that one slot.

use std::time::Duration;

use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::line::Line;

/// Default milliseconds between lines.
pub const DEFAULT_LINE_DELAY_MS: u64 = 80;
/// Default milliseconds per typed character.
pub const DEFAULT_CHAR_DELAY_MS: u64 = 20;

/// Timing used when a line does not carry its own delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub line_delay: Duration,
    pub char_delay: Duration,
}

impl RevealTiming {
    pub fn from_millis(line_delay_ms: u64, char_delay_ms: u64) -> Self {
        Self {
            line_delay: Duration::from_millis(line_delay_ms),
            char_delay: Duration::from_millis(char_delay_ms),
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LINE_DELAY_MS, DEFAULT_CHAR_DELAY_MS)
    }
}

/// Coarse playback state, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Nothing scheduled, nothing finished
    Idle,
    /// A step is pending
    Running,
    /// Every line has been revealed
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Show the first `chars` characters of line `index` in the typing buffer
    Keystroke { index: usize, chars: usize },
    /// Append line `index` to the revealed lines.
    ///
    /// The line's delay runs before this step, not after it: a typed line
    /// stays in the typing buffer for its delay once fully typed, and an
    /// untyped line waits its delay unseen. The next line's timing counts
    /// from the commit.
    Commit { index: usize },
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    step: Step,
}

/// Progressive reveal of a line sequence.
///
/// Observables are read with [`revealed_lines`](Self::revealed_lines),
/// [`typing_buffer`](Self::typing_buffer) and
/// [`is_finished`](Self::is_finished). Time only moves when
/// [`tick`](Self::tick) is called.
#[derive(Debug)]
pub struct LineRevealer<C: Clock = SystemClock> {
    clock: C,
    timing: RevealTiming,
    lines: Vec<Line>,
    revealed: Vec<Line>,
    typing: String,
    finished: bool,
    active: bool,
    pending: Option<Pending>,
}

impl LineRevealer<SystemClock> {
    /// Revealer on the wall clock.
    pub fn with_system_clock(timing: RevealTiming) -> Self {
        Self::new(SystemClock::new(), timing)
    }
}

impl<C: Clock> LineRevealer<C> {
    pub fn new(clock: C, timing: RevealTiming) -> Self {
        Self {
            clock,
            timing,
            lines: Vec::new(),
            revealed: Vec::new(),
            typing: String::new(),
            finished: false,
            active: false,
            pending: None,
        }
    }

    /// Supply the input sequence without starting playback.
    ///
    /// Any session in progress is reset.
    pub fn load(&mut self, lines: Vec<Line>) {
        self.reset();
        self.lines = lines;
    }

    /// Begin playback of `lines` from the first line.
    ///
    /// Ignored while a playback is running.
    pub fn start(&mut self, lines: Vec<Line>) {
        if self.is_running() {
            debug!("start ignored, playback already running");
            return;
        }
        self.lines = lines;
        self.begin_session();
    }

    /// Restart playback of the currently loaded lines.
    ///
    /// Ignored while a playback is running.
    pub fn replay(&mut self) {
        if self.is_running() {
            return;
        }
        self.begin_session();
    }

    /// Follow the embedding page's active flag.
    ///
    /// Becoming active starts playback of the loaded lines (if any);
    /// becoming inactive resets the session.
    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            if !self.lines.is_empty() {
                self.replay();
            }
        } else {
            self.reset();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Jump straight to the end state.
    ///
    /// No-op when no lines have been supplied.
    pub fn skip(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.pending = None;
        self.typing.clear();
        self.revealed = self.lines.clone();
        self.finished = true;
        debug!(lines = self.lines.len(), "playback skipped to end");
    }

    /// Cancel all pending work and clear the session.
    pub fn reset(&mut self) {
        self.pending = None;
        self.revealed.clear();
        self.typing.clear();
        self.finished = false;
    }

    /// Fire every step that is due.
    ///
    /// Returns true when any observable changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        while let Some(pending) = self.pending {
            if pending.due > now {
                break;
            }
            self.pending = None;
            self.fire(pending);
            changed = true;
        }

        changed
    }

    /// Clock reading at which the next step fires.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Time left until the next step fires (zero if overdue).
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending.map(|p| p.due.saturating_sub(now))
    }

    pub fn revealed_lines(&self) -> &[Line] {
        &self.revealed
    }

    pub fn typing_buffer(&self) -> &str {
        &self.typing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.finished {
            PlaybackPhase::Finished
        } else if self.pending.is_some() {
            PlaybackPhase::Running
        } else {
            PlaybackPhase::Idle
        }
    }

    /// The full input sequence.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn begin_session(&mut self) {
        self.reset();
        info!(lines = self.lines.len(), "playback started");
        let now = self.clock.now();
        self.begin_line(0, now);
    }

    fn begin_line(&mut self, index: usize, at: Duration) {
        let Some(line) = self.lines.get(index) else {
            self.finished = true;
            info!(lines = self.revealed.len(), "playback finished");
            return;
        };

        let step = if line.is_typed() && !line.text.is_empty() {
            Pending {
                due: at + self.timing.char_delay,
                step: Step::Keystroke { index, chars: 1 },
            }
        } else {
            Pending {
                due: at + line.delay_or(self.timing.line_delay),
                step: Step::Commit { index },
            }
        };
        self.pending = Some(step);
    }

    fn fire(&mut self, pending: Pending) {
        match pending.step {
            Step::Keystroke { index, chars } => {
                let line = &self.lines[index];
                let end = line
                    .text
                    .char_indices()
                    .nth(chars)
                    .map(|(i, _)| i)
                    .unwrap_or(line.text.len());
                self.typing.clear();
                self.typing.push_str(&line.text[..end]);

                let next = if end < line.text.len() {
                    Pending {
                        due: pending.due + self.timing.char_delay,
                        step: Step::Keystroke {
                            index,
                            chars: chars + 1,
                        },
                    }
                } else {
                    Pending {
                        due: pending.due + line.delay_or(self.timing.line_delay),
                        step: Step::Commit { index },
                    }
                };
                self.pending = Some(next);
            }
            Step::Commit { index } => {
                self.typing.clear();
                self.revealed.push(self.lines[index].clone());
                debug!(index, "line revealed");
                self.begin_line(index + 1, pending.due);
            }
        }
    }
}
