//! Investor walkthrough state.
//!
//! Four steps walk through one scoring loop:
//!   1. The Problem: an undocumented function is selected from PyPI
//!   2. Miner Response: a good and a bad documentation submission
//!   3. Verification Engine: deterministic scoring of the submission
//!   4. The Network: how scores turn into rewards

use std::time::Duration;

use tracing::{debug, info};

use crate::data::DemoFunction;
use crate::reveal::{Clock, Line, LineRevealer, RevealTiming};
use crate::scoring::ScoreBreakdown;

pub const STEPS: [&str; 4] = [
    "The Problem",
    "Miner Response",
    "Verification Engine",
    "The Network",
];

/// Step whose score bars animate after verification.
pub const VERIFICATION_STEP: usize = 2;

/// Stages of the economic loop shown on the last step.
pub const NETWORK_FLOW: [(&str, &str); 5] = [
    ("Validators", "sample undocumented functions and publish tasks"),
    ("Miners", "race to submit docstrings, types and examples"),
    ("Verification", "executes every example and checks every type"),
    ("Weights", "are set on-chain from the verified scores"),
    ("TAO", "emissions flow to the miners whose docs actually run"),
];

/// Step-0 terminal sequence for `function`.
pub fn task_selection_lines(function: &DemoFunction) -> Vec<Line> {
    let raw = &function.raw;
    let scanned = raw.param_count * 12 + 80;
    let eligible = raw.param_count * 5 + 30;
    let hints = if raw.has_type_hints { "present" } else { "none" };

    vec![
        Line::command(format!(
            "arbiter-validator select-task --package {}",
            raw.package_name
        ))
        .with_delay(300),
        Line::blank(),
        Line::output(format!(
            "Scanning {}... {} functions, {} eligible",
            raw.package_name, scanned, eligible
        ))
        .with_delay(100),
        Line::success(format!("Selected: {}", raw.qualified_name())).with_delay(200),
        Line::output(format!("  Signature: {}", raw.signature())).with_delay(60),
        Line::output(format!(
            "  Params: {} | Complexity: {} | Type hints: {}",
            raw.param_count, raw.complexity, hints
        ))
        .with_delay(60),
    ]
}

/// Walkthrough state.
#[derive(Debug)]
pub struct DemoPage<C: Clock + Clone> {
    clock: C,
    functions: &'static [DemoFunction],
    current_step: usize,
    selected_function: usize,
    show_good: bool,
    verification_run: bool,
    animate_scores: bool,
    score_delay: Duration,
    /// Pending score animation, as a clock reading
    score_deadline: Option<Duration>,
    terminal: LineRevealer<C>,
}

impl<C: Clock + Clone> DemoPage<C> {
    /// Create the walkthrough. `functions` must not be empty.
    pub fn new(
        functions: &'static [DemoFunction],
        clock: C,
        timing: RevealTiming,
        score_delay: Duration,
    ) -> Self {
        let mut page = Self {
            terminal: LineRevealer::new(clock.clone(), timing),
            clock,
            functions,
            current_step: 0,
            selected_function: 0,
            show_good: true,
            verification_run: false,
            animate_scores: false,
            score_delay,
            score_deadline: None,
        };
        page.terminal.load(task_selection_lines(page.function()));
        page.sync_terminal();
        page
    }

    pub fn steps(&self) -> &'static [&'static str] {
        &STEPS
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn functions(&self) -> &'static [DemoFunction] {
        self.functions
    }

    pub fn selected_function(&self) -> usize {
        self.selected_function
    }

    pub fn function(&self) -> &'static DemoFunction {
        &self.functions[self.selected_function]
    }

    pub fn show_good(&self) -> bool {
        self.show_good
    }

    pub fn verification_run(&self) -> bool {
        self.verification_run
    }

    pub fn animate_scores(&self) -> bool {
        self.animate_scores
    }

    /// Score of the submission currently shown.
    pub fn current_score(&self) -> &'static ScoreBreakdown {
        self.function().score(self.show_good)
    }

    pub fn terminal(&self) -> &LineRevealer<C> {
        &self.terminal
    }

    // Navigation

    pub fn next_step(&mut self) {
        if self.current_step + 1 < STEPS.len() {
            self.current_step += 1;
            if self.current_step == VERIFICATION_STEP {
                self.reset_verification();
            }
            self.on_step_changed();
        }
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
            self.on_step_changed();
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn go_to_step(&mut self, index: usize) {
        if index >= STEPS.len() {
            return;
        }
        self.current_step = index;
        if index == VERIFICATION_STEP {
            self.reset_verification();
        }
        self.on_step_changed();
    }

    // Actions

    /// Switch to another fixture; out-of-range indices are ignored.
    pub fn select_function(&mut self, index: usize) {
        if index >= self.functions.len() {
            return;
        }
        self.selected_function = index;
        self.reset_verification();
        self.terminal.load(task_selection_lines(self.function()));
        // load() resets the session; replay if the terminal is on screen
        if self.terminal.is_active() {
            self.terminal.replay();
        }
        info!(function = %self.function().raw.function_name, "function selected");
    }

    /// Cycle to the next fixture.
    pub fn cycle_function(&mut self) {
        let next = (self.selected_function + 1) % self.functions.len();
        self.select_function(next);
    }

    pub fn toggle_submission(&mut self, good: bool) {
        self.show_good = good;
    }

    /// Run the verification engine; scores animate after a short pause.
    pub fn run_verification(&mut self) {
        self.verification_run = true;
        self.animate_scores = false;
        self.score_deadline = Some(self.clock.now() + self.score_delay);
        debug!(delay_ms = self.score_delay.as_millis() as u64, "verification started");
    }

    pub fn skip_terminal(&mut self) {
        self.terminal.skip();
    }

    /// Advance timed state. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.terminal.tick();
        if let Some(deadline) = self.score_deadline {
            if self.clock.now() >= deadline {
                self.score_deadline = None;
                self.animate_scores = true;
                changed = true;
            }
        }
        changed
    }

    /// Time until the next scheduled change.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        let score = self.score_deadline.map(|d| d.saturating_sub(now));
        match (self.terminal.time_until_next(), score) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn reset_verification(&mut self) {
        self.verification_run = false;
        self.animate_scores = false;
        self.score_deadline = None;
    }

    fn on_step_changed(&mut self) {
        debug!(step = STEPS[self.current_step], "step changed");
        self.sync_terminal();
    }

    fn sync_terminal(&mut self) {
        self.terminal.set_active(self.current_step == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_functions;
    use crate::reveal::{LineCategory, ManualClock};

    fn page() -> (ManualClock, DemoPage<ManualClock>) {
        let clock = ManualClock::new();
        let page = DemoPage::new(
            demo_functions().unwrap(),
            clock.clone(),
            RevealTiming::from_millis(10, 1),
            Duration::from_millis(300),
        );
        (clock, page)
    }

    #[test]
    fn task_lines_describe_function() {
        let function = &demo_functions().unwrap()[1];
        let lines = task_selection_lines(function);

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0].text,
            "arbiter-validator select-task --package reqhelper"
        );
        assert_eq!(lines[0].category, LineCategory::Command);
        assert_eq!(lines[1], Line::blank());
        assert_eq!(
            lines[2].text,
            "Scanning reqhelper... 128 functions, 50 eligible"
        );
        assert_eq!(lines[3].text, "Selected: reqhelper.retry.with_retry");
        assert_eq!(
            lines[4].text,
            "  Signature: def with_retry(fn, max_attempts=3, backoff_factor=1.5, exceptions=None):"
        );
        assert_eq!(
            lines[5].text,
            "  Params: 4 | Complexity: 4 | Type hints: none"
        );
    }

    #[test]
    fn starts_on_first_step_with_terminal_running() {
        let (_clock, page) = page();
        assert_eq!(page.current_step(), 0);
        assert!(page.terminal().is_running());
        assert!(page.show_good());
    }

    #[test]
    fn navigation_is_clamped() {
        let (_clock, mut page) = page();
        page.prev_step();
        assert_eq!(page.current_step(), 0);
        for _ in 0..10 {
            page.next_step();
        }
        assert_eq!(page.current_step(), STEPS.len() - 1);
        page.go_to_step(9);
        assert_eq!(page.current_step(), STEPS.len() - 1);
    }

    #[test]
    fn leaving_first_step_resets_terminal() {
        let (_clock, mut page) = page();
        page.next_step();
        assert!(!page.terminal().is_active());
        assert!(page.terminal().revealed_lines().is_empty());

        page.prev_step();
        assert!(page.terminal().is_running());
    }

    #[test]
    fn verification_animates_after_delay() {
        let (clock, mut page) = page();
        page.go_to_step(VERIFICATION_STEP);
        page.run_verification();
        assert!(page.verification_run());
        assert!(!page.animate_scores());
        assert_eq!(page.time_until_next(), Some(Duration::from_millis(300)));

        clock.advance_ms(299);
        assert!(!page.tick());
        clock.advance_ms(1);
        assert!(page.tick());
        assert!(page.animate_scores());
        assert_eq!(page.time_until_next(), None);
    }

    #[test]
    fn entering_verification_step_resets_it() {
        let (clock, mut page) = page();
        page.go_to_step(VERIFICATION_STEP);
        page.run_verification();
        clock.advance_ms(300);
        page.tick();

        page.next_step();
        page.prev_step();
        // prev does not reset
        assert!(page.animate_scores());

        page.go_to_step(1);
        page.next_step();
        assert!(!page.verification_run());
        assert!(!page.animate_scores());
    }

    #[test]
    fn selecting_function_resets_and_cancels_verification() {
        let (clock, mut page) = page();
        page.go_to_step(VERIFICATION_STEP);
        page.run_verification();
        page.select_function(2);

        clock.advance_ms(1_000);
        page.tick();
        assert!(!page.verification_run());
        assert!(!page.animate_scores());
        assert_eq!(page.function().raw.function_name, "deep_merge");
    }

    #[test]
    fn selecting_function_on_first_step_replays_terminal() {
        let (clock, mut page) = page();
        clock.advance_ms(60_000);
        page.tick();
        assert!(page.terminal().is_finished());

        page.select_function(1);
        assert!(page.terminal().is_running());
        assert!(page.terminal().revealed_lines().is_empty());
        assert!(page.terminal().lines()[0].text.ends_with("reqhelper"));
    }

    #[test]
    fn out_of_range_function_is_ignored() {
        let (_clock, mut page) = page();
        page.select_function(5);
        assert_eq!(page.selected_function(), 0);
    }

    #[test]
    fn cycle_wraps_around() {
        let (_clock, mut page) = page();
        page.cycle_function();
        page.cycle_function();
        page.cycle_function();
        assert_eq!(page.selected_function(), 0);
    }

    #[test]
    fn toggling_submission_switches_score() {
        let (_clock, mut page) = page();
        assert_eq!(page.current_score().total(), 0.9);
        page.toggle_submission(false);
        assert_eq!(page.current_score().total(), 0.07);
    }
}
