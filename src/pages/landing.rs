//! Landing page state.
//!
//! The page is a vertical stack of sections. Scrolling onto a section
//! reveals it and every section above it; revealing the live terminal
//! section starts its playback.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::info;

use crate::data::PyPIDataset;
use crate::reveal::{Clock, Line, LineRevealer, RevealTiming};

/// A landing page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SECTIONS: [Section; 7] = [
    Section {
        title: "Arbiter",
        body: "Verified documentation for the Python ecosystem.\n\
               Miners write docs. Validators prove them. The network pays for what runs.",
    },
    Section {
        title: "The Problem",
        body: "Most functions on PyPI ship without a docstring, without type hints \
               and without a single runnable example.",
    },
    Section {
        title: "How It Works",
        body: "1. A validator samples an undocumented function from PyPI.\n\
               2. Miners submit a docstring, type annotations and a code example.\n\
               3. The validator executes the example and checks every claim.\n\
               4. Scores become on-chain weights; weights become TAO.",
    },
    Section {
        title: "Deterministic Scoring",
        body: "No LLM judges. Every point is earned by something a machine can check.",
    },
    Section {
        title: "Live Task Generation",
        body: "A real run of the task generator against the sampled PyPI corpus.",
    },
    Section {
        title: "Developer Experience",
        body: "Run a validator or a miner in three commands.",
    },
    Section {
        title: "See It In Action",
        body: "Walk through one full scoring loop, from raw function to reward.",
    },
];

/// Index of the live terminal section.
pub const TERMINAL_SECTION: usize = 4;

pub const VALIDATOR_SETUP_CODE: &str = "# Install Arbiter
pip install arbiter-subnet

# Register on Bittensor (if not already)
btcli subnet register --netuid <SUBNET_UID> --wallet.name validator

# Start the validator
arbiter-validator start \\
  --wallet.name validator \\
  --wallet.hotkey default \\
  --subtensor.network finney";

pub const MINER_SETUP_CODE: &str = "# Install Arbiter
pip install arbiter-subnet

# Register as a miner
btcli subnet register --netuid <SUBNET_UID> --wallet.name miner

# Start the miner
arbiter-miner start \\
  --wallet.name miner \\
  --wallet.hotkey default \\
  --config miner-config.yaml";

pub const MINER_CONFIG_CODE: &str = "# miner-config.yaml
strategy: llm          # Options: llm, hybrid, ast
model: claude-3-5      # LLM to use for doc generation
max_concurrent: 4      # Parallel task workers
self_test: true        # Run examples locally before submitting

# Scoring targets (aim for these to maximize TAO)
targets:
  example_execution: 1.0   # 40% of score - code must run
  type_accuracy: 1.0       # 30% of score - types must match
  param_coverage: 1.0      # 20% of score - all params documented";

/// Loading lines shown before and after the elided middle.
const LOADING_HEAD: usize = 6;
const LOADING_TAIL: usize = 3;

/// Build the live-terminal sequence from the dataset's captured output.
pub fn build_terminal_lines(dataset: &PyPIDataset) -> Vec<Line> {
    let data = &dataset.terminal_output;
    let mut lines = vec![
        Line::command("python generate_task.py ./sampled_functions --show-source").with_delay(400),
        Line::blank(),
    ];

    let loading = &data.loading_sequence;
    for text in loading.iter().take(LOADING_HEAD) {
        lines.push(Line::output(text.as_str()).with_delay(50));
    }
    if loading.len() > LOADING_HEAD + LOADING_TAIL {
        lines.push(
            Line::output(format!(
                "... {} more packages ...",
                loading.len() - LOADING_HEAD - LOADING_TAIL
            ))
            .with_delay(50),
        );
    }
    let tail_start = LOADING_HEAD.max(loading.len().saturating_sub(LOADING_TAIL));
    for text in loading.iter().skip(tail_start) {
        lines.push(Line::output(text.as_str()).with_delay(50));
    }

    lines.push(Line::blank());

    for text in data.filter_summary.split('\n') {
        let line = if text.contains("Eligible") {
            Line::success(text).with_delay(100)
        } else if text.contains("Rejected") {
            Line::error(text).with_delay(100)
        } else {
            Line::output(text).with_delay(60)
        };
        lines.push(line);
    }

    lines.push(Line::blank());
    lines.push(Line::output("Selecting random task from eligible pool...").with_delay(600));
    lines.push(Line::blank());

    for text in &data.sample_task_lines {
        let line = if text.starts_with("===") || text.starts_with("───") {
            Line::header(text.as_str())
        } else if text.contains("MINER TASK") {
            Line::success(text.as_str())
        } else {
            Line::output(text.as_str())
        };
        lines.push(line.with_delay(40));
    }

    lines
}

/// Landing page state.
#[derive(Debug)]
pub struct LandingPage<C: Clock> {
    dataset: &'static PyPIDataset,
    current: usize,
    revealed: BTreeSet<usize>,
    terminal: LineRevealer<C>,
}

impl<C: Clock> LandingPage<C> {
    pub fn new(dataset: &'static PyPIDataset, clock: C, timing: RevealTiming) -> Self {
        let mut terminal = LineRevealer::new(clock, timing);
        terminal.load(build_terminal_lines(dataset));

        let mut page = Self {
            dataset,
            current: 0,
            revealed: BTreeSet::new(),
            terminal,
        };
        page.scroll_to(0);
        page
    }

    pub fn dataset(&self) -> &'static PyPIDataset {
        self.dataset
    }

    /// Section in view.
    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn section(&self) -> &'static Section {
        &SECTIONS[self.current]
    }

    pub fn is_section_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Bring section `index` into view, revealing it and all above it.
    pub fn scroll_to(&mut self, index: usize) {
        let index = index.min(SECTIONS.len() - 1);
        self.current = index;
        for i in 0..=index {
            if self.revealed.insert(i) {
                info!(section = SECTIONS[i].title, "section revealed");
            }
        }
        if self.revealed.contains(&TERMINAL_SECTION) {
            self.terminal.set_active(true);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_to(self.current + 1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_to(self.current.saturating_sub(1));
    }

    pub fn terminal(&self) -> &LineRevealer<C> {
        &self.terminal
    }

    pub fn terminal_active(&self) -> bool {
        self.terminal.is_active()
    }

    /// Skip the live terminal to its end state.
    pub fn skip_terminal(&mut self) {
        self.terminal.skip();
    }

    /// Advance timed state. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.terminal.tick()
    }

    /// Time until the next scheduled change.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.terminal.time_until_next()
    }
}
