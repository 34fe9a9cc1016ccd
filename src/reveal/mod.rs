//! Simulated terminal playback.
//!
//! # Architecture
//!
//! - `line`: the [`Line`] input type and its display categories
//! - `clock`: injectable time sources ([`SystemClock`], [`ManualClock`])
//! - `revealer`: the [`LineRevealer`] state machine
//!
//! # Usage
//!
//! ```
//! use arbiter_demo::reveal::{Line, LineRevealer, ManualClock, RevealTiming};
//!
//! let clock = ManualClock::new();
//! let mut revealer = LineRevealer::new(clock.clone(), RevealTiming::from_millis(50, 10));
//! revealer.start(vec![Line::command("ls"), Line::output("Cargo.toml")]);
//!
//! clock.advance_ms(1_000);
//! revealer.tick();
//! assert!(revealer.is_finished());
//! assert_eq!(revealer.revealed_lines().len(), 2);
//! ```

pub mod clock;
pub mod line;
mod revealer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use line::{parse_lines, Line, LineCategory};
pub use revealer::{
    LineRevealer, PlaybackPhase, RevealTiming, DEFAULT_CHAR_DELAY_MS, DEFAULT_LINE_DELAY_MS,
};
