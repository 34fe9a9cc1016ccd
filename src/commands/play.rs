//! Play subcommand handler
//!
//! Streams a line sequence to stdout through the revealer, typing commands
//! character by character. Ctrl+C skips to the end instead of aborting.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use unicode_width::UnicodeWidthChar;

use arbiter_demo::data::pypi_dataset;
use arbiter_demo::pages::landing::build_terminal_lines;
use arbiter_demo::reveal::{parse_lines, Line, LineCategory, LineRevealer, RevealTiming};
use arbiter_demo::theme::{current_theme, Theme};
use arbiter_demo::Config;

/// Longest sleep between checks for Ctrl+C.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Options for one playback.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions<'a> {
    pub file: Option<&'a Path>,
    pub skip: bool,
    pub line_delay_ms: Option<u64>,
    pub char_delay_ms: Option<u64>,
}

/// Load the lines to play: a JSON file, or the landing page sequence.
pub fn load_lines(file: Option<&Path>) -> Result<Vec<Line>> {
    match file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_lines(&json).with_context(|| format!("Invalid line file {}", path.display()))
        }
        None => Ok(build_terminal_lines(pypi_dataset()?)),
    }
}

/// Timing from the config, with command-line overrides applied.
pub fn resolve_timing(config: &Config, options: &PlayOptions) -> RevealTiming {
    let base = config.playback_timing();
    RevealTiming {
        line_delay: options
            .line_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(base.line_delay),
        char_delay: options
            .char_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(base.char_delay),
    }
}

/// Truncate `text` to `width` display columns.
pub fn fit_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..i];
        }
    }
    text
}

/// One committed line as printed. Colour only when `theme` is given.
pub fn format_line(line: &Line, theme: Option<&Theme>, width: Option<usize>) -> String {
    let prompt = if line.category == LineCategory::Command {
        2
    } else {
        0
    };
    let text = match width {
        Some(w) => fit_width(&line.text, w.saturating_sub(prompt)),
        None => line.text.as_str(),
    };
    match (theme, line.category) {
        (_, LineCategory::Blank) => String::new(),
        (Some(theme), category) => theme.line_text(category, text),
        (None, LineCategory::Command) => format!("$ {}", text),
        (None, _) => text.to_string(),
    }
}

/// Play lines according to `options`.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(config: &Config, options: PlayOptions) -> Result<()> {
    let lines = load_lines(options.file)?;
    let timing = resolve_timing(config, &options);
    let interactive = atty::is(atty::Stream::Stdout);
    let theme = interactive.then(current_theme);
    let width = terminal_size::terminal_size().map(|(w, _)| usize::from(w.0));

    info!(lines = lines.len(), interactive, skip = options.skip, "playback starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.skip || !interactive {
        for line in &lines {
            writeln!(out, "{}", format_line(line, theme.as_ref(), width))?;
        }
        return Ok(());
    }

    let skip_requested = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&skip_requested);
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            warn!(error = %e, "could not install Ctrl+C handler");
        }
    }

    let mut revealer = LineRevealer::with_system_clock(timing);
    revealer.start(lines);
    let mut printed = 0;
    let mut typed = String::new();

    loop {
        if skip_requested.swap(false, Ordering::SeqCst) {
            debug!("skip requested");
            revealer.skip();
        }
        if revealer.tick() || revealer.is_finished() {
            let revealed = revealer.revealed_lines();
            for line in &revealed[printed..] {
                // Replace the partially typed line, if any
                write!(out, "\r\x1b[2K")?;
                writeln!(out, "{}", format_line(line, theme.as_ref(), width))?;
                typed.clear();
            }
            printed = revealed.len();

            let buffer = revealer.typing_buffer();
            if buffer != typed {
                let partial = Line::command(buffer);
                write!(
                    out,
                    "\r\x1b[2K{}",
                    format_line(&partial, theme.as_ref(), width)
                )?;
                typed = buffer.to_string();
            }
            out.flush()?;
        }
        if revealer.is_finished() {
            break;
        }
        let wait = revealer
            .time_until_next()
            .unwrap_or(Duration::ZERO)
            .min(POLL_INTERVAL);
        thread::sleep(wait);
    }

    info!("playback finished");
    Ok(())
}
