//! Landing page rendering.
//!
//! One section is on screen at a time; the body is picked by section index.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::layout::split_columns;
use crate::data::PyPIStats;
use crate::pages::landing::{MINER_CONFIG_CODE, MINER_SETUP_CODE, VALIDATOR_SETUP_CODE};
use crate::pages::{LandingPage, SECTIONS, TERMINAL_SECTION};
use crate::reveal::{Clock, PlaybackPhase};
use crate::scoring::{ScoreBreakdown, EXAMPLE_EXECUTION_WEIGHT, PARAMETER_COVERAGE_WEIGHT, TYPE_ACCURACY_WEIGHT};
use crate::theme::{current_theme, Theme};
use crate::tui::ui::render_mark;
use crate::tui::widgets::{Badge, CodeBlock, ScoreBar, TerminalPanel};

/// Render the current section of `page` into `area`.
pub fn render_landing<C: Clock>(frame: &mut Frame, area: Rect, page: &LandingPage<C>) {
    let theme = current_theme();
    match page.current_section() {
        0 => render_hero(frame, area, &theme),
        1 => render_problem(frame, area, &page.dataset().stats, &theme),
        3 => render_scoring(frame, area, &theme),
        TERMINAL_SECTION => render_terminal(frame, area, page, &theme),
        5 => render_developer(frame, area, &theme),
        index => {
            let text = section_text(index, &theme);
            let [text_area, _] = text_and_rest(area, &text);
            frame.render_widget(wrapped(text), text_area);
            if index == SECTIONS.len() - 1 {
                let pill_area = Rect::new(area.x, text_area.bottom(), area.width, 1);
                if pill_area.bottom() <= area.bottom() {
                    frame.render_widget(Badge::verified().theme(theme.clone()), pill_area);
                }
            }
        }
    }
}

/// Status line text for the landing page.
pub fn landing_status<C: Clock>(page: &LandingPage<C>) -> String {
    let index = page.current_section();
    let mut status = format!(
        " Section {}/{} \u{2502} {}",
        index + 1,
        SECTIONS.len(),
        SECTIONS[index].title
    );
    if page.terminal_active() {
        let state = match page.terminal().phase() {
            PlaybackPhase::Running => "playing",
            PlaybackPhase::Finished => "finished",
            PlaybackPhase::Idle => "idle",
        };
        status.push_str(&format!(" \u{2502} terminal {}", state));
    }
    status
}

/// Title and body of section `index` as styled text.
fn section_text(index: usize, theme: &Theme) -> Text<'static> {
    let section = &SECTIONS[index];
    let mut lines = vec![
        Line::from(Span::styled(section.title, theme.accent_bold_style())),
        Line::from(""),
    ];
    lines.extend(
        section
            .body
            .lines()
            .map(|l| Line::from(Span::styled(l.trim_start(), theme.text_style()))),
    );
    if index == SECTIONS.len() - 1 {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", theme.text_secondary_style()),
            Span::styled("d", theme.accent_bold_style()),
            Span::styled(" or ", theme.text_secondary_style()),
            Span::styled("Enter", theme.accent_bold_style()),
            Span::styled(" to open the walkthrough", theme.text_secondary_style()),
        ]));
        lines.push(Line::from(""));
    }
    Text::from(lines)
}

fn wrapped(text: Text<'_>) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: false })
}

/// Rows `text` takes when wrapped to `width`.
fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Split `area` into a block tall enough for `text` and the rest.
fn text_and_rest(area: Rect, text: &Text<'_>) -> [Rect; 2] {
    let height = wrapped_height(text, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height), Constraint::Min(0)])
        .split(area);
    [chunks[0], chunks[1]]
}

fn render_hero(frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_mark(frame, chunks[0]);
    let text = section_text(0, theme);
    frame.render_widget(wrapped(text).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(Badge::verified().theme(theme.clone()), chunks[2]);
}

/// Rows describing the dataset scan.
pub fn stats_lines(stats: &PyPIStats, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(group_thousands(stats.total_functions_scanned), theme.accent_bold_style()),
            Span::styled(
                format!(
                    " functions scanned across {} packages",
                    group_thousands(stats.total_packages)
                ),
                theme.text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled(group_thousands(stats.eligible_functions), theme.success_style()),
            Span::styled(
                format!(" undocumented and eligible ({})", stats.eligibility_percent()),
                theme.text_style(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Rejected because", theme.text_secondary_style())),
    ];
    for (reason, count) in stats.rejections_by_count() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", reason.replace('_', " ")), theme.text_secondary_style()),
            Span::styled(group_thousands(count), theme.text_style()),
        ]));
    }
    lines
}

fn render_problem(frame: &mut Frame, area: Rect, stats: &PyPIStats, theme: &Theme) {
    let text = section_text(1, theme);
    let [text_area, rest] = text_and_rest(area, &text);
    frame.render_widget(wrapped(text), text_area);

    let mut lines = vec![Line::from("")];
    lines.extend(stats_lines(stats, theme));
    frame.render_widget(Paragraph::new(lines), rest);
}

fn render_scoring(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = section_text(3, theme);
    let [text_area, rest] = text_and_rest(area, &text);
    frame.render_widget(wrapped(text), text_area);

    let formula = Line::from(Span::styled(
        format!(
            "score = {:.1} \u{00d7} execution + {:.1} \u{00d7} types + {:.1} \u{00d7} coverage",
            EXAMPLE_EXECUTION_WEIGHT, TYPE_ACCURACY_WEIGHT, PARAMETER_COVERAGE_WEIGHT
        ),
        theme.text_secondary_style(),
    ));

    let perfect = ScoreBreakdown::new(1.0, 1.0, 1.0);
    let dimensions = perfect.dimensions();
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(dimensions.iter().map(|_| Constraint::Length(ScoreBar::HEIGHT + 1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(rest);

    frame.render_widget(Paragraph::new(formula), rows[0]);
    for (dimension, row) in dimensions.iter().zip(rows.iter().skip(1)) {
        let bar = ScoreBar::new(dimension.label, &dimension.weight, dimension.score)
            .animate(true)
            .theme(theme.clone());
        frame.render_widget(bar, *row);
    }
}

fn render_terminal<C: Clock>(frame: &mut Frame, area: Rect, page: &LandingPage<C>, theme: &Theme) {
    let text = section_text(TERMINAL_SECTION, theme);
    let [text_area, rest] = text_and_rest(area, &text);
    frame.render_widget(wrapped(text), text_area);

    let panel = TerminalPanel::from_revealer(page.terminal())
        .title("generate_task.py")
        .theme(theme.clone());
    frame.render_widget(panel, rest);
}

fn render_developer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = section_text(5, theme);
    let [text_area, rest] = text_and_rest(area, &text);
    frame.render_widget(wrapped(text), text_area);

    let [left, right] = split_columns(rest, 50);
    frame.render_widget(
        CodeBlock::new("validator", VALIDATOR_SETUP_CODE).theme(theme.clone()),
        left,
    );

    let miner = CodeBlock::new("miner", MINER_SETUP_CODE).theme(theme.clone());
    let miner_height = miner.required_height().min(right.height / 2);
    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(miner_height), Constraint::Min(0)])
        .split(right);
    frame.render_widget(miner, right_rows[0]);
    frame.render_widget(
        CodeBlock::new("miner-config.yaml", MINER_CONFIG_CODE).theme(theme.clone()),
        right_rows[1],
    );
}

/// `48213` as `48,213`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
