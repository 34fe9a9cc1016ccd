//! Walkthrough rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::layout::split_columns;
use crate::pages::demo::{NETWORK_FLOW, VERIFICATION_STEP};
use crate::pages::DemoPage;
use crate::reveal::Clock;
use crate::scoring::{format_score, ScoreBreakdown, ScoreTier};
use crate::theme::{current_theme, Theme};
use crate::tui::widgets::{Badge, CodeBlock, ScoreBar, StepIndicator, TerminalPanel};

/// Render the current step of `page` into `area`.
pub fn render_demo<C: Clock + Clone>(frame: &mut Frame, area: Rect, page: &DemoPage<C>) {
    let theme = current_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        StepIndicator::new(page.steps(), page.current_step()).theme(theme.clone()),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(step_heading(page, &theme)), chunks[1]);

    let body = chunks[2];
    match page.current_step() {
        0 => render_problem(frame, body, page, &theme),
        1 => render_submission(frame, body, page, &theme),
        VERIFICATION_STEP => render_verification(frame, body, page, &theme),
        _ => render_network(frame, body, &theme),
    }
}

/// Status line text for the walkthrough.
pub fn demo_status<C: Clock + Clone>(page: &DemoPage<C>) -> String {
    let step = page.current_step();
    format!(
        " Step {}/{} \u{2502} {} \u{2502} {} \u{2502} {} submission",
        step + 1,
        page.steps().len(),
        page.steps()[step],
        page.function().raw.function_name,
        if page.show_good() { "good" } else { "bad" }
    )
}

fn step_heading<C: Clock + Clone>(page: &DemoPage<C>, theme: &Theme) -> Line<'static> {
    let raw = &page.function().raw;
    Line::from(vec![
        Span::styled(
            page.steps()[page.current_step()].to_string(),
            theme.accent_bold_style(),
        ),
        Span::styled(
            format!(
                "   function {}/{}: {}",
                page.selected_function() + 1,
                page.functions().len(),
                raw.qualified_name()
            ),
            theme.text_secondary_style(),
        ),
    ])
}

fn render_problem<C: Clock + Clone>(frame: &mut Frame, area: Rect, page: &DemoPage<C>, theme: &Theme) {
    let raw = &page.function().raw;
    let [left, right] = split_columns(area, 50);

    let file_name = format!("{}.py", raw.module_path.replace('.', "/"));
    frame.render_widget(
        CodeBlock::new(&file_name, &raw.source_code).theme(theme.clone()),
        left,
    );
    frame.render_widget(
        TerminalPanel::from_revealer(page.terminal()).theme(theme.clone()),
        right,
    );
}

/// Good/bad tab row for the submission step.
pub fn submission_tabs(show_good: bool, theme: &Theme) -> Line<'static> {
    let tab = |label: &'static str, selected: bool| {
        if selected {
            Span::styled(format!("[ {} ]", label), theme.accent_bold_style())
        } else {
            Span::styled(format!("  {}  ", label), theme.text_secondary_style())
        }
    };
    Line::from(vec![
        tab("Good Submission (g)", show_good),
        Span::raw(" "),
        tab("Bad Submission (b)", !show_good),
    ])
}

fn render_submission<C: Clock + Clone>(frame: &mut Frame, area: Rect, page: &DemoPage<C>, theme: &Theme) {
    let submission = page.function().submission(page.show_good());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = vec![
        submission_tabs(page.show_good(), theme),
        Line::from(Span::styled(
            format!("{} from {}", submission.label, submission.miner_id),
            theme.text_secondary_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    let [left, right] = split_columns(rows[1], 50);
    frame.render_widget(
        CodeBlock::new("docstring", &submission.docstring).theme(theme.clone()),
        left,
    );

    let types = CodeBlock::new("types", &submission.type_annotations).theme(theme.clone());
    let types_height = types.required_height().min(right.height / 2);
    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(types_height), Constraint::Min(0)])
        .split(right);
    frame.render_widget(types, right_rows[0]);
    frame.render_widget(
        CodeBlock::new("example", &submission.code_example).theme(theme.clone()),
        right_rows[1],
    );
}

/// Check list shown once the scores are in.
pub fn verification_lines(score: &ScoreBreakdown, theme: &Theme) -> Vec<Line<'static>> {
    score
        .dimensions()
        .iter()
        .map(|dimension| {
            let (mark, style) = match ScoreTier::of(dimension.score) {
                ScoreTier::Good => ("\u{2713}", theme.success_style()),
                ScoreTier::Fair => ("~", theme.text_style()),
                ScoreTier::Poor => ("\u{2717}", theme.error_style()),
            };
            Line::from(vec![
                Span::styled(format!("  {} ", mark), style),
                Span::styled(format!("{:<20}", dimension.label), theme.text_style()),
                Span::styled(format_score(dimension.score), style),
            ])
        })
        .collect()
}

fn render_verification<C: Clock + Clone>(
    frame: &mut Frame,
    area: Rect,
    page: &DemoPage<C>,
    theme: &Theme,
) {
    let submission = page.function().submission(page.show_good());
    if !page.verification_run() {
        let prompt = Line::from(vec![
            Span::styled("Press ", theme.text_secondary_style()),
            Span::styled("v", theme.accent_bold_style()),
            Span::styled(
                format!(
                    " to verify the {} from {}",
                    submission.label.to_lowercase(),
                    submission.miner_id
                ),
                theme.text_secondary_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(prompt), area);
        return;
    }

    let score = page.current_score();
    let dimensions = score.dimensions();
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(dimensions.iter().map(|_| Constraint::Length(ScoreBar::HEIGHT + 1)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let status = if page.animate_scores() {
        Span::styled("Verification complete", theme.success_style())
    } else {
        Span::styled("Running examples and checking types...", theme.text_secondary_style())
    };
    frame.render_widget(Paragraph::new(Line::from(status)), rows[0]);

    let [bars_left, checks_right] = split_columns(
        Rect::new(
            area.x,
            rows[1].y,
            area.width,
            rows[dimensions.len()].bottom().saturating_sub(rows[1].y),
        ),
        60,
    );
    let bar_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(dimensions.iter().map(|_| Constraint::Length(ScoreBar::HEIGHT + 1)))
        .split(bars_left);
    for (dimension, row) in dimensions.iter().zip(bar_rows.iter()) {
        let bar = ScoreBar::new(dimension.label, &dimension.weight, dimension.score)
            .animate(page.animate_scores())
            .theme(theme.clone());
        frame.render_widget(bar, Rect { width: row.width.saturating_sub(2), ..*row });
    }

    if !page.animate_scores() {
        return;
    }

    frame.render_widget(Paragraph::new(verification_lines(score, theme)), checks_right);

    let total = score.total();
    let tier = ScoreTier::of(total);
    let total_line = Line::from(vec![
        Span::styled("Total score  ", theme.text_style()),
        Span::styled(
            format_score(total),
            theme.accent_bold_style().fg(theme.tier_color(tier)),
        ),
        Span::styled(
            match tier {
                ScoreTier::Good => "   weights raised, TAO earned",
                ScoreTier::Fair => "   partial credit",
                ScoreTier::Poor => "   rejected, no reward",
            },
            theme.text_secondary_style(),
        ),
    ]);
    let total_row = rows[dimensions.len() + 1];
    frame.render_widget(Paragraph::new(total_line), total_row);

    if tier == ScoreTier::Good {
        let pill = Rect::new(area.x, total_row.bottom(), area.width, 1);
        if pill.bottom() <= area.bottom() {
            frame.render_widget(Badge::verified().theme(theme.clone()), pill);
        }
    }
}

fn render_network(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = Vec::with_capacity(NETWORK_FLOW.len() * 2);
    for (i, (actor, action)) in NETWORK_FLOW.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled("   \u{2193}", theme.border_style())));
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<13}", actor), theme.accent_bold_style()),
            Span::styled(*action, theme.text_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
