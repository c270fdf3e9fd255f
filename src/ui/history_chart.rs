//! Attempt history for the boss being fought: final HP bars per attempt and
//! one expertise line per attack across attempts.

use crate::core::BossRush;
use crate::progress::{Attempt, FightOutcome};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

const LINE_COLORS: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
];

/// One expertise series per attack, indexed by attempt number (1-based).
///
/// Attacks are ordered as in the latest attempt; attempts taken before an
/// attack was first seen plot as 0.
pub fn expertise_series(attempts: &[Attempt]) -> Vec<(String, Vec<(f64, f64)>)> {
    let Some(latest) = attempts.last() else {
        return Vec::new();
    };

    latest
        .expertise
        .iter()
        .map(|sample| {
            let points = attempts
                .iter()
                .enumerate()
                .map(|(i, attempt)| {
                    let value = attempt
                        .expertise
                        .iter()
                        .find(|s| s.attack == sample.attack)
                        .map_or(0.0, |s| s.dodge_probability);
                    ((i + 1) as f64, value)
                })
                .collect();
            (sample.attack.clone(), points)
        })
        .collect()
}

/// Draws the history panel for the current boss
pub fn draw_history_chart(frame: &mut Frame, area: Rect, game: &BossRush) {
    let attempts = game.attempts_for_current_boss();
    let block = Block::default().borders(Borders::ALL).title(format!(
        " History: {} ({} attempts) ",
        game.current_boss().name,
        attempts.len()
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if attempts.is_empty() {
        let text = Paragraph::new(Line::from(Span::styled(
            "No attempts yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(text, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    draw_hp_bars(frame, chunks[0], attempts);
    draw_expertise_lines(frame, chunks[1], attempts);
}

/// Final player (green) and boss (red) HP for the most recent attempts that fit
fn draw_hp_bars(frame: &mut Frame, area: Rect, attempts: &[Attempt]) {
    // Each group: two 1-wide bars plus a gap
    let fit = (area.width as usize / 3).max(1);
    let first = attempts.len().saturating_sub(fit);

    let mut chart = BarChart::default()
        .block(Block::default().title(" Final HP (player / boss) "))
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for (i, attempt) in attempts.iter().enumerate().skip(first) {
        let label_style = match attempt.outcome {
            FightOutcome::Won => Style::default().fg(Color::Green),
            FightOutcome::Died => Style::default().fg(Color::Red),
        };
        let bars = [
            Bar::default()
                .value(attempt.final_player_hp.max(0.0).round() as u64)
                .text_value(String::new())
                .style(Style::default().fg(Color::Green)),
            Bar::default()
                .value(attempt.final_boss_hp.max(0.0).round() as u64)
                .text_value(String::new())
                .style(Style::default().fg(Color::Red)),
        ];
        let group = BarGroup::default()
            .label(Line::from(Span::styled(format!("{}", (i + 1) % 100), label_style)))
            .bars(&bars);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Dodge probability per attack across attempts
fn draw_expertise_lines(frame: &mut Frame, area: Rect, attempts: &[Attempt]) {
    let series = expertise_series(attempts);
    let max_x = attempts.len().max(2) as f64;
    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold(1.0f64, f64::max);

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, (attack, points))| {
            Dataset::default()
                .name(attack.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(LINE_COLORS[i % LINE_COLORS.len()]))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Expertise per attempt "))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([1.0, max_x])
                .labels(vec![
                    Span::raw("1"),
                    Span::raw(format!("{}", attempts.len())),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.1}", max_y))]),
        );

    frame.render_widget(chart, area);
}
