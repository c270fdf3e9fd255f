use super::LogView;
use crate::core::constants::{DEATH_MESSAGE, VICTORY_MESSAGE};
use crate::core::BossRush;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Live expertise readout for the boss being fought
pub fn draw_expertise_panel(frame: &mut Frame, area: Rect, game: &BossRush) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Expertise ");

    let samples = game.expertise_for_current_boss();
    let lines: Vec<Line> = if samples.is_empty() {
        vec![Line::from(Span::styled(
            "No attacks observed yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        samples
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::raw(format!("{}: ", s.attack)),
                    Span::styled(
                        format!("{:.2}", s.dodge_probability),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn entry_style(entry: &str, boss_name: &str) -> Style {
    if entry == DEATH_MESSAGE {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if entry == VICTORY_MESSAGE {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if entry.starts_with(boss_name) {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default()
    }
}

/// Draws the combat log, oldest at the top, anchored to the bottom
pub fn draw_combat_log(frame: &mut Frame, area: Rect, game: &BossRush, view: &LogView) {
    let title = if view.is_following() {
        " Combat Log ".to_string()
    } else {
        format!(" Combat Log (scrolled {} up) ", view.offset())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let log = &game.combat().log;
    let height = inner.height as usize;
    let end = log.len().saturating_sub(view.offset());
    let start = end.saturating_sub(height);
    let max_width = inner.width as usize;
    let boss_name = &game.current_boss().name;

    let lines: Vec<Line> = log
        .iter()
        .skip(start)
        .take(end - start)
        .map(|entry| {
            let msg = if entry.chars().count() > max_width {
                let truncated: String = entry.chars().take(max_width.saturating_sub(1)).collect();
                format!("{}…", truncated)
            } else {
                entry.to_string()
            };
            Line::from(Span::styled(msg, entry_style(entry, boss_name)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
