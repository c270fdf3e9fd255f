use crate::core::BossRush;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the player and boss HP gauges side by side
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, game: &BossRush) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_player_panel(frame, chunks[0], game);
    draw_boss_panel(frame, chunks[1], game);
}

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Player HP and attack cooldown
fn draw_player_panel(frame: &mut Frame, area: Rect, game: &BossRush) {
    let block = Block::default().borders(Borders::ALL).title(" Player ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let combat = game.combat();
    let max_hp = game.config().initial_player_hp;
    let ratio = combat.player_hp_ratio(max_hp);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(format!("HP: {:.0}/{:.0}", combat.player_hp.max(0.0), max_hp))
        .ratio(ratio);
    frame.render_widget(gauge, rows[0]);

    let cooldown = Paragraph::new(Line::from(vec![
        Span::styled("Next swing: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.1}s", combat.player_cooldown_ms.max(0.0) / 1000.0)),
    ]));
    frame.render_widget(cooldown, rows[1]);
}

/// Boss name, progression marker and HP
fn draw_boss_panel(frame: &mut Frame, area: Rect, game: &BossRush) {
    let boss_index = game.current_boss_index();
    let progress_index = game.progress().current_boss_index;
    let marker = if boss_index == progress_index {
        Span::styled(" (progression) ", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(" (practice) ", Style::default().fg(Color::DarkGray))
    };

    let title = Line::from(vec![
        Span::styled(
            format!(
                " {} [{}/{}]",
                game.current_boss().name,
                boss_index + 1,
                game.catalog().len()
            ),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        marker,
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let combat = game.combat();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!(
            "HP: {:.0}/{:.0}",
            combat.boss_hp.max(0.0),
            combat.boss.max_hp
        ))
        .ratio(combat.boss_hp_ratio());
    frame.render_widget(gauge, rows[0]);

    let furthest = game
        .catalog()
        .get(progress_index)
        .map_or("-", |b| b.name.as_str());
    let status = Paragraph::new(Line::from(vec![
        Span::styled("Furthest boss: ", Style::default().fg(Color::DarkGray)),
        Span::raw(furthest.to_string()),
    ]));
    frame.render_widget(status, rows[1]);
}
