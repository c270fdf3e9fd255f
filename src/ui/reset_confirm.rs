use crate::core::BossRush;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the reset-progress confirmation dialog as an overlay
pub fn draw_reset_confirm(frame: &mut Frame, game: &BossRush) {
    let size = frame.size();

    let dialog_width = 46.min(size.width.saturating_sub(4));
    let dialog_height = 11.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let title = Line::from(Span::styled(
        " Reset Progress ",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This will permanently erase:",
            Style::default().fg(Color::Red),
        )),
        Line::from(format!(
            "  - Expertise for {} attacks",
            game.expertise().len()
        )),
        Line::from(format!(
            "  - {} recorded attempts",
            game.progress().total_attempts()
        )),
        Line::from("  - Boss progression"),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Reset    "),
            Span::styled("[N]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(title),
        );

    frame.render_widget(dialog, dialog_area);
}
