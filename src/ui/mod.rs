//! Terminal rendering. Reads the game; never mutates it.

mod combat_scene;
pub mod history_chart;
mod info_panel;
mod reset_confirm;

use crate::core::BossRush;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use reset_confirm::draw_reset_confirm;

/// Scroll position of the combat log, counted in lines up from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogView {
    offset: usize,
    follow: bool,
}

impl Default for LogView {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

impl LogView {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Jumps back to the newest line when the log grew and we are following.
    pub fn on_batch(&mut self, log_grew: bool) {
        if log_grew && self.follow {
            self.offset = 0;
        }
    }

    pub fn scroll_up(&mut self, lines: usize, log_len: usize) {
        self.offset = (self.offset + lines).min(log_len.saturating_sub(1));
        self.follow = self.offset == 0;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = self.offset == 0;
    }
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &BossRush, log_view: &LogView) {
    let size = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // HP panels
            Constraint::Percentage(45), // Expertise + history
            Constraint::Min(5),         // Combat log
            Constraint::Length(3),      // Footer
        ])
        .split(size);

    combat_scene::draw_combat_scene(frame, rows[0], game);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(rows[1]);
    info_panel::draw_expertise_panel(frame, middle[0], game);
    history_chart::draw_history_chart(frame, middle[1], game);

    info_panel::draw_combat_log(frame, rows[2], game, log_view);
    draw_footer(frame, rows[3], game);
}

/// Draws the footer with control instructions
fn draw_footer(frame: &mut Frame, area: Rect, game: &BossRush) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };

    let footer_text = vec![Line::from(vec![
        Span::styled("Controls: ", Style::default().add_modifier(Modifier::BOLD)),
        key("←/→"),
        Span::raw(" or "),
        key(boss_key_hint(game.catalog().len())),
        Span::raw(" = Boss | "),
        key("↑/↓"),
        Span::raw(" = Scroll | "),
        key("R"),
        Span::raw(" = Reset | "),
        Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" = Quit"),
    ])];

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

fn boss_key_hint(count: usize) -> &'static str {
    match count {
        0 | 1 => "1",
        2 => "1-2",
        3 => "1-3",
        4 => "1-4",
        5 => "1-5",
        6 => "1-6",
        7 => "1-7",
        8 => "1-8",
        _ => "1-9",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_view_follows_by_default() {
        let mut view = LogView::default();
        view.on_batch(true);
        assert_eq!(view.offset(), 0);
        assert!(view.is_following());
    }

    #[test]
    fn test_scrolling_up_stops_following() {
        let mut view = LogView::default();
        view.scroll_up(5, 100);
        assert_eq!(view.offset(), 5);
        assert!(!view.is_following());

        view.on_batch(true);
        assert_eq!(view.offset(), 5);
    }

    #[test]
    fn test_scroll_up_is_bounded_by_log_length() {
        let mut view = LogView::default();
        view.scroll_up(50, 10);
        assert_eq!(view.offset(), 9);
    }

    #[test]
    fn test_scrolling_back_down_resumes_following() {
        let mut view = LogView::default();
        view.scroll_up(3, 100);
        view.scroll_down(10);
        assert_eq!(view.offset(), 0);
        assert!(view.is_following());
    }
}
