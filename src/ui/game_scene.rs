//! The hub scene the player returns to between battles, shopping, and
//! quest work. Shows the stats header, the action menu, and the log.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::VecDeque;

use crate::session::{GameSession, LogEntry, LogKind};
use crate::ui::stats_panel::{draw_stats_panel, STATS_PANEL_HEIGHT};

/// Actions reachable from the hub menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Inventory,
    Quests,
    Explore,
    Shop,
    SaveQuit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Inventory,
        MenuItem::Quests,
        MenuItem::Explore,
        MenuItem::Shop,
        MenuItem::SaveQuit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Inventory => "Inventory",
            MenuItem::Quests => "Quests",
            MenuItem::Explore => "Explore",
            MenuItem::Shop => "Shop",
            MenuItem::SaveQuit => "Save and Quit",
        }
    }
}

#[allow(dead_code)]
pub struct GameMenuScreen {
    pub selected_index: usize,
}

#[allow(dead_code)]
impl GameMenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MenuItem::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STATS_PANEL_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        draw_stats_panel(frame, chunks[0], &session.character);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        self.draw_menu(frame, body[0]);
        draw_message_log(frame, body[1], &session.log);

        let controls = Paragraph::new("[Up/Down] Navigate  [Enter] Select  [Q] Save and Quit")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(controls, chunks[2]);
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Town");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected_index {
                    Line::styled(
                        format!("> {}", item.label()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("  {}", item.label()))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Renders the tail of the session log, newest entry at the bottom.
pub fn draw_message_log(frame: &mut Frame, area: Rect, log: &VecDeque<LogEntry>) {
    let block = Block::default().borders(Borders::ALL).title("Log");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = log
        .iter()
        .skip(log.len().saturating_sub(visible))
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Info => Style::default(),
                LogKind::Good => Style::default().fg(Color::Green),
                LogKind::Bad => Style::default().fg(Color::Red),
            };
            Line::styled(entry.message.as_str(), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation_clamps_at_both_ends() {
        let mut screen = GameMenuScreen::new();
        screen.move_up();
        assert_eq!(screen.selected_index, 0);

        for _ in 0..10 {
            screen.move_down();
        }
        assert_eq!(screen.selected_index, MenuItem::ALL.len() - 1);
        assert_eq!(screen.selected(), MenuItem::SaveQuit);
    }

    #[test]
    fn test_menu_items_cover_every_hub_action() {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Inventory", "Quests", "Explore", "Shop", "Save and Quit"]
        );
    }
}
