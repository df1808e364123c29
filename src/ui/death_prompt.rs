//! Shown when the hero falls in battle: revive at the temple or give up.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::REVIVE_COST_GOLD;
use crate::session::GameSession;

pub fn draw_death_prompt(frame: &mut Frame, area: Rect, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(4)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("You have fallen in battle.")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![
        Line::raw(format!(
            "The temple will revive you for {} gold.",
            REVIVE_COST_GOLD
        )),
        Line::raw(format!("You carry {} gold.", session.character.gold)),
        Line::raw(""),
    ];
    if session.character.gold < REVIVE_COST_GOLD {
        lines.push(Line::styled(
            "You cannot afford a revival.",
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        format!("[R] Revive ({} gold)  [Q] Give Up", REVIVE_COST_GOLD),
        Style::default().fg(Color::DarkGray),
    ));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);
}
