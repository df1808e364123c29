//! The character header shown at the top of every in-game scene.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::character::progression::xp_to_next_level;
use crate::character::types::Character;
use crate::constants::INVENTORY_CAPACITY;

/// Total height the panel needs, borders included.
pub const STATS_PANEL_HEIGHT: u16 = 6;

pub fn draw_stats_panel(frame: &mut Frame, area: Rect, character: &Character) {
    let block = Block::default().borders(Borders::ALL).title("Hero");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // identity
            Constraint::Length(1), // health gauge
            Constraint::Length(1), // experience gauge
            Constraint::Length(1), // attributes
        ])
        .split(inner);

    let identity = Line::from(vec![
        Span::styled(
            character.name.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  Level {} {}", character.level, character.class)),
    ]);
    frame.render_widget(Paragraph::new(identity), chunks[0]);

    let hp_ratio = character.health as f64 / character.max_health.max(1) as f64;
    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };
    let hp_gauge = Gauge::default()
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(format!("HP {}/{}", character.health, character.max_health))
        .ratio(hp_ratio.min(1.0));
    frame.render_widget(hp_gauge, chunks[1]);

    let threshold = xp_to_next_level(character).max(1);
    let xp_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("XP {}/{}", character.experience, threshold))
        .ratio((character.experience as f64 / threshold as f64).min(1.0));
    frame.render_widget(xp_gauge, chunks[2]);

    let attributes = Paragraph::new(format!(
        "STR {}   MAG {}   Gold {}   Bag {}/{}",
        character.strength,
        character.magic,
        character.gold,
        character.inventory.len(),
        INVENTORY_CAPACITY
    ));
    frame.render_widget(attributes, chunks[3]);
}
