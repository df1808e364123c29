//! Inventory management: inspect, use, equip, and drop carried items.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::items::effects::ItemEffect;
use crate::session::GameSession;
use crate::ui::stats_panel::{draw_stats_panel, STATS_PANEL_HEIGHT};

#[allow(dead_code)]
pub struct InventoryScreen {
    pub selected_index: usize,
}

#[allow(dead_code)]
impl InventoryScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Pulls the cursor back inside the list after items are removed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
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
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.draw_list(frame, body[0], session);
        self.draw_details(frame, body[1], session);

        let controls = Paragraph::new(
            "[U] Use  [E] Equip  [D] Drop  [W] Unequip Weapon  [A] Unequip Armor  [Esc] Back",
        )
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(controls, chunks[2]);
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let title = format!(
            "Bag ({}/{})",
            session.character.inventory.len(),
            crate::constants::INVENTORY_CAPACITY
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if session.character.inventory.is_empty() {
            let empty = Paragraph::new("Your bag is empty.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let lines: Vec<Line> = session
            .character
            .inventory
            .iter()
            .enumerate()
            .map(|(i, item_id)| {
                let name = session
                    .items
                    .get(item_id)
                    .map(|item| item.name.as_str())
                    .unwrap_or(item_id.as_str());
                if i == self.selected_index {
                    Line::styled(
                        format!("> {}", name),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("  {}", name))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let block = Block::default().borders(Borders::ALL).title("Details");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();

        let selected = session
            .character
            .inventory
            .get(self.selected_index)
            .and_then(|id| session.items.get(id));
        if let Some(item) = selected {
            lines.push(Line::styled(
                item.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(format!("Type: {}", item.kind.name())));
            if let Ok(effect) = ItemEffect::parse(&item.effect) {
                lines.push(Line::raw(format!("Effect: {}", effect)));
            }
            lines.push(Line::raw(format!("Sells for: {} gold", item.cost / 2)));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                item.description.clone(),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled(
            "Equipped",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(format!(
            "Weapon: {}",
            slot_label(session, &session.character.equipped_weapon)
        )));
        lines.push(Line::raw(format!(
            "Armor:  {}",
            slot_label(session, &session.character.equipped_armor)
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn slot_label(
    session: &GameSession,
    slot: &Option<crate::character::types::EquippedItem>,
) -> String {
    match slot {
        Some(equipped) => {
            let name = session
                .items
                .get(&equipped.item_id)
                .map(|item| item.name.clone())
                .unwrap_or_else(|| equipped.item_id.clone());
            format!("{} ({})", name, equipped.effect)
        }
        None => "(none)".to_string(),
    }
}
