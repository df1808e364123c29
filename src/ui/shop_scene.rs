//! The town shop: buy from the full catalog, sell back at half price.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::GameSession;
use crate::ui::stats_panel::{draw_stats_panel, STATS_PANEL_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Buy,
    Sell,
}

#[allow(dead_code)]
pub struct ShopScreen {
    pub mode: ShopMode,
    pub selected_index: usize,
}

#[allow(dead_code)]
impl ShopScreen {
    pub fn new() -> Self {
        Self {
            mode: ShopMode::Buy,
            selected_index: 0,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ShopMode::Buy => ShopMode::Sell,
            ShopMode::Sell => ShopMode::Buy,
        };
        self.selected_index = 0;
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

    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Length of the list the cursor ranges over in the current mode.
    pub fn list_len(&self, session: &GameSession) -> usize {
        match self.mode {
            ShopMode::Buy => session.items.len(),
            ShopMode::Sell => session.character.inventory.len(),
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
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.draw_catalog(frame, body[0], session);
        self.draw_details(frame, body[1], session);

        let controls = match self.mode {
            ShopMode::Buy => "[Tab] Switch to Sell  [Enter] Buy  [Esc] Back",
            ShopMode::Sell => "[Tab] Switch to Buy  [Enter] Sell  [Esc] Back",
        };
        frame.render_widget(
            Paragraph::new(controls).block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let title = format!(
            "Shop: {} (Gold: {})",
            match self.mode {
                ShopMode::Buy => "Buy",
                ShopMode::Sell => "Sell",
            },
            session.character.gold
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows: Vec<(String, u32)> = match self.mode {
            ShopMode::Buy => session
                .shop_stock()
                .iter()
                .map(|item| (item.name.clone(), item.cost))
                .collect(),
            ShopMode::Sell => session
                .character
                .inventory
                .iter()
                .map(|item_id| match session.items.get(item_id) {
                    Some(item) => (item.name.clone(), item.cost / 2),
                    None => (item_id.clone(), 0),
                })
                .collect(),
        };

        if rows.is_empty() {
            let empty = Paragraph::new("Nothing to sell.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(i, (name, price))| {
                let text = format!(
                    "{} {:<24} {:>4}g",
                    if i == self.selected_index { ">" } else { " " },
                    name,
                    price
                );
                if i == self.selected_index {
                    Line::styled(
                        text,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(text)
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let block = Block::default().borders(Borders::ALL).title("Details");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let item = match self.mode {
            ShopMode::Buy => session.shop_stock().get(self.selected_index).copied(),
            ShopMode::Sell => session
                .character
                .inventory
                .get(self.selected_index)
                .and_then(|id| session.items.get(id)),
        };

        let Some(item) = item else {
            return;
        };

        let price_line = match self.mode {
            ShopMode::Buy => format!("Price: {} gold", item.cost),
            ShopMode::Sell => format!("Sells for: {} gold", item.cost / 2),
        };

        let lines = vec![
            Line::styled(
                item.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(format!("Type: {}", item.kind.name())),
            Line::raw(price_line),
            Line::raw(""),
            Line::styled(item.description.clone(), Style::default().fg(Color::Gray)),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
