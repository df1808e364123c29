//! The save roster shown at startup: pick a hero, start a new one,
//! or clean out old saves.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::character::manager::CharacterInfo;

#[allow(dead_code)]
pub struct CharacterSelectScreen {
    pub selected_index: usize,
    /// Name of the save awaiting delete confirmation, if any.
    pub pending_delete: Option<String>,
    /// One-shot status line, e.g. the result of a failed load.
    pub status: Option<String>,
}

#[allow(dead_code)]
impl CharacterSelectScreen {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            pending_delete: None,
            status: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, characters: &[CharacterInfo]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Roster + details
                Constraint::Length(2), // Status / confirmation
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Select Your Hero")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        self.draw_roster(f, body[0], characters);
        self.draw_details(f, body[1], characters);

        if let Some(name) = &self.pending_delete {
            let confirm = Paragraph::new(format!(
                "Delete '{}'? This cannot be undone.  [Y] Confirm  [Esc] Cancel",
                name
            ))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
            f.render_widget(confirm, chunks[2]);
        } else if let Some(status) = &self.status {
            let line = Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red));
            f.render_widget(line, chunks[2]);
        }

        let controls = Paragraph::new("[Enter] Play  [N] New  [D] Delete  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(controls, chunks[3]);
    }

    fn draw_roster(&self, f: &mut Frame, area: Rect, characters: &[CharacterInfo]) {
        let block = Block::default().borders(Borders::ALL).title("Saves");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if characters.is_empty() {
            let empty = Paragraph::new("No saved heroes yet. Press [N] to create one.")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, inner);
            return;
        }

        let lines: Vec<Line> = characters
            .iter()
            .enumerate()
            .map(|(i, info)| {
                let marker = if i == self.selected_index { "> " } else { "  " };
                if info.is_corrupted {
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(
                            format!("{} (CORRUPTED)", info.name),
                            Style::default().fg(Color::Red),
                        ),
                    ])
                } else if i == self.selected_index {
                    Line::styled(
                        format!("{}{}", marker, info.name),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("{}{}", marker, info.name))
                }
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect, characters: &[CharacterInfo]) {
        let block = Block::default().borders(Borders::ALL).title("Details");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(info) = self.selected_character(characters) else {
            return;
        };

        let mut lines = vec![Line::styled(
            info.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        if info.is_corrupted {
            lines.push(Line::styled(
                "This save file could not be read.",
                Style::default().fg(Color::Red),
            ));
            lines.push(Line::raw("Delete it to clear the slot."));
        } else {
            if let Some(class) = info.class {
                lines.push(Line::raw(format!("Level {} {}", info.level, class)));
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    class.blurb(),
                    Style::default().fg(Color::Gray),
                ));
            }
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!(
                "Last played: {}",
                info.last_modified.format("%Y-%m-%d %H:%M")
            )));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, characters: &[CharacterInfo]) {
        if self.selected_index + 1 < characters.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_character<'a>(
        &self,
        characters: &'a [CharacterInfo],
    ) -> Option<&'a CharacterInfo> {
        characters.get(self.selected_index)
    }
}
