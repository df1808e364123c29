//! Character creation: name entry plus class selection.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::character::types::ClassKind;

#[allow(dead_code)]
pub struct CharacterCreationScreen {
    pub name_input: String,
    pub cursor_position: usize,
    pub class_index: usize,
    pub validation_error: Option<String>,
}

#[allow(dead_code)]
impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            cursor_position: 0,
            class_index: 0,
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(6), // Class cards
                Constraint::Length(3), // Class blurb
                Constraint::Length(4), // Rules
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        // Title
        let title = Paragraph::new("Create Your Hero")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        // Input label
        let label = Paragraph::new("Character Name:");
        f.render_widget(label, chunks[1]);

        // Input field with cursor
        let input_area = Rect {
            x: chunks[1].x,
            y: chunks[1].y + 1,
            width: chunks[1].width,
            height: 1,
        };
        let input_display = format!("{}_", self.name_input);
        let input = Paragraph::new(input_display).style(Style::default().fg(Color::White));
        f.render_widget(input, input_area);

        self.draw_class_cards(f, chunks[3]);

        let blurb = Paragraph::new(self.selected_class().blurb())
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(blurb, chunks[4]);

        // Rules
        let rules = Paragraph::new(vec![
            Line::raw("Name rules:"),
            Line::raw("  - 1 to 16 characters"),
            Line::raw("  - letters, digits, spaces, hyphens, underscores"),
        ])
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(rules, chunks[5]);

        // Validation feedback
        let feedback = match &self.validation_error {
            Some(err) => Line::styled(format!("x {}", err), Style::default().fg(Color::Red)),
            None if !self.name_input.is_empty() => {
                Line::styled("name looks good", Style::default().fg(Color::Green))
            }
            None => Line::raw(""),
        };
        f.render_widget(Paragraph::new(feedback), chunks[6]);

        // Controls
        let controls =
            Paragraph::new("[Left/Right] Class  [Enter] Create  [Esc] Cancel")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
        f.render_widget(controls, chunks[8]);
    }

    fn draw_class_cards(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        for (i, class) in ClassKind::ALL.iter().enumerate() {
            let selected = i == self.class_index;
            let border_style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let title = if selected {
                Span::styled(
                    class.name(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(class.name())
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title);
            let inner = block.inner(columns[i]);
            f.render_widget(block, columns[i]);

            let stats = Paragraph::new(vec![
                Line::raw(format!("HP  {}", class.base_max_health())),
                Line::raw(format!("STR {}", class.base_strength())),
                Line::raw(format!("MAG {}", class.base_magic())),
            ]);
            f.render_widget(stats, inner);
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.name_input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            let prev = self.name_input[..self.cursor_position]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_position -= prev;
            self.name_input.remove(self.cursor_position);
            self.validation_error = None;
        }
    }

    pub fn prev_class(&mut self) {
        self.class_index = (self.class_index + ClassKind::ALL.len() - 1) % ClassKind::ALL.len();
    }

    pub fn next_class(&mut self) {
        self.class_index = (self.class_index + 1) % ClassKind::ALL.len();
    }

    pub fn selected_class(&self) -> ClassKind {
        ClassKind::ALL[self.class_index.min(ClassKind::ALL.len() - 1)]
    }

    pub fn get_name(&self) -> &str {
        self.name_input.trim()
    }
}
