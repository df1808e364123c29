//! The quest journal: available, active, and completed quests on tabs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::quests::logic::{
    active_quests, available_quests, can_accept_quest, completed_quests, completion_percentage,
    prerequisite_chain, total_rewards_earned,
};
use crate::quests::types::QuestDef;
use crate::session::GameSession;
use crate::ui::stats_panel::{draw_stats_panel, STATS_PANEL_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestTab {
    Available,
    Active,
    Completed,
}

impl QuestTab {
    pub const ALL: [QuestTab; 3] = [QuestTab::Available, QuestTab::Active, QuestTab::Completed];

    pub fn title(&self) -> &'static str {
        match self {
            QuestTab::Available => "Available",
            QuestTab::Active => "Active",
            QuestTab::Completed => "Completed",
        }
    }
}

#[allow(dead_code)]
pub struct QuestScreen {
    pub tab: QuestTab,
    pub selected_index: usize,
}

#[allow(dead_code)]
impl QuestScreen {
    pub fn new() -> Self {
        Self {
            tab: QuestTab::Available,
            selected_index: 0,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = match self.tab {
            QuestTab::Available => QuestTab::Active,
            QuestTab::Active => QuestTab::Completed,
            QuestTab::Completed => QuestTab::Available,
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

    /// The quests shown on the current tab, in display order.
    pub fn visible_quests<'a>(&self, session: &'a GameSession) -> Vec<&'a QuestDef> {
        match self.tab {
            QuestTab::Available => available_quests(&session.character, &session.quests),
            QuestTab::Active => active_quests(&session.character, &session.quests),
            QuestTab::Completed => completed_quests(&session.character, &session.quests),
        }
    }

    pub fn selected_quest<'a>(&self, session: &'a GameSession) -> Option<&'a QuestDef> {
        self.visible_quests(session).get(self.selected_index).copied()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STATS_PANEL_HEIGHT),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        draw_stats_panel(frame, chunks[0], &session.character);

        let titles: Vec<Line> = QuestTab::ALL
            .iter()
            .map(|tab| Line::raw(tab.title()))
            .collect();
        let selected_tab = QuestTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        let journal_title = format!(
            "Journal ({:.0}% complete)",
            completion_percentage(&session.character, &session.quests)
        );
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(journal_title))
            .select(selected_tab)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.draw_list(frame, body[0], session);
        self.draw_details(frame, body[1], session);

        let controls = match self.tab {
            QuestTab::Available => "[Tab] Next Tab  [Enter] Accept  [Esc] Back",
            QuestTab::Active => "[Tab] Next Tab  [Enter] Complete  [B] Abandon  [Esc] Back",
            QuestTab::Completed => "[Tab] Next Tab  [Esc] Back",
        };
        frame.render_widget(
            Paragraph::new(controls).block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.tab.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let quests = self.visible_quests(session);
        if quests.is_empty() {
            let empty = Paragraph::new(match self.tab {
                QuestTab::Available => "Nothing available right now.",
                QuestTab::Active => "No active quests.",
                QuestTab::Completed => "Nothing completed yet.",
            })
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let lines: Vec<Line> = quests
            .iter()
            .enumerate()
            .map(|(i, quest)| {
                if i == self.selected_index {
                    Line::styled(
                        format!("> {}", quest.title),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("  {}", quest.title))
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

        if let Some(quest) = self.selected_quest(session) {
            lines.push(Line::styled(
                quest.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(format!("Requires level {}", quest.required_level)));
            lines.push(Line::raw(format!(
                "Reward: {} XP, {} gold",
                quest.reward_xp, quest.reward_gold
            )));

            if let Ok(chain) = prerequisite_chain(&session.quests, &quest.quest_id) {
                if chain.len() > 1 {
                    let titles: Vec<&str> =
                        chain.iter().map(|step| step.title.as_str()).collect();
                    lines.push(Line::raw(format!("Chain: {}", titles.join(" -> "))));
                }
            }

            if self.tab == QuestTab::Available
                && !can_accept_quest(&session.character, &session.quests, &quest.quest_id)
            {
                lines.push(Line::styled(
                    "You do not meet the requirements yet.",
                    Style::default().fg(Color::Red),
                ));
            }

            lines.push(Line::raw(""));
            lines.push(Line::styled(
                quest.description.clone(),
                Style::default().fg(Color::Gray),
            ));
        }

        if self.tab == QuestTab::Completed {
            let totals = total_rewards_earned(&session.character, &session.quests);
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!(
                "Lifetime rewards: {} XP, {} gold",
                totals.xp, totals.gold
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
