//! The battle scene: enemy health, round counter, and the action bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::session::GameSession;
use crate::ui::game_scene::draw_message_log;
use crate::ui::stats_panel::{draw_stats_panel, STATS_PANEL_HEIGHT};

pub fn draw_battle_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATS_PANEL_HEIGHT),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_stats_panel(frame, chunks[0], &session.character);

    if let Some(battle) = &session.battle {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Battle: Round {}", battle.round));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let enemy_ratio = if battle.enemy.max_health > 0 {
            battle.enemy.health as f64 / battle.enemy.max_health as f64
        } else {
            0.0
        };
        let enemy_gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .label(format!(
                "{}: {}/{}",
                battle.enemy.name, battle.enemy.health, battle.enemy.max_health
            ))
            .ratio(enemy_ratio.min(1.0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(enemy_gauge, rows[0]);

        let enemy_stats = Paragraph::new(format!(
            "STR {}   MAG {}   Bounty: {} XP, {} gold",
            battle.enemy.strength,
            battle.enemy.magic,
            battle.enemy.xp_reward,
            battle.enemy.gold_reward
        ));
        frame.render_widget(enemy_stats, rows[1]);
    }

    draw_message_log(frame, chunks[2], &session.log);

    let controls = Paragraph::new(format!(
        "[A] Attack  [S] {}  [F] Flee",
        session.character.class.special_name()
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[3]);
}
