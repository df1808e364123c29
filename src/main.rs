mod build_info;
mod character;
mod combat;
mod constants;
mod data;
mod error;
mod items;
mod quests;
mod session;
mod ui;

use character::input::{
    process_creation_input, process_select_input, CreationInput, CreationResult, SelectInput,
    SelectResult,
};
use character::manager::CharacterManager;
use combat::logic::PlayerAction;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use data::loader::{default_app_dir, load_game_data};
use error::GameResult;
use items::types::EquipSlot;
use ratatui::{backend::CrosstermBackend, Terminal};
use session::{GameSession, GameView};
use std::io;
use std::time::Duration;
use ui::character_creation::CharacterCreationScreen;
use ui::character_select::CharacterSelectScreen;
use ui::game_scene::MenuItem;
use ui::inventory_scene::InventoryScreen;
use ui::quest_scene::{QuestScreen, QuestTab};
use ui::shop_scene::ShopScreen;
use ui::{draw_game, GameScreens};

enum Screen {
    CharacterSelect,
    CharacterCreation,
    Game,
}

fn main() -> GameResult<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "quest-chronicles {} (built {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_DATE
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Quest Chronicles - Turn-Based Terminal RPG\n");
                println!("Usage: quest-chronicles [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'quest-chronicles --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load the item and quest tables before touching the terminal so a
    // malformed data file fails with a readable error.
    let app_dir = default_app_dir()?;
    let (items, quests) = load_game_data(&app_dir)?;

    let manager = CharacterManager::new()?;

    // Determine initial screen based on whether saves exist
    let characters = manager.list_characters()?;
    let mut current_screen = if characters.is_empty() {
        Screen::CharacterCreation
    } else {
        Screen::CharacterSelect
    };

    // Screen state variables
    let mut creation_screen = CharacterCreationScreen::new();
    let mut select_screen = CharacterSelectScreen::new();
    let mut game_screens = GameScreens::new();
    let mut session: Option<GameSession> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        match current_screen {
            Screen::CharacterCreation => {
                terminal.draw(|f| {
                    let area = f.size();
                    creation_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        let input = match key_event.code {
                            KeyCode::Char(c) => CreationInput::Char(c),
                            KeyCode::Backspace => CreationInput::Backspace,
                            KeyCode::Left => CreationInput::PrevClass,
                            KeyCode::Right => CreationInput::NextClass,
                            KeyCode::Enter => CreationInput::Submit,
                            KeyCode::Esc => CreationInput::Cancel,
                            _ => CreationInput::Other,
                        };
                        let has_existing = !manager.list_characters()?.is_empty();
                        match process_creation_input(
                            &mut creation_screen,
                            input,
                            &manager,
                            has_existing,
                        ) {
                            CreationResult::Created(character) => {
                                creation_screen = CharacterCreationScreen::new();
                                game_screens = GameScreens::new();
                                session = Some(GameSession::new(
                                    character,
                                    items.clone(),
                                    quests.clone(),
                                ));
                                current_screen = Screen::Game;
                            }
                            CreationResult::Cancelled => {
                                creation_screen = CharacterCreationScreen::new();
                                current_screen = Screen::CharacterSelect;
                            }
                            CreationResult::Continue | CreationResult::SaveFailed(_) => {}
                        }
                    }
                }
            }

            Screen::CharacterSelect => {
                // Refresh the roster every frame so deletes show up
                let characters = manager.list_characters()?;

                if characters.is_empty() {
                    creation_screen = CharacterCreationScreen::new();
                    current_screen = Screen::CharacterCreation;
                    continue;
                }

                if select_screen.selected_index >= characters.len() {
                    select_screen.selected_index = characters.len() - 1;
                }

                terminal.draw(|f| {
                    let area = f.size();
                    select_screen.draw(f, area, &characters);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        let input = match key_event.code {
                            KeyCode::Up => SelectInput::Up,
                            KeyCode::Down => SelectInput::Down,
                            KeyCode::Enter => SelectInput::Select,
                            KeyCode::Char('n') | KeyCode::Char('N') => SelectInput::New,
                            KeyCode::Char('d') | KeyCode::Char('D') => SelectInput::Delete,
                            KeyCode::Char('y') | KeyCode::Char('Y') => SelectInput::ConfirmDelete,
                            KeyCode::Esc => SelectInput::Cancel,
                            KeyCode::Char('q') | KeyCode::Char('Q') => SelectInput::Quit,
                            _ => SelectInput::Other,
                        };
                        match process_select_input(&mut select_screen, input, &manager, &characters)
                        {
                            SelectResult::LoadCharacter(name) => {
                                match manager.load_character(&name) {
                                    Ok(character) => {
                                        game_screens = GameScreens::new();
                                        session = Some(GameSession::new(
                                            character,
                                            items.clone(),
                                            quests.clone(),
                                        ));
                                        current_screen = Screen::Game;
                                    }
                                    Err(e) => {
                                        select_screen.status = Some(format!("Load failed: {}", e));
                                    }
                                }
                            }
                            SelectResult::GoToCreation | SelectResult::NoCharacters => {
                                creation_screen = CharacterCreationScreen::new();
                                current_screen = Screen::CharacterCreation;
                            }
                            SelectResult::Quit => break,
                            SelectResult::Deleted
                            | SelectResult::DeleteFailed(_)
                            | SelectResult::Continue => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let Some(active) = session.as_mut() else {
                    current_screen = Screen::CharacterSelect;
                    continue;
                };

                terminal.draw(|f| draw_game(f, active, &game_screens))?;

                let mut leave_game = false;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match active.view {
                            GameView::Menu => match key_event.code {
                                KeyCode::Up => game_screens.menu.move_up(),
                                KeyCode::Down => game_screens.menu.move_down(),
                                KeyCode::Enter => match game_screens.menu.selected() {
                                    MenuItem::Inventory => {
                                        game_screens.inventory = InventoryScreen::new();
                                        active.open_inventory();
                                    }
                                    MenuItem::Quests => {
                                        game_screens.quests = QuestScreen::new();
                                        active.open_quests();
                                    }
                                    MenuItem::Explore => active.explore(),
                                    MenuItem::Shop => {
                                        game_screens.shop = ShopScreen::new();
                                        active.open_shop();
                                    }
                                    MenuItem::SaveQuit => {
                                        manager.save_character(&active.character)?;
                                        leave_game = true;
                                    }
                                },
                                KeyCode::Char('q') | KeyCode::Char('Q') => {
                                    manager.save_character(&active.character)?;
                                    leave_game = true;
                                }
                                _ => {}
                            },

                            GameView::Inventory => match key_event.code {
                                KeyCode::Up => game_screens.inventory.move_up(),
                                KeyCode::Down => game_screens
                                    .inventory
                                    .move_down(active.character.inventory.len()),
                                KeyCode::Char('u') | KeyCode::Char('U') => {
                                    active.use_item_at(game_screens.inventory.selected_index);
                                    game_screens
                                        .inventory
                                        .clamp(active.character.inventory.len());
                                }
                                KeyCode::Char('e') | KeyCode::Char('E') => {
                                    active.equip_item_at(game_screens.inventory.selected_index);
                                    game_screens
                                        .inventory
                                        .clamp(active.character.inventory.len());
                                }
                                KeyCode::Char('d') | KeyCode::Char('D') => {
                                    active.drop_item_at(game_screens.inventory.selected_index);
                                    game_screens
                                        .inventory
                                        .clamp(active.character.inventory.len());
                                }
                                KeyCode::Char('w') | KeyCode::Char('W') => {
                                    active.unequip(EquipSlot::Weapon);
                                }
                                KeyCode::Char('a') | KeyCode::Char('A') => {
                                    active.unequip(EquipSlot::Armor);
                                }
                                KeyCode::Esc => active.back_to_menu(),
                                _ => {}
                            },

                            GameView::Quests => match key_event.code {
                                KeyCode::Tab => game_screens.quests.next_tab(),
                                KeyCode::Up => game_screens.quests.move_up(),
                                KeyCode::Down => {
                                    let len = game_screens.quests.visible_quests(active).len();
                                    game_screens.quests.move_down(len);
                                }
                                KeyCode::Enter => {
                                    let selected = game_screens
                                        .quests
                                        .selected_quest(active)
                                        .map(|quest| quest.quest_id.clone());
                                    if let Some(quest_id) = selected {
                                        match game_screens.quests.tab {
                                            QuestTab::Available => {
                                                active.accept_quest_id(&quest_id)
                                            }
                                            QuestTab::Active => {
                                                active.complete_quest_id(&quest_id)
                                            }
                                            QuestTab::Completed => {}
                                        }
                                        let len =
                                            game_screens.quests.visible_quests(active).len();
                                        game_screens.quests.clamp(len);
                                    }
                                }
                                KeyCode::Char('b') | KeyCode::Char('B') => {
                                    if game_screens.quests.tab == QuestTab::Active {
                                        let selected = game_screens
                                            .quests
                                            .selected_quest(active)
                                            .map(|quest| quest.quest_id.clone());
                                        if let Some(quest_id) = selected {
                                            active.abandon_quest_id(&quest_id);
                                            let len =
                                                game_screens.quests.visible_quests(active).len();
                                            game_screens.quests.clamp(len);
                                        }
                                    }
                                }
                                KeyCode::Esc => active.back_to_menu(),
                                _ => {}
                            },

                            GameView::Shop => match key_event.code {
                                KeyCode::Tab => game_screens.shop.toggle_mode(),
                                KeyCode::Up => game_screens.shop.move_up(),
                                KeyCode::Down => {
                                    let len = game_screens.shop.list_len(active);
                                    game_screens.shop.move_down(len);
                                }
                                KeyCode::Enter => {
                                    match game_screens.shop.mode {
                                        ui::shop_scene::ShopMode::Buy => {
                                            active.buy_at(game_screens.shop.selected_index);
                                        }
                                        ui::shop_scene::ShopMode::Sell => {
                                            active.sell_at(game_screens.shop.selected_index);
                                        }
                                    }
                                    let len = game_screens.shop.list_len(active);
                                    game_screens.shop.clamp(len);
                                }
                                KeyCode::Esc => active.back_to_menu(),
                                _ => {}
                            },

                            GameView::Battle => match key_event.code {
                                KeyCode::Char('a') | KeyCode::Char('A') => {
                                    active.battle_action(
                                        PlayerAction::Attack,
                                        &mut rand::thread_rng(),
                                    );
                                }
                                KeyCode::Char('s') | KeyCode::Char('S') => {
                                    active.battle_action(
                                        PlayerAction::Special,
                                        &mut rand::thread_rng(),
                                    );
                                }
                                KeyCode::Char('f') | KeyCode::Char('F') => {
                                    active.battle_action(
                                        PlayerAction::Flee,
                                        &mut rand::thread_rng(),
                                    );
                                }
                                _ => {}
                            },

                            GameView::Death => match key_event.code {
                                KeyCode::Char('r') | KeyCode::Char('R') => {
                                    active.try_revive();
                                }
                                // Giving up discards everything since the
                                // last save, like dying should.
                                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                    leave_game = true;
                                }
                                _ => {}
                            },
                        }
                    }
                }

                if leave_game {
                    session = None;
                    select_screen = CharacterSelectScreen::new();
                    game_screens = GameScreens::new();
                    current_screen = Screen::CharacterSelect;
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Farewell, adventurer.");

    Ok(())
}
