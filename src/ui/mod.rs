pub mod battle_scene;
pub mod character_creation;
pub mod character_select;
pub mod death_prompt;
pub mod game_scene;
pub mod inventory_scene;
pub mod quest_scene;
pub mod shop_scene;
mod stats_panel;

use ratatui::Frame;

use crate::session::{GameSession, GameView};

/// Cursor state for every in-game scene, owned by the driver so it
/// survives view switches within a session.
pub struct GameScreens {
    pub menu: game_scene::GameMenuScreen,
    pub inventory: inventory_scene::InventoryScreen,
    pub quests: quest_scene::QuestScreen,
    pub shop: shop_scene::ShopScreen,
}

impl GameScreens {
    pub fn new() -> Self {
        Self {
            menu: game_scene::GameMenuScreen::new(),
            inventory: inventory_scene::InventoryScreen::new(),
            quests: quest_scene::QuestScreen::new(),
            shop: shop_scene::ShopScreen::new(),
        }
    }
}

/// Draws whichever scene the session is currently showing.
pub fn draw_game(frame: &mut Frame, session: &GameSession, screens: &GameScreens) {
    let area = frame.size();
    match session.view {
        GameView::Menu => screens.menu.draw(frame, area, session),
        GameView::Inventory => screens.inventory.draw(frame, area, session),
        GameView::Quests => screens.quests.draw(frame, area, session),
        GameView::Shop => screens.shop.draw(frame, area, session),
        GameView::Battle => battle_scene::draw_battle_scene(frame, area, session),
        GameView::Death => death_prompt::draw_death_prompt(frame, area, session),
    }
}
