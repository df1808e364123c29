//! UI-agnostic input handling for the character select and creation
//! screens. Keeping the transitions here, away from the terminal, is
//! what makes them testable.

use crate::ui::character_creation::CharacterCreationScreen;
use crate::ui::character_select::CharacterSelectScreen;

use super::manager::{validate_name, CharacterInfo, CharacterManager};
use super::types::Character;

/// Input events for the character creation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationInput {
    /// Character typed
    Char(char),
    /// Backspace pressed
    Backspace,
    /// Cycle to the previous class
    PrevClass,
    /// Cycle to the next class
    NextClass,
    /// Enter pressed to create the character
    Submit,
    /// Escape pressed to cancel
    Cancel,
    /// Any other key
    Other,
}

/// Input events for the character select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectInput {
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Load the selected character
    Select,
    /// Create a new character
    New,
    /// Ask to delete the selected save
    Delete,
    /// Confirm a pending delete
    ConfirmDelete,
    /// Escape pressed, clears any pending delete
    Cancel,
    /// Quit the game
    Quit,
    /// Any other key
    Other,
}

/// Result of processing character creation input.
#[derive(Debug, Clone, PartialEq)]
pub enum CreationResult {
    /// Stay on the creation screen
    Continue,
    /// Character created and saved, start playing it
    Created(Character),
    /// Cancelled, go back to select (only if saves exist)
    Cancelled,
    /// Save failed with error message
    SaveFailed(String),
}

/// Result of processing character select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectResult {
    /// Stay on the select screen
    Continue,
    /// No saves exist, should go to creation
    NoCharacters,
    /// Load the named character
    LoadCharacter(String),
    /// Go to character creation
    GoToCreation,
    /// A save was deleted, refresh the roster
    Deleted,
    /// Delete failed with error
    DeleteFailed(String),
    /// Quit the game
    Quit,
}

/// Process input for the character creation screen.
pub fn process_creation_input(
    screen: &mut CharacterCreationScreen,
    input: CreationInput,
    manager: &CharacterManager,
    has_existing_characters: bool,
) -> CreationResult {
    match input {
        CreationInput::Char(c) => {
            screen.handle_char_input(c);
            CreationResult::Continue
        }
        CreationInput::Backspace => {
            screen.handle_backspace();
            CreationResult::Continue
        }
        CreationInput::PrevClass => {
            screen.prev_class();
            CreationResult::Continue
        }
        CreationInput::NextClass => {
            screen.next_class();
            CreationResult::Continue
        }
        CreationInput::Submit => {
            let name = screen.get_name().to_string();
            if let Err(reason) = validate_name(&name) {
                screen.validation_error = Some(reason);
                return CreationResult::Continue;
            }
            // Catches case and punctuation collisions through the
            // sanitized filename, not just exact matches.
            if manager.character_exists(&name) {
                screen.validation_error =
                    Some(format!("A hero named '{}' already exists", name));
                return CreationResult::Continue;
            }
            let character = Character::new(&name, screen.selected_class());
            match manager.save_character(&character) {
                Ok(()) => CreationResult::Created(character),
                Err(e) => {
                    let message = format!("Save failed: {}", e);
                    screen.validation_error = Some(message.clone());
                    CreationResult::SaveFailed(message)
                }
            }
        }
        CreationInput::Cancel => {
            if has_existing_characters {
                CreationResult::Cancelled
            } else {
                CreationResult::Continue
            }
        }
        CreationInput::Other => CreationResult::Continue,
    }
}

/// Process input for the character select screen.
pub fn process_select_input(
    screen: &mut CharacterSelectScreen,
    input: SelectInput,
    manager: &CharacterManager,
    characters: &[CharacterInfo],
) -> SelectResult {
    if input == SelectInput::Quit {
        return SelectResult::Quit;
    }

    if characters.is_empty() {
        return SelectResult::NoCharacters;
    }

    // Clamp the cursor in case the roster shrank since last draw.
    if screen.selected_index >= characters.len() {
        screen.selected_index = characters.len() - 1;
    }

    match input {
        SelectInput::Up => {
            screen.move_up();
            SelectResult::Continue
        }
        SelectInput::Down => {
            screen.move_down(characters);
            SelectResult::Continue
        }
        SelectInput::Select => {
            let selected = &characters[screen.selected_index];
            if selected.is_corrupted {
                screen.status =
                    Some("This save is corrupted and cannot be loaded.".to_string());
                SelectResult::Continue
            } else {
                SelectResult::LoadCharacter(selected.name.clone())
            }
        }
        SelectInput::New => SelectResult::GoToCreation,
        SelectInput::Delete => {
            // Corrupted saves can be deleted; it is the only way to
            // clear the slot.
            let selected = &characters[screen.selected_index];
            screen.pending_delete = Some(selected.name.clone());
            screen.status = None;
            SelectResult::Continue
        }
        SelectInput::ConfirmDelete => match screen.pending_delete.take() {
            Some(name) => match manager.delete_character(&name) {
                Ok(()) => {
                    screen.status = None;
                    SelectResult::Deleted
                }
                Err(e) => {
                    let message = format!("Delete failed: {}", e);
                    screen.status = Some(message.clone());
                    SelectResult::DeleteFailed(message)
                }
            },
            None => SelectResult::Continue,
        },
        SelectInput::Cancel => {
            screen.pending_delete = None;
            SelectResult::Continue
        }
        SelectInput::Quit => SelectResult::Quit,
        SelectInput::Other => SelectResult::Continue,
    }
}
