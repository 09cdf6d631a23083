//! Normalized per-tick input snapshot
//!
//! The core never inspects raw key codes or mouse events. The platform layer
//! samples its device state once per tick into an `InputSnapshot`: held
//! movement/fire flags per player (level-triggered) plus confirm and menu
//! activation signals (edge-triggered, cleared by the host after the tick).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::ui;
use crate::sim::ViewState;

/// Which ship a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    /// Both sides, left first (fixed evaluation order)
    pub const BOTH: [PlayerSide; 2] = [PlayerSide::Left, PlayerSide::Right];

    pub fn opponent(self) -> PlayerSide {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    /// +1 for the left ship (fires toward +X), -1 for the right ship.
    pub fn facing(self) -> f32 {
        match self {
            PlayerSide::Left => 1.0,
            PlayerSide::Right => -1.0,
        }
    }
}

/// Logical actions currently held by one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldActions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Menu controls the pointer can activate. Resolved from hover + click by
/// the input layer, delivered as at most one edge per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Start,
    Instructions,
    Quit,
    Back,
}

/// Everything the simulation reads for one tick.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Left player's held actions
    pub left: HeldActions,
    /// Right player's held actions
    pub right: HeldActions,
    /// Confirm edge (e.g. Enter); advances Intro and GameOver
    pub confirm: bool,
    /// Activated menu control, if any
    pub menu_action: Option<MenuAction>,
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Click edge this tick
    pub clicked: bool,
}

impl InputSnapshot {
    pub fn held(&self, side: PlayerSide) -> &HeldActions {
        match side {
            PlayerSide::Left => &self.left,
            PlayerSide::Right => &self.right,
        }
    }
}

/// Map a pointer click onto the controls visible in the current view.
///
/// Convenience for hosts: hover rectangles come from `render::ui`, so the
/// platform layer only needs to forward pointer position and the click edge.
pub fn resolve_menu_action(view: ViewState, pointer: Vec2, clicked: bool) -> Option<MenuAction> {
    if !clicked {
        return None;
    }
    match view {
        ViewState::Menu => {
            if ui::START_BUTTON.contains(pointer) {
                Some(MenuAction::Start)
            } else if ui::INSTRUCTIONS_BUTTON.contains(pointer) {
                Some(MenuAction::Instructions)
            } else if ui::QUIT_BUTTON.contains(pointer) {
                Some(MenuAction::Quit)
            } else {
                None
            }
        }
        ViewState::Instructions => ui::BACK_BUTTON.contains(pointer).then_some(MenuAction::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_menu_buttons() {
        // Centers of the three menu controls
        let start = Vec2::new(0.0, 175.0);
        let instructions = Vec2::new(0.0, 55.0);
        let quit = Vec2::new(0.0, -65.0);

        assert_eq!(
            resolve_menu_action(ViewState::Menu, start, true),
            Some(MenuAction::Start)
        );
        assert_eq!(
            resolve_menu_action(ViewState::Menu, instructions, true),
            Some(MenuAction::Instructions)
        );
        assert_eq!(
            resolve_menu_action(ViewState::Menu, quit, true),
            Some(MenuAction::Quit)
        );

        // Hover without a click activates nothing
        assert_eq!(resolve_menu_action(ViewState::Menu, start, false), None);
        // Clicking empty space activates nothing
        assert_eq!(
            resolve_menu_action(ViewState::Menu, Vec2::new(500.0, 500.0), true),
            None
        );
    }

    #[test]
    fn test_resolve_back_only_in_instructions() {
        let back = Vec2::new(-475.0, -262.0);
        assert_eq!(
            resolve_menu_action(ViewState::Instructions, back, true),
            Some(MenuAction::Back)
        );
        // Same spot in the menu view is empty space
        assert_eq!(resolve_menu_action(ViewState::Menu, back, true), None);
        // No controls during gameplay
        assert_eq!(resolve_menu_action(ViewState::Game, back, true), None);
    }
}
