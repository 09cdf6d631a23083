//! Top-level screen flow
//!
//! Intro -> Menu -> (Instructions | Game | quit), Game -> GameOver -> Menu.
//! Exactly one view is active; transitions fire on edge-triggered inputs
//! except the defeat check, which fires when a ship's life reaches zero.

use serde::{Deserialize, Serialize};

use crate::input::{InputSnapshot, MenuAction, PlayerSide};
use crate::sim::state::CombatModel;

/// The current top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Intro,
    Menu,
    Instructions,
    Game,
    GameOver,
}

/// Drives the view transitions and their side effects on the combat model.
#[derive(Debug, Clone, Default)]
pub struct ViewMachine {
    pub state: ViewState,
}

impl ViewMachine {
    pub fn new() -> Self {
        Self {
            state: ViewState::Intro,
        }
    }

    /// Apply the input-driven transitions for this tick.
    ///
    /// Returns true when the Quit control was activated; the host is
    /// expected to terminate (exit code 0).
    pub fn advance(&mut self, input: &InputSnapshot, model: &mut CombatModel) -> bool {
        match self.state {
            ViewState::Intro => {
                if input.confirm {
                    self.transition(ViewState::Menu);
                }
            }
            ViewState::Menu => match input.menu_action {
                Some(MenuAction::Start) => {
                    model.reset_match();
                    self.transition(ViewState::Game);
                }
                Some(MenuAction::Instructions) => self.transition(ViewState::Instructions),
                Some(MenuAction::Quit) => {
                    log::info!("quit requested");
                    return true;
                }
                _ => {}
            },
            ViewState::Instructions => {
                if input.menu_action == Some(MenuAction::Back) {
                    self.transition(ViewState::Menu);
                }
            }
            ViewState::Game => {}
            ViewState::GameOver => {
                if input.confirm {
                    model.reset_full();
                    self.transition(ViewState::Menu);
                }
            }
        }
        false
    }

    /// Game -> GameOver once either ship is out of life. Lives keep their
    /// terminal values so the winner can be read off afterwards.
    pub fn check_defeat(&mut self, model: &CombatModel) {
        if self.state != ViewState::Game {
            return;
        }
        if model.ship(PlayerSide::Left).life <= 0 || model.ship(PlayerSide::Right).life <= 0 {
            self.transition(ViewState::GameOver);
        }
    }

    fn transition(&mut self, next: ViewState) {
        log::info!("view {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Who won, from the terminal life values. None covers the simultaneous
/// zero-life tie (both ships hit on the same tick).
pub fn winner(model: &CombatModel) -> Option<PlayerSide> {
    let left = model.ship(PlayerSide::Left).life;
    let right = model.ship(PlayerSide::Right).life;
    if left > 0 && right <= 0 {
        Some(PlayerSide::Left)
    } else if right > 0 && left <= 0 {
        Some(PlayerSide::Right)
    } else {
        None
    }
}

/// Message shown on the game-over screen.
pub fn game_over_message(model: &CombatModel) -> &'static str {
    match winner(model) {
        Some(PlayerSide::Left) => "Game Over! Left player won",
        Some(PlayerSide::Right) => "Game Over! Right player won",
        None => "Game Over!",
    }
}
