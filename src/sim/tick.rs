//! Per-frame orchestration
//!
//! `FrameController` is the single entry point the host loop calls once per
//! frame. It advances the simulation in a fixed order and returns a render
//! frame plus an exit flag. All state is owned here; a multi-threaded host
//! must serialize the whole call.

use crate::consts::{LIGHT_COLOR_COUNT, LIGHT_CYCLE_FRAMES};
use crate::input::{InputSnapshot, PlayerSide};
use crate::render::RenderFrame;
use crate::settings::Tuning;
use crate::sim::state::CombatModel;
use crate::sim::view::{ViewMachine, ViewState};
use crate::sim::{collision, weapon};

/// Result of one tick.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub frame: RenderFrame,
    /// True when Quit was activated; the host should terminate with code 0
    pub exit: bool,
}

/// Owns the combat model and view machine and runs one tick per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameController {
    pub view: ViewMachine,
    pub model: CombatModel,
    tuning: Tuning,
    /// Frames spent in the Game view, drives the hull light cycle
    game_frames: u32,
}

impl FrameController {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            view: ViewMachine::new(),
            model: CombatModel::new(),
            tuning,
            game_frames: 0,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advance the simulation by one frame.
    ///
    /// Fixed order: player input (fire gating, aim, movement, clamping)
    /// while in Game; beam decay in every view; collision resolution and
    /// the defeat check while in Game; then the input-driven view
    /// transitions; finally the render frame capture.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> TickOutput {
        if self.view.state == ViewState::Game {
            for side in PlayerSide::BOTH {
                let held = input.held(side);
                weapon::try_fire(&mut self.model, side, held.fire, self.tuning.beam_duration);
                self.model
                    .apply_movement(side, held, dt, self.tuning.ship_speed);
            }
            self.model.clamp_positions();
        }

        // A beam started just before a view change still burns down
        weapon::decay(&mut self.model, dt);

        if self.view.state == ViewState::Game {
            collision::resolve_beam_hits(&mut self.model, &self.tuning);
            self.view.check_defeat(&self.model);
        }

        let exit = self.view.advance(input, &mut self.model);

        if self.view.state == ViewState::Game {
            self.game_frames = self.game_frames.wrapping_add(1);
        }
        let light_index = (self.game_frames / LIGHT_CYCLE_FRAMES) % LIGHT_COLOR_COUNT;

        TickOutput {
            frame: RenderFrame::capture(self.view.state, &self.model, light_index),
            exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{HeldActions, MenuAction};

    const DT: f32 = 1.0 / 60.0;

    fn confirm() -> InputSnapshot {
        InputSnapshot {
            confirm: true,
            ..Default::default()
        }
    }

    fn menu(action: MenuAction) -> InputSnapshot {
        InputSnapshot {
            menu_action: Some(action),
            ..Default::default()
        }
    }

    fn left_input(held: HeldActions) -> InputSnapshot {
        InputSnapshot {
            left: held,
            ..Default::default()
        }
    }

    fn start_game(controller: &mut FrameController) {
        controller.tick(&confirm(), DT);
        controller.tick(&menu(MenuAction::Start), DT);
        assert_eq!(controller.view.state, ViewState::Game);
    }

    #[test]
    fn test_full_view_flow() {
        let mut controller = FrameController::new();
        let out = controller.tick(&InputSnapshot::default(), DT);
        assert_eq!(out.frame.view, ViewState::Intro);
        assert!(!out.exit);

        let out = controller.tick(&confirm(), DT);
        assert_eq!(out.frame.view, ViewState::Menu);

        let out = controller.tick(&menu(MenuAction::Instructions), DT);
        assert_eq!(out.frame.view, ViewState::Instructions);

        let out = controller.tick(&menu(MenuAction::Back), DT);
        assert_eq!(out.frame.view, ViewState::Menu);

        let out = controller.tick(&menu(MenuAction::Start), DT);
        assert_eq!(out.frame.view, ViewState::Game);

        // Quit only works from the menu
        let out = controller.tick(&menu(MenuAction::Quit), DT);
        assert!(!out.exit);
    }

    #[test]
    fn test_quit_from_menu_sets_exit() {
        let mut controller = FrameController::new();
        controller.tick(&confirm(), DT);
        let out = controller.tick(&menu(MenuAction::Quit), DT);
        assert!(out.exit);
    }

    #[test]
    fn test_movement_only_in_game() {
        let held = HeldActions {
            right: true,
            ..Default::default()
        };

        // Held movement during the intro does nothing
        let mut controller = FrameController::new();
        controller.tick(&left_input(held), 0.1);
        assert_eq!(controller.model.ship(PlayerSide::Left).pos.x, -500.0);

        // In game: 600 units/s * 0.1s = 60 units
        start_game(&mut controller);
        controller.tick(&left_input(held), 0.1);
        assert_eq!(controller.model.ship(PlayerSide::Left).pos.x, -440.0);
    }

    #[test]
    fn test_shot_lands_once_and_scores() {
        let mut controller = FrameController::new();
        start_game(&mut controller);

        let fire = left_input(HeldActions {
            fire: true,
            ..Default::default()
        });
        // Hold fire across several frames: one beam, one hit
        for _ in 0..5 {
            controller.tick(&fire, DT);
        }
        assert_eq!(controller.model.ship(PlayerSide::Right).life, 90);
        assert_eq!(controller.model.ship(PlayerSide::Left).score, 100);
        assert!(controller.model.beam(PlayerSide::Left).active);
    }

    #[test]
    fn test_match_runs_to_game_over_and_resets() {
        let mut controller = FrameController::new();
        start_game(&mut controller);

        let fire = left_input(HeldActions {
            fire: true,
            ..Default::default()
        });
        let idle = InputSnapshot::default();

        // Ten press/release cycles; the release tick also lets the beam expire
        for _ in 0..10 {
            controller.tick(&fire, DT);
            controller.tick(&idle, 0.7);
        }
        assert_eq!(controller.view.state, ViewState::GameOver);
        assert_eq!(controller.model.ship(PlayerSide::Right).life, 0);

        let out = controller.tick(&idle, DT);
        assert_eq!(
            out.frame.message.as_deref(),
            Some("Game Over! Left player won")
        );

        // Confirm returns to the menu with everything reset
        controller.tick(&confirm(), DT);
        assert_eq!(controller.view.state, ViewState::Menu);
        assert_eq!(controller.model.ship(PlayerSide::Right).life, 100);
        assert_eq!(controller.model.ship(PlayerSide::Left).score, 0);
        assert!(!controller.model.beam(PlayerSide::Left).active);
    }

    #[test]
    fn test_beam_decays_after_game_over() {
        let mut controller = FrameController::new();
        start_game(&mut controller);

        // Right ship is one hit from defeat; the killing beam outlives it
        controller.model.ship_mut(PlayerSide::Right).life = 10;
        let fire = left_input(HeldActions {
            fire: true,
            ..Default::default()
        });
        controller.tick(&fire, DT);
        assert_eq!(controller.view.state, ViewState::GameOver);
        assert!(controller.model.beam(PlayerSide::Left).active);

        // Decay keeps running in GameOver until the beam expires
        controller.tick(&InputSnapshot::default(), 0.7);
        assert!(!controller.model.beam(PlayerSide::Left).active);
        assert!(!controller.model.beam(PlayerSide::Left).has_dealt_damage);
    }

    #[test]
    fn test_no_damage_during_game_over() {
        let mut controller = FrameController::new();
        start_game(&mut controller);
        controller.model.ship_mut(PlayerSide::Right).life = 10;

        let fire = left_input(HeldActions {
            fire: true,
            ..Default::default()
        });
        controller.tick(&fire, DT);
        assert_eq!(controller.view.state, ViewState::GameOver);
        let left_score = controller.model.ship(PlayerSide::Left).score;

        // Further fire input is ignored outside Game
        controller.tick(&fire, DT);
        assert_eq!(controller.model.ship(PlayerSide::Left).score, left_score);
    }

    #[test]
    fn test_hull_lights_cycle_in_game() {
        let mut controller = FrameController::new();
        start_game(&mut controller);

        let idle = InputSnapshot::default();
        let first = controller.tick(&idle, DT).frame.light_index;
        for _ in 0..LIGHT_CYCLE_FRAMES {
            controller.tick(&idle, DT);
        }
        let later = controller.tick(&idle, DT).frame.light_index;
        assert_ne!(first, later);
        assert!(later < LIGHT_COLOR_COUNT);
    }

    #[test]
    fn test_tuning_overrides_flow_through() {
        let tuning = Tuning {
            hit_damage: 50,
            ..Default::default()
        };
        let mut controller = FrameController::with_tuning(tuning);
        start_game(&mut controller);

        let fire = left_input(HeldActions {
            fire: true,
            ..Default::default()
        });
        controller.tick(&fire, DT);
        assert_eq!(controller.model.ship(PlayerSide::Right).life, 50);
    }
}
