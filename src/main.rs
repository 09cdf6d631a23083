//! Beam Duel entry point
//!
//! The windowing, font and raw-input layers are external; this binary runs
//! the simulation headless through a scripted match so the whole view flow
//! and combat loop can be exercised without a display.

use std::path::Path;

use glam::Vec2;

use beam_duel::input::{HeldActions, resolve_menu_action};
use beam_duel::render::ui;
use beam_duel::sim::{FrameController, ViewState};
use beam_duel::{FrameClock, InputSnapshot, Tuning};

/// Milliseconds per scripted frame (~60 fps)
const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();
    log::info!("Beam Duel (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    let mut controller = FrameController::with_tuning(tuning);
    let mut clock = FrameClock::new(0);
    let mut now_ms: u64 = 0;

    let mut step = |controller: &mut FrameController,
                    clock: &mut FrameClock,
                    input: &InputSnapshot|
     -> bool {
        now_ms += FRAME_MS;
        let dt = clock.tick(now_ms);
        controller.tick(input, dt).exit
    };

    // Intro -> Menu
    step(&mut controller, &mut clock, &InputSnapshot::default());
    let confirm = InputSnapshot {
        confirm: true,
        ..Default::default()
    };
    step(&mut controller, &mut clock, &confirm);

    // Click the Start button the way a real input layer would: pointer
    // position resolved against the published control bounds
    let pointer = ui::START_BUTTON.min.midpoint(ui::START_BUTTON.max);
    let click = InputSnapshot {
        pointer,
        clicked: true,
        menu_action: resolve_menu_action(controller.view.state, pointer, true),
        ..Default::default()
    };
    step(&mut controller, &mut clock, &click);
    log::info!("match started");

    // Left player repeatedly snipes a stationary opponent: one fire press,
    // then idle frames long enough for the beam to expire and re-arm
    let fire = InputSnapshot {
        left: HeldActions {
            fire: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let idle = InputSnapshot::default();
    while controller.view.state == ViewState::Game {
        step(&mut controller, &mut clock, &fire);
        for _ in 0..45 {
            if controller.view.state != ViewState::Game {
                break;
            }
            step(&mut controller, &mut clock, &idle);
        }
    }

    let out = controller.tick(&idle, 0.0);
    if let Some(message) = &out.frame.message {
        println!("{message}");
    }
    println!("{}", out.frame.final_score_line());
    for ship in &out.frame.ships {
        println!(
            "{:?}: {} / {}",
            ship.side,
            ship.life_label(),
            ship.score_label()
        );
    }

    // Back to the menu, then quit: exit code 0
    step(&mut controller, &mut clock, &confirm);
    let pointer = Vec2::new(0.0, -65.0);
    let quit = InputSnapshot {
        pointer,
        clicked: true,
        menu_action: resolve_menu_action(controller.view.state, pointer, true),
        ..Default::default()
    };
    if step(&mut controller, &mut clock, &quit) {
        log::info!("quit; winner was {:?}", beam_duel::sim::winner(&controller.model));
    }
}
