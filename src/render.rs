//! Per-frame render descriptor
//!
//! The core draws nothing. Each tick it captures a `RenderFrame`: pure data
//! describing the current view, both ships, any live beam segments and the
//! screen text. An external renderer turns this into pixels however it
//! likes; the only information flowing back is pointer hover/click, which
//! the input layer resolves against the control bounds in [`ui`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::PlayerSide;
use crate::sim::state::CombatModel;
use crate::sim::view::{ViewState, game_over_message};
use crate::sim::weapon;

/// Static screen text and the pointer-interactive control bounds.
///
/// Bounds are in world coordinates. They are published here so the input
/// layer can resolve hover + click into menu actions without the core ever
/// seeing a raw mouse event.
pub mod ui {
    use glam::Vec2;

    use crate::input::MenuAction;

    /// Axis-aligned rectangle in world units.
    #[derive(Debug, Clone, Copy)]
    pub struct Rect {
        pub min: Vec2,
        pub max: Vec2,
    }

    impl Rect {
        pub const fn new(min: Vec2, max: Vec2) -> Self {
            Self { min, max }
        }

        pub fn contains(&self, p: Vec2) -> bool {
            p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
        }
    }

    pub const START_BUTTON: Rect =
        Rect::new(Vec2::new(-100.0, 150.0), Vec2::new(100.0, 200.0));
    pub const INSTRUCTIONS_BUTTON: Rect =
        Rect::new(Vec2::new(-100.0, 30.0), Vec2::new(100.0, 80.0));
    pub const QUIT_BUTTON: Rect =
        Rect::new(Vec2::new(-100.0, -90.0), Vec2::new(100.0, -40.0));
    pub const BACK_BUTTON: Rect =
        Rect::new(Vec2::new(-500.0, -275.0), Vec2::new(-450.0, -250.0));

    pub const MENU_BUTTONS: [(MenuAction, &str); 3] = [
        (MenuAction::Start, "Start Game"),
        (MenuAction::Instructions, "Instructions"),
        (MenuAction::Quit, "Quit"),
    ];
    pub const BACK_LABEL: &str = "Back";

    pub const INTRO_LINES: [&str; 3] = [
        "BEAM DUEL",
        "A two player space shooter",
        "Press ENTER to start the game",
    ];

    pub const INSTRUCTION_LINES: [&str; 4] = [
        "LEFT PLAYER: WASD (move) - 'c' to shoot (use W/S to aim up/down)",
        "RIGHT PLAYER: IJKL (move) - 'm' to shoot (use I/K to aim up/down)",
        "Each successful shot deals 10 LIFE points.",
        "Laser lasts a brief moment per shot (can't hold to spam).",
    ];

    pub const GAME_OVER_PROMPT: &str = "Press ENTER to return to menu";
}

/// Beam segment to draw, in world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamView {
    pub start: Vec2,
    pub end: Vec2,
}

/// Snapshot of one ship for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub side: PlayerSide,
    pub pos: Vec2,
    pub life: i32,
    pub score: u32,
    /// Active beam, if any. Absent for a destroyed ship: it is not drawn,
    /// and neither is anything it fired.
    pub beam: Option<BeamView>,
}

impl ShipView {
    /// HUD life text
    pub fn life_label(&self) -> String {
        format!("LIFE = {}", self.life)
    }

    /// HUD score text
    pub fn score_label(&self) -> String {
        format!("SCORE = {}", self.score)
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub view: ViewState,
    pub ships: [ShipView; 2],
    /// Game-over banner, present only in that view
    pub message: Option<String>,
    /// Decorative hull light color index, cycling while in Game
    pub light_index: u32,
}

impl RenderFrame {
    /// Capture the current state into a frame. Pure read; never mutates.
    pub fn capture(view: ViewState, model: &CombatModel, light_index: u32) -> Self {
        let ships = PlayerSide::BOTH.map(|side| {
            let ship = model.ship(side);
            let beam = (ship.life > 0)
                .then(|| weapon::beam_segment(model, side))
                .flatten()
                .map(|(start, end)| BeamView { start, end });
            ShipView {
                side,
                pos: ship.pos,
                life: ship.life,
                score: ship.score,
                beam,
            }
        });
        let message =
            (view == ViewState::GameOver).then(|| game_over_message(model).to_string());
        Self {
            view,
            ships,
            message,
            light_index,
        }
    }

    /// Final score summary for the game-over screen.
    pub fn final_score_line(&self) -> String {
        format!(
            "Final Score - Left: {}   Right: {}",
            self.ships[0].score, self.ships[1].score
        )
    }
}
