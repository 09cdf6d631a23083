//! Combat state and core simulation types
//!
//! All duel state lives in `CombatModel`: the two ships and their beams.
//! The model is plain owned data; the host holds exactly one and only the
//! tick path mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::{HeldActions, PlayerSide};

/// Vertical aim of a beam while the fire action is held.
///
/// Beams snap to one of three angles: level with the ship, or all the way
/// to the top or bottom arena edge. Up wins if both vertical actions are
/// held at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aim {
    #[default]
    Level,
    Up,
    Down,
}

impl Aim {
    /// Resolve held vertical actions into an aim, Up taking priority.
    pub fn from_held(up: bool, down: bool) -> Self {
        if up {
            Aim::Up
        } else if down {
            Aim::Down
        } else {
            Aim::Level
        }
    }
}

/// One player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Hit points, 0..=100
    pub life: i32,
    pub score: u32,
    /// One-shot gate: true only while the fire action is released
    pub can_fire: bool,
    /// Recomputed every tick; meaningful only while fire is held
    pub aim: Aim,
}

impl Ship {
    fn at_start(side: PlayerSide) -> Self {
        Self {
            pos: Vec2::new(-side.facing() * SHIP_START_X, 0.0),
            life: MAX_LIFE,
            score: 0,
            can_fire: true,
            aim: Aim::Level,
        }
    }

    /// Subtract damage, flooring life at zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.life = (self.life - damage).max(0);
    }
}

/// One ship's beam. Endpoint geometry is derived from the owner each frame,
/// never stored here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Beam {
    pub active: bool,
    /// Seconds until the beam disappears
    pub remaining: f32,
    /// Set once this beam instance has struck its target; cleared when a
    /// new beam starts and when the beam expires
    pub has_dealt_damage: bool,
}

/// The complete duel state: both ships and both beams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatModel {
    ships: [Ship; 2],
    beams: [Beam; 2],
}

impl Default for CombatModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatModel {
    pub fn new() -> Self {
        Self {
            ships: [
                Ship::at_start(PlayerSide::Left),
                Ship::at_start(PlayerSide::Right),
            ],
            beams: [Beam::default(); 2],
        }
    }

    fn idx(side: PlayerSide) -> usize {
        match side {
            PlayerSide::Left => 0,
            PlayerSide::Right => 1,
        }
    }

    pub fn ship(&self, side: PlayerSide) -> &Ship {
        &self.ships[Self::idx(side)]
    }

    pub fn ship_mut(&mut self, side: PlayerSide) -> &mut Ship {
        &mut self.ships[Self::idx(side)]
    }

    pub fn beam(&self, side: PlayerSide) -> &Beam {
        &self.beams[Self::idx(side)]
    }

    pub fn beam_mut(&mut self, side: PlayerSide) -> &mut Beam {
        &mut self.beams[Self::idx(side)]
    }

    /// Apply one player's held movement actions for this tick.
    ///
    /// While the fire action is held the ship cannot move; the vertical
    /// actions steer the beam instead. Axes are independent: diagonal
    /// input moves full speed on both (not normalized).
    pub fn apply_movement(&mut self, side: PlayerSide, held: &HeldActions, dt: f32, speed: f32) {
        let ship = self.ship_mut(side);
        if held.fire {
            ship.aim = Aim::from_held(held.up, held.down);
            return;
        }
        ship.aim = Aim::Level;
        let step = speed * dt;
        if held.right {
            ship.pos.x += step;
        }
        if held.left {
            ship.pos.x -= step;
        }
        if held.up {
            ship.pos.y += step;
        }
        if held.down {
            ship.pos.y -= step;
        }
    }

    /// Clamp both ships into the allowed rectangle, per axis.
    pub fn clamp_positions(&mut self) {
        for ship in &mut self.ships {
            ship.pos.x = ship.pos.x.clamp(-SHIP_LIMIT_X, SHIP_LIMIT_X);
            ship.pos.y = ship.pos.y.clamp(-SHIP_LIMIT_Y, SHIP_LIMIT_Y);
        }
    }

    /// Match start (Menu -> Game): lives and scores only. Positions and
    /// beams carry over, matching the original game's start behavior.
    pub fn reset_match(&mut self) {
        for ship in &mut self.ships {
            ship.life = MAX_LIFE;
            ship.score = 0;
        }
    }

    /// Full reset (GameOver -> Menu): lives, scores, positions, beams,
    /// timers and hit markers all return to their initial values.
    pub fn reset_full(&mut self) {
        *self = Self::new();
    }
}
