//! Weapon firing and beam lifetime
//!
//! Firing is edge-triggered: holding the fire action produces exactly one
//! beam, and the action must be released before the next shot. Beam
//! geometry is derived fresh every frame from the owner's position and aim.

use glam::Vec2;

use crate::consts::*;
use crate::input::PlayerSide;
use crate::sim::state::{Aim, Beam, CombatModel};

/// Handle one player's fire action for this tick.
///
/// Fire held while armed starts a beam with a full timer and a clean hit
/// marker, then disarms the gate. Fire released re-arms it. Holding the
/// action does not re-fire.
pub fn try_fire(model: &mut CombatModel, side: PlayerSide, fire_held: bool, duration: f32) {
    if fire_held {
        if model.ship(side).can_fire {
            *model.beam_mut(side) = Beam {
                active: true,
                remaining: duration,
                has_dealt_damage: false,
            };
            model.ship_mut(side).can_fire = false;
            log::debug!("{side:?} fired a beam ({duration:.2}s)");
        }
    } else {
        model.ship_mut(side).can_fire = true;
    }
}

/// Count down both beam timers.
///
/// Runs every tick regardless of view state so a beam started just before
/// a transition still expires. Expiry zeroes the timer and clears the hit
/// marker so the next beam can deal damage again.
pub fn decay(model: &mut CombatModel, dt: f32) {
    for side in PlayerSide::BOTH {
        let beam = model.beam_mut(side);
        if !beam.active {
            continue;
        }
        beam.remaining -= dt;
        if beam.remaining <= 0.0 {
            beam.active = false;
            beam.remaining = 0.0;
            beam.has_dealt_damage = false;
        }
    }
}

/// Segment occupied by a ship's beam this frame, if it has one.
///
/// Start is the owner's current position; the end sits on the far arena
/// edge of the firing side, level with the ship or snapped to the top or
/// bottom edge when aimed. Only these three angles exist.
pub fn beam_segment(model: &CombatModel, side: PlayerSide) -> Option<(Vec2, Vec2)> {
    let beam = model.beam(side);
    if !beam.active {
        return None;
    }
    let ship = model.ship(side);
    let end_y = match ship.aim {
        Aim::Up => ARENA_HALF_HEIGHT,
        Aim::Down => -ARENA_HALF_HEIGHT,
        Aim::Level => ship.pos.y,
    };
    Some((ship.pos, Vec2::new(side.facing() * ARENA_HALF_WIDTH, end_y)))
}
