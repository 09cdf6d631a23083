//! Beam-vs-ship hit resolution
//!
//! A beam is a segment, a ship's vulnerable area is a circle. A hit is a
//! squared-distance comparison; damage applies at most once per beam, and
//! a hit never shortens the beam's remaining lifetime.

use crate::consts::HITBOX_OFFSET;
use crate::input::PlayerSide;
use crate::point_to_segment_dist_sq;
use crate::settings::Tuning;
use crate::sim::state::CombatModel;
use crate::sim::weapon;

/// Resolve both active beams against the opposing ships.
///
/// For each living shooter with an active beam that has not yet dealt
/// damage: if the beam segment passes within the hit radius of the
/// opponent's offset-corrected center, subtract damage (life floors at 0),
/// mark the beam as spent and award the shooter the hit score.
pub fn resolve_beam_hits(model: &mut CombatModel, tuning: &Tuning) {
    for shooter in PlayerSide::BOTH {
        // A destroyed ship's beam is gone with it
        if model.ship(shooter).life <= 0 {
            continue;
        }
        if model.beam(shooter).has_dealt_damage {
            continue;
        }
        let Some((start, end)) = weapon::beam_segment(model, shooter) else {
            continue;
        };

        let target = shooter.opponent();
        let center = model.ship(target).pos + HITBOX_OFFSET;
        let d2 = point_to_segment_dist_sq(center, start, end);
        if d2 <= tuning.hit_radius * tuning.hit_radius {
            model.ship_mut(target).take_damage(tuning.hit_damage);
            model.beam_mut(shooter).has_dealt_damage = true;
            model.ship_mut(shooter).score += tuning.hit_score;
            log::debug!(
                "{shooter:?} hit {target:?}: life {}, score {}",
                model.ship(target).life,
                model.ship(shooter).score
            );
        }
    }
}
