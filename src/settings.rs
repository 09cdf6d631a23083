//! Data-driven game balance
//!
//! All tunable combat numbers live in one struct so the host can override
//! them from a JSON file without touching the simulation. Missing fields
//! fall back to the canonical defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Combat balance values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ship movement speed, world units per second
    pub ship_speed: f32,
    /// Beam lifetime in seconds
    pub beam_duration: f32,
    /// Hitbox radius in world units
    pub hit_radius: f32,
    /// Life subtracted per confirmed hit
    pub hit_damage: i32,
    /// Score awarded per confirmed hit
    pub hit_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            beam_duration: BEAM_DURATION,
            hit_radius: HIT_RADIUS,
            hit_damage: HIT_DAMAGE,
            hit_score: HIT_SCORE,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, degrading to defaults with a warning
    /// on any failure. Balance overrides are never worth refusing to start
    /// over.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
