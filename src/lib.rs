//! Beam Duel - a two-player local arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, weapons, collisions, view flow)
//! - `clock`: Frame delta timing
//! - `input`: Normalized per-tick input snapshot
//! - `render`: Pure-data render frame handed to an external renderer
//! - `settings`: Data-driven game balance
//!
//! The simulation never touches a window, a font or a raw device event. The
//! host loop feeds it an `InputSnapshot` and a delta time each frame and
//! draws whatever `RenderFrame` comes back.

pub mod clock;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use input::{InputSnapshot, MenuAction, PlayerSide};
pub use render::RenderFrame;
pub use settings::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena half-extents in world units (beams travel to these edges)
    pub const ARENA_HALF_WIDTH: f32 = 1200.0;
    pub const ARENA_HALF_HEIGHT: f32 = 700.0;

    /// Ships are clamped inside this smaller box
    pub const SHIP_LIMIT_X: f32 = 1000.0;
    pub const SHIP_LIMIT_Y: f32 = 300.0;

    /// Distance of each ship from center at match start
    pub const SHIP_START_X: f32 = 500.0;

    /// Movement speed in world units per second
    pub const SHIP_SPEED: f32 = 600.0;

    /// How long a fired beam remains active (seconds)
    pub const BEAM_DURATION: f32 = 0.6;

    /// Circular hitbox radius approximating a ship's vulnerable area
    pub const HIT_RADIUS: f32 = 50.0;
    /// Life subtracted from the target per confirmed hit
    pub const HIT_DAMAGE: i32 = 10;
    /// Score awarded to the shooter per confirmed hit
    pub const HIT_SCORE: u32 = 100;

    /// Starting and maximum life
    pub const MAX_LIFE: i32 = 100;

    /// Offset applied to the defending ship's collision center. The ship
    /// sprite's visual origin does not coincide with its logical position;
    /// hits only line up with the rendered art with this correction.
    pub const HITBOX_OFFSET: Vec2 = Vec2::new(8.0, 8.0);

    /// Hull light animation: number of colors and frames per color step
    pub const LIGHT_COLOR_COUNT: u32 = 3;
    pub const LIGHT_CYCLE_FRAMES: u32 = 8;
}

/// Squared distance from point `p` to segment `ab`.
///
/// Clamped-projection form: the closest point on the segment is found by
/// projecting `p` onto the line and clamping the parameter to [0, 1]. A
/// zero-length segment degenerates to point-to-point distance.
#[inline]
pub fn point_to_segment_dist_sq(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return ap.length_squared();
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).length_squared()
}
