//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic: no rendering, no raw device input, no platform calls.
//! One tick per frame, driven by the host.

pub mod collision;
pub mod state;
pub mod tick;
pub mod view;
pub mod weapon;

pub use collision::resolve_beam_hits;
pub use state::{Aim, Beam, CombatModel, Ship};
pub use tick::{FrameController, TickOutput};
pub use view::{ViewMachine, ViewState, game_over_message, winner};
pub use weapon::beam_segment;
