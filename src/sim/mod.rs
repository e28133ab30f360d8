//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Sequential car updates, stable collision scan order
//! - No rendering or platform dependencies

pub mod car;
pub mod control;
pub mod mask;
pub mod session;

pub use car::{Car, Sprite, Steer};
pub use control::{Autopilot, DriveIntents, drive_player};
pub use mask::Mask;
pub use session::{RaceEvent, RaceSession, TickInput, TrackGeometry};
