//! Trackday - a top-down 2D racing game
//!
//! Core modules:
//! - `sim`: deterministic simulation (kinematics, mask collision, car
//!   entities, controllers, race session)
//! - `assets`: image loading, scaling and mask derivation
//! - `settings`: data-driven car tuning and track configuration
//! - `platform`: frame pacing for the native loop
//!
//! Rendering and window/input plumbing are a frontend concern; the
//! simulation only ever sees sampled input intents and pixel masks.

pub mod assets;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{CarTuning, Settings, TrackConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frame rate the session is paced at
    pub const TARGET_FPS: u32 = 60;

    /// Alpha above which a sprite pixel counts as solid
    pub const MASK_ALPHA_THRESHOLD: u8 = 127;

    /// Rows at the top of the finish sprite that count as its side edge.
    /// Contact inside this band is a graze (bounce), not a crossing.
    pub const FINISH_EDGE_BAND: u32 = 2;
}

/// Displacement travelled in one tick at heading `angle_degrees` and
/// scalar `speed`.
///
/// Angle 0 points up the screen and increases counter-clockwise; y grows
/// downward, so both components come out negated. Applying a kinematic
/// step is `position += displacement(angle, velocity)`.
#[inline]
pub fn displacement(angle_degrees: f32, speed: f32) -> Vec2 {
    let radians = angle_degrees.to_radians();
    Vec2::new(-radians.sin() * speed, -radians.cos() * speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displacement_at_angle_zero_points_straight_up() {
        let d = displacement(0.0, 4.0);
        assert_eq!(d, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn displacement_at_ninety_degrees_points_left() {
        let d = displacement(90.0, 4.0);
        assert!((d.x - (-4.0)).abs() < 1e-5);
        assert!(d.y.abs() < 1e-5);
    }

    #[test]
    fn reverse_speed_flips_the_vector() {
        let fwd = displacement(30.0, 2.5);
        let back = displacement(30.0, -2.5);
        assert!((fwd + back).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn displacement_magnitude_equals_speed(
            angle in -720.0f32..720.0,
            speed in -50.0f32..50.0,
        ) {
            let d = displacement(angle, speed);
            prop_assert!((d.length() - speed.abs()).abs() < 1e-3);
        }
    }
}
