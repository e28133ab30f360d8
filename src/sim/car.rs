//! Car entity: position, heading, velocity and the motion/collision ops
//!
//! One `Car` serves both seats; what differs is who drives it (see
//! `control`). Headings are degrees, 0 pointing up the screen and
//! positive turning counter-clockwise, velocities are pixels per tick.

use glam::{IVec2, UVec2, Vec2};

use super::mask::Mask;
use crate::displacement;
use crate::settings::CarTuning;

/// Steering direction for one input tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Collision silhouette of a car sprite.
///
/// The frontend keeps the RGBA image for drawing; the sim only needs the
/// solid pixels and the footprint.
#[derive(Debug, Clone)]
pub struct Sprite {
    mask: Mask,
}

impl Sprite {
    pub fn new(mask: Mask) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    /// Unrotated silhouette
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

/// A car on the track
#[derive(Debug, Clone)]
pub struct Car {
    /// Top-left anchor of the sprite's bounding box
    pub pos: Vec2,
    /// Heading in degrees; unbounded, the trig wraps it naturally
    pub angle: f32,
    /// Signed speed along the heading, positive = forward
    pub velocity: f32,
    /// Cap on |velocity|
    pub max_velocity: f32,
    /// Degrees turned per steering tick
    pub rotation_rate: f32,
    /// Velocity gained per pedal tick
    pub acceleration: f32,
    start_pos: Vec2,
    sprite: Sprite,
}

impl Car {
    /// A stationary car at its starting box
    pub fn new(tuning: &CarTuning, sprite: Sprite, start_pos: Vec2) -> Self {
        Self {
            pos: start_pos,
            angle: 0.0,
            velocity: 0.0,
            max_velocity: tuning.max_velocity,
            rotation_rate: tuning.rotation_rate,
            acceleration: tuning.acceleration,
            start_pos,
            sprite,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn start_pos(&self) -> Vec2 {
        self.start_pos
    }

    /// Turn one tick's worth in the given direction
    pub fn rotate(&mut self, steer: Steer) {
        match steer {
            Steer::Left => self.angle += self.rotation_rate,
            Steer::Right => self.angle -= self.rotation_rate,
        }
    }

    /// Accelerate one tick and move at the clamped velocity. Moves even
    /// when already at the cap.
    pub fn move_forward(&mut self) {
        self.velocity = (self.velocity + self.acceleration).min(self.max_velocity);
        self.apply_kinematics();
    }

    /// Reverse counterpart of `move_forward`
    pub fn move_backward(&mut self) {
        self.velocity = (self.velocity - self.acceleration).max(-self.max_velocity);
        self.apply_kinematics();
    }

    /// Passive decay toward standstill when no pedal is held. Floors at
    /// zero, never pushes the car into reverse.
    pub fn reduce_speed(&mut self) {
        self.velocity = (self.velocity - self.acceleration / 2.0).max(0.0);
        self.apply_kinematics();
    }

    /// Advance the position one tick along the current heading
    pub fn apply_kinematics(&mut self) {
        self.pos += displacement(self.angle, self.velocity);
    }

    /// Pixel-accurate contact with a static mask whose origin sits at
    /// `origin` in track coordinates.
    ///
    /// The silhouette is rotated to the current heading before the test,
    /// and the offset truncates toward zero. The returned point is in the
    /// target mask's coordinates.
    pub fn collide_with(&self, target: &Mask, origin: Vec2) -> Option<UVec2> {
        let silhouette = self.sprite.mask().rotated(self.angle);
        let offset = IVec2::new(
            (self.pos.x - origin.x) as i32,
            (self.pos.y - origin.y) as i32,
        );
        target.overlap(&silhouette, offset)
    }

    /// Reverse direction and immediately move, pushing the car back out
    /// of whatever it just hit
    pub fn bounce(&mut self) {
        self.velocity = -self.velocity;
        self.apply_kinematics();
    }

    /// Back to the starting box, facing up, stopped
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.angle = 0.0;
        self.velocity = 0.0;
    }

    /// Bounding-rectangle containment (inclusive top-left, exclusive
    /// bottom-right), used for waypoint arrival
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.sprite.width() as f32
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.sprite.height() as f32
    }
}
