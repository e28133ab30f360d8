//! Controllers: keyboard intents for the player, waypoint following for
//! the rival
//!
//! Both controllers drive the same `Car`; there is no player-car or
//! computer-car type, only who gets to push the pedals this frame.

use glam::Vec2;

use super::car::{Car, Steer};

/// Directional intents sampled from the keyboard once per frame. All
/// four can be active at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveIntents {
    pub steer_left: bool,
    pub steer_right: bool,
    pub throttle: bool,
    pub brake: bool,
}

/// Map one frame of intents onto the player car.
///
/// Steering always applies, moving or not. Exactly one motion op runs
/// per tick: throttle wins over brake, and with neither pedal held the
/// car coasts down through `reduce_speed`.
pub fn drive_player(car: &mut Car, intents: DriveIntents) {
    if intents.steer_left {
        car.rotate(Steer::Left);
    }
    if intents.steer_right {
        car.rotate(Steer::Right);
    }

    if intents.throttle {
        car.move_forward();
    } else if intents.brake {
        car.move_backward();
    } else {
        car.reduce_speed();
    }
}

/// Waypoint-following driver for the computer car.
///
/// Progress is an index into the path; once it reaches the end the car
/// stops where it is and stays drawable. Appending waypoints at any time
/// is safe, the index only ever compares against the current length.
#[derive(Debug, Clone)]
pub struct Autopilot {
    waypoints: Vec<Vec2>,
    current: usize,
}

impl Autopilot {
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            current: 0,
        }
    }

    /// Append a target without disturbing progress. Reactivates an
    /// arrived car on its next `drive`.
    pub fn push_waypoint(&mut self, point: Vec2) {
        self.waypoints.push(point);
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the whole path has been consumed
    pub fn arrived(&self) -> bool {
        self.current >= self.waypoints.len()
    }

    /// One tick: steer toward the current waypoint, advance past it once
    /// the car's rectangle covers it, then move. No-op when arrived.
    pub fn drive(&mut self, car: &mut Car) {
        if self.arrived() {
            return;
        }
        self.steer_toward_target(car);
        self.advance_if_reached(car);
        car.apply_kinematics();
    }

    /// Turn toward the current target by at most the car's rotation rate
    /// per tick.
    fn steer_toward_target(&self, car: &mut Car) {
        let target = self.waypoints[self.current];
        let diff = target - car.pos;

        // atan(dx/dy) measures the heading off the vertical axis; an
        // exact horizontal reads as 90 degrees
        let desired = if diff.y == 0.0 {
            90.0
        } else {
            (diff.x / diff.y).atan().to_degrees()
        };
        // atan is blind to the quadrant: a target below means the
        // heading flips around
        let desired = if target.y > car.pos.y {
            desired + 180.0
        } else {
            desired
        };

        let mut delta = car.angle - desired;
        if delta >= 180.0 {
            delta -= 360.0;
        }

        if delta > 0.0 {
            car.angle -= car.rotation_rate.min(delta.abs());
        } else {
            car.angle += car.rotation_rate.min(delta.abs());
        }
    }

    fn advance_if_reached(&mut self, car: &Car) {
        if car.contains_point(self.waypoints[self.current]) {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CarTuning;
    use crate::sim::car::Sprite;
    use crate::sim::mask::Mask;

    fn car_at(pos: Vec2, tuning: CarTuning) -> Car {
        Car::new(&tuning, Sprite::new(Mask::solid(20, 20)), pos)
    }

    fn player_tuning() -> CarTuning {
        CarTuning {
            max_velocity: 8.0,
            rotation_rate: 6.0,
            acceleration: 0.2,
        }
    }

    #[test]
    fn throttle_wins_over_brake() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        drive_player(
            &mut car,
            DriveIntents {
                throttle: true,
                brake: true,
                ..Default::default()
            },
        );
        assert!(car.velocity > 0.0);
    }

    #[test]
    fn no_pedal_means_passive_decay() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        car.velocity = 1.0;
        drive_player(&mut car, DriveIntents::default());
        assert!((car.velocity - 0.9).abs() < 1e-6);
    }

    #[test]
    fn steering_applies_while_standing_still() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        drive_player(
            &mut car,
            DriveIntents {
                steer_left: true,
                ..Default::default()
            },
        );
        assert_eq!(car.angle, 6.0);
        assert_eq!(car.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn both_steering_intents_cancel_out() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        drive_player(
            &mut car,
            DriveIntents {
                steer_left: true,
                steer_right: true,
                ..Default::default()
            },
        );
        assert_eq!(car.angle, 0.0);
    }

    #[test]
    fn empty_path_never_moves() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        car.velocity = car.max_velocity;
        let mut pilot = Autopilot::new(Vec::new());
        pilot.drive(&mut car);
        assert!(pilot.arrived());
        assert_eq!(car.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn steering_is_clamped_to_the_rotation_rate() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        // target far down-left: a big turn, taken 6 degrees at a time
        let pilot = Autopilot::new(vec![Vec2::new(0.0, 300.0)]);
        pilot.steer_toward_target(&mut car);
        assert_eq!(car.angle.abs(), 6.0);
    }

    #[test]
    fn small_corrections_snap_onto_the_heading() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        car.angle = 2.0;
        // target straight up: desired heading 0, delta smaller than rate
        let pilot = Autopilot::new(vec![Vec2::new(100.0, 0.0)]);
        pilot.steer_toward_target(&mut car);
        assert!(car.angle.abs() < 1e-5);
    }

    #[test]
    fn exact_horizontal_reads_as_ninety_degrees() {
        let mut car = car_at(Vec2::new(100.0, 100.0), player_tuning());
        car.angle = 88.0;
        let pilot = Autopilot::new(vec![Vec2::new(300.0, 100.0)]);
        pilot.steer_toward_target(&mut car);
        assert_eq!(car.angle, 90.0);
    }

    #[test]
    fn autopilot_consumes_the_path_and_stops() {
        let tuning = CarTuning {
            max_velocity: 4.0,
            rotation_rate: 6.0,
            acceleration: 0.2,
        };
        let mut car = car_at(Vec2::new(100.0, 100.0), tuning);
        car.velocity = car.max_velocity;

        // a short climb the 20x20 rectangle will sweep over
        let path = vec![
            Vec2::new(105.0, 90.0),
            Vec2::new(108.0, 70.0),
            Vec2::new(104.0, 50.0),
        ];
        let mut pilot = Autopilot::new(path.clone());

        let mut ticks = 0;
        while !pilot.arrived() && ticks < 1000 {
            pilot.drive(&mut car);
            ticks += 1;
        }
        assert!(pilot.arrived(), "stuck at waypoint {}", pilot.current_index());
        assert_eq!(pilot.current_index(), path.len());

        // arrived: further driving is a no-op
        let parked = car.pos;
        pilot.drive(&mut car);
        assert_eq!(car.pos, parked);
    }

    #[test]
    fn appended_waypoint_reactivates_an_arrived_pilot() {
        let tuning = CarTuning {
            max_velocity: 4.0,
            rotation_rate: 6.0,
            acceleration: 0.2,
        };
        let mut car = car_at(Vec2::new(100.0, 100.0), tuning);
        car.velocity = car.max_velocity;

        let mut pilot = Autopilot::new(Vec::new());
        pilot.drive(&mut car);
        assert!(pilot.arrived());

        pilot.push_waypoint(Vec2::new(100.0, 40.0));
        assert!(!pilot.arrived());
        let before = car.pos;
        pilot.drive(&mut car);
        assert_ne!(car.pos, before);
    }
}
