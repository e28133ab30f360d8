//! Per-frame race orchestration
//!
//! One tick: apply the player's intents, let the autopilot move the
//! rival, then resolve the player against the track border and the
//! finish line. Cars update sequentially within the tick and the track
//! masks are read-only after construction, so there is nothing to lock.

use glam::Vec2;

use super::car::Car;
use super::control::{Autopilot, DriveIntents, drive_player};
use super::mask::Mask;
use crate::consts::FINISH_EDGE_BAND;

/// Static track geometry the session collides against
#[derive(Debug, Clone)]
pub struct TrackGeometry {
    /// Solid pixels of the track border sheet, origin at (0, 0)
    pub border: Mask,
    /// Solid pixels of the finish sprite
    pub finish: Mask,
    /// Top-left placement of the finish sprite in track coordinates
    pub finish_pos: Vec2,
}

/// One frame of sampled input
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub drive: DriveIntents,
    /// Pointer click already mapped to track coordinates; appended to
    /// the rival's path before the autopilot runs this frame
    pub waypoint_click: Option<Vec2>,
}

/// What a tick did to the race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceEvent {
    /// Player hit the track border and bounced
    BorderHit,
    /// Player touched the side edge of the finish sprite and bounced
    FinishGrazed,
    /// Player crossed the finish line and was reset to the start
    Finished,
}

/// A running race: track geometry plus both cars.
///
/// The frontend draws the background layers and both cars before each
/// tick and translates the quit signal into loop termination; everything
/// that mutates race state happens in `tick`.
#[derive(Debug, Clone)]
pub struct RaceSession {
    track: TrackGeometry,
    pub player: Car,
    pub rival: Car,
    pub autopilot: Autopilot,
    ticks: u64,
}

impl RaceSession {
    /// Assemble a race. The rival runs flat out from the first tick; its
    /// velocity is pinned to its cap and never decays.
    pub fn new(track: TrackGeometry, player: Car, mut rival: Car, path: Vec<Vec2>) -> Self {
        rival.velocity = rival.max_velocity;
        log::info!(
            "race ready: border {}x{}, {} waypoints",
            track.border.width(),
            track.border.height(),
            path.len()
        );
        Self {
            track,
            player,
            rival,
            autopilot: Autopilot::new(path),
            ticks: 0,
        }
    }

    /// Ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// Advance the race one frame
    pub fn tick(&mut self, input: &TickInput) -> Vec<RaceEvent> {
        self.ticks += 1;
        let mut events = Vec::new();

        // the waypoint command lands before the autopilot moves
        if let Some(point) = input.waypoint_click {
            log::debug!("waypoint appended at ({}, {})", point.x, point.y);
            self.autopilot.push_waypoint(point);
        }

        drive_player(&mut self.player, input.drive);
        self.autopilot.drive(&mut self.rival);

        if self
            .player
            .collide_with(&self.track.border, Vec2::ZERO)
            .is_some()
        {
            self.player.bounce();
            events.push(RaceEvent::BorderHit);
        }

        if let Some(contact) = self
            .player
            .collide_with(&self.track.finish, self.track.finish_pos)
        {
            if contact.y <= FINISH_EDGE_BAND {
                // grazed the near edge of the strip, not a crossing
                self.player.bounce();
                events.push(RaceEvent::FinishGrazed);
            } else {
                log::info!("finish line crossed on tick {}", self.ticks);
                self.player.reset();
                events.push(RaceEvent::Finished);
            }
        }

        events
    }
}
