//! Trackday entry point
//!
//! No window is wired up yet: with the stock asset sheets on disk the
//! real track is loaded, otherwise a small synthetic course is built,
//! and the race runs headless with a scripted player while the
//! autopilot laps. A frontend would draw grass, track, finish and
//! border in that order, then both cars rotated about their centers,
//! before every tick.

use std::path::Path;

use anyhow::Result;
use glam::Vec2;

use trackday::assets::{Image, TrackAssets};
use trackday::platform::FrameClock;
use trackday::settings::Settings;
use trackday::sim::{Car, Mask, RaceEvent, RaceSession, Sprite, TickInput, TrackGeometry};

const SETTINGS_FILE: &str = "trackday.json";
const ASSET_DIR: &str = "imgs";
/// Upper bound on the headless run
const MAX_DEMO_TICKS: u64 = 1800;

fn main() -> Result<()> {
    env_logger::init();
    let settings = Settings::load(Path::new(SETTINGS_FILE));

    let mut session = if Path::new(ASSET_DIR).exists() {
        session_from_assets(&settings)?
    } else {
        log::info!("no '{ASSET_DIR}' directory, building the synthetic demo course");
        demo_session(&settings)
    };

    run_headless(&mut session, settings.target_fps);
    Ok(())
}

/// The stock course from the asset sheets
fn session_from_assets(settings: &Settings) -> Result<RaceSession> {
    let assets = TrackAssets::load(Path::new(ASSET_DIR), &settings.track)?;
    let track = TrackGeometry {
        border: assets.border_mask.clone(),
        finish: assets.finish_mask.clone(),
        finish_pos: settings.track.finish_position,
    };
    let player = Car::new(
        &settings.player,
        assets.player_car.to_sprite(),
        settings.track.player_start,
    );
    let rival = Car::new(
        &settings.rival,
        assets.rival_car.to_sprite(),
        settings.track.rival_start,
    );
    Ok(RaceSession::new(
        track,
        player,
        rival,
        settings.track.path.clone(),
    ))
}

/// Rectangular practice course: a walled field, a finish strip and a
/// four-corner rival lap
fn demo_session(settings: &Settings) -> RaceSession {
    const SIZE: u32 = 400;
    const WALL: u32 = 8;

    // walls as an alpha ring, the same shape a real border sheet has
    let mut rgba = vec![0u8; (SIZE * SIZE * 4) as usize];
    for y in 0..SIZE {
        for x in 0..SIZE {
            if x < WALL || y < WALL || x >= SIZE - WALL || y >= SIZE - WALL {
                let i = ((y * SIZE + x) * 4) as usize;
                rgba[i..i + 4].copy_from_slice(&[96, 96, 96, 255]);
            }
        }
    }
    let border = Image::from_rgba(SIZE, SIZE, rgba);
    let finish = solid_image(60, 12, [240, 240, 240, 255]);

    let track = TrackGeometry {
        border: border.to_mask(),
        finish: finish.to_mask(),
        finish_pos: Vec2::new(20.0, 320.0),
    };

    let lap = vec![
        Vec2::new(60.0, 60.0),
        Vec2::new(320.0, 60.0),
        Vec2::new(320.0, 320.0),
        Vec2::new(60.0, 320.0),
    ];

    let player = Car::new(
        &settings.player,
        Sprite::new(Mask::solid(12, 24)),
        Vec2::new(200.0, 200.0),
    );
    let rival = Car::new(
        &settings.rival,
        Sprite::new(Mask::solid(12, 24)),
        Vec2::new(80.0, 200.0),
    );

    RaceSession::new(track, player, rival, lap)
}

fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> Image {
    let rgba = pixel
        .into_iter()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    Image::from_rgba(width, height, rgba)
}

/// Drive the session at the configured pace until the rival finishes
/// its lap or the tick budget runs out
fn run_headless(session: &mut RaceSession, target_fps: u32) {
    let mut clock = FrameClock::new();
    // scripted player: pedal down the whole run
    let input = TickInput {
        drive: trackday::sim::DriveIntents {
            throttle: true,
            ..Default::default()
        },
        ..Default::default()
    };

    while session.ticks() < MAX_DEMO_TICKS {
        clock.tick(target_fps);

        for event in session.tick(&input) {
            match event {
                RaceEvent::BorderHit => log::debug!("player bounced off the border"),
                RaceEvent::FinishGrazed => log::debug!("player grazed the finish edge"),
                RaceEvent::Finished => log::info!("player crossed the finish line"),
            }
        }

        if session.ticks() % 60 == 0 {
            log::info!(
                "t={:>4} player=({:.1}, {:.1}) rival=({:.1}, {:.1}) waypoint {}/{}",
                session.ticks(),
                session.player.pos.x,
                session.player.pos.y,
                session.rival.pos.x,
                session.rival.pos.y,
                session.autopilot.current_index(),
                session.autopilot.waypoints().len(),
            );
        }

        if session.autopilot.arrived() {
            log::info!("rival completed its lap in {} ticks", session.ticks());
            break;
        }
    }
}
