//! Alien Invasion headless driver
//!
//! Runs the simulation at a fixed 60 Hz on a synthetic clock with a scripted
//! pilot standing in for the input device, then prints the final frame's
//! snapshot as JSON.
//!
//! Usage: `alien-invasion [settings.json] [frames]`

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use alien_invasion::consts::FRAME_PERIOD;
use alien_invasion::{Command, Flow, GameSession, Settings};

/// Default run length (one minute of frames)
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Scripted pilot: chase the nearest column, keep firing, use the specials
fn pilot(session: &GameSession, frame: u64) -> Vec<Command> {
    if session.show_restart() {
        return vec![Command::Restart];
    }

    let mut commands = Vec::new();
    let ship_x = session.ship().rect.center_x();
    let target = session
        .world()
        .formation
        .units()
        .iter()
        .map(|u| u.rect.center_x())
        .min_by(|a, b| {
            (a - ship_x)
                .abs()
                .partial_cmp(&(b - ship_x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(target) = target {
        commands.push(Command::MoveLeft(target < ship_x - 2.0));
        commands.push(Command::MoveRight(target > ship_x + 2.0));
    }

    if frame % 20 == 0 {
        commands.push(Command::Fire);
    }
    if frame % 240 == 0 {
        commands.push(Command::FireSpread);
    }
    if frame % 900 == 300 {
        commands.push(Command::SpawnBlast);
    }
    if frame % 900 == 600 {
        commands.push(Command::SpawnBeam);
    }
    commands
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Alien Invasion (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    };
    let frames = args
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let start = Instant::now();
    let session = settings.and_then(|s| GameSession::new(s, seed, start));
    let mut session = match session {
        Ok(session) => session,
        Err(err) => {
            log::error!("Configuration error: {}", err);
            std::process::exit(2);
        }
    };

    let mut now = start;
    let mut destroyed = 0;
    let mut rounds = 0;
    'frames: for frame in 0..frames {
        for command in pilot(&session, frame) {
            if session.handle(command, now) == Flow::Quit {
                break 'frames;
            }
        }
        if let Some(report) = session.update(now) {
            destroyed += report.units_destroyed;
            rounds += report.round_cleared as u32;
        }
        now += FRAME_PERIOD;
    }

    log::info!(
        "Finished: {} units destroyed, {} rounds cleared, {} lives left",
        destroyed,
        rounds,
        session.lives()
    );

    match serde_json::to_string_pretty(&session.snapshot(now)) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize snapshot: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host page
}
