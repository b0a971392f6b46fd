//! Brick Breaker entry point
//!
//! Runs the simulation headless with the AI player at the wheel.
//!
//! Usage: `brick-breaker [TUNING.json] [MAX_FRAMES]`

use brick_breaker::TuningError;
use brick_breaker::consts::SIM_DT;
use brick_breaker::platform::headless::{LogSound, RecordingCanvas};
use brick_breaker::platform::{compose_frame, play_events};
use brick_breaker::sim::{GamePhase, GameState, TickInput, tick};
use brick_breaker::tuning::Tuning;

const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

/// Frame limit from the command line, falling back to the default
fn parse_max_frames(arg: Option<String>) -> u64 {
    let Some(arg) = arg else {
        return DEFAULT_MAX_FRAMES;
    };
    match arg.parse() {
        Ok(frames) => frames,
        Err(e) => {
            log::warn!(
                "Invalid frame count {:?} ({}), using {}",
                arg,
                e,
                DEFAULT_MAX_FRAMES
            );
            DEFAULT_MAX_FRAMES
        }
    }
}

fn main() -> Result<(), TuningError> {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let max_frames = parse_max_frames(args.next());

    let mut state = GameState::new(tuning);
    let mut canvas = RecordingCanvas::default();
    let mut sound = LogSound::default();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while state.frame < max_frames {
        tick(&mut state, &input, SIM_DT);
        play_events(&state.drain_events(), &mut sound);

        canvas.clear();
        compose_frame(&state, &mut canvas);

        if matches!(state.phase, GamePhase::GameOver | GamePhase::Cleared) {
            break;
        }
    }

    println!(
        "{:?} after {} frames: {} of {} bricks left, {} lives, {} sounds, {} primitives in last frame",
        state.phase,
        state.frame,
        state.bricks_remaining(),
        state.bricks.len(),
        state.lives,
        sound.played,
        canvas.primitive_count(),
    );
    Ok(())
}
