//! Yoshi Dash entry point
//!
//! Headless driver: runs the simulation against a synthetic frame clock with
//! an autopilot standing in for the keyboard, and logs what a renderer would
//! show. Snapshots can be streamed as JSON lines for an external renderer.

use std::path::PathBuf;

use clap::Parser;
use yoshi_dash::Tuning;
use yoshi_dash::sim::collision::leading_edge;
use yoshi_dash::sim::{
    GameEvent, GameState, InputSignal, InputState, Playfield, StaticScene, tick,
};

/// A side-scrolling platform dodger (headless)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Frame budget before the autopilot presses escape
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Frame clock step
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Print a JSON snapshot every N frames
    #[arg(long)]
    snapshot_every: Option<u64>,
}

/// How far ahead of the leading edge a hazard makes the autopilot jump
const JUMP_LOOKAHEAD: f32 = 150.0;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let playfield = Playfield::new(args.width, args.height);
    let mut state = match GameState::from_scene(args.seed, tuning, playfield, &StaticScene) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot build scene: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Yoshi Dash (headless) starting...");
    let mut input = InputState::new();
    input.press(InputSignal::MoveRight);

    let mut frame: u64 = 0;
    loop {
        frame += 1;
        autopilot(&state, &mut input, frame, args.frames);

        let t = frame as f64 * args.frame_ms;
        let ended = tick(&mut state, &mut input, t);

        for event in &state.events {
            match event {
                GameEvent::LifeLost { remaining } => log::info!("Ouch! {remaining} lives left"),
                GameEvent::LevelUp(level) => log::info!("Level {level}"),
                _ => log::debug!("{event:?}"),
            }
        }

        if let Some(every) = args.snapshot_every {
            if every > 0 && frame % every == 0 {
                match serde_json::to_string(&state.snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => log::warn!("Snapshot failed: {e}"),
                }
            }
        }

        if ended {
            break;
        }
    }

    println!(
        "Game over after {} frames: {:?}, level {}, lives {}",
        frame,
        state.ended,
        state.level,
        state.lives
    );
}

/// Run toward the far wall, turn around at walls, hop over approaching hazards
fn autopilot(state: &GameState, input: &mut InputState, frame: u64, budget: u64) {
    if frame >= budget {
        input.press(InputSignal::Escape);
        return;
    }

    let player = &state.player;
    let right_wall = state.playfield.width - player.dimensions.x;
    if input.is_held(InputSignal::MoveRight) && player.pos.x >= right_wall - 1.0 {
        input.release(InputSignal::MoveRight);
        input.press(InputSignal::MoveLeft);
    } else if input.is_held(InputSignal::MoveLeft) && player.pos.x <= player.dimensions.x + 1.0 {
        input.release(InputSignal::MoveLeft);
        input.press(InputSignal::MoveRight);
    }

    if !player.is_grounded() {
        return;
    }
    let edge = leading_edge(player);
    let threat = state.hazards.iter().any(|h| {
        let ahead = (h.pos.x - edge) * player.facing();
        (0.0..JUMP_LOOKAHEAD).contains(&ahead)
    });
    if threat {
        input.press(InputSignal::Jump);
    }
}
