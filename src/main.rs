//! Mesa Harvest headless runner
//!
//! Plays one round with a simple autopilot (walk toward the nearest mushroom,
//! harvest when in range) using the headless driver, then prints the final
//! snapshot. Pass a JSON round config path as the first argument to override
//! the default objective.

use std::path::PathBuf;
use std::process::ExitCode;

use mesa_harvest::RoundConfig;
use mesa_harvest::platform::advance_time;
use mesa_harvest::sim::{
    Command, CommandOutcome, GameMode, GameState, TickInput, apply_command, guidance_direction,
};
use mesa_harvest::snapshot::Snapshot;

/// Milliseconds advanced between autopilot decisions
const DECISION_MS: f32 = 100.0;

fn autopilot_intent(state: &GameState) -> TickInput {
    match guidance_direction(state) {
        Some(dir) => TickInput::toward(dir, state.player.stamina > 0.5),
        None => TickInput::default(),
    }
}

fn run(config: RoundConfig) -> Result<Snapshot, mesa_harvest::ConfigError> {
    let mut state = GameState::new(config)?;
    apply_command(&mut state, Command::Restart);

    while state.mode == GameMode::Playing {
        if state.near_target_id.is_some() {
            if let CommandOutcome::Harvest(outcome) = apply_command(&mut state, Command::Harvest) {
                if outcome.succeeded() {
                    log::info!("{:?} ({}/{})", outcome, state.score, state.goal());
                    continue;
                }
            }
        }
        let input = autopilot_intent(&state);
        advance_time(&mut state, &input, DECISION_MS);
    }

    Ok(Snapshot::from_state(&state))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Mesa Harvest (headless) starting...");

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match RoundConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid round config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => RoundConfig::default(),
    };

    let snapshot = match run(config) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("Could not start round: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match snapshot.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Snapshot export failed: {}", e);
            return ExitCode::FAILURE;
        }
    }
    log::info!("Round finished: {:?}", snapshot.mode);
    ExitCode::SUCCESS
}
