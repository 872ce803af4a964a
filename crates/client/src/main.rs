//! rogue console client.
//!
//! ```bash
//! # fresh game
//! cargo run -p rogue-client
//!
//! # replay a recorded session, then continue live
//! ROGUE_SEED=7 ROGUE_REPLAY=1,1,4,4,3 cargo run -p rogue-client
//! ```

use anyhow::Result;
use rogue_client::config::format_replay;
use rogue_client::{ClientConfig, logging, scenario};
use rogue_core::{
    Command, ConsoleSource, Creature, Env, GameConfig, GameEngine, PcgRng, compute_commands_root,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting rogue");
    tracing::info!("Seed: {}", config.seed);
    tracing::info!(
        "Dungeon: difficulty {}, density {}",
        config.difficulty,
        config.density
    );

    let graph = scenario::build_dungeon(config.difficulty, config.density)?;
    let rng = PcgRng;
    let env = Env::new(&graph, &rng, config.seed);
    let env = env.as_game_env();

    let mut state = scenario::populate(&env, &GameConfig::default());
    if !config.replay.is_empty() {
        tracing::info!("Replaying {} recorded commands", config.replay.len());
        state.player.commands.queue_replay(config.replay.iter().copied());
    }

    print_help();
    let mut live = ConsoleSource::stdin();
    let reports = GameEngine::new(&mut state).run(env, &mut live)?;

    let recording = state.player.commands.recording();
    let status = reports
        .last()
        .map(|report| report.status.to_string())
        .unwrap_or_else(|| "not started".to_owned());

    println!();
    println!("status:      {}", status);
    println!("turns:       {}", state.turn);
    println!("hp:          {}/{}", state.player.hp(), state.player.hp_base);
    println!("kill points: {}", state.player.kill_points);
    println!("replay:      ROGUE_SEED={} ROGUE_REPLAY={}", config.seed, format_replay(&recording));
    println!("commands root: {}", hex::encode(compute_commands_root(&recording)));

    tracing::info!("Session finished: {}", status);
    Ok(())
}

fn print_help() {
    println!("Commands (one per line, end input to quit):");
    for command in [
        Command::Move,
        Command::UseCrystal,
        Command::UsePotion,
        Command::Attack,
    ] {
        println!("  {} = {}", command.code(), command);
    }
}
