//! Demo client binary.
//!
//! Composition root for a short scripted session: assembles the demo
//! collaborators around the runtime, walks a few overworld turns, visits
//! a dungeon, and ends the game. Run with `RUST_LOG=debug` to watch the
//! activation passes tick.

mod world;

use std::sync::Arc;

use anyhow::Result;

use rove_core::{GameConfig, Position, Tick};
use rove_runtime::{Runtime, RuntimeConfig};
use world::{ConsoleAudio, DemoBoard, DemoDungeon, DemoPlayer, Walker};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (silently ignore if not found).
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config: GameConfig::with_turn_delay(Tick(100)),
            ..RuntimeConfig::default()
        })
        .board(Arc::new(DemoBoard::new(8, 8)))
        .dungeon(Arc::new(DemoDungeon))
        .ambience(Arc::new(ConsoleAudio))
        .player(Arc::new(DemoPlayer))
        .build()?;

    let mut events = runtime.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::debug!(?event, "session event");
        }
    });

    // Two walkers near the middle of the board; the viewport horizon sits
    // at x = 6, so a few turns of walking east gets them culled.
    runtime.register_actor(Box::new(Walker::new(1, Position::new(2, 2), Tick(60), 6)));
    runtime.register_actor(Box::new(Walker::new(2, Position::new(4, 3), Tick(90), 6)));

    for turn in 1..=4 {
        tracing::info!(turn, remaining = runtime.enemy_count(), "player moves");
        runtime.end_player_turn();
        runtime.run_enemy_turn().await;
    }

    // Step through a dungeon entrance and back out.
    runtime.enter_dungeon();
    runtime.register_actor(Box::new(Walker::new(3, Position::new(1, 0), Tick(70), 6)));
    runtime.end_player_turn();
    runtime.run_enemy_turn().await;
    runtime.exit_dungeon();

    runtime.end_game();
    tracing::info!("session over");
    Ok(())
}
