//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use birch_tafl::engines::engine_minimax::MinimaxEngine;
use birch_tafl::engines::engine_random::RandomEngine;
use birch_tafl::engines::engine_trait::Engine;
use birch_tafl::game_state::tafl_rules::BoardVariant;
use birch_tafl::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different engines/depths.
    let attackers = || Box::new(MinimaxEngine::new(3)) as Box<dyn Engine>;
    let defenders = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        attackers,
        defenders,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                variant: BoardVariant::Brandubh,
                max_plies: 150,
                opening_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )
    .map_err(|e| format!("{:?}", e))?;

    println!("{}", stats.report());
    Ok(())
}
