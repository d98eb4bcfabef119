//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a variant
//! starting position, with an optional seeded random opening prefix so a
//! series of games does not replay one deterministic line over and over.
//! The ply cap is a harness-level stop for unfinished games; the engine
//! itself has no draw or repetition rule.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::state::GameState;
use crate::game_state::tafl_rules::{starting_board, BoardVariant};
use crate::game_state::tafl_types::Team;
use crate::game_state::victor::victor;
use crate::search::minimax::iterate;
use crate::tafl_errors::TaflErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    AttackersWin,
    DefendersWin,
    /// The ply cap was reached with no victor on the board.
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub variant: BoardVariant,
    pub start: Team,
    pub max_plies: u16,
    /// Random plies played for both sides before the engines take over.
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: BoardVariant::Brandubh,
            start: Team::Attackers,
            max_plies: 150,
            opening_plies: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub plies: u16,
    pub final_state: GameState,
    pub attacker_total_time_ns: u128,
    pub defender_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub attacker_wins: u16,
    pub defender_wins: u16,
    pub unfinished: u16,
    pub total_plies: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "attackers {} / defenders {} / unfinished {} ({} plies total)",
            self.attacker_wins, self.defender_wins, self.unfinished, self.total_plies,
        )
    }
}

/// Play one game between an attacker engine and a defender engine.
///
/// A side whose engine reports `NoLegalMoves` forfeits the game to its
/// opponent; that is a harness decision, not an engine rule.
pub fn play_engine_match<'a>(
    attackers: &'a mut dyn Engine,
    defenders: &'a mut dyn Engine,
    config: &MatchConfig,
    seed: u64,
) -> Result<MatchResult, TaflErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(starting_board(config.variant), config.start);
    let mut plies = 0u16;
    let mut attacker_total_time_ns = 0u128;
    let mut defender_total_time_ns = 0u128;

    let outcome = loop {
        if let Some(winner) = victor(&state.board) {
            break winner_outcome(winner);
        }

        if plies >= config.max_plies {
            break MatchOutcome::Unfinished;
        }

        let chosen = if plies < config.opening_plies as u16 {
            let legal: Vec<_> = iterate(&state.board, state.turn).collect();
            legal.as_slice().choose(&mut rng).copied()
        } else {
            let engine = match state.turn {
                Team::Attackers => &mut *attackers,
                _ => &mut *defenders,
            };
            let started = Instant::now();
            let picked = engine.choose_move(&state.board, state.turn);
            let elapsed = started.elapsed().as_nanos();
            match state.turn {
                Team::Attackers => attacker_total_time_ns += elapsed,
                _ => defender_total_time_ns += elapsed,
            }
            picked.ok()
        };

        let Some((from, to)) = chosen else {
            // The side to move is stuck; the game goes to the opponent.
            break winner_outcome(state.turn.opponent()?);
        };

        state = state.play(from, to)?;
        plies += 1;
    };

    Ok(MatchResult {
        outcome,
        plies,
        final_state: state,
        attacker_total_time_ns,
        defender_total_time_ns,
    })
}

/// Play a series of seeded games and tally the outcomes.
pub fn play_engine_match_series<A, D>(
    attacker_factory: A,
    defender_factory: D,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, TaflErrors>
where
    A: Fn() -> Box<dyn Engine>,
    D: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::default();
    for game in 0..config.games {
        let mut attackers = attacker_factory();
        let mut defenders = defender_factory();
        let result = play_engine_match(
            attackers.as_mut(),
            defenders.as_mut(),
            &config.per_game,
            config.base_seed.wrapping_add(game as u64),
        )?;

        match result.outcome {
            MatchOutcome::AttackersWin => stats.attacker_wins += 1,
            MatchOutcome::DefendersWin => stats.defender_wins += 1,
            MatchOutcome::Unfinished => stats.unfinished += 1,
        }
        stats.total_plies += result.plies as u32;

        if config.verbose {
            println!(
                "game {}: {:?} after {} plies ({} captured attackers, {} captured defenders)",
                game,
                result.outcome,
                result.plies,
                result.final_state.captured(Team::Attackers),
                result.final_state.captured(Team::Defenders),
            );
        }
    }

    Ok(stats)
}

fn winner_outcome(winner: Team) -> MatchOutcome {
    match winner {
        Team::Attackers => MatchOutcome::AttackersWin,
        _ => MatchOutcome::DefendersWin,
    }
}
