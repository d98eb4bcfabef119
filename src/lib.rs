//! Crate root module declarations for the Birch Tafl engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod tafl_errors;

pub mod game_state {
    pub mod board;
    pub mod keys;
    pub mod state;
    pub mod tafl_rules;
    pub mod tafl_types;
    pub mod victor;
}

pub mod move_generation {
    pub mod moveable;
    pub mod moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod match_harness;
    pub mod notation;
}
