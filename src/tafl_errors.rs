//! Errors used throughout the tafl engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, and the search. The enum `TaflErrors` is used as the
//! single error type across the crate to simplify propagation and matching.
//! Each variant carries contextual information where appropriate to aid
//! diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Functions in the engine should return `Result<..., TaflErrors>` for
//!   recoverable or expected failure modes (malformed board text, a side with
//!   no moves left, etc).
//! - Callers should match on `TaflErrors` to present friendly messages or to
//!   implement domain-specific recovery (for example treating `NoLegalMoves`
//!   from the search as the end of a match).

/// Unified error type for the tafl engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while manipulating game state, parsing board notation, or running
/// the search. Variants include contextual payloads where useful so that
/// callers can log or display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaflErrors {
    /// `Team::None` was asked for its opponent. Neutral squares have no
    /// opposing side; callers must only flip `Attackers` and `Defenders`.
    NoOpponentForNeutralTeam,

    /// The side given to the search has no legal move anywhere on the board.
    ///
    /// This is a caller-visible terminal condition (the side is eliminated or
    /// stalemated), not an internal failure.
    NoLegalMoves,

    /// An unknown character was found while unmarshaling board text.
    ///
    /// Payload: the offending character.
    InvalidBoardToken(char),

    /// Board text rows do not all share the width of the first row.
    ///
    /// Payload: (row_index, expected_width, found_width).
    UnevenBoardRows((usize, usize, usize)),

    /// Board text contained no tiles at all.
    EmptyBoardText,
}
