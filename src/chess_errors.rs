//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic and
//! the save-state codec. The enum `ChessErrors` is used as the single error
//! type across the crate to simplify propagation and matching. Each variant
//! carries contextual information where appropriate to aid diagnostics.
//!
//! Note the split the engine draws between errors and rejections: an illegal
//! move *request* routed through [`crate::game_state::game_state::Game::play`]
//! is a recoverable `ChessErrors` value, while invoking the raw move executor
//! for a move its legality predicate rejects is a precondition violation and
//! panics. A legality predicate returning `false` is not an error at all.

use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};

/// Unified error type for the rules engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate outside `0..=7` on either axis was supplied.
    #[error("location {0:?} is off the board")]
    OutOfBounds(BoardLocation),

    /// A move was requested from a square that holds no piece.
    #[error("no piece on {0:?}")]
    NoPieceAt(BoardLocation),

    /// A move was requested for a piece belonging to the side not on turn.
    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Color),

    /// A move was requested under a type the piece can no longer be.
    ///
    /// Deduction has already removed this kind from the piece's candidate
    /// set, so no move may be played under it.
    #[error("piece on {from:?} cannot be a {kind:?}")]
    NotACandidate { from: BoardLocation, kind: PieceKind },

    /// The chosen kind's movement rule rejects the requested move.
    #[error("a {kind:?} cannot move from {from:?} to {to:?}")]
    IllegalMove {
        kind: PieceKind,
        from: BoardLocation,
        to: BoardLocation,
    },

    /// A serialized game failed structural validation.
    ///
    /// Payload: a description of the offending field, for example a board row
    /// of the wrong width or a piece with an empty or duplicated candidate
    /// list.
    #[error("invalid save state: {0}")]
    InvalidSaveState(String),
}
