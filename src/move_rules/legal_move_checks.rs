//! Legality dispatch over hypothetical piece kinds.
//!
//! Legality here is always asked "as if the piece were exactly this kind";
//! it is never gated by the piece's candidate set. That reflects the hidden
//! identity premise: nobody is required to have resolved a piece's true type
//! before moving it. [`movable_kinds`] layers the candidate set back on for
//! callers that want the variant's own reading of legality (legal if at
//! least one remaining candidate's rule accepts the move).

use crate::board_location::{on_board, BoardLocation};
use crate::game_state::chess_types::{CandidateSet, PieceKind};
use crate::game_state::game_state::Game;
use crate::move_rules::legal_moves_bishop::can_move_bishop;
use crate::move_rules::legal_moves_king::can_move_king;
use crate::move_rules::legal_moves_knight::can_move_knight;
use crate::move_rules::legal_moves_pawn::can_move_pawn;
use crate::move_rules::legal_moves_queen::can_move_queen;
use crate::move_rules::legal_moves_rook::can_move_rook;

/// Would the piece on `from` reach `to` legally if it were exactly `kind`?
///
/// Returns false when `from` is empty. Both locations must be on the board.
pub fn can_move_as(game: &Game, kind: PieceKind, from: BoardLocation, to: BoardLocation) -> bool {
    debug_assert!(on_board(from) && on_board(to), "coordinates must be on the board");

    let Some(id) = game.piece_at(from) else {
        return false;
    };
    let piece = game.piece(id);

    match kind {
        PieceKind::Pawn => can_move_pawn(game, piece, from, to),
        PieceKind::Rook => can_move_rook(game, piece, from, to),
        PieceKind::Knight => can_move_knight(game, piece, from, to),
        PieceKind::Bishop => can_move_bishop(game, piece, from, to),
        PieceKind::Queen => can_move_queen(game, piece, from, to),
        PieceKind::King => can_move_king(game, piece, from, to),
    }
}

/// The subset of the piece's current candidates under which the move would be
/// legal. Empty when no candidate's rule accepts it (or `from` is empty); the
/// caller picks which passing kind governs execution.
pub fn movable_kinds(game: &Game, from: BoardLocation, to: BoardLocation) -> CandidateSet {
    let Some(id) = game.piece_at(from) else {
        return CandidateSet::from_bits(0);
    };

    let mut bits = 0u8;
    for kind in game.piece(id).candidates().kinds() {
        if can_move_as(game, kind, from, to) {
            bits |= CandidateSet::only(kind).bits();
        }
    }
    CandidateSet::from_bits(bits)
}
