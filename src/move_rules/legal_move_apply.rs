//! Move execution.
//!
//! The executor applies a move under a designated hypothetical kind. It never
//! re-checks legality: invoking it for a move the matching predicate rejects
//! is a precondition violation (asserted in debug builds), not a recoverable
//! error. Side effects are confined to the board grid, the involved pieces'
//! moved flags, and the forced candidate collapses of en passant and
//! castling. A returned capture is *not* appended to the game's capture list
//! here; [`crate::game_state::game_state::Game::play`] owns that wiring.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::{Game, PieceId};
use crate::move_rules::legal_move_checks::can_move_as;
use crate::move_rules::legal_moves_king::apply_move_king;
use crate::move_rules::legal_moves_pawn::apply_move_pawn;

/// Relocates a piece, marks it moved, vacates the source square, and returns
/// the handle of whatever previously occupied the target.
pub fn default_move(
    game: &mut Game,
    id: PieceId,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<PieceId> {
    debug_assert_eq!(game.piece_at(from), Some(id), "piece is not on the source square");

    let captured = game.piece_at(to);
    game.set_square(to, Some(id));
    game.set_square(from, None);
    game.pieces[id].has_moved = true;
    captured
}

/// Applies the move of the piece on `from` under the hypothesis that it is
/// `kind`, dispatching to the kind-specific application where one exists.
///
/// Precondition: `can_move_as(game, kind, from, to)` holds.
pub fn apply_move_as(
    game: &mut Game,
    kind: PieceKind,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<PieceId> {
    debug_assert!(
        can_move_as(game, kind, from, to),
        "executor invoked for a move the {kind:?} rule rejects"
    );
    let id = game
        .piece_at(from)
        .unwrap_or_else(|| panic!("no piece on the source square ({}, {})", from.0, from.1));

    match kind {
        PieceKind::Pawn => apply_move_pawn(game, id, from, to),
        PieceKind::King => apply_move_king(game, id, from, to),
        _ => default_move(game, id, from, to),
    }
}
