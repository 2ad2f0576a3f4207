//! Pawn movement: pushes, captures, and en passant.
//!
//! The only kind whose rules depend on the mover's side (pawns cannot move
//! backwards) and the only one that can capture a square it does not land on.
//! En passant is also the one interaction that betrays identity outright: it
//! is only possible between two true pawns, so executing it collapses both
//! candidate sets to `{PAWN}`.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{CandidateSet, PieceKind};
use crate::game_state::game_state::{Game, Piece, PieceId};
use crate::move_rules::legal_move_apply::default_move;
use crate::move_rules::legal_move_shared::enemy_piece_on;

/// Would this move be legal if the piece were exactly a pawn?
pub fn can_move_pawn(game: &Game, piece: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let color = piece.color();
    let dir = color.pawn_direction();
    let (x, y) = from;
    let (tx, ty) = to;

    let push = x == tx
        && game.piece_at(to).is_none()
        && (y + dir == ty
            || (!piece.has_moved()
                && y + 2 * dir == ty
                && game.piece_at((x, y + dir)).is_none()));

    let capture = (x - tx).abs() == 1 && y + dir == ty && enemy_piece_on(game, color, to);

    let en_passant = (x - tx).abs() == 1
        && y == color.en_passant_rank()
        && ty == y + dir
        && game.piece_at(to).is_none()
        && matches!(game.piece_at((tx, y)), Some(id) if {
            let passed = game.piece(id);
            passed.color() == color.opposite() && passed.candidates().contains(PieceKind::Pawn)
        });

    push || capture || en_passant
}

/// Applies a pawn move, handling the en-passant capture.
///
/// A diagonal single advance that landed on an empty square took en passant:
/// the pawn-candidate one rank behind the target is removed and returned as
/// the capture, and both pieces collapse to `{PAWN}`.
pub fn apply_move_pawn(
    game: &mut Game,
    id: PieceId,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<PieceId> {
    let dir = game.piece(id).color().pawn_direction();
    let (x, _y) = from;
    let (tx, ty) = to;

    let captured = default_move(game, id, from, to);

    if captured.is_none() && (x - tx).abs() == 1 {
        let passed_square = (tx, ty - dir);
        if let Some(passed) = game.piece_at(passed_square) {
            if game.piece(passed).candidates().contains(PieceKind::Pawn) {
                game.pieces[id].candidates = CandidateSet::only(PieceKind::Pawn);
                game.pieces[passed].candidates = CandidateSet::only(PieceKind::Pawn);
                game.set_square(passed_square, None);
                return Some(passed);
            }
        }
    }

    captured
}
