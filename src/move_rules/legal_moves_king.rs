//! King movement: single steps and castling.
//!
//! Castling is addressed by targeting the rook-candidate's own square: the
//! king slides along the rank by more than two files onto the square of an
//! unmoved same-color piece that could still be a rook. Executing it performs
//! the compound relocation and collapses that piece to `{ROOK}` (only a true
//! rook can castle; the king's own identity is not forced, since the castling
//! partner is known to be the king only by the move's shape).

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{CandidateSet, PieceKind};
use crate::game_state::game_state::{Game, Piece, PieceId};
use crate::move_rules::legal_move_apply::default_move;
use crate::move_rules::legal_move_shared::{own_piece_on, range_empty};

/// Would this move be legal if the piece were exactly a king?
pub fn can_move_king(game: &Game, piece: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let color = piece.color();
    let (x, y) = from;
    let (tx, ty) = to;

    let step = (x - tx).abs() <= 1 && (y - ty).abs() <= 1 && !own_piece_on(game, color, to);

    let castle = y == ty
        && !piece.has_moved()
        && (x - tx).abs() > 2
        && matches!(game.piece_at(to), Some(id) if {
            let partner = game.piece(id);
            partner.color() == color
                && !partner.has_moved()
                && partner.candidates().contains(PieceKind::Rook)
        })
        && range_empty(game, from, to);

    step || castle
}

/// Applies a king move, handling castling.
pub fn apply_move_king(
    game: &mut Game,
    id: PieceId,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<PieceId> {
    let (x, y) = from;

    if let Some(partner) = game.piece_at(to) {
        let piece = game.piece(partner);
        if piece.color() == game.piece(id).color() && piece.candidates().contains(PieceKind::Rook) {
            let side = if to.0 > x { 1 } else { -1 };
            default_move(game, partner, to, (x + side, y));
            game.pieces[partner].candidates = CandidateSet::only(PieceKind::Rook);
            return default_move(game, id, from, (x + 2 * side, y));
        }
    }

    default_move(game, id, from, to)
}
