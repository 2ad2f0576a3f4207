//! Rook movement: straight slides along a file or rank.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::{Game, Piece};
use crate::move_rules::legal_move_shared::{own_piece_on, range_empty};

/// Would this move be legal if the piece were exactly a rook?
pub fn can_move_rook(game: &Game, piece: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let (x, y) = from;
    let (tx, ty) = to;
    // Alignment must be established before walking the span.
    (x == tx || y == ty)
        && !own_piece_on(game, piece.color(), to)
        && range_empty(game, from, to)
}
