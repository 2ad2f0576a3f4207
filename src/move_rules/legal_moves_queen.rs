//! Queen movement: the union of rook and bishop geometry.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::{Game, Piece};
use crate::move_rules::legal_move_shared::{own_piece_on, range_empty};

/// Would this move be legal if the piece were exactly a queen?
pub fn can_move_queen(game: &Game, piece: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let (x, y) = from;
    let (tx, ty) = to;
    // Alignment must be established before walking the span.
    (x == tx || y == ty || (x - tx).abs() == (y - ty).abs())
        && !own_piece_on(game, piece.color(), to)
        && range_empty(game, from, to)
}
