//! Knight movement: (1,2) jumps, no path check.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::{Game, Piece};
use crate::move_rules::legal_move_shared::own_piece_on;

/// Would this move be legal if the piece were exactly a knight?
pub fn can_move_knight(game: &Game, piece: &Piece, from: BoardLocation, to: BoardLocation) -> bool {
    let d_file = (from.0 - to.0).abs();
    let d_rank = (from.1 - to.1).abs();
    ((d_file == 1 && d_rank == 2) || (d_file == 2 && d_rank == 1))
        && !own_piece_on(game, piece.color(), to)
}
