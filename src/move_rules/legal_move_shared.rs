//! Occupancy helpers shared by the per-kind movement rules.

use crate::board_location::{coords_between, BoardLocation};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Game;

/// True when `location` holds a piece of `color`.
#[inline]
pub fn own_piece_on(game: &Game, color: Color, location: BoardLocation) -> bool {
    matches!(game.piece_at(location), Some(id) if game.piece(id).color() == color)
}

/// True when `location` holds a piece of the opposite color.
#[inline]
pub fn enemy_piece_on(game: &Game, color: Color, location: BoardLocation) -> bool {
    matches!(game.piece_at(location), Some(id) if game.piece(id).color() == color.opposite())
}

/// True when every square strictly between two aligned locations is empty.
///
/// Callers must establish alignment first; `coords_between` panics otherwise.
#[inline]
pub fn range_empty(game: &Game, from: BoardLocation, to: BoardLocation) -> bool {
    coords_between(from, to)
        .into_iter()
        .all(|square| game.piece_at(square).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::{Game, Piece};

    #[test]
    fn occupancy_helpers_see_both_sides() {
        let mut game = Game::empty();
        game.add_piece(Piece::new(Color::White), (3, 3));
        game.add_piece(Piece::new(Color::Black), (5, 3));

        assert!(own_piece_on(&game, Color::White, (3, 3)));
        assert!(!own_piece_on(&game, Color::White, (5, 3)));
        assert!(enemy_piece_on(&game, Color::White, (5, 3)));
        assert!(!enemy_piece_on(&game, Color::White, (4, 3)));
    }

    #[test]
    fn range_empty_sees_blockers() {
        let mut game = Game::empty();
        game.add_piece(Piece::new(Color::White), (3, 3));
        assert!(!range_empty(&game, (0, 0), (7, 7)));
        assert!(range_empty(&game, (0, 3), (3, 3)));
        assert!(!range_empty(&game, (0, 3), (7, 3)));
    }
}
