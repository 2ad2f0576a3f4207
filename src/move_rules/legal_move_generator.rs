//! Enumeration of every legal move request for the side to move.
//!
//! A "move" in this variant is a `(from, to, kind)` triple: the same board
//! relocation can be legal under several hypothetical kinds, and each passing
//! kind is its own entry because application semantics differ by kind (a
//! diagonal step onto an empty square means something different for a pawn on
//! its en-passant rank than for a king). Plain scan over the 8x8 grid; the
//! board is small enough that no cleverness is warranted.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::Game;
use crate::move_rules::legal_move_checks::can_move_as;

/// One legal move request: relocate the piece on `from` to `to` under the
/// hypothesis that it is `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub kind: PieceKind,
}

/// Every legal `(from, to, kind)` for the side to move, one entry per
/// candidate kind whose rule accepts the relocation.
pub fn generate_moves(game: &Game) -> Vec<CandidateMove> {
    let mut out = Vec::new();

    for y in 0..8i8 {
        for x in 0..8i8 {
            let from = (x, y);
            let Some(id) = game.piece_at(from) else {
                continue;
            };
            let piece = game.piece(id);
            if piece.color() != game.turn() {
                continue;
            }

            for ty in 0..8i8 {
                for tx in 0..8i8 {
                    let to = (tx, ty);
                    if to == from {
                        continue;
                    }
                    for kind in piece.candidates().kinds() {
                        if can_move_as(game, kind, from, to) {
                            out.push(CandidateMove { from, to, kind });
                        }
                    }
                }
            }
        }
    }

    out
}
