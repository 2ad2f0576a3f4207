//! Serialized game shape and JSON codec.
//!
//! The boundary representation of a game: the board is an 8x8 nested
//! sequence in which an empty square is an explicit `null` (the format
//! cannot express "absent" inside a fixed-width row), and each piece is the
//! triple `[candidateTypes, color, hasMoved]`. Loading validates the shape
//! and rebuilds the arena; piece identity inside a save is positional, which
//! is lossless because a piece is always either on the board or captured,
//! never both.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CandidateSet, Color, PieceKind};
use crate::game_state::game_state::{Game, Piece};

/// Wire form of one piece: `[candidateTypes, color, hasMoved]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPiece(pub Vec<PieceKind>, pub Color, pub bool);

impl SavedPiece {
    fn from_piece(piece: &Piece) -> Self {
        SavedPiece(
            piece.candidates().kinds().collect(),
            piece.color(),
            piece.has_moved(),
        )
    }

    fn to_piece(&self) -> Result<Piece, ChessErrors> {
        if self.0.is_empty() {
            return Err(ChessErrors::InvalidSaveState(
                "piece with an empty candidate list".into(),
            ));
        }
        let mut bits = 0u8;
        for kind in &self.0 {
            let bit = CandidateSet::only(*kind).bits();
            if bits & bit != 0 {
                return Err(ChessErrors::InvalidSaveState(format!(
                    "duplicate candidate type {kind:?}"
                )));
            }
            bits |= bit;
        }
        let mut piece = Piece::with_candidates(CandidateSet::from_bits(bits), self.1);
        piece.has_moved = self.2;
        Ok(piece)
    }
}

/// Wire form of a whole game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Vec<Vec<Option<SavedPiece>>>,
    pub captured: Vec<SavedPiece>,
    pub turn: Color,
}

impl SavedGame {
    pub fn from_game(game: &Game) -> Self {
        let board = (0..8i8)
            .map(|y| {
                (0..8i8)
                    .map(|x| {
                        game.piece_at((x, y))
                            .map(|id| SavedPiece::from_piece(game.piece(id)))
                    })
                    .collect()
            })
            .collect();
        let captured = game
            .captured()
            .iter()
            .map(|&id| SavedPiece::from_piece(game.piece(id)))
            .collect();
        SavedGame {
            board,
            captured,
            turn: game.turn(),
        }
    }

    /// Validates the shape and rebuilds a [`Game`].
    pub fn to_game(&self) -> Result<Game, ChessErrors> {
        if self.board.len() != 8 {
            return Err(ChessErrors::InvalidSaveState(format!(
                "board has {} ranks, expected 8",
                self.board.len()
            )));
        }

        let mut game = Game::empty();
        game.turn = self.turn;

        for (y, row) in self.board.iter().enumerate() {
            if row.len() != 8 {
                return Err(ChessErrors::InvalidSaveState(format!(
                    "rank {y} has {} files, expected 8",
                    row.len()
                )));
            }
            for (x, slot) in row.iter().enumerate() {
                if let Some(saved) = slot {
                    game.add_piece(saved.to_piece()?, (x as i8, y as i8));
                }
            }
        }

        for saved in &self.captured {
            game.add_captured(saved.to_piece()?);
        }

        Ok(game)
    }
}

/// Encodes a game as a JSON string.
pub fn game_to_json(game: &Game) -> Result<String, ChessErrors> {
    serde_json::to_string(&SavedGame::from_game(game))
        .map_err(|e| ChessErrors::InvalidSaveState(e.to_string()))
}

/// Decodes a game from a JSON string, validating the shape.
pub fn game_from_json(json: &str) -> Result<Game, ChessErrors> {
    let saved: SavedGame =
        serde_json::from_str(json).map_err(|e| ChessErrors::InvalidSaveState(e.to_string()))?;
    saved.to_game()
}
