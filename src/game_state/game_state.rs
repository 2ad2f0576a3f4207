//! Core board and game state representation.
//!
//! `Game` is the central model for the engine. It owns an arena of [`Piece`]s
//! plus an 8x8 grid of optional [`PieceId`] handles into that arena, so "the
//! same piece occupies exactly one cell" holds by construction rather than by
//! convention. Pieces never leave the arena: a captured piece's handle moves
//! from the grid to the `captured` list, which makes the arena itself the
//! deduplicated piece universe the identity resolver sweeps over.

use crate::board_location::{on_board, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CandidateSet, Color, PieceKind};
use crate::identity::resolve::resolve_identities;
use crate::move_rules::legal_move_apply::apply_move_as;
use crate::move_rules::legal_move_checks::can_move_as;

/// Stable handle to a piece in a [`Game`]'s arena.
pub type PieceId = usize;

/// One piece: a non-empty set of kinds it might still be, an immutable color,
/// and a monotonic moved flag.
///
/// The candidate set only ever shrinks, via the resolver or the forced
/// collapses of en passant and castling; once it is a singleton the identity
/// is permanently known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) candidates: CandidateSet,
    color: Color,
    pub(crate) has_moved: bool,
}

impl Piece {
    /// A fresh piece carrying the full six-kind candidate set.
    pub fn new(color: Color) -> Self {
        Piece {
            candidates: CandidateSet::full(),
            color,
            has_moved: false,
        }
    }

    /// A piece with a specific candidate set, for position setup and for the
    /// save-state loader. Panics on an empty set.
    pub fn with_candidates(candidates: CandidateSet, color: Color) -> Self {
        assert!(!candidates.is_empty(), "a piece must have at least one candidate kind");
        Piece {
            candidates,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub fn candidates(&self) -> CandidateSet {
        self.candidates
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// The known kind of a collapsed piece, `None` while identity is open.
    #[inline]
    pub fn known_kind(&self) -> Option<PieceKind> {
        self.candidates.sole()
    }
}

/// Full game state: piece arena, board grid, capture list, side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) pieces: Vec<Piece>,
    // [rank][file], `None` for an empty square.
    pub(crate) board: [[Option<PieceId>; 8]; 8],
    pub(crate) captured: Vec<PieceId>,
    pub(crate) turn: Color,
}

impl Game {
    /// A game with an empty board and no pieces, for position setup.
    pub fn empty() -> Self {
        Game {
            pieces: Vec::new(),
            board: [[None; 8]; 8],
            captured: Vec::new(),
            turn: Color::White,
        }
    }

    /// The standard starting position: 32 pieces on the usual ranks, every
    /// one carrying the full candidate set, White to move.
    pub fn starting() -> Self {
        let mut game = Game::empty();
        for rank in [0, 1] {
            for file in 0..8 {
                game.add_piece(Piece::new(Color::White), (file, rank));
            }
        }
        for rank in [6, 7] {
            for file in 0..8 {
                game.add_piece(Piece::new(Color::Black), (file, rank));
            }
        }
        game
    }

    /// Adds a piece to the arena and places it on an empty square.
    ///
    /// Panics when the location is off the board or occupied; this is a
    /// setup-time API, not a move.
    pub fn add_piece(&mut self, piece: Piece, location: BoardLocation) -> PieceId {
        assert!(on_board(location), "cannot place a piece off the board at {location:?}");
        let (x, y) = location;
        assert!(
            self.board[y as usize][x as usize].is_none(),
            "square ({x}, {y}) is already occupied"
        );
        let id = self.pieces.len();
        self.pieces.push(piece);
        self.board[y as usize][x as usize] = Some(id);
        id
    }

    /// Adds a piece to the arena directly into the capture list, for the
    /// save-state loader.
    pub fn add_captured(&mut self, piece: Piece) -> PieceId {
        let id = self.pieces.len();
        self.pieces.push(piece);
        self.captured.push(id);
        id
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    /// Handle of the piece on `location`, if any.
    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<PieceId> {
        debug_assert!(on_board(location));
        self.board[location.1 as usize][location.0 as usize]
    }

    #[inline]
    pub(crate) fn set_square(&mut self, location: BoardLocation, id: Option<PieceId>) {
        debug_assert!(on_board(location));
        self.board[location.1 as usize][location.0 as usize] = id;
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Captured pieces in capture order. Handles stay valid forever; a
    /// captured piece keeps whatever candidates it had, and the resolver may
    /// still narrow them using information from other pieces.
    #[inline]
    pub fn captured(&self) -> &[PieceId] {
        &self.captured
    }

    /// Every piece ever created for this game, on board or captured. This is
    /// the deduplicated universe the conservation argument runs over.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> {
        0..self.pieces.len()
    }

    /// Runs the identity resolver to a fixpoint over this game's pieces.
    pub fn resolve(&mut self) {
        resolve_identities(&mut self.pieces);
    }

    /// Plays one move under the designated hypothetical kind: validates the
    /// request, applies the move, records any capture, flips the turn, and
    /// runs the resolver.
    ///
    /// The raw predicate/executor pair in `move_rules` stays available for
    /// callers that gate and wire these steps themselves.
    pub fn play(
        &mut self,
        kind: PieceKind,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<Option<PieceId>, ChessErrors> {
        if !on_board(from) {
            return Err(ChessErrors::OutOfBounds(from));
        }
        if !on_board(to) {
            return Err(ChessErrors::OutOfBounds(to));
        }
        let id = self.piece_at(from).ok_or(ChessErrors::NoPieceAt(from))?;
        let piece = &self.pieces[id];
        if piece.color() != self.turn {
            return Err(ChessErrors::NotYourTurn(piece.color()));
        }
        if !piece.candidates().contains(kind) {
            return Err(ChessErrors::NotACandidate { from, kind });
        }
        if !can_move_as(self, kind, from, to) {
            return Err(ChessErrors::IllegalMove { kind, from, to });
        }

        let captured = apply_move_as(self, kind, from, to);
        if let Some(captured_id) = captured {
            self.captured.push(captured_id);
        }
        self.turn = self.turn.opposite();
        self.resolve();
        Ok(captured)
    }
}
