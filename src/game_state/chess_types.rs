//! Core value types: colors, piece kinds, and candidate-identity sets.

use serde::{Deserialize, Serialize};

/// Side a piece belongs to. Immutable for the lifetime of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a forward pawn step for this side.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> i8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

/// Piece kind. In this variant a piece's kind is hidden: each piece carries a
/// [`CandidateSet`] of kinds it might still be, and the per-kind movement
/// rules are always evaluated against a hypothetical kind, never a known one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// Every kind, in the canonical order used for candidate-set iteration and
/// serialization.
pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// The set of kinds a piece might still be, packed as one bit per kind in the
/// style of a castling-rights bitmask.
///
/// Invariant: never empty. Sets only shrink (deduction removes kinds, nothing
/// adds them back); a set of size one is a collapsed, permanently known
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSet(u8);

impl CandidateSet {
    /// Bit pattern with all six kinds present.
    pub const FULL_BITS: u8 = 0b0011_1111;

    /// The full six-kind set every piece starts with.
    #[inline]
    pub const fn full() -> Self {
        CandidateSet(Self::FULL_BITS)
    }

    /// A collapsed single-kind set.
    #[inline]
    pub const fn only(kind: PieceKind) -> Self {
        CandidateSet(1 << kind.index())
    }

    /// Builds a set from raw bits, masking off the two unused high bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        CandidateSet(bits & Self::FULL_BITS)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, kind: PieceKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_singleton(self) -> bool {
        self.0.count_ones() == 1
    }

    /// True when every kind in `self` is also in `other`.
    #[inline]
    pub const fn is_subset_of(self, other: CandidateSet) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    pub const fn intersects(self, other: CandidateSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Removes every kind in `other` from `self`.
    #[inline]
    pub fn remove_all(&mut self, other: CandidateSet) {
        self.0 &= !other.0;
    }

    /// The collapsed kind, when the set is a singleton.
    #[inline]
    pub fn sole(self) -> Option<PieceKind> {
        if self.is_singleton() {
            self.kinds().next()
        } else {
            None
        }
    }

    /// Iterates the kinds present, in canonical order.
    pub fn kinds(self) -> impl Iterator<Item = PieceKind> {
        ALL_PIECE_KINDS.into_iter().filter(move |k| self.contains(*k))
    }
}
