//! Canonical chess-rule constants.
//!
//! This module stores the static rule tables the engine deduces against: the
//! per-color piece-count table (the conservation law the identity resolver
//! relies on) and the per-kind display glyphs. These are process-wide
//! immutable configuration and must never change at runtime.

use crate::game_state::chess_types::{CandidateSet, PieceKind};

/// Copies of each kind one side owns, indexed by `PieceKind::index()`.
pub const PIECE_COUNTS: [u8; 6] = [8, 2, 2, 2, 1, 1];

/// Pieces one side starts with (the sum of `PIECE_COUNTS`).
pub const PIECES_PER_SIDE: usize = 16;

/// Canonical number of copies of `kind` per color.
#[inline]
pub const fn canonical_count(kind: PieceKind) -> u8 {
    PIECE_COUNTS[kind.index()]
}

/// Summed canonical counts of every kind in `set`.
pub fn canonical_count_of_set(set: CandidateSet) -> usize {
    set.kinds().map(|kind| canonical_count(kind) as usize).sum()
}

/// Display glyph for a kind, independent of color and of how many candidates
/// the piece still carries. Consumed by display layers and the debug
/// renderer; how a multi-candidate piece is shown is the display layer's
/// decision.
#[inline]
pub const fn glyph(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "\u{265f}\u{fe0e}",
        PieceKind::Rook => "\u{265c}",
        PieceKind::Knight => "\u{265e}",
        PieceKind::Bishop => "\u{265d}",
        PieceKind::Queen => "\u{265b}",
        PieceKind::King => "\u{265a}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::ALL_PIECE_KINDS;

    #[test]
    fn counts_sum_to_a_full_side() {
        let total: usize = ALL_PIECE_KINDS
            .iter()
            .map(|k| canonical_count(*k) as usize)
            .sum();
        assert_eq!(total, PIECES_PER_SIDE);
        assert_eq!(canonical_count_of_set(CandidateSet::full()), PIECES_PER_SIDE);
    }

    #[test]
    fn count_of_subset() {
        let mut set = CandidateSet::only(PieceKind::Rook);
        set.remove_all(CandidateSet::only(PieceKind::Pawn));
        assert_eq!(canonical_count_of_set(set), 2);

        assert_eq!(canonical_count(PieceKind::Pawn), 8);
        assert_eq!(canonical_count(PieceKind::Queen), 1);
    }

    #[test]
    fn one_glyph_per_kind() {
        let glyphs: Vec<&str> = ALL_PIECE_KINDS.iter().map(|k| glyph(*k)).collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
