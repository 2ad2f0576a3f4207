//! Identity resolution by piece-count conservation.
//!
//! The one deduction rule of the variant, applied exhaustively: pick any
//! non-empty proper subset S of the six kinds and a color. Sum the canonical
//! per-color counts of the kinds in S; if exactly that many of the color's
//! pieces have candidate sets contained in S, then every copy of every kind
//! in S is accounted for, and no other piece of that color can be any kind in
//! S. The 62 usable subsets are enumerated directly as candidate-set bit
//! patterns `1..FULL_BITS` (the empty and full sets prove nothing).
//!
//! Removals can unlock further removals, so the sweep runs to a fixpoint.

use crate::game_state::chess_rules::canonical_count_of_set;
use crate::game_state::chess_types::{CandidateSet, Color};
use crate::game_state::game_state::Piece;

/// Each productive sweep removes at least one candidate, and a game's pieces
/// carry at most `32 * 5` removable candidates, so this bound is never the
/// thing that stops the loop; it just makes termination unconditional.
const MAX_SWEEPS: usize = 32 * 5 + 1;

/// Narrows every piece's candidate set as far as the conservation argument
/// permits, running sweeps until one completes without a removal.
///
/// `pieces` must be the complete piece universe of one game, on-board and
/// captured alike, deduplicated. Total and infallible; idempotent once the
/// fixpoint is reached.
pub fn resolve_identities(pieces: &mut [Piece]) {
    for _ in 0..MAX_SWEEPS {
        if !sweep(pieces) {
            break;
        }
    }
}

/// One pass over every subset/color pair. Returns true when it removed
/// anything.
fn sweep(pieces: &mut [Piece]) -> bool {
    let mut changed = false;

    for bits in 1..CandidateSet::FULL_BITS {
        let subset = CandidateSet::from_bits(bits);
        let total = canonical_count_of_set(subset);

        for color in [Color::White, Color::Black] {
            let accounted = pieces
                .iter()
                .filter(|p| p.color() == color && p.candidates().is_subset_of(subset))
                .count();
            if accounted != total {
                continue;
            }

            for piece in pieces.iter_mut() {
                if piece.color() != color || piece.candidates().is_subset_of(subset) {
                    continue;
                }
                if piece.candidates().intersects(subset) {
                    // A non-accounted piece keeps at least one kind outside
                    // the subset, so the set can never be emptied here.
                    piece.candidates.remove_all(subset);
                    changed = true;
                }
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::canonical_count;
    use crate::game_state::chess_types::{PieceKind, ALL_PIECE_KINDS};
    use crate::game_state::game_state::Game;

    fn set_of(kinds: &[PieceKind]) -> CandidateSet {
        let mut bits = 0u8;
        for kind in kinds {
            bits |= CandidateSet::only(*kind).bits();
        }
        CandidateSet::from_bits(bits)
    }

    /// A full one-color piece pool with every identity already collapsed, then
    /// selectively re-opened by the individual tests.
    fn collapsed_side() -> Vec<Piece> {
        let mut pieces = Vec::new();
        for kind in ALL_PIECE_KINDS {
            for _ in 0..canonical_count(kind) {
                pieces.push(Piece::with_candidates(
                    CandidateSet::only(kind),
                    Color::White,
                ));
            }
        }
        pieces
    }

    #[test]
    fn two_known_knights_eliminate_knight_everywhere_else() {
        let mut pieces = vec![
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::new(Color::White),
            Piece::new(Color::White),
        ];
        resolve_identities(&mut pieces);

        assert!(!pieces[2].candidates().contains(PieceKind::Knight));
        assert!(!pieces[3].candidates().contains(PieceKind::Knight));
        assert_eq!(pieces[2].candidates().len(), 5);
        // The knights themselves are untouched.
        assert_eq!(pieces[0].candidates(), CandidateSet::only(PieceKind::Knight));
    }

    #[test]
    fn deduction_is_scoped_to_one_color() {
        let mut pieces = vec![
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::new(Color::White),
            Piece::new(Color::Black),
        ];
        resolve_identities(&mut pieces);

        assert!(!pieces[2].candidates().contains(PieceKind::Knight));
        assert_eq!(pieces[3].candidates(), CandidateSet::full());
    }

    #[test]
    fn subset_accounting_works_above_singletons() {
        // Three pieces restricted to {QUEEN, KING, KNIGHT} account for all
        // 1 + 1 + 2 = 4 copies only when there are four of them; with four,
        // everyone else loses all three kinds.
        let trio = set_of(&[PieceKind::Queen, PieceKind::King, PieceKind::Knight]);
        let mut pieces = vec![
            Piece::with_candidates(trio, Color::White),
            Piece::with_candidates(trio, Color::White),
            Piece::with_candidates(trio, Color::White),
            Piece::new(Color::White),
        ];
        resolve_identities(&mut pieces);
        // Only three accounted for, so nothing may be deduced.
        assert_eq!(pieces[3].candidates(), CandidateSet::full());

        pieces.insert(0, Piece::with_candidates(trio, Color::White));
        resolve_identities(&mut pieces);
        let remaining = pieces.last().unwrap().candidates();
        assert!(!remaining.contains(PieceKind::Queen));
        assert!(!remaining.contains(PieceKind::King));
        assert!(!remaining.contains(PieceKind::Knight));
        assert_eq!(remaining, set_of(&[PieceKind::Pawn, PieceKind::Rook, PieceKind::Bishop]));
    }

    #[test]
    fn chained_deductions_reach_the_fixpoint_in_one_call() {
        // Counting the eight pawn-only pieces eliminates PAWN from the two
        // {PAWN, ROOK} pieces, pinning them to ROOK; that in turn eliminates
        // ROOK from the {ROOK, QUEEN} piece. One resolver call must carry the
        // chain all the way to the fixpoint.
        let mut pieces = vec![];
        for _ in 0..8 {
            pieces.push(Piece::with_candidates(
                CandidateSet::only(PieceKind::Pawn),
                Color::Black,
            ));
        }
        pieces.push(Piece::with_candidates(
            set_of(&[PieceKind::Pawn, PieceKind::Rook]),
            Color::Black,
        ));
        pieces.push(Piece::with_candidates(
            set_of(&[PieceKind::Pawn, PieceKind::Rook]),
            Color::Black,
        ));
        pieces.push(Piece::with_candidates(
            set_of(&[PieceKind::Rook, PieceKind::Queen]),
            Color::Black,
        ));

        resolve_identities(&mut pieces);

        assert_eq!(pieces[8].candidates(), CandidateSet::only(PieceKind::Rook));
        assert_eq!(pieces[9].candidates(), CandidateSet::only(PieceKind::Rook));
        assert_eq!(pieces[10].candidates(), CandidateSet::only(PieceKind::Queen));
    }

    #[test]
    fn idempotent_at_the_fixpoint() {
        let mut pieces = vec![
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::with_candidates(CandidateSet::only(PieceKind::Knight), Color::White),
            Piece::new(Color::White),
            Piece::new(Color::Black),
        ];
        resolve_identities(&mut pieces);
        let after_first = pieces.clone();
        resolve_identities(&mut pieces);
        assert_eq!(pieces, after_first);
    }

    #[test]
    fn narrowing_is_monotonic_and_never_empties_a_set() {
        let mut pieces = collapsed_side();
        for _ in 0..4 {
            pieces.push(Piece::new(Color::Black));
        }
        let before: Vec<CandidateSet> = pieces.iter().map(|p| p.candidates()).collect();
        resolve_identities(&mut pieces);
        for (piece, old) in pieces.iter().zip(before) {
            assert!(piece.candidates().is_subset_of(old));
            assert!(!piece.candidates().is_empty());
        }
    }

    #[test]
    fn starting_game_admits_no_deduction() {
        let mut game = Game::starting();
        game.resolve();
        for id in game.piece_ids() {
            assert_eq!(game.piece(id).candidates(), CandidateSet::full());
        }
    }

    #[test]
    fn conservation_bounds_collapsed_counts_after_play() {
        // Drive a short scripted game through `play` and check the invariant:
        // the number of pieces collapsed to any one kind never exceeds that
        // kind's canonical count.
        let mut game = Game::starting();
        game.play(PieceKind::Pawn, (3, 1), (3, 3)).unwrap();
        game.play(PieceKind::Pawn, (4, 6), (4, 4)).unwrap();
        game.play(PieceKind::Pawn, (3, 3), (4, 4)).unwrap();
        game.play(PieceKind::Knight, (6, 7), (5, 5)).unwrap();

        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                let collapsed = game
                    .piece_ids()
                    .filter(|&id| {
                        let piece = game.piece(id);
                        piece.color() == color
                            && piece.candidates() == CandidateSet::only(kind)
                    })
                    .count();
                assert!(collapsed <= canonical_count(kind) as usize);
            }
        }
    }
}
