//! Board coordinates and straight-line geometry.
//!
//! Locations are `(file, rank)` pairs with both axes in `0..=7`. The open-span
//! walk in [`coords_between`] is the geometric backbone of every sliding-piece
//! rule: a slide is legal only if this span contains no occupied square.

/// A `(file, rank)` coordinate pair. File `0` is the a-file, rank `0` is the
/// rank White's pieces start on.
pub type BoardLocation = (i8, i8);

/// Returns true when both axes of `location` are within `0..=7`.
#[inline]
pub const fn on_board(location: BoardLocation) -> bool {
    location.0 >= 0 && location.0 <= 7 && location.1 >= 0 && location.1 <= 7
}

/// Returns the squares strictly between two aligned locations, exclusive of
/// both endpoints, walking from `from` toward `to`.
///
/// The endpoints must share a file, share a rank, or lie on a common diagonal.
/// Calling this for two unaligned locations is a caller bug and panics rather
/// than returning a partial span.
pub fn coords_between(from: BoardLocation, to: BoardLocation) -> Vec<BoardLocation> {
    let (x1, y1) = from;
    let (x2, y2) = to;

    let d_file = x2 - x1;
    let d_rank = y2 - y1;

    assert!(
        d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs(),
        "coords_between requires aligned endpoints, got ({x1}, {y1}) and ({x2}, {y2})"
    );

    let steps = d_file.abs().max(d_rank.abs());
    let step_file = d_file.signum();
    let step_rank = d_rank.signum();

    (1..steps)
        .map(|i| (x1 + i * step_file, y1 + i * step_rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{coords_between, on_board};

    #[test]
    fn span_along_a_rank_walks_toward_the_target() {
        assert_eq!(coords_between((1, 3), (5, 3)), vec![(2, 3), (3, 3), (4, 3)]);
        assert_eq!(coords_between((5, 3), (1, 3)), vec![(4, 3), (3, 3), (2, 3)]);
    }

    #[test]
    fn span_along_a_file() {
        assert_eq!(coords_between((6, 0), (6, 4)), vec![(6, 1), (6, 2), (6, 3)]);
    }

    #[test]
    fn span_along_both_diagonal_directions() {
        assert_eq!(coords_between((0, 0), (3, 3)), vec![(1, 1), (2, 2)]);
        assert_eq!(coords_between((2, 5), (5, 2)), vec![(3, 4), (4, 3)]);
    }

    #[test]
    fn adjacent_and_identical_endpoints_have_empty_spans() {
        assert!(coords_between((4, 4), (5, 5)).is_empty());
        assert!(coords_between((4, 4), (4, 5)).is_empty());
        assert!(coords_between((4, 4), (4, 4)).is_empty());
    }

    #[test]
    #[should_panic(expected = "aligned endpoints")]
    fn unaligned_endpoints_panic() {
        coords_between((0, 0), (1, 2));
    }

    #[test]
    fn on_board_bounds() {
        assert!(on_board((0, 0)));
        assert!(on_board((7, 7)));
        assert!(!on_board((-1, 3)));
        assert!(!on_board((3, 8)));
    }
}
