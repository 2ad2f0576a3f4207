//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments. Collapsed pieces show their kind's glyph; a piece
//! whose identity is still open shows the count of kinds it might be (`2`
//! through `6`). White pieces are wrapped in `[ ]`, Black in `( )`, since the
//! glyph table itself is color-independent.

use crate::game_state::chess_rules::glyph;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Game;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 7 is printed first so White's pieces appear at the bottom.
pub fn render_game_state(game: &Game) -> String {
    let mut out = String::new();

    out.push_str("   a   b   c   d   e   f   g   h\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            match game.piece_at((file, rank)) {
                Some(id) => {
                    let piece = game.piece(id);
                    let (open, close) = match piece.color() {
                        Color::White => ('[', ']'),
                        Color::Black => ('(', ')'),
                    };
                    out.push(open);
                    match piece.known_kind() {
                        Some(kind) => out.push_str(glyph(kind)),
                        None => out.push(char::from(b'0' + piece.candidates().len() as u8)),
                    }
                    out.push(close);
                }
                None => out.push_str(" · "),
            }
            out.push(' ');
        }

        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("   a   b   c   d   e   f   g   h");
    out
}
