//! Random legal-move playout diagnostic.
//!
//! Plays a number of uniformly random legal moves from the starting position
//! and reports the board, captures, and how far identity deduction has
//! progressed. Useful as a smoke test of the full move/resolve loop:
//!
//! ```text
//! cargo run --bin random_playout -- 60
//! ```

use rand::prelude::IndexedRandom;

use veil_chess::game_state::game_state::Game;
use veil_chess::move_rules::legal_move_generator::generate_moves;
use veil_chess::utils::render_game_state::render_game_state;

fn main() {
    let plies: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(40);

    println!(
        "veil_chess random playout, {} plies, started {}",
        plies,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut game = Game::starting();
    let mut rng = rand::rng();

    for ply in 0..plies {
        let moves = generate_moves(&game);
        let Some(mv) = moves.choose(&mut rng) else {
            println!("no legal moves after {ply} plies, stopping");
            break;
        };
        let captured = game
            .play(mv.kind, mv.from, mv.to)
            .expect("generated moves are playable");
        if captured.is_some() {
            println!(
                "ply {ply}: ({}, {}) takes ({}, {}) as {:?}",
                mv.from.0, mv.from.1, mv.to.0, mv.to.1, mv.kind
            );
        }
    }

    println!("{}", render_game_state(&game));

    let resolved = game
        .piece_ids()
        .filter(|&id| game.piece(id).known_kind().is_some())
        .count();
    let narrowed = game
        .piece_ids()
        .filter(|&id| game.piece(id).candidates().len() < 6)
        .count();
    println!(
        "captured: {}, identities known: {resolved}/32, narrowed at all: {narrowed}/32",
        game.captured().len()
    );
}
