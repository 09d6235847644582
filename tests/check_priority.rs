use cozy_chess::Board;

use duelbot::config::config_for_level;
use duelbot::engine::Engine;

// White king on e1 checked by the rook on e8; several replies exist (king
// steps, Nd1-e3 block).
const CHECKED_FEN: &str = "4r2k/8/8/8/8/8/8/3NK2N w - - 0 1";

#[test]
fn check_replies_never_come_from_the_noise_path() {
    let board = Board::from_fen(CHECKED_FEN, false).expect("valid FEN");
    assert!(!board.checkers().is_empty());
    for level in [3u32, 23] {
        let reference = Engine::with_seed(config_for_level(level), 0)
            .searched_move(&board)
            .expect("search finds a reply");
        for seed in 0..64u64 {
            let mut engine = Engine::with_seed(config_for_level(level), seed);
            let mv = engine.best_move(&board).expect("a reply exists");
            assert_eq!(
                mv, reference,
                "level {} seed {} took a non-search reply",
                level, seed
            );
        }
    }
}

#[test]
fn forced_check_reply_is_found_at_every_level() {
    // Kxe2 is the only legal move.
    let board = Board::from_fen("4k3/8/8/8/8/8/4q3/4K3 w - - 0 1", false).expect("valid FEN");
    for level in [1u32, 10, 25] {
        for seed in 0..8u64 {
            let mut engine = Engine::with_seed(config_for_level(level), seed);
            let mv = engine.best_move(&board).expect("forced reply");
            assert_eq!(format!("{}", mv), "e1e2");
        }
    }
}
