use cozy_chess::Board;

use duelbot::board::{legal_moves, Position};
use duelbot::config::config_for_level;
use duelbot::engine::Engine;

const MIDGAME_FEN: &str = "r1bq1rk1/ppp2ppp/2n2n2/3pp3/3PP3/2P2N2/PP1N1PPP/R1BQ1RK1 w - - 0 8";

#[test]
fn best_move_is_always_legal() {
    let boards = [
        Board::default(),
        Board::from_fen(MIDGAME_FEN, false).expect("valid FEN"),
    ];
    for board in &boards {
        let legal = legal_moves(board);
        for level in [1u32, 8, 13, 19, 25] {
            for seed in 0..16u64 {
                let mut engine = Engine::with_seed(config_for_level(level), seed);
                let mv = engine.best_move(board).expect("position has legal moves");
                assert!(
                    legal.contains(&mv),
                    "illegal move {} at level {} seed {}",
                    mv,
                    level,
                    seed
                );
            }
        }
    }
}

#[test]
fn search_leaves_the_position_untouched() {
    let board = Board::from_fen(MIDGAME_FEN, false).expect("valid FEN");
    let before = format!("{}", board);
    let mut engine = Engine::with_seed(config_for_level(23), 9);
    let _ = engine.best_move(&board);
    assert_eq!(format!("{}", board), before);
}

#[test]
fn checkmate_yields_no_move() {
    // Back-rank mate, White to move: rook on a1 checks along the first rank
    // and every escape square is covered or occupied.
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/r5K1 w - - 0 1", false).expect("valid FEN");
    assert!(legal_moves(&board).is_empty());
    for seed in 0..8u64 {
        let mut engine = Engine::with_seed(config_for_level(25), seed);
        assert_eq!(engine.best_move(&board), None);
    }
}

#[test]
fn stalemate_yields_no_move() {
    // Black king on h8 has no moves and is not in check.
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", false).expect("valid FEN");
    let mut engine = Engine::for_level(3);
    assert_eq!(engine.best_move(&board), None);
}

#[test]
fn position_applies_uci_moves() {
    let mut pos = Position::startpos();
    pos.make_move_uci("e2e4").expect("legal");
    pos.make_move_uci("e7e5").expect("legal");
    assert!(pos.make_move_uci("e4e5").is_err());
    assert_eq!(pos.side_to_move(), cozy_chess::Color::White);
    assert!(!pos.is_game_over());
}
