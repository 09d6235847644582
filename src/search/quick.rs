use cozy_chess::{Board, Color, Move};

use crate::search::eval::evaluate;

/// One-ply greedy search for shallow configs: score each move by the static
/// evaluation of the resulting position, from the mover's point of view.
/// Ties keep the first-seen maximum.
pub fn quick_best_move(board: &Board, moves: &[Move]) -> Option<Move> {
    let mover = board.side_to_move();
    let mut best: Option<Move> = None;
    let mut best_score = i32::MIN;
    for &mv in moves {
        let mut child = board.clone();
        child.play(mv);
        let score = match mover {
            Color::White => evaluate(&child),
            Color::Black => -evaluate(&child),
        };
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }
    best
}
