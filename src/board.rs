use cozy_chess::{Board, Color, Move};

/// Caller-owned game state. The engine never holds a board; the match loop
/// owns a `Position` and applies the chosen moves itself.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        Board::from_fen(fen, false)
            .map(|b| Self { board: b })
            .map_err(|e| format!("FEN error: {e:?}"))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn in_check(&self) -> bool {
        !(self.board.checkers()).is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        legal_moves(&self.board).is_empty()
    }

    /// Apply a move produced by the engine. Panics on an illegal move; the
    /// engine only returns members of the legal-move list.
    pub fn play(&mut self, mv: Move) {
        self.board.play(mv);
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), String> {
        match find_move_uci(&self.board, mv_uci) {
            Some(m) => {
                self.board.play(m);
                Ok(())
            }
            None => Err(format!("Illegal move: {}", mv_uci)),
        }
    }
}

pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|ml| {
        for m in ml {
            moves.push(m);
        }
        false
    });
    moves
}

/// Find the legal move whose UCI rendering matches `uci`, if any.
pub fn find_move_uci(board: &Board, uci: &str) -> Option<Move> {
    let mut found = None;
    board.generate_moves(|ml| {
        for m in ml {
            if format!("{}", m) == uci {
                found = Some(m);
                break;
            }
        }
        found.is_some()
    });
    found
}
