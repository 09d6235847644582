use cozy_chess::{Board, Move};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::legal_moves;
use crate::config::{config_for_level, AiConfig};
use crate::search::minimax::search_to_depth;
use crate::search::noise;
use crate::search::quick::quick_best_move;

/// Move-selection engine bound to a strength config for the length of a game.
///
/// Holds no board state: the caller passes the current position to each call
/// and applies the returned move itself. Search works on cloned boards, so
/// the caller's position is never mutated.
pub struct Engine {
    config: AiConfig,
    rng: SmallRng,
}

impl Engine {
    pub fn new(config: AiConfig) -> Self {
        Self { config, rng: SmallRng::from_entropy() }
    }

    /// Seeded construction; a fixed seed replays a game identically.
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self { config, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn for_level(level: u32) -> Self {
        Self::new(config_for_level(level))
    }

    pub fn config(&self) -> AiConfig {
        self.config
    }

    /// Choose a move for the side to move, or `None` when no legal move
    /// exists (checkmate or stalemate).
    ///
    /// Out of check, the noise gate may substitute a uniformly random legal
    /// move for the searched one. In check the gate is skipped entirely: the
    /// reply always comes from search.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        let in_check = !(board.checkers()).is_empty();
        if !in_check && noise::should_play_random(self.config.level, &mut self.rng) {
            log::debug!("level {}: noise gate passed, playing a random move", self.config.level);
            return noise::choose_uniform(&moves, &mut self.rng);
        }

        match self.searched_move(board) {
            Some(mv) => Some(mv),
            // Search came back empty or unplayable; keep the game moving.
            None => noise::choose_uniform(&moves, &mut self.rng),
        }
    }

    /// The deterministic search path: one-ply greedy for depth <= 2 configs,
    /// alpha-beta minimax for depth 3 and above. No RNG is consulted.
    pub fn searched_move(&self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }
        let candidate = if self.config.depth <= 2 {
            quick_best_move(board, &moves)
        } else {
            search_to_depth(board, self.config.depth, self.config.time_limit).best
        };
        // Defensive: a search result the board rejects falls through to the
        // caller's fallback instead of panicking in play().
        candidate.filter(|&mv| board.is_legal(mv))
    }
}
