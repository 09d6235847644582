use std::time::Duration;

use cozy_chess::{Board, Color, Move};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::find_move_uci;
use crate::engine::Engine;

#[derive(Debug, Error)]
pub enum RemoteMoveError {
    #[error("move service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("move service returned a move the position does not admit: {0:?}")]
    InvalidMove(String),
}

#[derive(Debug, Serialize)]
struct MoveRequest {
    fen: String,
    score: u32,
    is_white: bool,
}

#[derive(Debug, Deserialize)]
struct MoveResponse {
    #[serde(rename = "move")]
    mv: String,
}

/// Client for the backend move service: POST {base}/api/chess/move with the
/// position as FEN and the strength level as score, answered with a UCI move
/// string.
pub struct RemoteMoveClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl RemoteMoveClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteMoveError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/chess/move", base_url.trim_end_matches('/')),
        })
    }

    /// Ask the service for a move. The answer is validated against the
    /// position's legal moves; anything else is an error.
    pub fn request_move(&self, board: &Board, level: u32) -> Result<Move, RemoteMoveError> {
        let request = MoveRequest {
            fen: format!("{}", board),
            score: level,
            is_white: board.side_to_move() == Color::White,
        };
        let response: MoveResponse = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        find_move_uci(board, &response.mv).ok_or(RemoteMoveError::InvalidMove(response.mv))
    }
}

/// Move source with the full fallback chain: remote service, then local
/// search, then a random legal move (inside the engine). Remote failures are
/// logged, never propagated.
pub struct MoveProvider {
    engine: Engine,
    remote: Option<RemoteMoveClient>,
}

impl MoveProvider {
    pub fn local(engine: Engine) -> Self {
        Self { engine, remote: None }
    }

    pub fn with_remote(engine: Engine, remote: RemoteMoveClient) -> Self {
        Self { engine, remote: Some(remote) }
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        if let Some(remote) = &self.remote {
            match remote.request_move(board, self.engine.config().level) {
                Ok(mv) => return Some(mv),
                Err(err) => {
                    log::warn!("move service unavailable, using local search: {err}");
                }
            }
        }
        self.engine.best_move(board)
    }
}
