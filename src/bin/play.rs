use clap::Parser;
use cozy_chess::Color;
use std::time::Duration;

use duelbot::board::Position;
use duelbot::config::{config_for_level, level_name};
use duelbot::engine::Engine;
use duelbot::remote::{MoveProvider, RemoteMoveClient};

#[derive(Parser, Debug)]
#[command(name = "duelbot-play", about = "Play a match between two strength levels")]
struct Args {
    /// Strength level for White (1-25)
    #[arg(long, default_value_t = 5)]
    white_level: u32,

    /// Strength level for Black (1-25)
    #[arg(long, default_value_t = 20)]
    black_level: u32,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Max plies before declaring a draw
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Starting position as FEN (standard start position if absent)
    #[arg(long)]
    fen: Option<String>,

    /// Base URL of a remote move service; local search only if absent
    #[arg(long)]
    remote_url: Option<String>,

    /// Optional: write a summary JSON to this path
    #[arg(long)]
    json_out: Option<String>,
}

fn provider(level: u32, seed: u64, remote_url: Option<&str>) -> anyhow::Result<MoveProvider> {
    let engine = Engine::with_seed(config_for_level(level), seed);
    Ok(match remote_url {
        Some(url) => {
            let client = RemoteMoveClient::new(url, Duration::from_secs(2))?;
            MoveProvider::with_remote(engine, client)
        }
        None => MoveProvider::local(engine),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut pos = match args.fen.as_deref() {
        Some(fen) => Position::from_fen(fen).map_err(|e| anyhow::anyhow!(e))?,
        None => Position::startpos(),
    };

    let mut white = provider(args.white_level, args.seed, args.remote_url.as_deref())?;
    let mut black = provider(args.black_level, args.seed ^ 0x9E37_79B9, args.remote_url.as_deref())?;

    println!("white: level {} ({})", args.white_level, level_name(args.white_level));
    println!("black: level {} ({})", args.black_level, level_name(args.black_level));

    let mut plies = 0usize;
    let mut moves_uci: Vec<String> = Vec::new();
    let result = loop {
        if pos.is_game_over() {
            break if pos.in_check() {
                // Side to move is mated
                if pos.side_to_move() == Color::White {
                    "0-1"
                } else {
                    "1-0"
                }
            } else {
                "1/2-1/2"
            };
        }
        if plies >= args.max_plies {
            break "1/2-1/2";
        }

        let to_move = if pos.side_to_move() == Color::White {
            &mut white
        } else {
            &mut black
        };
        let mv = match to_move.choose_move(pos.board()) {
            Some(m) => m,
            None => break "1/2-1/2",
        };
        let uci = format!("{}", mv);
        println!("{:>3}. {}", plies + 1, uci);
        pos.play(mv);
        moves_uci.push(uci);
        plies += 1;
    };

    println!("result: {} after {} plies", result, plies);

    if let Some(path) = args.json_out.as_deref() {
        let payload = serde_json::json!({
            "white_level": args.white_level,
            "black_level": args.black_level,
            "seed": args.seed,
            "result": result,
            "plies": plies,
            "moves": moves_uci,
            "final_fen": pos.fen(),
        });
        std::fs::write(path, serde_json::to_string_pretty(&payload)?)?;
    }

    Ok(())
}
