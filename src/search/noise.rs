use cozy_chess::Move;
use rand::rngs::SmallRng;
use rand::Rng;

/// Roll the noise gate for a strength level. The roll spans (-1, 1) and is
/// compared against the level band's threshold: 0.5 up to level 10, 0.3
/// above. A roll above the threshold means "play a random move".
pub fn should_play_random(level: u32, rng: &mut SmallRng) -> bool {
    let threshold = if level <= 10 { 0.5 } else { 0.3 };
    rng.gen_range(-1.0..1.0) > threshold
}

/// Uniform pick over the legal move list.
pub fn choose_uniform(moves: &[Move], rng: &mut SmallRng) -> Option<Move> {
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(moves[idx])
}
