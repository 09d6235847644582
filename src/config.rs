use std::time::Duration;

/// Search parameters derived from a strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub level: u32,
    pub depth: u32,
    pub time_limit: Duration,
}

/// Display labels for levels 1..=25.
pub const LEVEL_NAMES: [&str; 25] = [
    "beginner",
    "novice",
    "learner",
    "developer",
    "climber",
    "skilled",
    "expert",
    "adept",
    "virtuoso",
    "master",
    "elite",
    "champion",
    "legend",
    "mythic",
    "grandmaster",
    "super master",
    "ultra master",
    "mega master",
    "giga master",
    "tera master",
    "peta master",
    "exa master",
    "zetta master",
    "yotta master",
    "ultimate",
];

/// Map a strength level to search parameters. Depth and time budget are
/// non-decreasing in the level; out-of-range levels land in the nearest band.
pub fn config_for_level(level: u32) -> AiConfig {
    let (depth, time_limit_ms) = match level {
        0..=5 => (1, 50),
        6..=10 => (2, 100),
        11..=15 => (2, 150),
        16..=20 => (3, 200),
        _ => (3, 300),
    };
    AiConfig {
        level,
        depth,
        time_limit: Duration::from_millis(time_limit_ms),
    }
}

/// Display label for a level. Out-of-range levels fall back to the first
/// table entry.
pub fn level_name(level: u32) -> &'static str {
    level
        .checked_sub(1)
        .and_then(|idx| LEVEL_NAMES.get(idx as usize))
        .copied()
        .unwrap_or(LEVEL_NAMES[0])
}
