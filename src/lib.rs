pub mod error;
pub mod espn;
pub mod model;
pub mod score;

pub use error::Error;
pub use score::{
    format_score, load_event_leaderboard, load_leaderboard, load_player_profile,
    load_stat_categories, load_stat_leaders, normalize_event_leaderboard, normalize_leaderboard,
    normalize_player_profile, normalize_player_scorecard, normalize_schedule,
    normalize_stat_categories, parse_score,
};
