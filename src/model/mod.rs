mod leaderboard;
mod player;
mod profile;
mod scorecard;
mod stats;
mod tour;
mod tournament;

pub use leaderboard::*;
pub use player::*;
pub use profile::*;
pub use scorecard::*;
pub use stats::*;
pub use tour::*;
pub use tournament::*;
