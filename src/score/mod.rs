pub mod competitor;
pub mod leaderboard;
pub mod linescore;
pub mod parse;
pub mod profile;
pub mod schedule;
pub mod scorecard;
pub mod stats;

pub use leaderboard::*;
pub use linescore::*;
pub use parse::*;
pub use profile::*;
pub use schedule::*;
pub use scorecard::*;
pub use stats::*;
