use super::Tour;
use serde::{Deserialize, Serialize};

/// Tournament progress as reported by upstream status text. Monotonic per
/// event; never inferred from scores.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Pre,
    In,
    Post,
}

impl TournamentStatus {
    pub(crate) fn from_state(state: &str) -> Self {
        match state {
            "in" => Self::In,
            "post" => Self::Post,
            _ => Self::Pre,
        }
    }
}

/// One tournament as of a single snapshot. A new snapshot builds a new value.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub date: String,
    pub end_date: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub purse: Option<String>,
    pub status: TournamentStatus,
    pub tour: Tour,
}
