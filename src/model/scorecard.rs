use serde::{Deserialize, Serialize};

/// One played hole. `to_par` is always `strokes - par`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole_number: i32,
    pub strokes: i32,
    pub to_par: i32,
    pub par: i32,
}

/// One regulation round. Totals are `None` until a hole has been recorded
/// and always equal the sum over `holes` once present.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundScorecard {
    pub round: i32,
    pub total_strokes: Option<i32>,
    pub to_par: Option<i32>,
    pub holes: Vec<HoleScore>,
    pub is_complete: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerScorecard {
    pub player_id: String,
    pub player_name: String,
    pub event_id: String,
    pub event_name: String,
    pub rounds: Vec<RoundScorecard>,
}
