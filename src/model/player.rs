use serde::{Deserialize, Serialize};

/// Reference data for one golfer; never mutated by the engine.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub amateur: Option<bool>,
    pub image_url: Option<String>,
}
