use serde::{Deserialize, Serialize};

/// Tours the upstream scoreboard endpoint knows about. The serialized form
/// doubles as the URL path segment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Tour {
    Pga,
    Lpga,
    Eur,
    ChampionsTour,
}

impl Tour {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tour::Pga => "pga",
            Tour::Lpga => "lpga",
            Tour::Eur => "eur",
            Tour::ChampionsTour => "champions-tour",
        }
    }

    /// Name the upstream statistics splits carry for this tour.
    #[must_use]
    pub fn stats_name(self) -> &'static str {
        match self {
            Tour::Pga => "PGA TOUR",
            Tour::Lpga => "LPGA",
            Tour::Eur => "DP WORLD TOUR",
            Tour::ChampionsTour => "PGA TOUR CHAMPIONS",
        }
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
