pub mod cache;
pub mod client;
pub mod types;

pub use cache::*;
pub use client::*;
pub use types::*;

use crate::error::Error;
use crate::model::Tour;
use async_trait::async_trait;

pub const SITE_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports/golf";
pub const WEB_BASE: &str = "https://site.web.api.espn.com/apis";
pub const CORE_BASE: &str = "https://sports.core.api.espn.com/v2/sports/golf/leagues";

#[must_use]
pub fn scoreboard_url(tour: Tour, dates: Option<&str>) -> String {
    match dates {
        Some(dates) => format!("{SITE_BASE}/{tour}/scoreboard?dates={dates}"),
        None => format!("{SITE_BASE}/{tour}/scoreboard"),
    }
}

#[must_use]
pub fn player_overview_url(tour: Tour, player_id: &str) -> String {
    format!("{WEB_BASE}/common/v3/sports/golf/{tour}/athletes/{player_id}/overview")
}

#[must_use]
pub fn statistics_url(tour: Tour) -> String {
    format!("{WEB_BASE}/site/v2/sports/golf/{tour}/statistics")
}

/// Per-season athlete statistics on the core API; type 2 is the regular
/// season.
#[must_use]
pub fn season_stats_url(tour: Tour, year: i32, player_id: &str) -> String {
    format!("{CORE_BASE}/{tour}/seasons/{year}/types/2/athletes/{player_id}/statistics")
}

/// Date key for event-scoped scoreboard lookups: the ISO date string
/// truncated to its date portion with separators stripped
/// ("2026-08-20T07:00Z" -> "20260820").
#[must_use]
pub fn event_date_key(date: &str) -> String {
    date.chars().take(10).filter(|c| *c != '-').collect()
}

/// Boundary to the upstream scoreboard API. The engine itself never fetches;
/// both presentation surfaces hand it documents obtained through this trait.
#[async_trait]
pub trait EspnApiClient: Send + Sync {
    async fn scoreboard(&self, tour: Tour, dates: Option<&str>) -> Result<ScoreboardDoc, Error>;

    async fn player_overview(&self, tour: Tour, player_id: &str) -> Result<OverviewDoc, Error>;

    async fn statistics(&self, tour: Tour) -> Result<StatisticsDoc, Error>;

    async fn season_stats(
        &self,
        tour: Tour,
        year: i32,
        player_id: &str,
    ) -> Result<SeasonStatsDoc, Error>;
}
