use super::{
    CacheMap, EspnApiClient, OverviewDoc, ScoreboardDoc, SeasonStatsDoc, StatisticsDoc,
    cache_lookup, cache_store, new_cache_map, player_overview_url, scoreboard_url,
    season_stats_url, statistics_url, ttl,
};
use crate::error::Error;
use crate::model::Tour;
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, warn};

/// reqwest-backed scoreboard client with a caller-owned response cache.
pub struct EspnClient {
    http: Client,
    cache: CacheMap,
    pub ttl_seconds: i64,
    pub force_refresh: bool,
}

impl EspnClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            cache: new_cache_map(),
            ttl_seconds: ttl::LIVE_SCORES,
            force_refresh: false,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    async fn get_body(&self, url: &str) -> Result<String, Error> {
        if let Some(body) =
            cache_lookup(&self.cache, url, self.ttl_seconds, self.force_refresh).await
        {
            debug!(url, "scoreboard served from cache");
            return Ok(body);
        }
        let resp = self.http.get(url).send().await?.error_for_status()?;
        let body = resp.text().await?;
        cache_store(&self.cache, url, body.clone()).await;
        Ok(body)
    }
}

impl Default for EspnClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EspnApiClient for EspnClient {
    async fn scoreboard(&self, tour: Tour, dates: Option<&str>) -> Result<ScoreboardDoc, Error> {
        let url = scoreboard_url(tour, dates);
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn player_overview(&self, tour: Tour, player_id: &str) -> Result<OverviewDoc, Error> {
        let url = player_overview_url(tour, player_id);
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn statistics(&self, tour: Tour) -> Result<StatisticsDoc, Error> {
        let url = statistics_url(tour);
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn season_stats(
        &self,
        tour: Tour,
        year: i32,
        player_id: &str,
    ) -> Result<SeasonStatsDoc, Error> {
        let url = season_stats_url(tour, year, player_id);
        let body = self.get_body(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Issues one scoreboard request per date key in parallel. A failed
/// sub-request contributes an empty document instead of failing the batch.
pub async fn scoreboards_for_dates(
    api: &dyn EspnApiClient,
    tour: Tour,
    dates: &[String],
) -> Vec<ScoreboardDoc> {
    let lookups = dates.iter().map(|date| api.scoreboard(tour, Some(date)));
    join_all(lookups)
        .await
        .into_iter()
        .map(|result| match result {
            Ok(doc) => doc,
            Err(err) => {
                warn!(%err, "scoreboard lookup failed, treating as empty");
                ScoreboardDoc::default()
            }
        })
        .collect()
}
