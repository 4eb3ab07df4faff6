use crate::error::Error;
use crate::espn::{EspnApiClient, StatisticsDoc};
use crate::model::{StatCategory, StatLeader, Tour};

/// Normalizes the tour-wide statistics document into ranked categories.
/// Leaders without an athlete record are dropped; rank is positional.
#[must_use]
pub fn normalize_stat_categories(doc: &StatisticsDoc) -> Vec<StatCategory> {
    let Some(stats) = doc.stats.as_ref() else {
        return Vec::new();
    };
    stats
        .categories
        .iter()
        .map(|category| StatCategory {
            name: category.name.clone(),
            display_name: category
                .display_name
                .clone()
                .unwrap_or_else(|| category.name.clone()),
            abbreviation: category
                .abbreviation
                .clone()
                .or_else(|| category.short_display_name.clone())
                .unwrap_or_default(),
            leaders: category
                .leaders
                .iter()
                .filter_map(|leader| {
                    let athlete = leader.athlete.as_ref()?;
                    Some(StatLeader {
                        rank: 0,
                        player_id: athlete.id.clone()?,
                        player_name: athlete.display_name.clone().unwrap_or_default(),
                        value: leader.value.unwrap_or(0.0),
                        display_value: leader.display_value.clone().unwrap_or_default(),
                    })
                })
                .enumerate()
                .map(|(index, mut leader)| {
                    leader.rank = index as i32 + 1;
                    leader
                })
                .collect(),
        })
        .collect()
}

/// Resolves a metric name to a category: exact category name first, then the
/// profile-abbreviation aliases, then a fuzzy display-name/abbreviation pass.
#[must_use]
pub fn find_stat_category<'a>(
    categories: &'a [StatCategory],
    metric: &str,
) -> Option<&'a StatCategory> {
    let metric = metric.to_lowercase();
    if let Some(category) = categories
        .iter()
        .find(|category| category.name.to_lowercase() == metric)
    {
        return Some(category);
    }
    if let Some(name) = category_alias(&metric) {
        if let Some(category) = categories.iter().find(|category| category.name == name) {
            return Some(category);
        }
    }
    categories.iter().find(|category| {
        let display = category.display_name.to_lowercase();
        display.contains(&metric)
            || metric.contains(&display)
            || category.abbreviation.to_lowercase() == metric
    })
}

/// A player's standing inside a category's leader list, if ranked.
#[must_use]
pub fn player_rank_in_leaders(leaders: &[StatLeader], player_id: &str) -> Option<usize> {
    leaders.iter().position(|leader| leader.player_id == player_id)
}

/// Fetches and normalizes the tour's stat categories.
pub async fn load_stat_categories(
    api: &dyn EspnApiClient,
    tour: Tour,
) -> Result<Vec<StatCategory>, Error> {
    let doc = api.statistics(tour).await?;
    Ok(normalize_stat_categories(&doc))
}

/// Fetches the categories and resolves one metric's leader list.
pub async fn load_stat_leaders(
    api: &dyn EspnApiClient,
    tour: Tour,
    metric: &str,
) -> Result<Option<StatCategory>, Error> {
    let categories = load_stat_categories(api, tour).await?;
    Ok(find_stat_category(&categories, metric).cloned())
}

/// Aliases from the profile's ranking abbreviations to upstream category
/// names.
fn category_alias(metric: &str) -> Option<&'static str> {
    Some(match metric {
        "amount" | "earnings" | "officialamount" => "officialAmount",
        "cuppoints" => "cupPoints",
        "cutsmade" => "cutsMade",
        "yds/drv" | "yardsperdrive" => "yardsPerDrive",
        "strokesperhole" => "strokesPerHole",
        "drv acc" | "driveaccuracypct" => "driveAccuracyPct",
        "pp gir" | "greensinregputts" => "greensInRegPutts",
        "greenshit" | "greensinregpct" => "greensInRegPct",
        "bird/rnd" | "birdiesperround" => "birdiesPerRound",
        "scoringaverage" => "scoringAverage",
        "wins" => "wins",
        "toptenfinishes" => "topTenFinishes",
        "saves" | "sandsaves" => "sandSaves",
        _ => return None,
    })
}
