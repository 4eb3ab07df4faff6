use async_trait::async_trait;
use greenside::Error;
use greenside::espn::{
    EspnApiClient, OverviewDoc, ScoreboardDoc, SeasonStatsDoc, StatisticsDoc,
};
use greenside::model::Tour;
use greenside::normalize_stat_categories;
use greenside::score::{find_stat_category, load_stat_leaders, player_rank_in_leaders};
use serde_json::json;

fn statistics_doc() -> StatisticsDoc {
    serde_json::from_value(json!({
        "stats": {
            "categories": [
                {
                    "name": "scoringAverage",
                    "displayName": "Scoring Average",
                    "abbreviation": "AVG",
                    "leaders": [
                        {
                            "displayValue": "68.40",
                            "value": 68.40,
                            "athlete": { "id": "9478", "displayName": "Scottie Scheffler" }
                        },
                        {
                            "displayValue": "68.92",
                            "value": 68.92,
                            "athlete": { "id": "3448", "displayName": "Rory McIlroy" }
                        },
                        { "displayValue": "69.01", "value": 69.01 }
                    ]
                },
                {
                    "name": "yardsPerDrive",
                    "displayName": "Driving Distance",
                    "shortDisplayName": "YDS/DRV",
                    "leaders": [
                        {
                            "displayValue": "326.3",
                            "value": 326.3,
                            "athlete": { "id": "10372", "displayName": "Cameron Champ" }
                        }
                    ]
                },
                {
                    "name": "officialAmount",
                    "displayName": "Official Money",
                    "abbreviation": "MONEY",
                    "leaders": []
                }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn categories_normalize_with_positional_ranks() {
    let categories = normalize_stat_categories(&statistics_doc());
    assert_eq!(categories.len(), 3);

    let scoring = &categories[0];
    assert_eq!(scoring.name, "scoringAverage");
    assert_eq!(scoring.abbreviation, "AVG");
    // The athlete-less leader row is dropped without a rank gap.
    assert_eq!(scoring.leaders.len(), 2);
    assert_eq!(scoring.leaders[0].rank, 1);
    assert_eq!(scoring.leaders[0].player_name, "Scottie Scheffler");
    assert_eq!(scoring.leaders[1].rank, 2);
    assert_eq!(scoring.leaders[1].value, 68.92);

    // Abbreviation falls back to the short display name.
    assert_eq!(categories[1].abbreviation, "YDS/DRV");
}

#[test]
fn empty_document_yields_no_categories() {
    assert!(normalize_stat_categories(&StatisticsDoc::default()).is_empty());
}

#[test]
fn metric_resolution_direct_alias_and_fuzzy() {
    let categories = normalize_stat_categories(&statistics_doc());

    // Direct category name, case-insensitive.
    let direct = find_stat_category(&categories, "scoringAverage").unwrap();
    assert_eq!(direct.name, "scoringAverage");

    // Profile-abbreviation alias.
    let aliased = find_stat_category(&categories, "yds/drv").unwrap();
    assert_eq!(aliased.name, "yardsPerDrive");
    let money = find_stat_category(&categories, "earnings").unwrap();
    assert_eq!(money.name, "officialAmount");

    // Fuzzy display-name and abbreviation passes.
    let fuzzy = find_stat_category(&categories, "scoring").unwrap();
    assert_eq!(fuzzy.name, "scoringAverage");
    let by_abbrev = find_stat_category(&categories, "avg").unwrap();
    assert_eq!(by_abbrev.name, "scoringAverage");

    assert!(find_stat_category(&categories, "putting streak").is_none());
}

#[test]
fn player_rank_lookup() {
    let categories = normalize_stat_categories(&statistics_doc());
    let leaders = &categories[0].leaders;

    assert_eq!(player_rank_in_leaders(leaders, "3448"), Some(1));
    assert_eq!(player_rank_in_leaders(leaders, "404"), None);
}

struct StubEspn;

#[async_trait]
impl EspnApiClient for StubEspn {
    async fn scoreboard(&self, _tour: Tour, _dates: Option<&str>) -> Result<ScoreboardDoc, Error> {
        Err(Error::NoData)
    }

    async fn player_overview(&self, _tour: Tour, _player_id: &str) -> Result<OverviewDoc, Error> {
        Err(Error::NoData)
    }

    async fn statistics(&self, _tour: Tour) -> Result<StatisticsDoc, Error> {
        Ok(statistics_doc())
    }

    async fn season_stats(
        &self,
        _tour: Tour,
        _year: i32,
        _player_id: &str,
    ) -> Result<SeasonStatsDoc, Error> {
        Err(Error::NoData)
    }
}

#[tokio::test]
async fn leader_load_resolves_the_metric() {
    let category = load_stat_leaders(&StubEspn, Tour::Pga, "drv acc").await.unwrap();
    assert!(category.is_none());

    let category = load_stat_leaders(&StubEspn, Tour::Pga, "amount")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(category.name, "officialAmount");
    assert!(category.leaders.is_empty());
}
