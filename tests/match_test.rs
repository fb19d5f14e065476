use reqwest::Client;

mod common;
use common::utils::{get_json, spawn_app};

#[tokio::test]
async fn match_report_resolves_teams_and_images() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(
        &client,
        &format!("{}/matches/harbour-town-v-rivals-united", &test_app.address),
    ).await;

    assert!(status.is_success());
    assert_eq!(body["success"], true);
    let report = &body["data"];
    assert_eq!(report["title"], "Harbour Town v Rivals United");
    assert_eq!(report["date"], "08 Nov 2025");
    assert_eq!(report["kickoff"], "15:00");
    assert_eq!(report["home_team"]["name"], "Harbour Town FC");
    assert_eq!(report["home_team"]["is_supported_team"], true);
    assert_eq!(
        report["home_team"]["logo_url"],
        "https://images.ctfassets.net/harbour/crests/harbour-town.png"
    );
    assert_eq!(report["away_team"]["short_name"], "Rivals");
    assert_eq!(report["hero_image_url"], "https://images.ctfassets.net/harbour/heroes/derby-day.jpg");
    assert_eq!(report["score"]["home"], 2);
    assert_eq!(report["score"]["away"], 1);
    assert_eq!(report["home_scorers"], serde_json::json!(["Okafor", "Lindqvist"]));
    assert_eq!(report["away_scorers"], serde_json::json!(["Brennan"]));
}

#[tokio::test]
async fn unknown_match_is_not_found() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(
        &client,
        &format!("{}/matches/no-such-match", &test_app.address),
    ).await;

    assert_eq!(status.as_u16(), 404);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn team_without_logo_has_no_logo_url() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (_, body) = get_json(
        &client,
        &format!("{}/matches/harbour-town-v-fenwick-albion", &test_app.address),
    ).await;

    let away = &body["data"]["away_team"];
    assert_eq!(away["name"], "Fenwick Albion");
    assert!(away["logo_url"].is_null());
    assert!(body["data"]["hero_image_url"].is_null());
}

#[tokio::test]
async fn fixtures_are_unplayed_and_soonest_first() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/fixtures", &test_app.address)).await;

    assert!(status.is_success());
    let fixtures = body["data"].as_array().expect("fixtures should be a list");
    let slugs: Vec<&str> = fixtures.iter().map(|m| m["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec![
        "harbour-town-v-castle-rovers",
        "quayside-wanderers-v-harbour-town",
    ]);
    assert!(fixtures.iter().all(|m| m["score"].is_null()));
}

#[tokio::test]
async fn results_are_most_recent_first_and_respect_limit() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/results?limit=2", &test_app.address)).await;

    assert!(status.is_success());
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec![
        "harbour-town-v-rivals-united",
        "millbrook-athletic-v-harbour-town",
    ]);
}

#[tokio::test]
async fn next_match_has_countdown() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/matches/next", &test_app.address)).await;

    assert!(status.is_success());
    let next = &body["data"];
    assert_eq!(next["report"]["slug"], "harbour-town-v-castle-rovers");
    assert_eq!(next["report"]["ticket_link"], "https://tickets.harbourtownfc.co.uk/castle-rovers");
    assert!(next["countdown"]["total_seconds"].as_i64().unwrap() > 0);
    assert_eq!(next["countdown"]["urgency"], "low");
}
