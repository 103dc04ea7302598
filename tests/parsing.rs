use std::fs;
use std::path::PathBuf;

use riftscout::model::ranked::{Division, Tier};
use riftscout::service::gameapi::parsing::games::{parse_match, parse_match_ids};
use riftscout::service::gameapi::parsing::mastery::parse_masteries;
use riftscout::service::gameapi::parsing::ranked::parse_ranked_entries;
use riftscout::service::gameapi::parsing::summoner::{parse_league_profile, parse_summoner};

fn read_fixture(name: &str) -> json::JsonValue {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    json::parse(&raw).expect("fixture should be valid json")
}

#[test]
fn parses_summoner_fixture() {
    let profile = parse_summoner(&read_fixture("summoner.json")).expect("fixture should parse");
    assert_eq!(profile.name, "Faker");
    assert_eq!(profile.level, Some(342));
    assert_eq!(profile.puuid.as_deref(), Some("puuid-xyz"));
    assert_eq!(profile.account_id.as_deref(), Some("account-abc"));
    assert!(profile.is_live);
    assert!(!profile.is_demo);
}

#[test]
fn summoner_root_must_be_an_object() {
    assert!(parse_summoner(&json::parse("[]").unwrap()).is_err());
}

#[test]
fn league_profile_marks_missing_fields_unavailable() {
    let parsed = parse_league_profile(&read_fixture("league_entries.json"))
        .expect("fixture should parse")
        .expect("entry should be present");

    let (profile, entry) = parsed;
    assert_eq!(profile.name, "Faker");
    assert_eq!(profile.level, None);
    assert_eq!(profile.puuid, None);
    assert_eq!(profile.account_id, None);
    assert!(!profile.is_live);
    assert!(!profile.is_demo);

    assert_eq!(entry.tier, Tier::Gold);
    assert_eq!(entry.division, Division::II);
}

#[test]
fn league_profile_empty_array_means_not_found() {
    let parsed = parse_league_profile(&json::parse("[]").unwrap()).expect("empty array should parse");
    assert!(parsed.is_none());
}

#[test]
fn ranked_entries_split_by_queue() {
    let stats = parse_ranked_entries(&read_fixture("league_entries.json")).expect("fixture should parse");

    let solo = stats.solo_queue.expect("solo entry");
    assert_eq!(solo.tier, Tier::Gold);
    assert_eq!(solo.wins, 120);
    assert_eq!(solo.losses, 80);
    assert_eq!(solo.win_rate(), Some(60.0));

    let flex = stats.flex_queue.expect("flex entry");
    assert_eq!(flex.tier, Tier::Silver);
    assert_eq!(flex.win_rate(), Some(40.0));
}

#[test]
fn mastery_list_is_capped_at_ten() {
    let masteries = parse_masteries(&read_fixture("masteries.json")).expect("fixture should parse");
    assert_eq!(masteries.len(), 10);
    assert_eq!(masteries[0].champ_name, "Ahri");
    assert_eq!(masteries[0].level, 7);
    assert_eq!(masteries[0].points, 245_000);
}

#[test]
fn unknown_champion_ids_keep_a_placeholder_name() {
    let raw = r#"[{"championId": 9999, "championLevel": 1, "championPoints": 100, "lastPlayTime": 1689340000000}]"#;
    let masteries = parse_masteries(&json::parse(raw).unwrap()).expect("entry should parse");
    assert_eq!(masteries[0].champ_name, "Champion #9999");
}

#[test]
fn parses_match_ids_fixture() {
    let ids = parse_match_ids(&read_fixture("match_ids.json")).expect("fixture should parse");
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0].as_str(), "EUW1_1000000001");
}

#[test]
fn parses_match_fixture() {
    let game = parse_match(&read_fixture("match.json")).expect("fixture should parse");
    assert_eq!(game.id.as_str(), "EUW1_1000000001");
    assert_eq!(game.mode, "CLASSIC");
    assert_eq!(game.duration_display(), "31:05");
    assert_eq!(game.participants.len(), 2);

    let own = game.participant("Faker").expect("player should be listed");
    assert_eq!(own.champion, "Ahri");
    assert_eq!((own.kills, own.deaths, own.assists), (7, 2, 11));
    assert!(own.win);
    assert!(game.participant("Nobody").is_none());
}

#[test]
fn missing_fields_are_reported_by_name() {
    let raw = r#"{"id": "x", "accountId": "y", "puuid": "z", "name": "w", "profileIconId": 1}"#;
    let err = parse_summoner(&json::parse(raw).unwrap()).unwrap_err();
    assert!(format!("{}", err).contains("summonerLevel"));
}
