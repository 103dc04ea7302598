use chrono::Utc;

use riftscout::model::ranked::{Division, RankedQueueStats, RankedStats, Tier};
use riftscout::model::summoner::PlayerProfile;
use riftscout::service::analyzer::evaluate;

fn profile(level: u16) -> PlayerProfile {
    PlayerProfile {
        id: "summoner-abc".into(),
        puuid: Some("puuid-xyz".to_string()),
        account_id: Some("account-abc".to_string()),
        name: "Faker".to_string(),
        level: Some(level),
        profile_icon_id: Some(29),
        is_live: true,
        is_demo: false,
        last_updated: Utc::now(),
    }
}

fn solo(wins: u32, losses: u32) -> RankedStats {
    RankedStats {
        solo_queue: Some(RankedQueueStats {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: Tier::Gold,
            division: Division::II,
            league_points: 50,
            wins,
            losses,
        }),
        flex_queue: None,
    }
}

#[test]
fn win_rate_matches_the_formula_for_all_recorded_pairs() {
    for (wins, losses) in [(1u32, 2u32), (7, 3), (120, 80), (33, 67), (199, 1)] {
        let stats = solo(wins, losses);
        let computed = stats.solo_queue.as_ref().unwrap().win_rate().unwrap();
        let expected = (wins as f64 * 100.0 / (wins + losses) as f64 * 10.0).round() / 10.0;
        assert_eq!(computed, expected, "wins={} losses={}", wins, losses);
    }
}

#[test]
fn level_250_reads_as_high_experience_platinum_plus() {
    let analysis = evaluate(&profile(250), &RankedStats::default(), &[]);
    assert_eq!(analysis.estimated_tier, "PLATINUM+");
    assert!(analysis.strengths.iter().any(|s| s.contains("High experience")));
}

#[test]
fn level_50_reads_as_low_experience_silver() {
    let analysis = evaluate(&profile(50), &RankedStats::default(), &[]);
    assert_eq!(analysis.estimated_tier, "SILVER");
    assert!(analysis.weaknesses.iter().any(|s| s.contains("Low experience")));
}

#[test]
fn sixty_percent_win_rate_is_a_strength() {
    let analysis = evaluate(&profile(150), &solo(60, 40), &[]);
    assert!(analysis.strengths.iter().any(|s| s.contains("win rate")));
    assert!(!analysis.weaknesses.iter().any(|s| s.contains("win rate")));
}

#[test]
fn forty_percent_win_rate_is_a_weakness() {
    let analysis = evaluate(&profile(150), &solo(40, 60), &[]);
    assert!(analysis.weaknesses.iter().any(|s| s.contains("win rate")));
    assert!(!analysis.strengths.iter().any(|s| s.contains("win rate")));
}

#[test]
fn fifty_percent_win_rate_is_silent() {
    let analysis = evaluate(&profile(150), &solo(50, 50), &[]);
    assert!(!analysis.strengths.iter().any(|s| s.contains("win rate")));
    assert!(!analysis.weaknesses.iter().any(|s| s.contains("win rate")));
}

#[test]
fn evaluation_is_deterministic() {
    let stats = solo(60, 40);
    let first = evaluate(&profile(150), &stats, &[]);
    let second = evaluate(&profile(150), &stats, &[]);
    assert_eq!(first.strengths, second.strengths);
    assert_eq!(first.weaknesses, second.weaknesses);
    assert_eq!(first.recommendations, second.recommendations);
}
