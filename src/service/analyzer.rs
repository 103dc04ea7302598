use crate::model::{
    analysis::Analysis,
    mastery::Mastery,
    ranked::{RankedStats, Tier},
    summoner::PlayerProfile,
};

/// Deterministic evaluation of one player. All randomness stays in the demo
/// generators; equal inputs always produce equal output. An unavailable
/// level counts as 0.
pub fn evaluate(profile: &PlayerProfile, ranked: &RankedStats, masteries: &[Mastery]) -> Analysis {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    let level = profile.level.unwrap_or(0);
    let estimated_tier = if level > 200 {
        strengths.push(format!("High experience (level {})", level));
        "PLATINUM+"
    } else if level > 100 {
        strengths.push(format!("Moderate experience (level {})", level));
        "GOLD"
    } else {
        weaknesses.push(format!("Low experience (level {})", level));
        "SILVER"
    };

    if let Some(solo) = &ranked.solo_queue {
        if let Some(win_rate) = solo.win_rate() {
            if win_rate > 55.0 {
                strengths.push(format!("High solo queue win rate ({:.1}%)", win_rate));
            } else if win_rate < 45.0 {
                weaknesses.push(format!("Low solo queue win rate ({:.1}%)", win_rate));
            }
        }

        match solo.tier {
            Tier::Diamond | Tier::Platinum => {
                strengths.push(format!("High solo queue rank ({} {})", solo.tier, solo.division));
            }
            Tier::Iron | Tier::Bronze => {
                weaknesses.push(format!("Low solo queue rank ({} {})", solo.tier, solo.division));
            }
            _ => {}
        }
    }

    if !masteries.is_empty() {
        let level_seven = masteries.iter().filter(|m| m.level == 7).count();
        let level_six = masteries.iter().filter(|m| m.level == 6).count();

        if level_seven > 0 {
            strengths.push(format!("Mastery level 7 on {} champion(s)", level_seven));
        }
        if level_six > 0 {
            strengths.push(format!("Mastery level 6 on {} champion(s)", level_six));
        }
        if masteries.len() < 5 {
            weaknesses.push(format!("Small champion pool ({} champions)", masteries.len()));
        }
    }

    let recommendations = if weaknesses.len() > strengths.len() {
        vec![
            "Focus on your main weaknesses first".to_string(),
            "Practice more champions to widen your pool".to_string(),
        ]
    } else {
        vec![
            "Keep up your current performance".to_string(),
            "Pick specific areas to improve on".to_string(),
        ]
    };

    Analysis {
        strengths,
        weaknesses,
        recommendations,
        estimated_tier,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::ranked::{Division, RankedQueueStats};

    fn profile(level: Option<u16>) -> PlayerProfile {
        PlayerProfile {
            id: "summoner-1".into(),
            puuid: Some("puuid-1".to_string()),
            account_id: Some("account-1".to_string()),
            name: "TestPlayer".to_string(),
            level,
            profile_icon_id: Some(4),
            is_live: true,
            is_demo: false,
            last_updated: Utc::now(),
        }
    }

    fn solo(tier: Tier, wins: u32, losses: u32) -> RankedStats {
        RankedStats {
            solo_queue: Some(RankedQueueStats {
                queue_type: "RANKED_SOLO_5x5".to_string(),
                tier,
                division: Division::II,
                league_points: 50,
                wins,
                losses,
            }),
            flex_queue: None,
        }
    }

    fn mastery(level: u8) -> Mastery {
        Mastery {
            champ_id: 103.into(),
            champ_name: "Ahri".to_string(),
            level,
            points: 20_000,
            last_played: Utc::now(),
        }
    }

    #[test]
    fn level_boundaries_pick_the_right_bucket() {
        let ranked = RankedStats::default();

        let high = evaluate(&profile(Some(201)), &ranked, &[]);
        assert_eq!(high.estimated_tier, "PLATINUM+");
        assert!(high.strengths.iter().any(|s| s.starts_with("High experience")));

        let moderate = evaluate(&profile(Some(200)), &ranked, &[]);
        assert_eq!(moderate.estimated_tier, "GOLD");
        assert!(moderate.strengths.iter().any(|s| s.starts_with("Moderate experience")));

        let low = evaluate(&profile(Some(100)), &ranked, &[]);
        assert_eq!(low.estimated_tier, "SILVER");
        assert!(low.weaknesses.iter().any(|s| s.starts_with("Low experience")));
    }

    #[test]
    fn unavailable_level_counts_as_zero() {
        let analysis = evaluate(&profile(None), &RankedStats::default(), &[]);
        assert_eq!(analysis.estimated_tier, "SILVER");
        assert!(analysis.weaknesses.contains(&"Low experience (level 0)".to_string()));
    }

    #[test]
    fn midband_win_rate_stays_silent() {
        // 45.0 and 55.0 are inclusive bounds of the silent band.
        for (wins, losses) in [(45, 55), (50, 50), (55, 45)] {
            let analysis = evaluate(&profile(Some(150)), &solo(Tier::Gold, wins, losses), &[]);
            assert!(!analysis.strengths.iter().any(|s| s.contains("win rate")));
            assert!(!analysis.weaknesses.iter().any(|s| s.contains("win rate")));
        }
    }

    #[test]
    fn tier_membership_drives_rank_statements() {
        let strong = evaluate(&profile(Some(150)), &solo(Tier::Platinum, 50, 50), &[]);
        assert!(strong.strengths.iter().any(|s| s.contains("PLATINUM II")));

        let weak = evaluate(&profile(Some(150)), &solo(Tier::Bronze, 50, 50), &[]);
        assert!(weak.weaknesses.iter().any(|s| s.contains("BRONZE II")));

        let silent = evaluate(&profile(Some(150)), &solo(Tier::Gold, 50, 50), &[]);
        assert!(!silent.strengths.iter().any(|s| s.contains("rank")));
        assert!(!silent.weaknesses.iter().any(|s| s.contains("rank")));
    }

    #[test]
    fn empty_mastery_list_makes_no_pool_statement() {
        let analysis = evaluate(&profile(Some(150)), &RankedStats::default(), &[]);
        assert!(!analysis.weaknesses.iter().any(|s| s.contains("champion pool")));
    }

    #[test]
    fn small_pool_and_high_levels_are_reported() {
        let masteries = vec![mastery(7), mastery(6), mastery(3)];
        let analysis = evaluate(&profile(Some(150)), &RankedStats::default(), &masteries);
        assert!(analysis.strengths.contains(&"Mastery level 7 on 1 champion(s)".to_string()));
        assert!(analysis.strengths.contains(&"Mastery level 6 on 1 champion(s)".to_string()));
        assert!(analysis.weaknesses.contains(&"Small champion pool (3 champions)".to_string()));
    }

    #[test]
    fn recommendations_flip_when_weaknesses_dominate() {
        let weak = evaluate(&profile(Some(50)), &solo(Tier::Iron, 40, 60), &[]);
        assert!(weak.weaknesses.len() > weak.strengths.len());
        assert_eq!(weak.recommendations[0], "Focus on your main weaknesses first");

        let strong = evaluate(&profile(Some(250)), &solo(Tier::Diamond, 60, 40), &[]);
        assert!(strong.strengths.len() > strong.weaknesses.len());
        assert_eq!(strong.recommendations[0], "Keep up your current performance");
    }
}
