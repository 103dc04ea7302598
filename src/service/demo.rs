use std::ops::Range;

use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::{
    ids::SummonerId,
    mastery::Mastery,
    ranked::{Division, RankedQueueStats, RankedStats, Tier},
    summoner::PlayerProfile,
};
use crate::service::dictionary;

/// Every demo roster is built from the same ten champions.
const DEMO_ROSTER: [u32; 10] = [103, 157, 64, 266, 84, 12, 32, 34, 1, 22];

const DEMO_TIERS: [Tier; 6] = [
    Tier::Iron,
    Tier::Bronze,
    Tier::Silver,
    Tier::Gold,
    Tier::Platinum,
    Tier::Diamond,
];
const DEMO_DIVISIONS: [Division; 4] = [Division::IV, Division::III, Division::II, Division::I];

/// All placeholder randomness lives here, behind a seedable generator so
/// tests stay deterministic.
pub struct DemoGenerator {
    rng: StdRng,
}

impl DemoGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn profile(&mut self, name: &str) -> PlayerProfile {
        PlayerProfile {
            id: SummonerId::from("demo-id-123"),
            puuid: None,
            account_id: None,
            name: name.to_string(),
            level: Some(self.rng.gen_range(50..250)),
            profile_icon_id: Some(self.rng.gen_range(1..31)),
            is_live: false,
            is_demo: true,
            last_updated: Utc::now(),
        }
    }

    pub fn ranked_stats(&mut self) -> RankedStats {
        RankedStats {
            solo_queue: Some(self.queue_entry("RANKED_SOLO_5x5", 50..250, 30..180)),
            flex_queue: Some(self.queue_entry("RANKED_FLEX_SR", 20..120, 15..95)),
        }
    }

    fn queue_entry(&mut self, queue_type: &str, wins: Range<u32>, losses: Range<u32>) -> RankedQueueStats {
        RankedQueueStats {
            queue_type: queue_type.to_string(),
            tier: DEMO_TIERS[self.rng.gen_range(0..DEMO_TIERS.len())],
            division: DEMO_DIVISIONS[self.rng.gen_range(0..DEMO_DIVISIONS.len())],
            league_points: self.rng.gen_range(0..100),
            wins: self.rng.gen_range(wins),
            losses: self.rng.gen_range(losses),
        }
    }

    /// Always the same ten champions, with randomized progress on each.
    pub fn masteries(&mut self) -> Vec<Mastery> {
        DEMO_ROSTER
            .iter()
            .map(|&id| Mastery {
                champ_id: id.into(),
                champ_name: dictionary::champion_name(id.into()),
                level: self.rng.gen_range(1..8),
                points: self.rng.gen_range(10_000..60_000),
                last_played: Utc::now() - Duration::days(self.rng.gen_range(0..30)),
            })
            .collect()
    }
}

impl Default for DemoGenerator {
    fn default() -> Self {
        DemoGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut a = DemoGenerator::from_seed(42);
        let mut b = DemoGenerator::from_seed(42);

        assert_eq!(a.profile("Faker").level, b.profile("Faker").level);

        let (ra, rb) = (a.ranked_stats(), b.ranked_stats());
        let (sa, sb) = (ra.solo_queue.unwrap(), rb.solo_queue.unwrap());
        assert_eq!(sa.tier, sb.tier);
        assert_eq!(sa.wins, sb.wins);
        assert_eq!(sa.losses, sb.losses);
    }

    #[test]
    fn profile_level_stays_in_range() {
        let mut generator = DemoGenerator::from_seed(7);
        for _ in 0..50 {
            let level = generator.profile("x").level.unwrap();
            assert!((50..250).contains(&level));
        }
    }

    #[test]
    fn roster_is_fixed_and_has_ten_entries() {
        let mut generator = DemoGenerator::from_seed(3);
        let masteries = generator.masteries();
        assert_eq!(masteries.len(), 10);
        assert_eq!(masteries[0].champ_name, "Ahri");
        assert_eq!(masteries[9].champ_name, "Ashe");
        for mastery in &masteries {
            assert!((1..=7).contains(&mastery.level));
            assert!((10_000..60_000).contains(&mastery.points));
        }
    }
}
