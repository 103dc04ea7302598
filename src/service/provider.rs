use std::cell::RefCell;

use crate::model::{mastery::Mastery, ranked::RankedStats, region::Region, summoner::PlayerProfile};

use super::{
    demo::DemoGenerator,
    gameapi::client::{ApiClient, LookupResult, RequestError},
};

/// Seam between the analysis flow and wherever its numbers come from. The
/// live implementation talks to the web API, the demo one synthesizes data;
/// swapping one for the other is always an explicit, injected choice.
pub trait StatsProvider {
    fn player(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError>;

    /// Direct secondary lookup, used when the primary path failed outright.
    fn player_via_fallback(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError>;

    fn ranked_stats(&self, profile: &PlayerProfile, region: &Region) -> Result<RankedStats, RequestError>;

    fn masteries(&self, profile: &PlayerProfile, region: &Region) -> Result<Vec<Mastery>, RequestError>;
}

pub struct LiveStatsProvider {
    client: ApiClient,
}

impl LiveStatsProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl StatsProvider for LiveStatsProvider {
    fn player(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError> {
        self.client.fetch_summoner(name, region)
    }

    fn player_via_fallback(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError> {
        self.client.fetch_summoner_fallback(name, region)
    }

    fn ranked_stats(&self, profile: &PlayerProfile, region: &Region) -> Result<RankedStats, RequestError> {
        self.client.fetch_ranked(&profile.id, region)
    }

    fn masteries(&self, profile: &PlayerProfile, region: &Region) -> Result<Vec<Mastery>, RequestError> {
        self.client.fetch_masteries(&profile.id, region)
    }
}

pub struct DemoStatsProvider {
    generator: RefCell<DemoGenerator>,
}

impl DemoStatsProvider {
    pub fn new(generator: DemoGenerator) -> Self {
        Self {
            generator: RefCell::new(generator),
        }
    }
}

impl StatsProvider for DemoStatsProvider {
    fn player(&self, name: &str, _region: &Region) -> Result<Option<LookupResult>, RequestError> {
        Ok(Some(LookupResult {
            profile: self.generator.borrow_mut().profile(name),
            league_entry: None,
        }))
    }

    fn player_via_fallback(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError> {
        self.player(name, region)
    }

    fn ranked_stats(&self, _profile: &PlayerProfile, _region: &Region) -> Result<RankedStats, RequestError> {
        Ok(self.generator.borrow_mut().ranked_stats())
    }

    fn masteries(&self, _profile: &PlayerProfile, _region: &Region) -> Result<Vec<Mastery>, RequestError> {
        Ok(self.generator.borrow_mut().masteries())
    }
}
