use std::fmt;

use log::{debug, warn};

use crate::model::{
    analysis::{MatchHistory, PlayerReport},
    region::Region,
    summoner::PlayerProfile,
};

use super::{
    analyzer,
    config::ApiConfig,
    demo::DemoGenerator,
    gameapi::client::{ApiClient, ClientInitError, RequestError},
    provider::{DemoStatsProvider, LiveStatsProvider, StatsProvider},
};

/// Ties the flows together for one query: live lookup with fallback, demo
/// synthesis for the facets the key cannot reach, heuristic evaluation.
/// Nothing is cached across queries.
pub struct DataManager {
    client: ApiClient,
    live: Box<dyn StatsProvider>,
    demo: DemoStatsProvider,
}

impl DataManager {
    pub fn new(config: &ApiConfig) -> Result<Self, DataManagerInitError> {
        let live = LiveStatsProvider::new(ApiClient::new(config)?);
        DataManager::with_providers(config, Box::new(live), DemoGenerator::new())
    }

    /// Injected providers, for tests and alternative wirings.
    pub fn with_providers(
        config: &ApiConfig,
        live: Box<dyn StatsProvider>,
        generator: DemoGenerator,
    ) -> Result<Self, DataManagerInitError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            live,
            demo: DemoStatsProvider::new(generator),
        })
    }

    /// Full analysis of one player. An unknown player comes back as
    /// `Ok(None)`, distinct from any transport failure.
    pub fn analyze_player(&self, name: &str, region: &Region) -> DataRetrievalResult<Option<PlayerReport>> {
        let profile = match self.lookup_player(name, region)? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        // Ranking and mastery are always synthesized; the live endpoints are
        // never queried for these two facets (see DESIGN.md). Only the basic
        // info above decides liveness.
        let ranked = self.demo.ranked_stats(&profile, region)?;
        let masteries = self.demo.masteries(&profile, region)?;

        let analysis = analyzer::evaluate(&profile, &ranked, &masteries);
        Ok(Some(PlayerReport {
            profile,
            ranked,
            masteries,
            analysis,
        }))
    }

    /// Lookup chain: primary endpoint (with its built-in 403 fallback), then
    /// one direct secondary retry on failure, then a demo profile as last
    /// resort. The empty-name precondition fails before any request.
    pub fn lookup_player(&self, name: &str, region: &Region) -> DataRetrievalResult<Option<PlayerProfile>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DataRetrievalError::EmptyPlayerName);
        }

        match self.live.player(name, region) {
            Ok(Some(lookup)) => {
                if let Some(entry) = &lookup.league_entry {
                    debug!("secondary lookup carried a {} {} entry", entry.tier, entry.division);
                }
                Ok(Some(lookup.profile))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                warn!("player lookup failed ({}), retrying via league endpoint", err);
                match self.live.player_via_fallback(name, region) {
                    Ok(Some(lookup)) => Ok(Some(lookup.profile)),
                    Ok(None) => Ok(None),
                    Err(fallback_err) => {
                        warn!("secondary lookup failed as well ({}), serving demo data", fallback_err);
                        let lookup = self.demo.player(name, region)?;
                        Ok(lookup.map(|l| l.profile))
                    }
                }
            }
        }
    }

    /// Match history is an independent flow. A missing player identifier
    /// short-circuits to an empty history without issuing any request.
    pub fn match_history(&self, profile: &PlayerProfile, region: &Region) -> DataRetrievalResult<MatchHistory> {
        let games = match &profile.puuid {
            Some(puuid) => self.client.fetch_match_history(puuid, region)?,
            None => {
                debug!("no puuid on record, skipping match history");
                Vec::new()
            }
        };

        Ok(MatchHistory {
            player_name: profile.name.clone(),
            games,
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "Client setup failed: {}", err),
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

#[derive(Debug)]
pub enum DataRetrievalError {
    EmptyPlayerName,
    ClientFailed(RequestError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            DataRetrievalError::ClientFailed(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}
