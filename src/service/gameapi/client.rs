use std::{collections::HashMap, fmt, sync::mpsc, thread};

use json::JsonValue;
use log::{debug, warn};
use reqwest::{blocking::Client, StatusCode};

use crate::model::{
    games::Game,
    ids::{MatchId, SummonerId},
    mastery::Mastery,
    ranked::{RankedQueueStats, RankedStats},
    region::Region,
    summoner::PlayerProfile,
};
use crate::service::config::ApiConfig;

use super::parsing::{
    games::{parse_match, parse_match_ids},
    mastery::parse_masteries,
    ranked::parse_ranked_entries,
    summoner::{parse_league_profile, parse_summoner},
    ParsingError,
};

/// Successful player lookup. When the primary endpoint was forbidden the
/// profile comes from the permissive league endpoint and carries its entry.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub profile: PlayerProfile,
    pub league_entry: Option<RankedQueueStats>,
}

pub struct ApiClient {
    client: Client,
    api_key: String,
    max_matches: usize,
    parallel_match_fetch: bool,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientInitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key().to_string(),
            max_matches: config.max_matches,
            parallel_match_fetch: config.parallel_match_fetch,
        })
    }

    /// Primary player lookup. 200 yields a live profile, 403 falls back to
    /// the permissive league endpoint, 404 is not-found (a value, never an
    /// error).
    pub fn fetch_summoner(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-name/{}?api_key={}",
            region.platform,
            urlencoding::encode(name),
            self.api_key
        );

        match self.get_json(&url) {
            Ok(json) => {
                let profile = parse_summoner(&json)?;
                Ok(Some(LookupResult {
                    profile,
                    league_entry: None,
                }))
            }
            Err(RequestError::NotFound) => Ok(None),
            Err(RequestError::Forbidden) => {
                debug!("summoner endpoint forbidden, using league lookup");
                self.fetch_summoner_fallback(name, region)
            }
            Err(err) => Err(err),
        }
    }

    /// Secondary lookup against league-v4, reachable by keys that cannot use
    /// summoner-v4. Yields a partial profile with the unavailable fields left
    /// empty; an empty entry list means the player does not exist here.
    pub fn fetch_summoner_fallback(&self, name: &str, region: &Region) -> Result<Option<LookupResult>, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/league/v4/entries/by-summoner-name/{}?api_key={}",
            region.platform,
            urlencoding::encode(name),
            self.api_key
        );

        match self.get_json(&url) {
            Ok(json) => {
                let parsed = parse_league_profile(&json)?;
                Ok(parsed.map(|(profile, entry)| LookupResult {
                    profile,
                    league_entry: Some(entry),
                }))
            }
            Err(RequestError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn fetch_ranked(&self, id: &SummonerId, region: &Region) -> Result<RankedStats, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/league/v4/entries/by-summoner/{}?api_key={}",
            region.platform, id, self.api_key
        );
        let json = self.get_json(&url)?;
        Ok(parse_ranked_entries(&json)?)
    }

    pub fn fetch_masteries(&self, id: &SummonerId, region: &Region) -> Result<Vec<Mastery>, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-summoner/{}?api_key={}",
            region.platform, id, self.api_key
        );
        let json = self.get_json(&url)?;
        Ok(parse_masteries(&json)?)
    }

    /// Recent match ids followed by full details per id. Individually failing
    /// requests are skipped so a partial history still renders; an
    /// unreachable id list degrades to an empty one.
    pub fn fetch_match_history(&self, puuid: &str, region: &Region) -> Result<Vec<Game>, RequestError> {
        let ids = match self.fetch_match_ids(puuid, region) {
            Ok(ids) => ids,
            Err(RequestError::Forbidden) => {
                warn!("match API not available with this key");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!("match id lookup failed: {}", err);
                return Ok(Vec::new());
            }
        };

        if self.parallel_match_fetch {
            return Ok(self.fetch_matches_parallel(&ids, region));
        }

        let mut games = Vec::new();
        for id in &ids {
            match self.fetch_match(id, region) {
                Ok(game) => games.push(game),
                Err(err) => warn!("skipping match {}: {}", id, err),
            }
        }
        Ok(games)
    }

    pub fn fetch_match_ids(&self, puuid: &str, region: &Region) -> Result<Vec<MatchId>, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}&api_key={}",
            region.regional, puuid, self.max_matches, self.api_key
        );
        let json = self.get_json(&url)?;
        Ok(parse_match_ids(&json)?)
    }

    pub fn fetch_match(&self, id: &MatchId, region: &Region) -> Result<Game, RequestError> {
        let json = self.get_json(&self.match_url(id, region))?;
        Ok(parse_match(&json)?)
    }

    /// One thread per match id, results collected over a channel and put back
    /// into id-list order. Only used when the config opts in.
    fn fetch_matches_parallel(&self, ids: &[MatchId], region: &Region) -> Vec<Game> {
        let (tx, rx) = mpsc::channel();

        for id in ids {
            let client = self.client.clone();
            let url = self.match_url(id, region);
            let id = id.clone();
            let tx = tx.clone();

            thread::spawn(move || {
                let result = ApiClient::get_json_with(&client, &url)
                    .and_then(|json| parse_match(&json).map_err(RequestError::from));
                let _ = tx.send((id, result));
            });
        }

        // Drop the original sender so rx knows when all threads are done
        drop(tx);

        let mut fetched: HashMap<MatchId, Game> = rx
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(game) => Some((id, game)),
                Err(err) => {
                    warn!("skipping match {}: {}", id, err);
                    None
                }
            })
            .collect();

        ids.iter().filter_map(|id| fetched.remove(id)).collect()
    }

    /// Availability probe for the diagnostics report; returns the raw status.
    pub fn probe_status_endpoint(&self, region: &Region) -> Result<u16, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/status/v4/platform-data?api_key={}",
            region.platform, self.api_key
        );
        let response = self.client.get(&url).send()?;
        Ok(response.status().as_u16())
    }

    pub fn probe_summoner_endpoint(&self, name: &str, region: &Region) -> Result<u16, RequestError> {
        let url = format!(
            "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-name/{}?api_key={}",
            region.platform,
            urlencoding::encode(name),
            self.api_key
        );
        let response = self.client.get(&url).send()?;
        Ok(response.status().as_u16())
    }

    fn match_url(&self, id: &MatchId, region: &Region) -> String {
        format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/{}?api_key={}",
            region.regional, id, self.api_key
        )
    }

    fn get_json(&self, url: &str) -> Result<JsonValue, RequestError> {
        debug!("GET {}", self.redacted(url));
        ApiClient::get_json_with(&self.client, url)
    }

    fn get_json_with(client: &Client, url: &str) -> Result<JsonValue, RequestError> {
        let response = client.get(url).send()?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::FORBIDDEN => return Err(RequestError::Forbidden),
            StatusCode::NOT_FOUND => return Err(RequestError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("rate limited by the API, request dropped");
                return Err(RequestError::RateLimited);
            }
            status => return Err(RequestError::InvalidResponse(status.as_u16())),
        }

        let text = response.text()?;
        let json = json::parse(&text)?;
        Ok(json)
    }

    fn redacted(&self, url: &str) -> String {
        if self.api_key.is_empty() {
            return url.to_string();
        }
        url.replace(&self.api_key, "API_KEY_HIDDEN")
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::HttpClientCreation(err) => {
                write!(f, "Failed to create HTTP client: {}", err)
            }
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    NetworkFailed(reqwest::Error),
    Forbidden,
    NotFound,
    RateLimited,
    InvalidResponse(u16),
    JsonInvalid(json::Error),
    ParsingFailed(ParsingError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::NetworkFailed(err) => write!(f, "Network error: {}", err),
            RequestError::Forbidden => write!(f, "API key lacks permission for this endpoint (HTTP 403)"),
            RequestError::NotFound => write!(f, "Resource not found (HTTP 404)"),
            RequestError::RateLimited => write!(f, "Rate limit exceeded (HTTP 429)"),
            RequestError::InvalidResponse(status) => write!(f, "The server returned HTTP {}", status),
            RequestError::JsonInvalid(err) => write!(f, "Malformed response body: {}", err),
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::NetworkFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::JsonInvalid(error)
    }
}

impl From<ParsingError> for RequestError {
    fn from(error: ParsingError) -> Self {
        RequestError::ParsingFailed(error)
    }
}
