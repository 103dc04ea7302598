use chrono::Utc;
use json::JsonValue;

use crate::model::{ranked::RankedQueueStats, summoner::PlayerProfile};

use super::{ranked::parse_ranked_entry, ParsingError};

pub fn parse_summoner(json: &JsonValue) -> Result<PlayerProfile, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
        let account_id = obj["accountId"]
            .as_str()
            .ok_or(ParsingError::InvalidType("accountId".into()))?;
        let puuid = obj["puuid"].as_str().ok_or(ParsingError::InvalidType("puuid".into()))?;
        let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
        let level = obj["summonerLevel"]
            .as_u16()
            .ok_or(ParsingError::InvalidType("summonerLevel".into()))?;
        let profile_icon_id = obj["profileIconId"]
            .as_u16()
            .ok_or(ParsingError::InvalidType("profileIconId".into()))?;

        return Ok(PlayerProfile {
            id: id.into(),
            puuid: Some(puuid.to_string()),
            account_id: Some(account_id.to_string()),
            name: name.to_string(),
            level: Some(level),
            profile_icon_id: Some(profile_icon_id),
            is_live: true,
            is_demo: false,
            last_updated: Utc::now(),
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

/// Partial profile from the permissive league endpoint. Only id and name are
/// known there; everything else stays unavailable. An empty array means the
/// player does not exist on this shard.
pub fn parse_league_profile(json: &JsonValue) -> Result<Option<(PlayerProfile, RankedQueueStats)>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let first = match array.first() {
            Some(first) => first,
            None => return Ok(None),
        };

        let entry = parse_ranked_entry(first)?;

        if let JsonValue::Object(obj) = first {
            let id = obj["summonerId"]
                .as_str()
                .ok_or(ParsingError::InvalidType("summonerId".into()))?;
            let name = obj["summonerName"]
                .as_str()
                .ok_or(ParsingError::InvalidType("summonerName".into()))?;

            let profile = PlayerProfile {
                id: id.into(),
                puuid: None,
                account_id: None,
                name: name.to_string(),
                level: None,
                profile_icon_id: None,
                is_live: false,
                is_demo: false,
                last_updated: Utc::now(),
            };
            return Ok(Some((profile, entry)));
        }
    }

    Err(ParsingError::InvalidType("root".into()))
}
