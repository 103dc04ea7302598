use chrono::{TimeZone, Utc};
use json::JsonValue;

use crate::model::{
    games::{Game, Participant},
    ids::MatchId,
};

use super::ParsingError;

pub fn parse_match_ids(json: &JsonValue) -> Result<Vec<MatchId>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut ids = Vec::new();

        for entry in array {
            let id = entry.as_str().ok_or(ParsingError::InvalidType("match id".into()))?;
            ids.push(id.into());
        }

        return Ok(ids);
    }

    Err(ParsingError::InvalidType("root".into()))
}

pub fn parse_match(json: &JsonValue) -> Result<Game, ParsingError> {
    let match_id = json["metadata"]["matchId"]
        .as_str()
        .ok_or(ParsingError::InvalidType("matchId".into()))?;

    if let JsonValue::Object(info) = &json["info"] {
        let game_id = info["gameId"].as_u64().ok_or(ParsingError::InvalidType("gameId".into()))?;
        let mode = info["gameMode"]
            .as_str()
            .ok_or(ParsingError::InvalidType("gameMode".into()))?;
        let duration_secs = info["gameDuration"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("gameDuration".into()))?;
        let creation = info["gameCreation"]
            .as_i64()
            .ok_or(ParsingError::InvalidType("gameCreation".into()))?;
        let created = Utc
            .timestamp_millis_opt(creation)
            .single()
            .ok_or(ParsingError::InvalidType("gameCreation".into()))?;

        let mut participants = Vec::new();
        if let JsonValue::Array(entries) = &info["participants"] {
            for entry in entries {
                participants.push(parse_participant(entry)?);
            }
        } else {
            return Err(ParsingError::InvalidType("participants".into()));
        }

        return Ok(Game {
            id: match_id.into(),
            game_id,
            mode: mode.to_string(),
            duration_secs,
            created,
            participants,
        });
    }

    Err(ParsingError::InvalidType("info".into()))
}

fn parse_participant(json: &JsonValue) -> Result<Participant, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let summoner_name = obj["summonerName"]
            .as_str()
            .ok_or(ParsingError::InvalidType("summonerName".into()))?;
        let champ_id = obj["championId"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("championId".into()))?;
        let champion = obj["championName"]
            .as_str()
            .ok_or(ParsingError::InvalidType("championName".into()))?;
        let kills = obj["kills"].as_u16().ok_or(ParsingError::InvalidType("kills".into()))?;
        let deaths = obj["deaths"].as_u16().ok_or(ParsingError::InvalidType("deaths".into()))?;
        let assists = obj["assists"].as_u16().ok_or(ParsingError::InvalidType("assists".into()))?;
        let win = obj["win"].as_bool().ok_or(ParsingError::InvalidType("win".into()))?;
        let team_id = obj["teamId"].as_u16().ok_or(ParsingError::InvalidType("teamId".into()))?;
        let role = obj["role"].as_str().ok_or(ParsingError::InvalidType("role".into()))?;
        let lane = obj["lane"].as_str().ok_or(ParsingError::InvalidType("lane".into()))?;

        return Ok(Participant {
            summoner_name: summoner_name.to_string(),
            champ_id: champ_id.into(),
            champion: champion.to_string(),
            kills,
            deaths,
            assists,
            win,
            team_id,
            role: role.to_string(),
            lane: lane.to_string(),
        });
    }

    Err(ParsingError::InvalidType("participant".into()))
}
