use chrono::{TimeZone, Utc};
use json::JsonValue;

use crate::model::mastery::Mastery;
use crate::service::dictionary;

use super::ParsingError;

/// The cards only ever show ten champions, so the processed collection keeps
/// the first ten entries (the API orders them by points).
pub fn parse_masteries(json: &JsonValue) -> Result<Vec<Mastery>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut masteries = Vec::new();

        for entry in array.iter().take(10) {
            if let JsonValue::Object(obj) = entry {
                let champ_id = obj["championId"]
                    .as_u32()
                    .ok_or(ParsingError::InvalidType("championId".into()))?;
                let level = obj["championLevel"]
                    .as_u8()
                    .ok_or(ParsingError::InvalidType("championLevel".into()))?;
                let points = obj["championPoints"]
                    .as_u32()
                    .ok_or(ParsingError::InvalidType("championPoints".into()))?;
                let last_play_time = obj["lastPlayTime"]
                    .as_i64()
                    .ok_or(ParsingError::InvalidType("lastPlayTime".into()))?;
                let last_played = Utc
                    .timestamp_millis_opt(last_play_time)
                    .single()
                    .ok_or(ParsingError::InvalidType("lastPlayTime".into()))?;

                masteries.push(Mastery {
                    champ_id: champ_id.into(),
                    champ_name: dictionary::champion_name(champ_id.into()),
                    level,
                    points,
                    last_played,
                });
            } else {
                return Err(ParsingError::InvalidType("mastery entry".into()));
            }
        }

        return Ok(masteries);
    }

    Err(ParsingError::InvalidType("root".into()))
}
