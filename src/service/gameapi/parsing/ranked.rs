use json::JsonValue;

use crate::model::ranked::{Division, RankedQueueStats, RankedStats, Tier};

use super::ParsingError;

/// Splits the league entries into the queues the analyzer knows about; other
/// queue types are ignored.
pub fn parse_ranked_entries(json: &JsonValue) -> Result<RankedStats, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut stats = RankedStats::default();

        for entry in array {
            let parsed = parse_ranked_entry(entry)?;
            match parsed.queue_type.as_str() {
                "RANKED_SOLO_5x5" => stats.solo_queue = Some(parsed),
                "RANKED_FLEX_SR" => stats.flex_queue = Some(parsed),
                _ => {}
            }
        }

        return Ok(stats);
    }

    Err(ParsingError::InvalidType("root".into()))
}

pub fn parse_ranked_entry(json: &JsonValue) -> Result<RankedQueueStats, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let queue_type = obj["queueType"]
            .as_str()
            .ok_or(ParsingError::InvalidType("queueType".into()))?;
        let tier_raw = obj["tier"].as_str().ok_or(ParsingError::InvalidType("tier".into()))?;
        let tier = Tier::from_api(tier_raw).ok_or_else(|| ParsingError::InvalidType(format!("tier '{}'", tier_raw)))?;
        let division_raw = obj["rank"].as_str().ok_or(ParsingError::InvalidType("rank".into()))?;
        let division =
            Division::from_api(division_raw).ok_or_else(|| ParsingError::InvalidType(format!("rank '{}'", division_raw)))?;
        let league_points = obj["leaguePoints"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("leaguePoints".into()))?;
        let wins = obj["wins"].as_u32().ok_or(ParsingError::InvalidType("wins".into()))?;
        let losses = obj["losses"].as_u32().ok_or(ParsingError::InvalidType("losses".into()))?;

        return Ok(RankedQueueStats {
            queue_type: queue_type.to_string(),
            tier,
            division,
            league_points,
            wins,
            losses,
        });
    }

    Err(ParsingError::InvalidType("league entry".into()))
}
