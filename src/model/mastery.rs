use chrono::{DateTime, Utc};

use super::ids::ChampionId;

#[derive(Debug, Clone)]
pub struct Mastery {
    pub champ_id: ChampionId,
    pub champ_name: String,
    pub level: u8,
    pub points: u32,
    pub last_played: DateTime<Utc>,
}
