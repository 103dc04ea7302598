use chrono::{DateTime, Utc};

use super::ids::SummonerId;

/// Basic account info for one player, built fresh per query. Fields the
/// permissive fallback endpoint cannot supply stay `None` and render as N/A.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub id: SummonerId,
    pub puuid: Option<String>,
    pub account_id: Option<String>,
    pub name: String,
    pub level: Option<u16>,
    pub profile_icon_id: Option<u16>,
    pub is_live: bool,
    pub is_demo: bool,
    pub last_updated: DateTime<Utc>,
}
