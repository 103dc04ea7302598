use chrono::{DateTime, Utc};

use super::ids::{ChampionId, MatchId};

#[derive(Debug, Clone)]
pub struct Game {
    pub id: MatchId,
    pub game_id: u64,
    pub mode: String,
    pub duration_secs: u32,
    pub created: DateTime<Utc>,
    pub participants: Vec<Participant>,
}

impl Game {
    /// Duration as `m:ss`, the way the history card shows it.
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }

    pub fn participant(&self, summoner_name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.summoner_name == summoner_name)
    }
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub summoner_name: String,
    pub champ_id: ChampionId,
    pub champion: String,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub win: bool,
    pub team_id: u16,
    pub role: String,
    pub lane: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_seconds() {
        let game = Game {
            id: "EUW1_1".into(),
            game_id: 1,
            mode: "CLASSIC".to_string(),
            duration_secs: 1865,
            created: Utc::now(),
            participants: Vec::new(),
        };
        assert_eq!(game.duration_display(), "31:05");
    }
}
