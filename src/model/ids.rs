use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummonerId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChampionId(u32);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl SummonerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SummonerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SummonerId {
    fn from(value: String) -> Self {
        SummonerId(value)
    }
}

impl From<&str> for SummonerId {
    fn from(value: &str) -> Self {
        SummonerId(value.to_string())
    }
}

impl ChampionId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChampionId {
    fn from(value: u32) -> Self {
        ChampionId(value)
    }
}

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        MatchId(value)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        MatchId(value.to_string())
    }
}
