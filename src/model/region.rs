use std::fmt;

/// Geographic API partition. Every region has a platform host for per-shard
/// endpoints and a regional host for the continental match endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionCode {
    Euw,
    Lan,
    Las,
}

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub code: RegionCode,
    pub name: &'static str,
    pub platform: &'static str,
    pub regional: &'static str,
}

pub static REGIONS: [Region; 3] = [
    Region {
        code: RegionCode::Euw,
        name: "Europe West",
        platform: "euw1",
        regional: "europe",
    },
    Region {
        code: RegionCode::Lan,
        name: "Latin America North",
        platform: "la1",
        regional: "americas",
    },
    Region {
        code: RegionCode::Las,
        name: "Latin America South",
        platform: "la2",
        regional: "americas",
    },
];

impl Region {
    pub fn from_code(code: &str) -> Option<&'static Region> {
        REGIONS.iter().find(|r| r.code.as_str().eq_ignore_ascii_case(code))
    }
}

impl RegionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCode::Euw => "EUW",
            RegionCode::Lan => "LAN",
            RegionCode::Las => "LAS",
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, region) in REGIONS.iter().enumerate() {
            for other in &REGIONS[i + 1..] {
                assert_ne!(region.code, other.code);
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let region = Region::from_code("euw").expect("EUW should resolve");
        assert_eq!(region.platform, "euw1");
        assert!(Region::from_code("NA").is_none());
    }
}
