use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::ids::ChampionId;

/// Names for the champions the cards are expected to show. Mastery responses
/// only carry numeric ids; anything missing here renders as `Champion #id`.
static CHAMPION_NAMES: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Annie"),
        (12, "Alistar"),
        (22, "Ashe"),
        (32, "Amumu"),
        (34, "Anivia"),
        (51, "Caitlyn"),
        (53, "Blitzcrank"),
        (64, "Lee Sin"),
        (81, "Ezreal"),
        (84, "Akali"),
        (99, "Lux"),
        (103, "Ahri"),
        (157, "Yasuo"),
        (222, "Jinx"),
        (238, "Zed"),
        (266, "Aatrox"),
    ])
});

pub fn champion_name(id: ChampionId) -> String {
    match CHAMPION_NAMES.get(&id.value()) {
        Some(name) => (*name).to_string(),
        None => format!("Champion #{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_names() {
        assert_eq!(champion_name(103.into()), "Ahri");
        assert_eq!(champion_name(266.into()), "Aatrox");
    }

    #[test]
    fn unknown_ids_get_a_placeholder() {
        assert_eq!(champion_name(9999.into()), "Champion #9999");
    }
}
