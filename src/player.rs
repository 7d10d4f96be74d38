use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub town_hall_level: Option<u32>,
    pub exp_level: Option<u32>,
    pub war_stars: Option<u32>,
    pub clan: Option<ClanRef>,
    pub heroes: Option<Vec<HeroEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClanRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeroEntry {
    pub name: Option<String>,
    pub level: Option<u32>,
}

#[cfg(test)]
impl HeroEntry {
    pub fn new(name: &str, level: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            level: Some(level),
        }
    }
}

/// Heroes tracked in the welcome message, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hero {
    BarbarianKing,
    ArcherQueen,
    GrandWarden,
    RoyalChampion,
    MinionPrince,
}

impl Hero {
    pub const ALL: [Hero; 5] = [
        Hero::BarbarianKing,
        Hero::ArcherQueen,
        Hero::GrandWarden,
        Hero::RoyalChampion,
        Hero::MinionPrince,
    ];

    /// Name as reported by the player API.
    pub fn api_name(self) -> &'static str {
        match self {
            Hero::BarbarianKing => "Barbarian King",
            Hero::ArcherQueen => "Archer Queen",
            Hero::GrandWarden => "Grand Warden",
            Hero::RoyalChampion => "Royal Champion",
            Hero::MinionPrince => "Minion Prince",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hero::BarbarianKing => "👑 Rei Bárbaro",
            Hero::ArcherQueen => "🏹 Rainha Arqueira",
            Hero::GrandWarden => "🧙 Grande Guardião",
            Hero::RoyalChampion => "⚔️ Campeã Real",
            Hero::MinionPrince => "👿 Príncipe Lacaio",
        }
    }

    /// Level at which the hero is announced as maxed. Minion Prince is not tracked.
    pub fn max_threshold(self) -> Option<u32> {
        match self {
            Hero::BarbarianKing | Hero::ArcherQueen => Some(95),
            Hero::GrandWarden => Some(70),
            Hero::RoyalChampion => Some(45),
            Hero::MinionPrince => None,
        }
    }

    pub fn is_maxed(self, level: u32) -> bool {
        self.max_threshold().is_some_and(|max| level >= max)
    }
}

impl PlayerProfile {
    /// Level of the first hero entry whose name matches exactly, or 0.
    pub fn hero_level(&self, hero: Hero) -> u32 {
        self.heroes
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find(|h| h.name.as_deref() == Some(hero.api_name()))
            .and_then(|h| h.level)
            .unwrap_or(0)
    }

    pub fn clan_name(&self) -> Option<&str> {
        self.clan.as_ref().and_then(|c| c.name.as_deref())
    }
}
