use crate::player::{Hero, PlayerProfile};

pub const DEFAULT_NAME: &str = "Jogador";
pub const DEFAULT_CLAN: &str = "Insanos";

const RULE: &str = "━━━━━━━━━━━━━━━━";

const GOLDEN_RULES: [&str; 5] = [
    "🎯 Curta a enquete = Tá na guerra",
    "💚 Liga = Todos os heróis UP",
    "🤝 Doe sempre que possível",
    "👥 Traga os parças!",
    "📋 Regras completas na descrição",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarTier {
    Veteran,
    Experienced,
    Seasoned,
    Rookie,
}

impl WarTier {
    pub fn from_stars(stars: u32) -> Self {
        match stars {
            1000.. => WarTier::Veteran,
            500.. => WarTier::Experienced,
            100.. => WarTier::Seasoned,
            _ => WarTier::Rookie,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            WarTier::Veteran => "🔥 VETERANO DE GUERRA! Esse aqui já viu muita batalha!",
            WarTier::Experienced => "💪 Experiência de guerra não falta! Vai somar demais!",
            WarTier::Seasoned => "⚡ Já tem bagagem! Vem com tudo!",
            WarTier::Rookie => "🌟 Preparado pra fazer história! Vamos nessa!",
        }
    }
}

/// Builds the welcome announcement for a fetched player.
///
/// Never fails: absent fields fall back to defaults (`Jogador`, `Insanos`, 0)
/// and heroes at level 0 are left out.
pub fn compose(profile: &PlayerProfile) -> String {
    let name = non_empty(profile.name.as_deref()).unwrap_or(DEFAULT_NAME);
    let clan = non_empty(profile.clan_name()).unwrap_or(DEFAULT_CLAN);
    let town_hall = profile.town_hall_level.unwrap_or(0);
    let exp_level = profile.exp_level.unwrap_or(0);
    let war_stars = profile.war_stars.unwrap_or(0);

    let mut lines: Vec<String> = vec![
        "🎉 E AÍ, GALERA! Chegou reforço!".to_string(),
        String::new(),
        format!("Recebam @{name} no clã {clan}! 🔥"),
        String::new(),
        "📊 PERFIL DO GUERREIRO:".to_string(),
        RULE.to_string(),
        format!("🏰 Vila: CV{town_hall}"),
        format!("⭐ Level: {exp_level}"),
    ];

    for hero in Hero::ALL {
        let level = profile.hero_level(hero);
        if level > 0 {
            lines.push(hero_line(hero, level));
        }
    }

    lines.push(format!("⚔️ Estrelas de Guerra: {war_stars}"));
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines.push(WarTier::from_stars(war_stars).message().to_string());
    lines.push(String::new());

    lines.push("📜 REGRAS DE OURO:".to_string());
    lines.push(RULE.to_string());
    lines.extend(GOLDEN_RULES.iter().map(|rule| rule.to_string()));
    lines.push(String::new());
    lines.push("BORA DOMINAR! 💀👊".to_string());

    lines.join("\n")
}

fn hero_line(hero: Hero, level: u32) -> String {
    let suffix = if hero.is_maxed(level) { " (MAX)" } else { "" };
    format!("{}: {level}{suffix}", hero.label())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
