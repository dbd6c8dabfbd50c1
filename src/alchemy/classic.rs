//! The classic element set: 30 entities, 23 rules, 4 base elements.

use super::catalog::Catalog;
use super::entity::Entity;
use crate::core::EngineResult;

/// Elements every classic session starts with, in display order.
pub const SEED_ELEMENTS: [&str; 4] = ["earth", "fire", "water", "air"];

const ENTITIES: &[(&str, &str, &str)] = &[
    ("earth", "Земля", "🌍"),
    ("fire", "Огонь", "🔥"),
    ("water", "Вода", "💧"),
    ("air", "Воздух", "💨"),
    ("steam", "Пар", "☁️"),
    ("lava", "Лава", "🌋"),
    ("dust", "Пыль", "💨"),
    ("gunpowder", "Порох", "⚫"),
    ("explosion", "Взрыв", "💥"),
    ("smoke", "Дым", "💨"),
    ("energy", "Энергия", "⚡"),
    ("stone", "Камень", "🪨"),
    ("storm", "Буря", "⛈️"),
    ("metal", "Металл", "🔩"),
    ("electricity", "Электричество", "⚡"),
    ("hydrogen", "Водород", "H"),
    ("oxygen", "Кислород", "O"),
    ("ozone", "Озон", "O₃"),
    ("mud", "Грязь", "🟫"),
    ("geyser", "Гейзер", "🌊"),
    ("boiler", "Паровой котел", "♨️"),
    ("pressure", "Давление", "⬇️"),
    ("volcano", "Вулкан", "🌋"),
    ("explosive_gas", "Гремучий газ", "💥"),
    ("swamp", "Болото", "🐊"),
    ("alcohol", "Спирт", "🍷"),
    ("molotov", "Коктейль Молотова", "🔥"),
    ("life", "Жизнь", "🧬"),
    ("bacteria", "Бактерии", "🦠"),
    ("vodka", "Водка", "🍸"),
];

const RULES: &[(&str, &str, &[&str])] = &[
    ("fire", "water", &["steam", "alcohol"]),
    ("fire", "earth", &["lava"]),
    ("air", "earth", &["dust"]),
    ("fire", "dust", &["gunpowder"]),
    ("gunpowder", "fire", &["explosion", "smoke"]),
    ("air", "fire", &["energy"]),
    ("lava", "water", &["steam", "stone"]),
    ("air", "energy", &["storm"]),
    ("fire", "stone", &["metal"]),
    ("metal", "energy", &["electricity"]),
    ("electricity", "water", &["hydrogen", "oxygen"]),
    ("electricity", "oxygen", &["ozone"]),
    ("dust", "water", &["mud"]),
    ("steam", "earth", &["geyser"]),
    ("steam", "metal", &["boiler"]),
    ("boiler", "steam", &["pressure"]),
    ("lava", "pressure", &["volcano"]),
    ("hydrogen", "oxygen", &["explosive_gas"]),
    ("water", "earth", &["swamp"]),
    ("alcohol", "fire", &["molotov"]),
    ("swamp", "energy", &["life"]),
    ("life", "swamp", &["bacteria"]),
    ("alcohol", "water", &["vodka"]),
];

fn build_classic() -> EngineResult<Catalog> {
    let mut catalog = Catalog::new();
    for &(id, name, icon) in ENTITIES {
        catalog.add_entity(Entity::new(id, name, icon))?;
    }
    for &(a, b, results) in RULES {
        catalog.add_rule(a, b, results.iter().copied())?;
    }
    Ok(catalog)
}

impl Catalog {
    /// The classic element set.
    ///
    /// ```
    /// use rule_games::alchemy::Catalog;
    ///
    /// let catalog = Catalog::classic();
    /// assert_eq!(catalog.len(), 30);
    /// assert_eq!(catalog.rule_count(), 23);
    /// ```
    #[must_use]
    pub fn classic() -> Self {
        build_classic().expect("classic catalog tables are consistent")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alchemy::EntityId;

    #[test]
    fn test_classic_tables_build() {
        let catalog = build_classic().unwrap();
        assert_eq!(catalog.len(), ENTITIES.len());
        assert_eq!(catalog.rule_count(), RULES.len());
    }

    #[test]
    fn test_seed_elements_are_known() {
        let catalog = Catalog::classic();
        for seed in SEED_ELEMENTS {
            assert!(catalog.contains(&EntityId::new(seed)), "missing seed {seed}");
        }
    }

    #[test]
    fn test_every_non_seed_entity_is_produced_by_some_rule() {
        let catalog = Catalog::classic();
        for entity in catalog.entities() {
            if SEED_ELEMENTS.contains(&entity.id.as_str()) {
                continue;
            }
            let produced = catalog
                .rules()
                .any(|(_, results)| results.contains(&entity.id));
            assert!(produced, "{} is unreachable", entity.id);
        }
    }

    #[test]
    fn test_sample_names() {
        let catalog = Catalog::classic();
        assert_eq!(catalog.get(&EntityId::new("steam")).unwrap().name, "Пар");
        assert_eq!(catalog.get(&EntityId::new("ozone")).unwrap().icon, "O₃");
    }
}
