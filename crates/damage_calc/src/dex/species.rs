//! Species data and lookup.
//!
//! A curated competitive roster; lookups key on the normalized name
//! (lowercased, non-alphanumerics stripped), so `"Ninetales-Alola"` and
//! `"ninetalesalola"` resolve to the same entry.

use super::types::Type;

/// Static species data.
#[derive(Clone, Copy, Debug)]
pub struct Species {
    /// Display name
    pub name: &'static str,
    /// Base stats [HP, Atk, Def, SpA, SpD, Spe]
    pub base_stats: [u8; 6],
    /// Primary and secondary type (secondary equals primary for monotypes)
    pub types: [Type; 2],
}

impl Species {
    #[inline]
    pub const fn primary_type(&self) -> Type {
        self.types[0]
    }

    /// Secondary type, `None` for monotypes.
    pub fn secondary_type(&self) -> Option<Type> {
        if self.types[1] != self.types[0] {
            Some(self.types[1])
        } else {
            None
        }
    }

    /// Base speed stat.
    #[inline]
    pub const fn base_spe(&self) -> u8 {
        self.base_stats[5]
    }
}

/// Normalize a species/move/item name into its lookup key.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look up species by display name or key.
pub fn species_by_name(name: &str) -> Option<&'static Species> {
    SPECIES_LOOKUP.get(normalize_key(name).as_str())
}

macro_rules! species {
    ($name:literal, [$hp:literal, $atk:literal, $def:literal, $spa:literal, $spd:literal, $spe:literal], $t1:ident, $t2:ident) => {
        Species {
            name: $name,
            base_stats: [$hp, $atk, $def, $spa, $spd, $spe],
            types: [Type::$t1, Type::$t2],
        }
    };
}

#[rustfmt::skip]
static SPECIES_LOOKUP: phf::Map<&'static str, Species> = phf::phf_map! {
    "bulbasaur" => species!("Bulbasaur", [45, 49, 49, 65, 65, 45], Grass, Poison),
    "venusaur" => species!("Venusaur", [80, 82, 83, 100, 100, 80], Grass, Poison),
    "charmander" => species!("Charmander", [39, 52, 43, 60, 50, 65], Fire, Fire),
    "charizard" => species!("Charizard", [78, 84, 78, 109, 85, 100], Fire, Flying),
    "squirtle" => species!("Squirtle", [44, 48, 65, 50, 64, 43], Water, Water),
    "blastoise" => species!("Blastoise", [79, 83, 100, 85, 105, 78], Water, Water),
    "pikachu" => species!("Pikachu", [35, 55, 40, 50, 50, 90], Electric, Electric),
    "raichu" => species!("Raichu", [60, 90, 55, 90, 80, 110], Electric, Electric),
    "ninetales" => species!("Ninetales", [73, 76, 75, 81, 100, 100], Fire, Fire),
    "ninetalesalola" => species!("Ninetales-Alola", [73, 67, 75, 81, 100, 109], Ice, Fairy),
    "gastly" => species!("Gastly", [30, 35, 30, 100, 35, 80], Ghost, Poison),
    "gengar" => species!("Gengar", [60, 65, 60, 130, 75, 110], Ghost, Poison),
    "gyarados" => species!("Gyarados", [95, 125, 79, 60, 100, 81], Water, Flying),
    "snorlax" => species!("Snorlax", [160, 110, 65, 65, 110, 30], Normal, Normal),
    "dragonite" => species!("Dragonite", [91, 134, 95, 100, 100, 80], Dragon, Flying),
    "mewtwo" => species!("Mewtwo", [106, 110, 90, 154, 90, 130], Psychic, Psychic),
    "mew" => species!("Mew", [100, 100, 100, 100, 100, 100], Psychic, Psychic),
    "scizor" => species!("Scizor", [70, 130, 100, 55, 80, 65], Bug, Steel),
    "skarmory" => species!("Skarmory", [65, 80, 140, 40, 70, 70], Steel, Flying),
    "blissey" => species!("Blissey", [255, 10, 10, 75, 135, 55], Normal, Normal),
    "tyranitar" => species!("Tyranitar", [100, 134, 110, 95, 100, 61], Rock, Dark),
    "swampert" => species!("Swampert", [100, 110, 90, 85, 90, 60], Water, Ground),
    "salamence" => species!("Salamence", [95, 135, 80, 110, 80, 100], Dragon, Flying),
    "metagross" => species!("Metagross", [80, 135, 130, 95, 90, 70], Steel, Psychic),
    "garchomp" => species!("Garchomp", [108, 130, 95, 80, 85, 102], Dragon, Ground),
    "lucario" => species!("Lucario", [70, 110, 70, 115, 70, 90], Fighting, Steel),
    "weavile" => species!("Weavile", [70, 120, 65, 45, 85, 125], Dark, Ice),
    "heatran" => species!("Heatran", [91, 90, 106, 130, 106, 77], Fire, Steel),
    "rotomwash" => species!("Rotom-Wash", [50, 65, 107, 105, 107, 86], Electric, Water),
    "excadrill" => species!("Excadrill", [110, 135, 60, 50, 65, 88], Ground, Steel),
    "ferrothorn" => species!("Ferrothorn", [74, 94, 131, 54, 116, 20], Grass, Steel),
    "volcarona" => species!("Volcarona", [85, 60, 65, 135, 105, 100], Bug, Fire),
    "landorustherian" => species!("Landorus-Therian", [89, 145, 90, 105, 80, 91], Ground, Flying),
    "greninja" => species!("Greninja", [72, 95, 67, 103, 71, 122], Water, Dark),
    "talonflame" => species!("Talonflame", [78, 81, 71, 74, 69, 126], Fire, Flying),
    "mimikyu" => species!("Mimikyu", [55, 90, 80, 50, 105, 96], Ghost, Fairy),
    "toxapex" => species!("Toxapex", [50, 63, 152, 53, 142, 35], Poison, Water),
    "amoonguss" => species!("Amoonguss", [114, 85, 70, 85, 80, 30], Grass, Poison),
    "rillaboom" => species!("Rillaboom", [100, 125, 90, 60, 70, 85], Grass, Grass),
    "cinderace" => species!("Cinderace", [80, 116, 75, 65, 75, 119], Fire, Fire),
    "dragapult" => species!("Dragapult", [88, 120, 75, 100, 75, 142], Dragon, Ghost),
    "corviknight" => species!("Corviknight", [98, 87, 105, 53, 85, 67], Flying, Steel),
    "grimmsnarl" => species!("Grimmsnarl", [95, 120, 65, 95, 75, 60], Dark, Fairy),
    "urshifu" => species!("Urshifu", [100, 130, 100, 63, 60, 97], Fighting, Dark),
    "greattusk" => species!("Great Tusk", [115, 131, 131, 53, 53, 87], Ground, Fighting),
    "fluttermane" => species!("Flutter Mane", [55, 55, 55, 135, 135, 135], Ghost, Fairy),
    "ironvaliant" => species!("Iron Valiant", [74, 130, 90, 120, 60, 116], Fairy, Fighting),
    "gholdengo" => species!("Gholdengo", [87, 60, 95, 133, 91, 84], Steel, Ghost),
    "kingambit" => species!("Kingambit", [100, 135, 120, 60, 85, 50], Dark, Steel),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let pikachu = species_by_name("pikachu").expect("pikachu should exist");
        assert_eq!(pikachu.base_stats[0], 35);
        assert_eq!(pikachu.primary_type(), Type::Electric);
        assert!(pikachu.secondary_type().is_none());
    }

    #[test]
    fn test_display_name_normalization() {
        let alolan = species_by_name("Ninetales-Alola").expect("form should exist");
        assert_eq!(alolan.base_spe(), 109);
        assert_eq!(alolan.types, [Type::Ice, Type::Fairy]);

        let tusk = species_by_name("Great Tusk").expect("spaced name should resolve");
        assert_eq!(tusk.base_stats[1], 131);
    }

    #[test]
    fn test_unknown_species() {
        assert!(species_by_name("missingno").is_none());
    }
}
