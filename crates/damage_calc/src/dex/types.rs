//! Type definitions and the type effectiveness chart.
//!
//! Effectiveness values use the 4-scale convention throughout the crate:
//! 0 = immune, 1 = 0.25x, 2 = 0.5x, 4 = 1x, 8 = 2x, 16 = 4x.

/// Elemental type (canonical game ordering).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Type {
    #[default]
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

/// Number of types in the chart.
pub const TYPE_COUNT: usize = 18;

impl Type {
    /// Parse a type from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

/// Type chart on the 4-scale, indexed `TYPE_CHART[attacker][defender]`.
///
/// Columns follow the `Type` enum ordering:
/// Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
#[rustfmt::skip]
pub const TYPE_CHART: [[u8; TYPE_COUNT]; TYPE_COUNT] = [
    /* Normal   */ [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 2, 0, 4, 4, 2, 4],
    /* Fire     */ [4, 2, 2, 4, 8, 8, 4, 4, 4, 4, 4, 8, 2, 4, 2, 4, 8, 4],
    /* Water    */ [4, 8, 2, 4, 2, 4, 4, 4, 8, 4, 4, 4, 8, 4, 2, 4, 4, 4],
    /* Electric */ [4, 4, 8, 2, 2, 4, 4, 4, 0, 8, 4, 4, 4, 4, 2, 4, 4, 4],
    /* Grass    */ [4, 2, 8, 4, 2, 4, 4, 2, 8, 2, 4, 2, 8, 4, 2, 4, 2, 4],
    /* Ice      */ [4, 2, 2, 4, 8, 2, 4, 4, 8, 8, 4, 4, 4, 4, 8, 4, 2, 4],
    /* Fighting */ [8, 4, 4, 4, 4, 8, 4, 2, 4, 2, 2, 2, 8, 0, 4, 8, 8, 2],
    /* Poison   */ [4, 4, 4, 4, 8, 4, 4, 2, 2, 4, 4, 4, 2, 2, 4, 4, 0, 8],
    /* Ground   */ [4, 8, 4, 8, 2, 4, 4, 8, 4, 0, 4, 2, 8, 4, 4, 4, 8, 4],
    /* Flying   */ [4, 4, 4, 2, 8, 4, 8, 4, 4, 4, 4, 8, 2, 4, 4, 4, 2, 4],
    /* Psychic  */ [4, 4, 4, 4, 4, 4, 8, 8, 4, 4, 2, 4, 4, 4, 4, 0, 2, 4],
    /* Bug      */ [4, 2, 4, 4, 8, 4, 2, 2, 4, 2, 8, 4, 4, 2, 4, 8, 2, 2],
    /* Rock     */ [4, 8, 4, 4, 4, 8, 2, 4, 2, 8, 4, 8, 4, 4, 4, 4, 2, 4],
    /* Ghost    */ [0, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 4, 4, 8, 4, 2, 4, 4],
    /* Dragon   */ [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 4, 2, 0],
    /* Dark     */ [4, 4, 4, 4, 4, 4, 2, 4, 4, 4, 8, 4, 4, 8, 4, 2, 4, 2],
    /* Steel    */ [4, 2, 2, 2, 4, 8, 4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 2, 8],
    /* Fairy    */ [4, 2, 4, 4, 4, 4, 8, 2, 4, 4, 4, 4, 4, 4, 8, 8, 2, 4],
];

/// Combined effectiveness of a move type against one or two defender types.
///
/// Returns the 4-scale product: `4 * 4 / 4 = 4` for doubly neutral,
/// `8 * 8 / 4 = 16` for doubly super effective, 0 if either type is immune.
pub fn type_effectiveness(attacking: Type, defender1: Type, defender2: Option<Type>) -> u8 {
    let eff1 = TYPE_CHART[attacking as usize][defender1 as usize] as u16;
    let eff2 = match defender2 {
        Some(t) if t != defender1 => TYPE_CHART[attacking as usize][t as usize] as u16,
        _ => 4,
    };
    (eff1 * eff2 / 4) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Type::from_str("fire"), Some(Type::Fire));
        assert_eq!(Type::from_str("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_str("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_str("invalid"), None);
    }

    #[test]
    fn test_single_type_effectiveness() {
        // Water vs Fire = 2x
        assert_eq!(type_effectiveness(Type::Water, Type::Fire, None), 8);
        // Electric vs Ground = 0x
        assert_eq!(type_effectiveness(Type::Electric, Type::Ground, None), 0);
        // Normal vs Ghost = 0x
        assert_eq!(type_effectiveness(Type::Normal, Type::Ghost, None), 0);
        // Fire vs Water = 0.5x
        assert_eq!(type_effectiveness(Type::Fire, Type::Water, None), 2);
    }

    #[test]
    fn test_dual_type_effectiveness() {
        // Ice vs Grass/Flying = 4x
        assert_eq!(
            type_effectiveness(Type::Ice, Type::Grass, Some(Type::Flying)),
            16
        );
        // Electric vs Water/Flying = 4x
        assert_eq!(
            type_effectiveness(Type::Electric, Type::Water, Some(Type::Flying)),
            16
        );
        // Ground vs Grass/Flying = 0x (Flying immunity wins)
        assert_eq!(
            type_effectiveness(Type::Ground, Type::Grass, Some(Type::Flying)),
            0
        );
        // Duplicated defender type counts once
        assert_eq!(
            type_effectiveness(Type::Water, Type::Fire, Some(Type::Fire)),
            8
        );
    }
}
