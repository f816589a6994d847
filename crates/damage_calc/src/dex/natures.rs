//! Nature definitions and stat modifiers.
//!
//! Natures are ordered in a 5x5 grid: `nature_id = plus_stat * 5 + minus_stat`.
//! Diagonal entries (plus == minus) are the neutral natures.

/// Stat index for nature-affected stats (HP excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

/// Pokemon nature (affects stat growth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0, // neutral
    Lonely = 1,  // +Atk -Def
    Adamant = 2, // +Atk -SpA
    Naughty = 3, // +Atk -SpD
    Brave = 4,   // +Atk -Spe
    Bold = 5,    // +Def -Atk
    Docile = 6,  // neutral
    Impish = 7,  // +Def -SpA
    Lax = 8,     // +Def -SpD
    Relaxed = 9, // +Def -Spe
    Modest = 10, // +SpA -Atk
    Mild = 11,   // +SpA -Def
    Bashful = 12, // neutral
    Rash = 13,    // +SpA -SpD
    Quiet = 14,   // +SpA -Spe
    Calm = 15,    // +SpD -Atk
    Gentle = 16,  // +SpD -Def
    Careful = 17, // +SpD -SpA
    Serious = 18, // neutral
    Sassy = 19,   // +SpD -Spe
    Timid = 20,   // +Spe -Atk
    Hasty = 21,   // +Spe -Def
    Jolly = 22,   // +Spe -SpA
    Naive = 23,   // +Spe -SpD
    Quirky = 24,  // neutral
}

impl NatureId {
    /// Parse a nature from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hardy" => Some(NatureId::Hardy),
            "lonely" => Some(NatureId::Lonely),
            "adamant" => Some(NatureId::Adamant),
            "naughty" => Some(NatureId::Naughty),
            "brave" => Some(NatureId::Brave),
            "bold" => Some(NatureId::Bold),
            "docile" => Some(NatureId::Docile),
            "impish" => Some(NatureId::Impish),
            "lax" => Some(NatureId::Lax),
            "relaxed" => Some(NatureId::Relaxed),
            "modest" => Some(NatureId::Modest),
            "mild" => Some(NatureId::Mild),
            "bashful" => Some(NatureId::Bashful),
            "rash" => Some(NatureId::Rash),
            "quiet" => Some(NatureId::Quiet),
            "calm" => Some(NatureId::Calm),
            "gentle" => Some(NatureId::Gentle),
            "careful" => Some(NatureId::Careful),
            "serious" => Some(NatureId::Serious),
            "sassy" => Some(NatureId::Sassy),
            "timid" => Some(NatureId::Timid),
            "hasty" => Some(NatureId::Hasty),
            "jolly" => Some(NatureId::Jolly),
            "naive" => Some(NatureId::Naive),
            "quirky" => Some(NatureId::Quirky),
            _ => None,
        }
    }

    /// Get stat modifier for a given stat.
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%).
    /// Multiply by stat/10 to apply.
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let stat_idx = stat as u8;

        if plus == minus {
            10 // Neutral nature
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    /// Whether this nature raises and lowers nothing.
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        id / 5 == id % 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        let adamant = NatureId::from_str("adamant").unwrap();
        assert_eq!(adamant.stat_modifier(BattleStat::Atk), 11);
        assert_eq!(adamant.stat_modifier(BattleStat::SpA), 9);
        assert_eq!(adamant.stat_modifier(BattleStat::Spe), 10);
        assert!(!adamant.is_neutral());

        let jolly = NatureId::from_str("Jolly").unwrap();
        assert_eq!(jolly.stat_modifier(BattleStat::Spe), 11);
        assert_eq!(jolly.stat_modifier(BattleStat::SpA), 9);

        let hardy = NatureId::from_str("hardy").unwrap();
        assert!(hardy.is_neutral());
        assert_eq!(hardy.stat_modifier(BattleStat::Atk), 10);
    }
}
