//! Move data and lookup.

use super::species::normalize_key;
use super::types::Type;

/// Damage category of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Static move data.
#[derive(Clone, Copy, Debug)]
pub struct MoveData {
    /// Display name
    pub name: &'static str,
    /// Move type
    pub move_type: Type,
    /// Damage category
    pub category: MoveCategory,
    /// Base power (0 for status moves)
    pub power: u16,
    /// Default number of strikes (2 for Dragon Darts, etc.)
    pub strikes: u8,
}

/// Look up move by display name or key.
pub fn move_by_name(name: &str) -> Option<&'static MoveData> {
    MOVE_LOOKUP.get(normalize_key(name).as_str())
}

macro_rules! mv {
    ($name:literal, $t:ident, $cat:ident, $power:literal) => {
        mv!($name, $t, $cat, $power, 1)
    };
    ($name:literal, $t:ident, $cat:ident, $power:literal, $strikes:literal) => {
        MoveData {
            name: $name,
            move_type: Type::$t,
            category: MoveCategory::$cat,
            power: $power,
            strikes: $strikes,
        }
    };
}

#[rustfmt::skip]
static MOVE_LOOKUP: phf::Map<&'static str, MoveData> = phf::phf_map! {
    "tackle" => mv!("Tackle", Normal, Physical, 40),
    "bodyslam" => mv!("Body Slam", Normal, Physical, 85),
    "doubleedge" => mv!("Double-Edge", Normal, Physical, 120),
    "hyperbeam" => mv!("Hyper Beam", Normal, Special, 150),
    "flamethrower" => mv!("Flamethrower", Fire, Special, 90),
    "fireblast" => mv!("Fire Blast", Fire, Special, 110),
    "flareblitz" => mv!("Flare Blitz", Fire, Physical, 120),
    "pyroball" => mv!("Pyro Ball", Fire, Physical, 120),
    "surf" => mv!("Surf", Water, Special, 90),
    "hydropump" => mv!("Hydro Pump", Water, Special, 110),
    "aquajet" => mv!("Aqua Jet", Water, Physical, 40),
    "liquidation" => mv!("Liquidation", Water, Physical, 85),
    "thunderbolt" => mv!("Thunderbolt", Electric, Special, 90),
    "thunder" => mv!("Thunder", Electric, Special, 110),
    "voltswitch" => mv!("Volt Switch", Electric, Special, 70),
    "energyball" => mv!("Energy Ball", Grass, Special, 90),
    "gigadrain" => mv!("Giga Drain", Grass, Special, 75),
    "leafblade" => mv!("Leaf Blade", Grass, Physical, 90),
    "woodhammer" => mv!("Wood Hammer", Grass, Physical, 120),
    "icebeam" => mv!("Ice Beam", Ice, Special, 90),
    "blizzard" => mv!("Blizzard", Ice, Special, 110),
    "iceshard" => mv!("Ice Shard", Ice, Physical, 40),
    "iciclespear" => mv!("Icicle Spear", Ice, Physical, 25, 3),
    "closecombat" => mv!("Close Combat", Fighting, Physical, 120),
    "aurasphere" => mv!("Aura Sphere", Fighting, Special, 80),
    "drainpunch" => mv!("Drain Punch", Fighting, Physical, 75),
    "machpunch" => mv!("Mach Punch", Fighting, Physical, 40),
    "sludgebomb" => mv!("Sludge Bomb", Poison, Special, 90),
    "gunkshot" => mv!("Gunk Shot", Poison, Physical, 120),
    "poisonjab" => mv!("Poison Jab", Poison, Physical, 80),
    "earthquake" => mv!("Earthquake", Ground, Physical, 100),
    "earthpower" => mv!("Earth Power", Ground, Special, 90),
    "headlongrush" => mv!("Headlong Rush", Ground, Physical, 120),
    "bravebird" => mv!("Brave Bird", Flying, Physical, 120),
    "hurricane" => mv!("Hurricane", Flying, Special, 110),
    "airslash" => mv!("Air Slash", Flying, Special, 75),
    "psychic" => mv!("Psychic", Psychic, Special, 90),
    "psyshock" => mv!("Psyshock", Psychic, Special, 80),
    "zenheadbutt" => mv!("Zen Headbutt", Psychic, Physical, 80),
    "bugbuzz" => mv!("Bug Buzz", Bug, Special, 90),
    "uturn" => mv!("U-turn", Bug, Physical, 70),
    "xscissor" => mv!("X-Scissor", Bug, Physical, 80),
    "stoneedge" => mv!("Stone Edge", Rock, Physical, 100),
    "rockslide" => mv!("Rock Slide", Rock, Physical, 75),
    "powergem" => mv!("Power Gem", Rock, Special, 80),
    "shadowball" => mv!("Shadow Ball", Ghost, Special, 80),
    "shadowclaw" => mv!("Shadow Claw", Ghost, Physical, 70),
    "shadowsneak" => mv!("Shadow Sneak", Ghost, Physical, 40),
    "dragonclaw" => mv!("Dragon Claw", Dragon, Physical, 80),
    "dracometeor" => mv!("Draco Meteor", Dragon, Special, 130),
    "dragonpulse" => mv!("Dragon Pulse", Dragon, Special, 85),
    "dragondarts" => mv!("Dragon Darts", Dragon, Physical, 50, 2),
    "outrage" => mv!("Outrage", Dragon, Physical, 120),
    "crunch" => mv!("Crunch", Dark, Physical, 80),
    "darkpulse" => mv!("Dark Pulse", Dark, Special, 80),
    "knockoff" => mv!("Knock Off", Dark, Physical, 65),
    "suckerpunch" => mv!("Sucker Punch", Dark, Physical, 70),
    "ironhead" => mv!("Iron Head", Steel, Physical, 80),
    "flashcannon" => mv!("Flash Cannon", Steel, Special, 80),
    "bulletpunch" => mv!("Bullet Punch", Steel, Physical, 40),
    "makeitrain" => mv!("Make It Rain", Steel, Special, 120),
    "moonblast" => mv!("Moonblast", Fairy, Special, 95),
    "playrough" => mv!("Play Rough", Fairy, Physical, 90),
    "dazzlinggleam" => mv!("Dazzling Gleam", Fairy, Special, 80),
    "swordsdance" => mv!("Swords Dance", Normal, Status, 0),
    "protect" => mv!("Protect", Normal, Status, 0),
    "toxic" => mv!("Toxic", Poison, Status, 0),
    "stealthrock" => mv!("Stealth Rock", Rock, Status, 0),
    "willowisp" => mv!("Will-O-Wisp", Fire, Status, 0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let bolt = move_by_name("Thunderbolt").expect("thunderbolt should exist");
        assert_eq!(bolt.power, 90);
        assert_eq!(bolt.move_type, Type::Electric);
        assert_eq!(bolt.category, MoveCategory::Special);
    }

    #[test]
    fn test_punctuated_names() {
        assert!(move_by_name("U-turn").is_some());
        assert!(move_by_name("Will-O-Wisp").is_some());
        assert_eq!(move_by_name("Dragon Darts").unwrap().strikes, 2);
    }

    #[test]
    fn test_status_moves_have_zero_power() {
        let sd = move_by_name("Swords Dance").unwrap();
        assert_eq!(sd.category, MoveCategory::Status);
        assert_eq!(sd.power, 0);
    }
}
