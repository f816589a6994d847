//! Stat and damage arithmetic shared by the bundled oracle.
//!
//! The rounding behavior here matters: Game Freak's "pokeRound" rounds an
//! exact 0.5 DOWN, and every intermediate step of the damage formula
//! truncates. Callers that need bit-for-bit agreement with the cartridge
//! must go through these helpers rather than floating point.

use crate::dex::{BattleStat, NatureId};

/// Game Freak's rounding division: the fractional part must be strictly
/// greater than one half to round up.
#[inline]
pub fn pokeround(value: u32, divisor: u32) -> u32 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder > divisor / 2 {
        quotient + 1
    } else {
        quotient
    }
}

/// Apply a 4096-scale modifier with pokeRound (4096 = 1.0x).
#[inline]
pub fn apply_modifier(value: u32, modifier: u16) -> u32 {
    if modifier == 4096 {
        return value;
    }
    pokeround(value * modifier as u32, 4096)
}

/// Base damage before modifiers.
///
/// `floor((floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
/// with truncation at each step.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }
    let level_factor = 2 * level / 5 + 2;
    let numerator = level_factor * base_power * attack;
    numerator / defense / 50 + 2
}

/// Damage for one random roll (index 0 = 85%, index 15 = 100%).
#[inline]
pub fn apply_random_roll(base_damage: u32, roll_index: u8) -> u32 {
    let roll = 85 + roll_index.min(15) as u32;
    base_damage * roll / 100
}

/// Boost multiplier table: index 0 = -6, index 6 = 0, index 12 = +6.
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4), // -2: 0.5x
    (2, 3),
    (2, 2), //  0: 1.0x
    (3, 2), // +1: 1.5x
    (4, 2), // +2: 2.0x
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2), // +6: 4.0x
];

/// Apply a boost stage (-6..+6) to a stat.
pub fn apply_boost(stat: u16, stage: i8) -> u16 {
    let index = (stage.clamp(-6, 6) + 6) as usize;
    let (num, den) = BOOST_TABLE[index];
    (stat as u32 * num / den) as u16
}

/// HP stat: `floor((2 * Base + IV + floor(EV/4)) * Level / 100) + Level + 10`.
pub fn calc_hp_stat(base: u32, iv: u32, ev: u32, level: u32) -> u16 {
    (((2 * base + iv + ev / 4) * level / 100) + level + 10) as u16
}

/// Non-HP stat with nature modifier:
/// `floor((floor((2 * Base + IV + floor(EV/4)) * Level / 100) + 5) * Nature)`.
pub fn calc_other_stat(base: u32, iv: u32, ev: u32, level: u32, nature: NatureId, stat: BattleStat) -> u16 {
    let raw = ((2 * base + iv + ev / 4) * level / 100) + 5;
    let modifier = nature.stat_modifier(stat) as u32;
    (raw * modifier / 10) as u16
}
