//! Bundled mechanics oracle.
//!
//! `CalcOracle` implements the modern (Gen 3+) stat and damage formulas over
//! the embedded dex. It resolves species/move names, derives stat vectors,
//! and runs the damage modifier chain in cartridge order:
//! random roll, STAB, type effectiveness, burn, screens.
//!
//! Abilities and held items are accepted on the entities but not modeled in
//! the damage chain; a richer oracle can replace this one behind the
//! `MechanicsOracle` trait without touching the resolution layer.

use super::formula::{
    apply_boost, apply_modifier, apply_random_roll, calc_hp_stat, calc_other_stat, get_base_damage,
};
use super::{AttackOutcome, DerivedStats, MechanicsOracle};
use crate::dex::{move_by_name, species_by_name, type_effectiveness, BattleStat, MoveCategory, Type};
use crate::entities::{Attack, Combatant, FieldContext, Status, STAT_HP};
use crate::error::EngineError;

/// Number of random damage rolls (85-100%).
const ROLL_COUNT: usize = 16;

/// STAB modifier on the 4096 scale (1.5x).
const STAB_MOD: u16 = 6144;

/// Tera STAB on the original type (2.0x).
const TERA_STAB_MOD: u16 = 8192;

/// Screen modifier in singles (0.5x).
const SCREEN_MOD: u16 = 2048;

/// Latest generation the bundled oracle understands.
pub const LATEST_GEN: u8 = 9;

/// Deterministic, in-process mechanics oracle over the embedded dex.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalcOracle;

impl CalcOracle {
    fn check_gen(gen: u8) -> Result<(), EngineError> {
        if !(3..=LATEST_GEN).contains(&gen) {
            return Err(EngineError::oracle(format!(
                "Unsupported generation: {gen} (supported: 3-{LATEST_GEN})"
            )));
        }
        Ok(())
    }

    /// Defensive typing, honoring Terastallization in Gen 9.
    fn defensive_types(gen: u8, combatant: &Combatant, species_types: [Type; 2]) -> (Type, Option<Type>) {
        if gen >= 9 {
            if let Some(tera) = combatant.tera_type {
                return (tera, None);
            }
        }
        let secondary = if species_types[1] != species_types[0] {
            Some(species_types[1])
        } else {
            None
        };
        (species_types[0], secondary)
    }

    /// STAB modifier for the attacker using a move of `move_type`.
    fn stab_modifier(gen: u8, attacker: &Combatant, species_types: [Type; 2], move_type: Type) -> u16 {
        let native = species_types[0] == move_type || species_types[1] == move_type;
        if gen >= 9 && attacker.tera_type == Some(move_type) {
            // Tera into an original type stacks to 2x
            return if native { TERA_STAB_MOD } else { STAB_MOD };
        }
        if native {
            STAB_MOD
        } else {
            4096
        }
    }
}

impl MechanicsOracle for CalcOracle {
    fn derive_stats(&self, gen: u8, combatant: &Combatant) -> Result<DerivedStats, EngineError> {
        Self::check_gen(gen)?;

        let species = species_by_name(&combatant.name).ok_or_else(|| {
            EngineError::oracle(format!("Unknown species: {}", combatant.name))
        })?;

        let level = combatant.level as u32;
        let base = species.base_stats;

        let mut stats = [0u16; 6];
        stats[STAT_HP] = calc_hp_stat(
            base[0] as u32,
            combatant.ivs[0] as u32,
            combatant.evs[0] as u32,
            level,
        );
        let nature_stats = [
            BattleStat::Atk,
            BattleStat::Def,
            BattleStat::SpA,
            BattleStat::SpD,
            BattleStat::Spe,
        ];
        for i in 1..6 {
            stats[i] = calc_other_stat(
                base[i] as u32,
                combatant.ivs[i] as u32,
                combatant.evs[i] as u32,
                level,
                combatant.nature,
                nature_stats[i - 1],
            );
        }

        let mut boosted = stats;
        for i in 1..6 {
            boosted[i] = apply_boost(stats[i], combatant.boosts[i]);
        }

        Ok(DerivedStats {
            species: species.name,
            base_stats: base,
            stats,
            boosted,
            level: combatant.level,
        })
    }

    fn resolve_attack(
        &self,
        gen: u8,
        attacker: &Combatant,
        defender: &Combatant,
        attack: &Attack,
        field: &FieldContext,
    ) -> Result<AttackOutcome, EngineError> {
        Self::check_gen(gen)?;

        if attack.use_z && gen != 7 {
            return Err(EngineError::oracle("Z-Moves require Generation 7"));
        }
        if attack.use_max && gen != 8 {
            return Err(EngineError::oracle("Max Moves require Generation 8"));
        }

        let atk_species = species_by_name(&attacker.name).ok_or_else(|| {
            EngineError::oracle(format!("Unknown species: {}", attacker.name))
        })?;
        let def_species = species_by_name(&defender.name).ok_or_else(|| {
            EngineError::oracle(format!("Unknown species: {}", defender.name))
        })?;
        let atk_stats = self.derive_stats(gen, attacker)?;
        let def_stats = self.derive_stats(gen, defender)?;
        let move_data = move_by_name(&attack.name)
            .ok_or_else(|| EngineError::oracle(format!("Unknown move: {}", attack.name)))?;

        let max_hp = def_stats.stats[STAT_HP];
        let current_hp = defender.cur_hp.unwrap_or(max_hp).min(max_hp);

        if move_data.category == MoveCategory::Status || move_data.power == 0 {
            return Ok(zero_outcome(&atk_stats, &def_stats, move_data.name, max_hp));
        }

        let physical = move_data.category == MoveCategory::Physical;
        let (atk_idx, def_idx) = if physical { (1, 2) } else { (3, 4) };

        // A crit ignores the attacker's negative boosts and the defender's
        // positive ones.
        let attack_stat = if attack.is_crit {
            atk_stats.stats[atk_idx].max(atk_stats.boosted[atk_idx])
        } else {
            atk_stats.boosted[atk_idx]
        };
        let defense_stat = if attack.is_crit {
            def_stats.stats[def_idx].min(def_stats.boosted[def_idx])
        } else {
            def_stats.boosted[def_idx]
        };

        let (def_type1, def_type2) = Self::defensive_types(gen, defender, def_species.types);
        let effectiveness = type_effectiveness(move_data.move_type, def_type1, def_type2);
        if effectiveness == 0 {
            return Ok(zero_outcome(&atk_stats, &def_stats, move_data.name, max_hp));
        }

        let stab = Self::stab_modifier(gen, attacker, atk_species.types, move_data.move_type);
        let burned = physical && attacker.status.contains(Status::BURN);
        let screened = !attack.is_crit && field.defender_side.has_screen(physical);
        let strikes = attack.hits.unwrap_or(move_data.strikes).max(1) as u32;

        let base_damage = {
            let base = get_base_damage(
                atk_stats.level as u32,
                move_data.power as u32,
                attack_stat as u32,
                defense_stat as u32,
            );
            if attack.is_crit {
                base * 3 / 2
            } else {
                base
            }
        };

        let mut rolls = Vec::with_capacity(ROLL_COUNT);
        for i in 0..ROLL_COUNT {
            let mut damage = apply_random_roll(base_damage, i as u8);
            damage = apply_modifier(damage, stab);
            damage = damage * effectiveness as u32 / 4;
            if burned {
                damage /= 2;
            }
            if screened {
                damage = apply_modifier(damage, SCREEN_MOD);
            }
            // A connecting, non-immune hit deals at least 1 per strike
            rolls.push((damage.max(1) * strikes).min(u16::MAX as u32) as u16);
        }

        let ko_rolls = rolls.iter().filter(|&&d| d >= current_hp).count();
        let ko_chance = ko_rolls as f64 * 100.0 / ROLL_COUNT as f64;

        let min = rolls[0];
        let max = rolls[ROLL_COUNT - 1];
        let description = describe(&atk_stats, &def_stats, move_data.name, min, max, max_hp);
        let full_description = format!(
            "{} -- {}",
            description,
            ko_text(min, max, current_hp, ko_chance)
        );

        Ok(AttackOutcome {
            rolls,
            ko_chance,
            description,
            full_description,
        })
    }
}

fn percent_of(value: u16, max_hp: u16) -> f64 {
    if max_hp == 0 {
        return 0.0;
    }
    value as f64 * 100.0 / max_hp as f64
}

fn describe(
    atk: &DerivedStats,
    def: &DerivedStats,
    move_name: &str,
    min: u16,
    max: u16,
    max_hp: u16,
) -> String {
    format!(
        "{} {} vs. {}: {}-{} ({:.1} - {:.1}%)",
        atk.species,
        move_name,
        def.species,
        min,
        max,
        percent_of(min, max_hp),
        percent_of(max, max_hp),
    )
}

fn ko_text(min: u16, max: u16, current_hp: u16, ko_chance: f64) -> String {
    if max == 0 {
        return "no damage".to_string();
    }
    if min >= current_hp {
        return "guaranteed OHKO".to_string();
    }
    if ko_chance > 0.0 {
        return format!("{ko_chance:.1}% chance to OHKO");
    }
    let worst = (current_hp as u32).div_ceil(max as u32);
    let best = (current_hp as u32).div_ceil(min.max(1) as u32);
    if worst == best {
        format!("guaranteed {worst}HKO")
    } else {
        format!("possible {worst}HKO")
    }
}

fn zero_outcome(
    atk: &DerivedStats,
    def: &DerivedStats,
    move_name: &str,
    max_hp: u16,
) -> AttackOutcome {
    let description = describe(atk, def, move_name, 0, 0, max_hp);
    let full_description = format!("{description} -- no damage");
    AttackOutcome {
        rolls: vec![0; ROLL_COUNT],
        ko_chance: 0.0,
        description,
        full_description,
    }
}
