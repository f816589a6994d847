//! Mechanics oracle interface.
//!
//! The resolution layer (speed, stats, damage, batch) is generic over
//! `MechanicsOracle`, the authority for stat derivation and attack outcomes.
//! The crate bundles [`CalcOracle`]; tests and embedders can substitute
//! their own implementation at the same seam.

pub mod calc;
pub mod formula;

pub use calc::CalcOracle;

use crate::entities::{Attack, Combatant, FieldContext};
use crate::error::EngineError;

/// Per-stat vectors derived from a fully-built combatant.
#[derive(Clone, Debug)]
pub struct DerivedStats {
    /// Resolved species display name
    pub species: &'static str,
    /// Base stats [HP, Atk, Def, SpA, SpD, Spe]
    pub base_stats: [u8; 6],
    /// Raw stats from the level/IV/EV/nature formula
    pub stats: [u16; 6],
    /// Boost-adjusted stats (HP slot equals the raw value)
    pub boosted: [u16; 6],
    pub level: u8,
}

/// Authoritative result of one attack resolution.
#[derive(Clone, Debug)]
pub struct AttackOutcome {
    /// Full damage roll distribution, ascending
    pub rolls: Vec<u16>,
    /// Probability (percent, 0-100) that a roll KOs the defender
    pub ko_chance: f64,
    /// One-line summary of the matchup
    pub description: String,
    /// Summary including the KO verdict
    pub full_description: String,
}

impl AttackOutcome {
    /// Minimum damage roll.
    pub fn min(&self) -> u16 {
        self.rolls.first().copied().unwrap_or(0)
    }

    /// Maximum damage roll.
    pub fn max(&self) -> u16 {
        self.rolls.last().copied().unwrap_or(0)
    }
}

/// External engine computing authoritative damage/KO results and stat
/// vectors from fully-specified entities.
pub trait MechanicsOracle {
    /// Derive raw and boost-adjusted stat vectors for one combatant.
    fn derive_stats(&self, gen: u8, combatant: &Combatant) -> Result<DerivedStats, EngineError>;

    /// Resolve one attack between two combatants under the given field.
    fn resolve_attack(
        &self,
        gen: u8,
        attacker: &Combatant,
        defender: &Combatant,
        attack: &Attack,
        field: &FieldContext,
    ) -> Result<AttackOutcome, EngineError>;
}
