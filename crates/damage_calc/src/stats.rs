//! Stat query: raw and boost-adjusted stat vectors for one combatant.

use serde::{Deserialize, Serialize};

use crate::entities::{Combatant, Investment, RawCombatant, STAT_SPE};
use crate::error::EngineError;
use crate::oracle::MechanicsOracle;

/// Stat query request.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsRequest {
    pub pokemon: RawCombatant,
    /// Assume maximum speed investment instead of the supplied spread.
    pub max_speed: bool,
}

/// Derived stat vector for one combatant.
///
/// Only speed is reported with its boost applied; the calling harness uses
/// this query for speed planning and reads the other stats unboosted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatReport {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
    pub boosted_spe: u16,
    pub species: String,
    pub level: u8,
}

/// Resolve the stat vector for a combatant description.
pub fn get_stats<O: MechanicsOracle>(
    oracle: &O,
    gen: u8,
    request: &StatsRequest,
) -> Result<StatReport, EngineError> {
    let investment = if request.max_speed {
        Investment::MaxSpeed
    } else {
        Investment::Actual
    };
    let combatant = Combatant::build(&request.pokemon, investment)?;
    let derived = oracle.derive_stats(gen, &combatant)?;

    let [hp, atk, def, spa, spd, spe] = derived.stats;
    Ok(StatReport {
        hp,
        atk,
        def,
        spa,
        spd,
        spe,
        boosted_spe: derived.boosted[STAT_SPE],
        species: derived.species.to_string(),
        level: derived.level,
    })
}
