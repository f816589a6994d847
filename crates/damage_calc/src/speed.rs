//! Speed resolver: effective speed and move-order verdicts under
//! incomplete information.
//!
//! An undiscovered opponent is assumed to run maximum speed investment
//! (worst case for the caller); a side flagged `actualStats` is built from
//! its supplied spread instead.

use serde::{Deserialize, Serialize};

use crate::entities::{Combatant, Investment, RawCombatant, STAT_SPE};
use crate::error::EngineError;
use crate::oracle::MechanicsOracle;

/// Speed comparison request: two combatant descriptions.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpeedRequest {
    pub pokemon1: RawCombatant,
    pub pokemon2: RawCombatant,
}

/// Who moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SpeedVerdict {
    #[serde(rename = "POKEMON1_FASTER")]
    Pokemon1Faster,
    #[serde(rename = "POKEMON2_FASTER")]
    Pokemon2Faster,
    /// Genuine speed ties are resolved by chance in-game; no tie-break
    /// inference is applied here.
    #[serde(rename = "SPEED_TIE")]
    SpeedTie,
}

/// Per-side audit trail: enough to verify the verdict without recomputing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedSummary {
    pub name: String,
    pub base_spe: u8,
    pub raw_spe: u16,
    pub effective_spe: u16,
    pub boost: i8,
}

/// Result of a speed comparison.
#[derive(Clone, Debug, Serialize)]
pub struct SpeedComparison {
    pub pokemon1: SpeedSummary,
    pub pokemon2: SpeedSummary,
    pub verdict: SpeedVerdict,
}

fn side_summary<O: MechanicsOracle>(
    oracle: &O,
    gen: u8,
    raw: &RawCombatant,
) -> Result<SpeedSummary, EngineError> {
    let investment = if raw.actual_stats.unwrap_or(false) {
        Investment::ActualOrMaxSpeed
    } else {
        Investment::MaxSpeed
    };
    let combatant = Combatant::build(raw, investment)?;
    let derived = oracle.derive_stats(gen, &combatant)?;

    Ok(SpeedSummary {
        name: derived.species.to_string(),
        base_spe: derived.base_stats[STAT_SPE],
        raw_spe: derived.stats[STAT_SPE],
        effective_spe: derived.boosted[STAT_SPE],
        boost: combatant.spe_boost(),
    })
}

/// Compare effective speeds of two combatants.
pub fn compare_speed<O: MechanicsOracle>(
    oracle: &O,
    gen: u8,
    request: &SpeedRequest,
) -> Result<SpeedComparison, EngineError> {
    let pokemon1 = side_summary(oracle, gen, &request.pokemon1)?;
    let pokemon2 = side_summary(oracle, gen, &request.pokemon2)?;

    let verdict = match pokemon1.effective_spe.cmp(&pokemon2.effective_spe) {
        std::cmp::Ordering::Greater => SpeedVerdict::Pokemon1Faster,
        std::cmp::Ordering::Less => SpeedVerdict::Pokemon2Faster,
        std::cmp::Ordering::Equal => SpeedVerdict::SpeedTie,
    };

    Ok(SpeedComparison {
        pokemon1,
        pokemon2,
        verdict,
    })
}
