//! Damage resolver: builds both combatants with their true stats, delegates
//! the attack to the mechanics oracle, and augments the result with the
//! speed stats the calling harness needs for combined damage+order reasoning.

use serde::{Deserialize, Serialize};

use crate::entities::{Attack, Combatant, FieldContext, Investment, RawAttack, RawCombatant, RawField, STAT_SPE};
use crate::error::EngineError;
use crate::oracle::MechanicsOracle;

/// Damage calculation request.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DamageRequest {
    pub attacker: RawCombatant,
    pub defender: RawCombatant,
    #[serde(rename = "move")]
    pub attack: RawAttack,
    pub field: Option<RawField>,
}

/// Raw and boost-adjusted speed of one participant.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedStats {
    pub speed: u16,
    pub boosted_speed: u16,
}

/// Result of a damage calculation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    /// Full damage roll distribution, ascending
    pub damage: Vec<u16>,
    /// `[min, max]` of the distribution
    pub range: [u16; 2],
    pub description: String,
    pub full_description: String,
    /// Percent chance (0-100) that a roll KOs the defender
    pub ko_chance: f64,
    pub attacker_stats: SpeedStats,
    pub defender_stats: SpeedStats,
}

/// Resolve one attack between two fully-specified combatants.
pub fn resolve_damage<O: MechanicsOracle>(
    oracle: &O,
    gen: u8,
    request: &DamageRequest,
) -> Result<DamageReport, EngineError> {
    // Damage needs true stats; maximums are never inferred here
    let attacker = Combatant::build(&request.attacker, Investment::Actual)?;
    let defender = Combatant::build(&request.defender, Investment::Actual)?;
    let attack = Attack::build(&request.attack)?;
    let field = FieldContext::build(request.field.as_ref());

    let outcome = oracle.resolve_attack(gen, &attacker, &defender, &attack, &field)?;

    let speeds = |combatant: &Combatant| -> Result<SpeedStats, EngineError> {
        let derived = oracle.derive_stats(gen, combatant)?;
        Ok(SpeedStats {
            speed: derived.stats[STAT_SPE],
            boosted_speed: derived.boosted[STAT_SPE],
        })
    };

    Ok(DamageReport {
        range: [outcome.min(), outcome.max()],
        ko_chance: outcome.ko_chance,
        description: outcome.description.clone(),
        full_description: outcome.full_description.clone(),
        attacker_stats: speeds(&attacker)?,
        defender_stats: speeds(&defender)?,
        damage: outcome.rolls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::CalcOracle;

    fn request(attacker: &str, defender: &str, mv: &str) -> DamageRequest {
        DamageRequest {
            attacker: RawCombatant {
                name: Some(attacker.to_string()),
                ..Default::default()
            },
            defender: RawCombatant {
                name: Some(defender.to_string()),
                ..Default::default()
            },
            attack: RawAttack {
                name: Some(mv.to_string()),
                ..Default::default()
            },
            field: None,
        }
    }

    #[test]
    fn test_report_shape() {
        let report =
            resolve_damage(&CalcOracle, 9, &request("Garchomp", "Heatran", "Earthquake")).unwrap();

        assert_eq!(report.range, [516, 612]);
        assert_eq!(report.damage.len(), 16);
        assert_eq!(report.damage[0], report.range[0]);
        assert_eq!(report.damage[15], report.range[1]);
        assert!(report.range[0] <= report.range[1]);
        assert_eq!(report.ko_chance, 100.0);

        // Default spreads, neutral nature: Garchomp 240 Spe, Heatran 190
        assert_eq!(report.attacker_stats.speed, 240);
        assert_eq!(report.attacker_stats.boosted_speed, 240);
        assert_eq!(report.defender_stats.speed, 190);
    }

    #[test]
    fn test_boosted_speed_augmentation() {
        let mut req = request("Garchomp", "Heatran", "Earthquake");
        req.attacker.boosts = Some(crate::entities::RawBoostSpread {
            spe: Some(1),
            ..Default::default()
        });
        let report = resolve_damage(&CalcOracle, 9, &req).unwrap();
        assert_eq!(report.attacker_stats.speed, 240);
        assert_eq!(report.attacker_stats.boosted_speed, 360);
    }

    #[test]
    fn test_missing_move_name() {
        let mut req = request("Garchomp", "Heatran", "Earthquake");
        req.attack.name = None;
        let err = resolve_damage(&CalcOracle, 9, &req).unwrap_err();
        assert!(matches!(err, EngineError::Validation("move.name")));
    }

    #[test]
    fn test_oracle_rejection_propagates() {
        let req = request("Garchomp", "Heatran", "Imaginary Move");
        assert!(resolve_damage(&CalcOracle, 9, &req).is_err());
    }
}
