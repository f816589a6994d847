//! Entity builders: raw request fragments become immutable domain values.
//!
//! `Combatant`, `Attack` and `FieldContext` are constructed fresh per request
//! and never mutated afterwards. Validation is limited to required-name
//! presence; every other field falls back to an engine-defined default.

use serde::Deserialize;

use crate::dex::{normalize_key, NatureId, Type};
use crate::error::EngineError;

/// Default IVs (perfect)
pub const DEFAULT_IVS: [u8; 6] = [31, 31, 31, 31, 31, 31];

/// Default EVs (none)
pub const DEFAULT_EVS: [u8; 6] = [0, 0, 0, 0, 0, 0];

/// EV spread assumed for a combatant with unknown investment
pub const MAX_SPEED_EVS: [u8; 6] = [0, 0, 0, 0, 0, 252];

/// Default level
pub const DEFAULT_LEVEL: u8 = 100;

/// Stat indices: [HP, Atk, Def, SpA, SpD, Spe]
pub const STAT_HP: usize = 0;
pub const STAT_ATK: usize = 1;
pub const STAT_DEF: usize = 2;
pub const STAT_SPA: usize = 3;
pub const STAT_SPD: usize = 4;
pub const STAT_SPE: usize = 5;

// ============================================================================
// Status & Side Condition Flags
// ============================================================================

bitflags::bitflags! {
    /// Major status conditions (only one can be active at a time)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Status: u8 {
        const NONE      = 0;
        const BURN      = 1 << 0;
        const FREEZE    = 1 << 1;
        const PARALYSIS = 1 << 2;
        const POISON    = 1 << 3;
        const TOXIC     = 1 << 4;
        const SLEEP     = 1 << 5;
    }
}

impl Status {
    /// Parse a status code ("brn", "par", ...). Unknown codes map to NONE.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "brn" | "burn" | "burned" => Status::BURN,
            "frz" | "freeze" | "frozen" => Status::FREEZE,
            "par" | "paralysis" | "paralyzed" => Status::PARALYSIS,
            "psn" | "poison" | "poisoned" => Status::POISON,
            "tox" | "toxic" => Status::TOXIC,
            "slp" | "sleep" | "asleep" => Status::SLEEP,
            _ => Status::NONE,
        }
    }
}

bitflags::bitflags! {
    /// Per-side field conditions (screens, hazards, tailwind)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SideConditions: u16 {
        const REFLECT       = 1 << 0;
        const LIGHT_SCREEN  = 1 << 1;
        const AURORA_VEIL   = 1 << 2;
        const TAILWIND      = 1 << 3;
        const STEALTH_ROCK  = 1 << 4;
        const STICKY_WEB    = 1 << 5;
        const SAFEGUARD     = 1 << 6;
    }
}

// ============================================================================
// Raw (wire) shapes
// ============================================================================

/// Per-stat values as they arrive on the wire (all optional).
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStatSpread {
    pub hp: Option<u16>,
    pub atk: Option<u16>,
    pub def: Option<u16>,
    pub spa: Option<u16>,
    pub spd: Option<u16>,
    pub spe: Option<u16>,
}

impl RawStatSpread {
    /// Materialize onto a base array, clamping each value to `max`.
    fn onto(&self, mut base: [u8; 6], max: u16) -> [u8; 6] {
        let slots = [self.hp, self.atk, self.def, self.spa, self.spd, self.spe];
        for (i, slot) in slots.iter().enumerate() {
            if let Some(v) = slot {
                base[i] = (*v).min(max) as u8;
            }
        }
        base
    }
}

/// Boost stages as they arrive on the wire.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBoostSpread {
    pub atk: Option<i8>,
    pub def: Option<i8>,
    pub spa: Option<i8>,
    pub spd: Option<i8>,
    pub spe: Option<i8>,
}

impl RawBoostSpread {
    /// Boost stages aligned to the stats array (HP slot stays 0), each
    /// clamped to the legal -6..+6 range.
    fn to_array(self) -> [i8; 6] {
        let mut boosts = [0i8; 6];
        let slots = [self.atk, self.def, self.spa, self.spd, self.spe];
        for (i, slot) in slots.iter().enumerate() {
            if let Some(v) = *slot {
                boosts[i + 1] = v.clamp(-6, 6);
            }
        }
        boosts
    }
}

/// Raw combatant description from the request payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCombatant {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub nature: Option<String>,
    pub evs: Option<RawStatSpread>,
    pub ivs: Option<RawStatSpread>,
    pub boosts: Option<RawBoostSpread>,
    pub status: Option<String>,
    pub tera_type: Option<String>,
    pub moves: Option<Vec<String>>,
    #[serde(rename = "curHP")]
    pub cur_hp: Option<u16>,
    #[serde(rename = "originalCurHP")]
    pub original_cur_hp: Option<u16>,
    /// Speed Resolver only: this side's true stats are known.
    pub actual_stats: Option<bool>,
}

/// Raw move usage description from the request payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAttack {
    pub name: Option<String>,
    pub use_z: Option<bool>,
    pub use_max: Option<bool>,
    pub is_crit: Option<bool>,
    pub is_stellar_first_use: Option<bool>,
    pub hits: Option<u8>,
    pub times_used: Option<u32>,
    pub times_used_with_metronome: Option<u32>,
}

/// Raw per-side condition overrides.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSide {
    pub is_reflect: Option<bool>,
    pub is_light_screen: Option<bool>,
    pub is_aurora_veil: Option<bool>,
    pub is_tailwind: Option<bool>,
    #[serde(rename = "isSR")]
    pub is_sr: Option<bool>,
    pub is_sticky_web: Option<bool>,
    pub is_safeguard: Option<bool>,
    pub spikes: Option<u8>,
}

/// Raw field description.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawField {
    pub game_type: Option<String>,
    pub weather: Option<String>,
    pub terrain: Option<String>,
    pub attacker_side: Option<RawSide>,
    pub defender_side: Option<RawSide>,
}

// ============================================================================
// Built entities
// ============================================================================

/// Construction mode for a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Investment {
    /// Fields taken as given; absent spreads use the engine defaults.
    Actual,
    /// As `Actual`, but an absent EV/IV spread assumes maximum speed
    /// investment (Speed Resolver's known-stats path).
    ActualOrMaxSpeed,
    /// True investment unknown: max speed EVs, perfect IVs, +Spe nature,
    /// level defaulted to 100.
    MaxSpeed,
}

/// Normalized description of one combatant's battle-relevant attributes.
#[derive(Clone, Debug)]
pub struct Combatant {
    /// Name as supplied by the caller (species resolution happens in the oracle)
    pub name: String,
    pub level: u8,
    pub nature: NatureId,
    /// [HP, Atk, Def, SpA, SpD, Spe]
    pub evs: [u8; 6],
    pub ivs: [u8; 6],
    /// Boost stages aligned to the stats array; HP slot is always 0
    pub boosts: [i8; 6],
    pub ability: Option<String>,
    pub item: Option<String>,
    pub status: Status,
    pub tera_type: Option<Type>,
    pub moves: Vec<String>,
    pub cur_hp: Option<u16>,
    pub original_cur_hp: Option<u16>,
}

impl Combatant {
    /// Build a combatant from raw input.
    ///
    /// Fails iff `name` is missing or blank; no partial value escapes.
    pub fn build(raw: &RawCombatant, investment: Investment) -> Result<Self, EngineError> {
        let name = raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(EngineError::Validation("pokemon.name"))?
            .to_string();

        let (evs, ivs, nature) = match investment {
            Investment::Actual | Investment::ActualOrMaxSpeed => {
                let ev_base = if raw.evs.is_none() && investment == Investment::ActualOrMaxSpeed {
                    MAX_SPEED_EVS
                } else {
                    DEFAULT_EVS
                };
                let evs = raw.evs.map_or(ev_base, |s| s.onto(ev_base, 252));
                let ivs = raw.ivs.map_or(DEFAULT_IVS, |s| s.onto(DEFAULT_IVS, 31));
                let nature = raw
                    .nature
                    .as_deref()
                    .and_then(NatureId::from_str)
                    .unwrap_or_default();
                (evs, ivs, nature)
            }
            Investment::MaxSpeed => (MAX_SPEED_EVS, DEFAULT_IVS, NatureId::Jolly),
        };

        Ok(Combatant {
            name,
            level: raw.level.map_or(DEFAULT_LEVEL, |l| l.clamp(1, 100)),
            nature,
            evs,
            ivs,
            boosts: raw.boosts.map_or([0; 6], RawBoostSpread::to_array),
            ability: raw.ability.clone().filter(|s| !s.is_empty()),
            item: raw.item.clone().filter(|s| !s.is_empty()),
            status: raw
                .status
                .as_deref()
                .map_or(Status::NONE, Status::from_code),
            tera_type: raw.tera_type.as_deref().and_then(Type::from_str),
            moves: raw.moves.clone().unwrap_or_default(),
            cur_hp: raw.cur_hp,
            original_cur_hp: raw.original_cur_hp,
        })
    }

    /// Normalized lookup key for species resolution.
    pub fn species_key(&self) -> String {
        normalize_key(&self.name)
    }

    /// Speed boost stage.
    #[inline]
    pub fn spe_boost(&self) -> i8 {
        self.boosts[STAT_SPE]
    }
}

/// Normalized description of one move usage context.
#[derive(Clone, Debug)]
pub struct Attack {
    pub name: String,
    pub use_z: bool,
    pub use_max: bool,
    pub is_crit: bool,
    pub is_stellar_first_use: bool,
    /// Strike-count override; `None` defers to the move's own strike count
    pub hits: Option<u8>,
    pub times_used: u32,
    pub times_used_with_metronome: u32,
}

impl Attack {
    /// Build a move usage from raw input. Fails iff `name` is missing/blank.
    pub fn build(raw: &RawAttack) -> Result<Self, EngineError> {
        let name = raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(EngineError::Validation("move.name"))?
            .to_string();

        Ok(Attack {
            name,
            use_z: raw.use_z.unwrap_or(false),
            use_max: raw.use_max.unwrap_or(false),
            is_crit: raw.is_crit.unwrap_or(false),
            is_stellar_first_use: raw.is_stellar_first_use.unwrap_or(false),
            hits: raw.hits,
            times_used: raw.times_used.unwrap_or(0),
            times_used_with_metronome: raw.times_used_with_metronome.unwrap_or(0),
        })
    }
}

/// Game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameType {
    #[default]
    Singles,
    Doubles,
}

/// Conditions on one side of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideState {
    pub conditions: SideConditions,
    /// Spikes layers (0-3)
    pub spikes: u8,
}

impl SideState {
    /// Merge raw overrides onto this side. Supplied flags set or clear the
    /// corresponding condition; absent flags leave the base untouched.
    pub fn merge(mut self, raw: &RawSide) -> Self {
        let flags = [
            (raw.is_reflect, SideConditions::REFLECT),
            (raw.is_light_screen, SideConditions::LIGHT_SCREEN),
            (raw.is_aurora_veil, SideConditions::AURORA_VEIL),
            (raw.is_tailwind, SideConditions::TAILWIND),
            (raw.is_sr, SideConditions::STEALTH_ROCK),
            (raw.is_sticky_web, SideConditions::STICKY_WEB),
            (raw.is_safeguard, SideConditions::SAFEGUARD),
        ];
        for (value, flag) in flags {
            if let Some(on) = value {
                self.conditions.set(flag, on);
            }
        }
        if let Some(layers) = raw.spikes {
            self.spikes = layers.min(3);
        }
        self
    }

    /// Whether a screen protects this side against the given category.
    pub fn has_screen(&self, physical: bool) -> bool {
        if self.conditions.contains(SideConditions::AURORA_VEIL) {
            return true;
        }
        if physical {
            self.conditions.contains(SideConditions::REFLECT)
        } else {
            self.conditions.contains(SideConditions::LIGHT_SCREEN)
        }
    }
}

/// Normalized description of battle-wide and per-side conditions.
#[derive(Clone, Debug, Default)]
pub struct FieldContext {
    pub game_type: GameType,
    pub weather: Option<String>,
    pub terrain: Option<String>,
    pub attacker_side: SideState,
    pub defender_side: SideState,
}

impl FieldContext {
    /// Build a field context. Never fails; absent input yields the default
    /// (singles, empty sides). Caller-supplied side conditions merge onto the
    /// default sides independently.
    pub fn build(raw: Option<&RawField>) -> Self {
        let Some(raw) = raw else {
            return FieldContext::default();
        };

        let game_type = match raw.game_type.as_deref() {
            Some(s) if s.eq_ignore_ascii_case("doubles") => GameType::Doubles,
            _ => GameType::Singles,
        };

        let base = SideState::default();
        FieldContext {
            game_type,
            weather: raw.weather.clone().filter(|s| !s.is_empty()),
            terrain: raw.terrain.clone().filter(|s| !s.is_empty()),
            attacker_side: raw
                .attacker_side
                .as_ref()
                .map_or(base, |side| base.merge(side)),
            defender_side: raw
                .defender_side
                .as_ref()
                .map_or(base, |side| base.merge(side)),
        }
    }
}
