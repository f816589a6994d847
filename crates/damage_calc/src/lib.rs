//! Battle mechanics resolution engine.
//!
//! Answers three kinds of questions about a Pokemon battle state: what a
//! combatant's derived stats are, which of two combatants moves first under
//! incomplete information, and how much damage an attack deals. Requests
//! arrive as one JSON batch and are resolved independently in order.
//!
//! The mechanics math lives behind the [`MechanicsOracle`] trait; the
//! bundled [`CalcOracle`] implements it over an embedded dex.

pub mod batch;
pub mod damage;
pub mod dex;
pub mod entities;
pub mod error;
pub mod oracle;
pub mod speed;
pub mod stats;

pub use batch::{run_batch, BatchOutput, BatchPayload, Request, ResultEntry};
pub use damage::{resolve_damage, DamageReport, DamageRequest};
pub use entities::{Attack, Combatant, FieldContext, Investment};
pub use error::EngineError;
pub use oracle::{AttackOutcome, CalcOracle, DerivedStats, MechanicsOracle};
pub use speed::{compare_speed, SpeedComparison, SpeedRequest, SpeedVerdict};
pub use stats::{get_stats, StatReport, StatsRequest};
