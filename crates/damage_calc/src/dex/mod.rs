//! Embedded static data tables: types, natures, species, moves.
//!
//! Lookups key on normalized names (lowercased, non-alphanumerics stripped).

pub mod moves;
pub mod natures;
pub mod species;
pub mod types;

pub use moves::{move_by_name, MoveCategory, MoveData};
pub use natures::{BattleStat, NatureId};
pub use species::{normalize_key, species_by_name, Species};
pub use types::{type_effectiveness, Type, TYPE_CHART};
