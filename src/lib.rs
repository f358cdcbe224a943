#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Tabletop dice session logic: uniform rolls for the standard polyhedral
//! dice, face-image identifier lookup (including the percentile tens/units
//! pair) and a small immutable-snapshot state machine tying them together
//! for a front end to drive.


#[cfg(test)]
mod roll_test_strategies;

mod asset;
mod die;
mod error;
mod roll;
mod session;

pub use asset::{face_asset, percentile_asset, percentile_pair, AssetId, PercentileDie};
pub use die::DieSize;
pub use error::Error;
pub use roll::{roll_sides, roll_sides_with, DicePool, RollOutcome};
pub use session::Session;
