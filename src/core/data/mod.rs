//! Plain data produced and consumed by the analysis.
//!
//! - `occurrence`: candidate strings found by classification
//! - `usage`: translation calls with statically known keys
//! - `entry`: key entries assigned by the lifecycle operations

mod entry;
mod occurrence;
mod usage;

pub use entry::*;
pub use occurrence::*;
pub use usage::*;
