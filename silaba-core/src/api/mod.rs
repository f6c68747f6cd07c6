//! Pipeline API
//!
//! Runs every domain stage in order and hands back either a complete
//! [`Analysis`] or the first failure.

mod analysis;
#[cfg(feature = "serde")]
mod report;

pub use analysis::{analyze, Analysis};
#[cfg(feature = "serde")]
pub use report::{AnalysisReport, TokenReport, UnitReport};
