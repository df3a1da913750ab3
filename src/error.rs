//! Error types for gear set calculation.
//!
//! Almost nothing the engine does can fail: missing rows are skipped and
//! contribute zero. The errors here cover the cases where continuing
//! would produce silently wrong results, or where a caller asked for
//! something that does not exist.

use thiserror::Error;

/// Format the quality suffix of a food id.
fn quality_suffix(hq: &bool) -> &'static str {
    if *hq {
        " (HQ)"
    } else {
        ""
    }
}

/// Errors that can occur while configuring or running a calculation.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::CalcError;
///
/// let err = CalcError::UnknownFood { food_id: 42, hq: true };
/// assert_eq!(err.to_string(), "Unknown food: 42 (HQ)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The core game tables are not loaded.
    #[error("Game data is not ready")]
    DataNotReady,

    /// No food in the catalog matches the requested id and quality.
    #[error("Unknown food: {food_id}{}", quality_suffix(.hq))]
    UnknownFood { food_id: u32, hq: bool },

    /// No medicine in the catalog matches the requested id.
    #[error("Unknown medicine: {food_id}")]
    UnknownMedicine { food_id: u32 },

    /// The engine configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The game tables could not be parsed.
    #[error("Invalid game tables: {0}")]
    InvalidTables(String),
}
