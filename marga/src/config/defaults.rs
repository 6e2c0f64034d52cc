//! Default value functions for serde deserialization.

use crate::frontier::TieBreak;

pub fn timeout_ms() -> Option<f64> {
    None
}

pub fn tie_break() -> TieBreak {
    TieBreak::LowestHeuristic
}
