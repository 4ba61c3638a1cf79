use serde::{Deserialize, Serialize};

use crate::normalizer::WeightUnit;

/// A structured workout-set command extracted from one transcript.
///
/// Produced fresh per parse attempt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Spoken exercise name with original casing, `None` when the transcript
    /// led straight with a number ("100 kg 5 reps").
    pub exercise_name: Option<String>,
    /// Unit-agnostic weight value, always finite and non-negative.
    pub weight: f64,
    /// Rep count; zero when the reps anchor was missing.
    pub reps: u32,
    /// The unit word spoken after the weight, recorded but never converted.
    pub unit: Option<WeightUnit>,
    /// True when `reps` was defaulted to zero because no numeric token
    /// followed the weight anchor. Distinguishes the permissive degrade from
    /// a spoken "0 reps".
    pub reps_defaulted: bool,
}
