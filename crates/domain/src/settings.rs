use serde::{Deserialize, Serialize};

use crate::BreakdownError;

pub const PRIMARY_WEIGHT: f32 = 1.0;
pub const SECONDARY_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregationSettings {
    pub primary_weight: f32,
    pub secondary_weight: f32,
    pub merge_rule: ExerciseMergeRule,
}

impl AggregationSettings {
    pub fn validate(&self) -> Result<(), BreakdownError> {
        for weight in [self.primary_weight, self.secondary_weight] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(BreakdownError::InvalidWeight(weight));
            }
        }
        Ok(())
    }
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            primary_weight: PRIMARY_WEIGHT,
            secondary_weight: SECONDARY_WEIGHT,
            merge_rule: ExerciseMergeRule::Overwrite,
        }
    }
}

/// How repeated occurrences of the same exercise are recorded in the
/// exercise list of a muscle.
///
/// The weighted volume of the muscle is the same for both rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseMergeRule {
    /// The set count of the latest occurrence replaces the recorded one.
    #[default]
    Overwrite,
    /// The set counts of all occurrences are summed up.
    Accumulate,
}

impl ExerciseMergeRule {
    #[must_use]
    pub fn merge(self, recorded: u32, current: u32) -> u32 {
        match self {
            ExerciseMergeRule::Overwrite => current,
            ExerciseMergeRule::Accumulate => recorded.saturating_add(current),
        }
    }
}
