use std::collections::BTreeMap;

use log::trace;
use serde::Serialize;

use crate::{
    AggregationSettings, BreakdownError, CanonicalMuscle, Exercise, ExerciseMergeRule, LoggedSet,
    Property, SubMuscle, SubMuscleShare, completed_set_count,
};

/// Logged sets keyed by the index of the exercise in the exercise list.
pub type SetsByExercise = BTreeMap<usize, Vec<LoggedSet>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleAggregate {
    pub id: CanonicalMuscle,
    pub name: &'static str,
    /// Weighted volume.
    pub sets: f32,
    pub exercises: Vec<ExerciseContribution>,
    pub sub_muscles: BTreeMap<SubMuscle, SubMuscleAggregate>,
    pub is_primary_muscle: bool,
    /// Share of the total weighted volume, rounded to whole percent.
    pub percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_muscle_breakdown: Option<Vec<SubMuscleShare>>,
}

impl MuscleAggregate {
    #[must_use]
    pub fn new(id: CanonicalMuscle) -> Self {
        Self {
            id,
            name: id.name(),
            sets: 0.0,
            exercises: vec![],
            sub_muscles: BTreeMap::new(),
            is_primary_muscle: false,
            percentage: 0,
            sub_muscle_breakdown: None,
        }
    }

    fn add(&mut self, completed_sets: u32, weight: f32) {
        #[allow(clippy::cast_precision_loss)]
        let volume = completed_sets as f32 * weight;
        self.sets += volume;
    }

    fn record(
        &mut self,
        exercise: &str,
        completed_sets: u32,
        is_primary: bool,
        merge_rule: ExerciseMergeRule,
    ) {
        match self.exercises.iter_mut().find(|e| e.name == exercise) {
            Some(entry) => {
                if is_primary {
                    entry.sets = merge_rule.merge(entry.sets, completed_sets);
                    entry.is_primary = true;
                } else if !entry.is_primary {
                    entry.sets = merge_rule.merge(entry.sets, completed_sets);
                }
            }
            None => self.exercises.push(ExerciseContribution {
                name: exercise.to_string(),
                sets: completed_sets,
                is_primary,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseContribution {
    pub name: String,
    /// Completed sets, not weighted.
    pub sets: u32,
    pub is_primary: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SubMuscleAggregate {
    pub sets: f32,
    pub exercises: Vec<ExerciseContribution>,
}

impl SubMuscleAggregate {
    fn add(&mut self, exercise: &str, completed_sets: u32, weight: f32, is_primary: bool) {
        #[allow(clippy::cast_precision_loss)]
        let volume = completed_sets as f32 * weight;
        self.sets += volume;

        match self.exercises.iter_mut().find(|e| e.name == exercise) {
            Some(entry) => {
                entry.sets = entry.sets.saturating_add(completed_sets);
                entry.is_primary |= is_primary;
            }
            None => self.exercises.push(ExerciseContribution {
                name: exercise.to_string(),
                sets: completed_sets,
                is_primary,
            }),
        }
    }
}

/// Accumulate the weighted volume per muscle.
///
/// Every exercise contributes its number of completed sets, weighted by the
/// role the muscle plays in the exercise. Exercises without completed sets and
/// muscle names which cannot be resolved contribute nothing.
pub fn aggregate(
    exercises: &[Exercise],
    sets: &SetsByExercise,
    settings: &AggregationSettings,
) -> Result<BTreeMap<CanonicalMuscle, MuscleAggregate>, BreakdownError> {
    settings.validate()?;

    if let Some(index) = sets.keys().copied().find(|index| *index >= exercises.len()) {
        return Err(BreakdownError::ExerciseIndexOutOfRange {
            index,
            len: exercises.len(),
        });
    }

    let mut result: BTreeMap<CanonicalMuscle, MuscleAggregate> = BTreeMap::new();

    for (index, exercise) in exercises.iter().enumerate() {
        let completed_sets = sets
            .get(&index)
            .map_or(0, |sets| completed_set_count(sets));

        if completed_sets == 0 {
            trace!("skipping \"{}\" without completed sets", exercise.name);
            continue;
        }

        let targets = exercise.targets();

        for (muscles, weight, is_primary) in [
            (&targets.primary, settings.primary_weight, true),
            (&targets.secondary, settings.secondary_weight, false),
        ] {
            for muscle in muscles {
                let aggregate = result
                    .entry(*muscle)
                    .or_insert_with(|| MuscleAggregate::new(*muscle));
                aggregate.add(completed_sets, weight);
                aggregate.record(
                    &exercise.name,
                    completed_sets,
                    is_primary,
                    settings.merge_rule,
                );
            }
        }

        for (sub_muscles, weight, is_primary) in [
            (&targets.primary_sub_muscles, settings.primary_weight, true),
            (&targets.secondary_sub_muscles, settings.secondary_weight, false),
        ] {
            for sub_muscle in sub_muscles {
                if let Some(aggregate) = result.get_mut(&sub_muscle.parent()) {
                    aggregate.sub_muscles.entry(*sub_muscle).or_default().add(
                        &exercise.name,
                        completed_sets,
                        weight,
                        is_primary,
                    );
                }
            }
        }
    }

    for aggregate in result.values_mut() {
        aggregate.is_primary_muscle = aggregate.exercises.iter().any(|e| e.is_primary);
    }

    Ok(result)
}
