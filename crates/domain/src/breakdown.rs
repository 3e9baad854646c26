use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::{
    AggregationSettings, BreakdownError, CanonicalMuscle, Exercise, ExerciseContribution,
    MuscleAggregate, SetsByExercise, SubMuscle, aggregate,
};

/// Share of a sub-muscle within its parent muscle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMuscleShare {
    pub sub_muscle: SubMuscle,
    pub name: &'static str,
    pub sets: f32,
    pub exercises: Vec<ExerciseContribution>,
    /// Share of the volume of all sub-muscles of the same parent.
    pub percentage: u32,
    /// Share of the total volume of all muscles.
    pub overall_percentage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub primary: Vec<MuscleAggregate>,
    pub secondary: Vec<MuscleAggregate>,
    pub secondary_total_percentage: u32,
    pub total_sets: f32,
}

/// Result of a muscle breakdown as consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleBreakdown {
    /// Muscles targeted as primary muscle by at least one exercise, ranked.
    pub muscles: Vec<MuscleAggregate>,
    /// Muscles only ever targeted as secondary muscle, ranked.
    pub secondary_muscles: Vec<MuscleAggregate>,
    pub muscle_ids: Vec<CanonicalMuscle>,
    pub total_sets: f32,
    pub secondary_total_percentage: u32,
}

pub fn compute_muscle_breakdown(
    exercises: &[Exercise],
    sets: &SetsByExercise,
) -> Result<MuscleBreakdown, BreakdownError> {
    compute_muscle_breakdown_with(exercises, sets, &AggregationSettings::default())
}

pub fn compute_muscle_breakdown_with(
    exercises: &[Exercise],
    sets: &SetsByExercise,
    settings: &AggregationSettings,
) -> Result<MuscleBreakdown, BreakdownError> {
    let ranking = rank(aggregate(exercises, sets, settings)?);

    debug!(
        "muscle breakdown of {} exercises: {} primary, {} secondary muscles, {} total sets",
        exercises.len(),
        ranking.primary.len(),
        ranking.secondary.len(),
        ranking.total_sets
    );

    Ok(MuscleBreakdown {
        muscle_ids: ranking.primary.iter().map(|m| m.id).collect(),
        muscles: ranking.primary,
        secondary_muscles: ranking.secondary,
        total_sets: ranking.total_sets,
        secondary_total_percentage: ranking.secondary_total_percentage,
    })
}

/// Derive percentages from the final volumes and rank the muscles.
///
/// Percentages of muscles refer to the total volume of all muscles.
/// Percentages of sub-muscles refer to the summed volume of all sub-muscles
/// of the same parent, as not every exercise names a sub-muscle.
#[must_use]
pub fn rank(aggregates: BTreeMap<CanonicalMuscle, MuscleAggregate>) -> Ranking {
    let total_sets = aggregates.values().map(|m| m.sets).sum::<f32>();

    let (mut primary, mut secondary): (Vec<_>, Vec<_>) = aggregates
        .into_values()
        .map(|mut muscle| {
            muscle.percentage = percentage(muscle.sets, total_sets);
            muscle.sub_muscle_breakdown = sub_muscle_breakdown(&muscle, total_sets);
            muscle
        })
        .partition(|m| m.is_primary_muscle);

    primary.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    secondary.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let secondary_total_percentage = secondary.iter().map(|m| m.percentage).sum();

    Ranking {
        primary,
        secondary,
        secondary_total_percentage,
        total_sets,
    }
}

fn sub_muscle_breakdown(muscle: &MuscleAggregate, total_sets: f32) -> Option<Vec<SubMuscleShare>> {
    if muscle.sub_muscles.is_empty() {
        return None;
    }

    let sub_muscle_total = muscle.sub_muscles.values().map(|s| s.sets).sum::<f32>();

    let mut shares = muscle
        .sub_muscles
        .iter()
        .map(|(sub_muscle, aggregate)| SubMuscleShare {
            sub_muscle: *sub_muscle,
            name: sub_muscle.label(),
            sets: aggregate.sets,
            exercises: aggregate.exercises.clone(),
            percentage: percentage(aggregate.sets, sub_muscle_total),
            overall_percentage: percentage(aggregate.sets, total_sets),
        })
        .collect::<Vec<_>>();

    shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    Some(shares)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(part: f32, total: f32) -> u32 {
    if total <= 0.0 {
        0
    } else {
        (f64::from(part) / f64::from(total) * 100.0).round() as u32
    }
}
