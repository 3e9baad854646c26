#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod alias;
mod breakdown;
mod error;
mod exercise;
mod muscle;
mod set;
mod settings;
mod vector;
mod volume;

pub use breakdown::{
    MuscleBreakdown, Ranking, SubMuscleShare, compute_muscle_breakdown,
    compute_muscle_breakdown_with, rank,
};
pub use error::BreakdownError;
pub use exercise::{Exercise, Targets};
pub use muscle::{CanonicalMuscle, Property, SubMuscle};
pub use set::{LoggedSet, Reps, completed_set_count};
pub use settings::{AggregationSettings, ExerciseMergeRule, PRIMARY_WEIGHT, SECONDARY_WEIGHT};
pub use vector::{ActivationVector, SLOTS, compute_activation_vector};
pub use volume::{
    ExerciseContribution, MuscleAggregate, SetsByExercise, SubMuscleAggregate, aggregate,
};
