use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{CanonicalMuscle, SubMuscle, alias};

/// Exercise record as authored in the exercise catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
}

impl Exercise {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        primary_muscles: &[&str],
        secondary_muscles: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            primary_muscles: primary_muscles.iter().map(ToString::to_string).collect(),
            secondary_muscles: secondary_muscles.iter().map(ToString::to_string).collect(),
        }
    }

    /// Resolve the muscle names of the exercise.
    ///
    /// A muscle listed as primary is never also a secondary target. Sub-muscles
    /// are only kept if their parent is targeted in the same role.
    #[must_use]
    pub fn targets(&self) -> Targets {
        let (primary, primary_sub_muscles) = self.resolve(&self.primary_muscles, &BTreeSet::new());
        let (secondary, secondary_sub_muscles) = self.resolve(&self.secondary_muscles, &primary);
        Targets {
            primary,
            secondary,
            primary_sub_muscles,
            secondary_sub_muscles,
        }
    }

    fn resolve(
        &self,
        names: &[String],
        excluded: &BTreeSet<CanonicalMuscle>,
    ) -> (BTreeSet<CanonicalMuscle>, BTreeSet<SubMuscle>) {
        let mut muscles = BTreeSet::new();
        let mut sub_muscles = BTreeSet::new();

        for name in names {
            let resolved = alias::lookup(name);
            match resolved.muscle {
                Some(muscle) => {
                    if !excluded.contains(&muscle) {
                        muscles.insert(muscle);
                    }
                }
                None => debug!("ignoring unknown muscle \"{name}\" of \"{}\"", self.name),
            }
            if let Some(sub_muscle) = resolved.sub_muscle {
                sub_muscles.insert(sub_muscle);
            }
        }

        sub_muscles.retain(|s| muscles.contains(&s.parent()));

        (muscles, sub_muscles)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Targets {
    pub primary: BTreeSet<CanonicalMuscle>,
    pub secondary: BTreeSet<CanonicalMuscle>,
    pub primary_sub_muscles: BTreeSet<SubMuscle>,
    pub secondary_sub_muscles: BTreeSet<SubMuscle>,
}

impl Targets {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::primary_and_secondary(
        Exercise::new("Bench Press", &["chest"], &["triceps", "front delts"]),
        Targets {
            primary: BTreeSet::from([CanonicalMuscle::Chest]),
            secondary: BTreeSet::from([CanonicalMuscle::Shoulders, CanonicalMuscle::Triceps]),
            ..Targets::default()
        }
    )]
    #[case::aliases_deduplicated(
        Exercise::new("Pull Up", &["lats", "latissimus dorsi", "traps"], &[]),
        Targets {
            primary: BTreeSet::from([CanonicalMuscle::Back]),
            primary_sub_muscles: BTreeSet::from([SubMuscle::Lats, SubMuscle::Traps]),
            ..Targets::default()
        }
    )]
    #[case::primary_takes_precedence(
        Exercise::new("Row", &["back"], &["rhomboids", "biceps"]),
        Targets {
            primary: BTreeSet::from([CanonicalMuscle::Back]),
            secondary: BTreeSet::from([CanonicalMuscle::Biceps]),
            ..Targets::default()
        }
    )]
    #[case::sub_muscle_without_parent(
        Exercise::new("Face Pull", &["rear delts"], &["rhomboids"]),
        Targets {
            primary: BTreeSet::from([CanonicalMuscle::Shoulders]),
            secondary: BTreeSet::from([CanonicalMuscle::Back]),
            secondary_sub_muscles: BTreeSet::from([SubMuscle::Rhomboids]),
            ..Targets::default()
        }
    )]
    #[case::sub_muscle_with_parent(
        Exercise::new("Reverse Fly", &["rear delts", "upper back"], &[]),
        Targets {
            primary: BTreeSet::from([CanonicalMuscle::Back, CanonicalMuscle::Shoulders]),
            primary_sub_muscles: BTreeSet::from([SubMuscle::UpperBack, SubMuscle::RearDelts]),
            ..Targets::default()
        }
    )]
    #[case::unknown(Exercise::new("Mystery", &["funbags"], &["???"]), Targets::default())]
    fn test_exercise_targets(#[case] exercise: Exercise, #[case] expected: Targets) {
        assert_eq!(exercise.targets(), expected);
    }

    #[test]
    fn test_targets_is_empty() {
        assert!(Exercise::new("Mystery", &["funbags"], &[]).targets().is_empty());
        assert!(!Exercise::new("Plank", &[], &["abs"]).targets().is_empty());
    }

    #[test]
    fn test_exercise_deserialize() {
        let exercise: Exercise = serde_json::from_str(
            r#"{"name": "Squat", "primaryMuscles": ["Quads"], "secondaryMuscles": ["glutes"]}"#,
        )
        .unwrap();

        assert_eq!(exercise, Exercise::new("Squat", &["Quads"], &["glutes"]));

        let exercise: Exercise = serde_json::from_str(r#"{"name": "Run"}"#).unwrap();

        assert_eq!(exercise, Exercise::new("Run", &[], &[]));
    }
}
