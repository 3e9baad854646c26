use derive_more::Deref;
use serde::Serialize;

use crate::{CanonicalMuscle, Property};

pub const SLOTS: usize = 11;

/// Activation of each muscle region in the fixed slot order of
/// [`CanonicalMuscle::slot`]. A slot is 1 if the muscle is active, 0 otherwise.
#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivationVector([u8; SLOTS]);

impl ActivationVector {
    #[must_use]
    pub fn is_active(&self, muscle: CanonicalMuscle) -> bool {
        muscle.slot().is_some_and(|slot| self.0[slot] == 1)
    }

    #[must_use]
    pub fn active_muscles(&self) -> Vec<CanonicalMuscle> {
        CanonicalMuscle::iter()
            .copied()
            .filter(|m| self.is_active(*m))
            .collect()
    }
}

impl FromIterator<CanonicalMuscle> for ActivationVector {
    fn from_iter<I: IntoIterator<Item = CanonicalMuscle>>(iter: I) -> Self {
        let mut slots = [0; SLOTS];
        for slot in iter.into_iter().filter_map(CanonicalMuscle::slot) {
            slots[slot] = 1;
        }
        Self(slots)
    }
}

impl From<ActivationVector> for [u8; SLOTS] {
    fn from(value: ActivationVector) -> Self {
        value.0
    }
}

/// Project muscles onto the activation vector.
///
/// Duplicates are ignored, as are muscles without a slot.
#[must_use]
pub fn compute_activation_vector(muscle_ids: &[CanonicalMuscle]) -> ActivationVector {
    muscle_ids.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])]
    #[case(&[CanonicalMuscle::Chest], [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])]
    #[case(&[CanonicalMuscle::Calves, CanonicalMuscle::Back], [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1])]
    #[case(
        &[CanonicalMuscle::Biceps, CanonicalMuscle::Biceps, CanonicalMuscle::Biceps],
        [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]
    )]
    #[case(&[CanonicalMuscle::Cardio], [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])]
    #[case(
        &[CanonicalMuscle::Quads, CanonicalMuscle::Cardio, CanonicalMuscle::Abs],
        [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0]
    )]
    fn test_compute_activation_vector(
        #[case] muscle_ids: &[CanonicalMuscle],
        #[case] expected: [u8; SLOTS],
    ) {
        assert_eq!(*compute_activation_vector(muscle_ids), expected);
    }

    #[test]
    fn test_compute_activation_vector_all() {
        let muscles = CanonicalMuscle::iter_all().copied().collect::<Vec<_>>();

        assert_eq!(<[u8; SLOTS]>::from(compute_activation_vector(&muscles)), [1; SLOTS]);
    }

    #[test]
    fn test_compute_activation_vector_order_and_duplicates() {
        let muscles = [
            CanonicalMuscle::Hamstrings,
            CanonicalMuscle::Chest,
            CanonicalMuscle::Hamstrings,
            CanonicalMuscle::Triceps,
            CanonicalMuscle::Cardio,
        ];
        let mut reversed = muscles;
        reversed.reverse();

        let vector = compute_activation_vector(&muscles);

        assert_eq!(vector, compute_activation_vector(&reversed));
        assert_eq!(vector.iter().filter(|s| **s == 1).count(), 3);
        assert_eq!(
            vector.active_muscles(),
            vec![
                CanonicalMuscle::Chest,
                CanonicalMuscle::Triceps,
                CanonicalMuscle::Hamstrings
            ]
        );
        assert!(!vector.is_active(CanonicalMuscle::Cardio));
    }

    #[test]
    fn test_activation_vector_serialize() {
        assert_eq!(
            serde_json::to_string(&compute_activation_vector(&[CanonicalMuscle::Shoulders]))
                .unwrap(),
            "[0,0,1,0,0,0,0,0,0,0,0]"
        );
    }
}
