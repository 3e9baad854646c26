use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_all() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

/// Top-level muscle region used for weighting and visualization.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalMuscle {
    Chest,
    Abs,
    Shoulders,
    Back,
    Biceps,
    Triceps,
    Forearms,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    /// Whole-body and conditioning work. Weighted like any other muscle but
    /// never part of the activation vector.
    Cardio,
}

impl Property for CanonicalMuscle {
    fn iter() -> Iter<'static, CanonicalMuscle> {
        static MUSCLES: [CanonicalMuscle; 11] = [
            CanonicalMuscle::Chest,
            CanonicalMuscle::Abs,
            CanonicalMuscle::Shoulders,
            CanonicalMuscle::Back,
            CanonicalMuscle::Biceps,
            CanonicalMuscle::Triceps,
            CanonicalMuscle::Forearms,
            CanonicalMuscle::Glutes,
            CanonicalMuscle::Quads,
            CanonicalMuscle::Hamstrings,
            CanonicalMuscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn iter_all() -> Iter<'static, CanonicalMuscle> {
        static MUSCLES: [CanonicalMuscle; 12] = [
            CanonicalMuscle::Chest,
            CanonicalMuscle::Abs,
            CanonicalMuscle::Shoulders,
            CanonicalMuscle::Back,
            CanonicalMuscle::Biceps,
            CanonicalMuscle::Triceps,
            CanonicalMuscle::Forearms,
            CanonicalMuscle::Glutes,
            CanonicalMuscle::Quads,
            CanonicalMuscle::Hamstrings,
            CanonicalMuscle::Calves,
            CanonicalMuscle::Cardio,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            CanonicalMuscle::Chest => "Chest",
            CanonicalMuscle::Abs => "Abs",
            CanonicalMuscle::Shoulders => "Shoulders",
            CanonicalMuscle::Back => "Back",
            CanonicalMuscle::Biceps => "Biceps",
            CanonicalMuscle::Triceps => "Triceps",
            CanonicalMuscle::Forearms => "Forearms",
            CanonicalMuscle::Glutes => "Glutes",
            CanonicalMuscle::Quads => "Quads",
            CanonicalMuscle::Hamstrings => "Hamstrings",
            CanonicalMuscle::Calves => "Calves",
            CanonicalMuscle::Cardio => "Cardio",
        }
    }
}

impl CanonicalMuscle {
    /// Identifier used by the presentation layer.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            CanonicalMuscle::Chest => "chest",
            CanonicalMuscle::Abs => "abs",
            CanonicalMuscle::Shoulders => "shoulders",
            CanonicalMuscle::Back => "back",
            CanonicalMuscle::Biceps => "biceps",
            CanonicalMuscle::Triceps => "triceps",
            CanonicalMuscle::Forearms => "forearms",
            CanonicalMuscle::Glutes => "glutes",
            CanonicalMuscle::Quads => "quads",
            CanonicalMuscle::Hamstrings => "hamstrings",
            CanonicalMuscle::Calves => "calves",
            CanonicalMuscle::Cardio => "cardio",
        }
    }

    /// Position in the activation vector.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        match self {
            CanonicalMuscle::Chest => Some(0),
            CanonicalMuscle::Abs => Some(1),
            CanonicalMuscle::Shoulders => Some(2),
            CanonicalMuscle::Back => Some(3),
            CanonicalMuscle::Biceps => Some(4),
            CanonicalMuscle::Triceps => Some(5),
            CanonicalMuscle::Forearms => Some(6),
            CanonicalMuscle::Glutes => Some(7),
            CanonicalMuscle::Quads => Some(8),
            CanonicalMuscle::Hamstrings => Some(9),
            CanonicalMuscle::Calves => Some(10),
            CanonicalMuscle::Cardio => None,
        }
    }

    #[must_use]
    pub fn has_sub_muscles(self) -> bool {
        matches!(
            self,
            CanonicalMuscle::Back | CanonicalMuscle::Biceps | CanonicalMuscle::Triceps
        )
    }

    #[must_use]
    pub fn sub_muscles(self) -> Vec<SubMuscle> {
        SubMuscle::iter()
            .copied()
            .filter(|s| s.parent() == self)
            .collect()
    }
}

impl fmt::Display for CanonicalMuscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Named part of a muscle region. Only back, biceps and triceps are split up.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SubMuscle {
    // Back
    Lats,
    UpperBack,
    Traps,
    MidBack,
    Rhomboids,
    LowerBack,
    RearDelts,
    // Biceps
    BicepsLongHead,
    BicepsShortHead,
    Brachialis,
    // Triceps
    TricepsLongHead,
    TricepsLateralHead,
    TricepsMedialHead,
}

impl Property for SubMuscle {
    fn iter() -> Iter<'static, SubMuscle> {
        static SUB_MUSCLES: [SubMuscle; 13] = [
            SubMuscle::Lats,
            SubMuscle::UpperBack,
            SubMuscle::Traps,
            SubMuscle::MidBack,
            SubMuscle::Rhomboids,
            SubMuscle::LowerBack,
            SubMuscle::RearDelts,
            SubMuscle::BicepsLongHead,
            SubMuscle::BicepsShortHead,
            SubMuscle::Brachialis,
            SubMuscle::TricepsLongHead,
            SubMuscle::TricepsLateralHead,
            SubMuscle::TricepsMedialHead,
        ];
        SUB_MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        self.label()
    }
}

impl SubMuscle {
    #[must_use]
    pub fn parent(self) -> CanonicalMuscle {
        match self {
            SubMuscle::Lats
            | SubMuscle::UpperBack
            | SubMuscle::Traps
            | SubMuscle::MidBack
            | SubMuscle::Rhomboids
            | SubMuscle::LowerBack
            | SubMuscle::RearDelts => CanonicalMuscle::Back,
            SubMuscle::BicepsLongHead | SubMuscle::BicepsShortHead | SubMuscle::Brachialis => {
                CanonicalMuscle::Biceps
            }
            SubMuscle::TricepsLongHead
            | SubMuscle::TricepsLateralHead
            | SubMuscle::TricepsMedialHead => CanonicalMuscle::Triceps,
        }
    }

    /// Human-readable label, unique within the parent muscle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubMuscle::Lats => "Lats",
            SubMuscle::UpperBack => "Upper Back",
            SubMuscle::Traps => "Traps",
            SubMuscle::MidBack => "Mid Back",
            SubMuscle::Rhomboids => "Rhomboids",
            SubMuscle::LowerBack => "Lower Back",
            SubMuscle::RearDelts => "Rear Delts",
            SubMuscle::BicepsLongHead | SubMuscle::TricepsLongHead => "Long Head",
            SubMuscle::BicepsShortHead => "Short Head",
            SubMuscle::Brachialis => "Brachialis",
            SubMuscle::TricepsLateralHead => "Lateral Head",
            SubMuscle::TricepsMedialHead => "Medial Head",
        }
    }
}

impl fmt::Display for SubMuscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
