//! Mapping of free-text muscle names, as they appear in exercise records, to
//! canonical muscles and sub-muscles.
//!
//! Names are normalized before lookup: surrounding whitespace is removed,
//! letters are lower-cased, `-` and `_` are treated as spaces and runs of
//! whitespace are collapsed. Unknown names resolve to `None`.

use crate::{CanonicalMuscle, SubMuscle};

/// Both facts known about a single muscle name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alias {
    pub muscle: Option<CanonicalMuscle>,
    pub sub_muscle: Option<SubMuscle>,
}

#[must_use]
pub fn lookup(raw_name: &str) -> Alias {
    let name = normalize(raw_name);
    Alias {
        muscle: canonical(&name),
        sub_muscle: sub_muscle(&name),
    }
}

#[must_use]
pub fn resolve(raw_name: &str) -> Option<CanonicalMuscle> {
    canonical(&normalize(raw_name))
}

#[must_use]
pub fn resolve_sub_muscle(raw_name: &str) -> Option<SubMuscle> {
    sub_muscle(&normalize(raw_name))
}

fn normalize(raw_name: &str) -> String {
    raw_name
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn canonical(name: &str) -> Option<CanonicalMuscle> {
    match name {
        "chest" | "pecs" | "pec" | "pectorals" | "pectoral" | "pectoralis"
        | "pectoralis major" | "pectoralis minor" | "upper chest" | "lower chest"
        | "middle chest" | "mid chest" | "inner chest" | "outer chest" | "clavicular head"
        | "sternal head" | "serratus" | "serratus anterior" => Some(CanonicalMuscle::Chest),

        "abs" | "ab" | "abdominals" | "abdominal" | "abdominis" | "core" | "rectus abdominis"
        | "obliques" | "oblique" | "external obliques" | "internal obliques"
        | "transverse abdominis" | "transversus abdominis" | "upper abs" | "lower abs"
        | "six pack" | "stomach" | "waist" => Some(CanonicalMuscle::Abs),

        "shoulders" | "shoulder" | "delts" | "delt" | "deltoids" | "deltoid" | "front delts"
        | "front delt" | "front deltoid" | "anterior deltoid" | "anterior delts"
        | "side delts" | "side delt" | "lateral deltoid" | "lateral delts" | "medial deltoid"
        | "middle deltoid" | "rear delts" | "rear delt" | "rear deltoid" | "posterior deltoid"
        | "posterior delts" | "rotator cuff" | "infraspinatus" | "supraspinatus"
        | "teres minor" | "subscapularis" => Some(CanonicalMuscle::Shoulders),

        "back" | "lats" | "lat" | "latissimus" | "latissimus dorsi" | "upper back" | "traps"
        | "trap" | "trapezius" | "upper traps" | "middle traps" | "mid traps"
        | "lower traps" | "mid back" | "middle back" | "rhomboids" | "rhomboid"
        | "rhomboid major" | "rhomboid minor" | "lower back" | "erector spinae" | "erectors"
        | "spinal erectors" | "teres major" => Some(CanonicalMuscle::Back),

        "biceps" | "bicep" | "biceps brachii" | "biceps long head" | "long head biceps"
        | "long head of biceps" | "biceps short head" | "short head biceps"
        | "short head of biceps" | "brachialis" => Some(CanonicalMuscle::Biceps),

        "triceps" | "tricep" | "triceps brachii" | "triceps long head" | "long head triceps"
        | "long head of triceps" | "triceps lateral head" | "lateral head triceps"
        | "lateral head of triceps" | "triceps medial head" | "medial head triceps"
        | "medial head of triceps" => Some(CanonicalMuscle::Triceps),

        "forearms" | "forearm" | "brachioradialis" | "wrist flexors" | "wrist extensors"
        | "forearm flexors" | "forearm extensors" | "grip" | "wrists" => {
            Some(CanonicalMuscle::Forearms)
        }

        "glutes" | "glute" | "gluteus" | "gluteals" | "gluteus maximus" | "gluteus medius"
        | "gluteus minimus" | "butt" | "hips" | "abductors" | "hip abductors" => {
            Some(CanonicalMuscle::Glutes)
        }

        "quads" | "quad" | "quadriceps" | "quadriceps femoris" | "rectus femoris"
        | "vastus lateralis" | "vastus medialis" | "vastus intermedius" | "thighs"
        | "front thighs" | "hip flexors" | "adductors" | "hip adductors" | "inner thighs" => {
            Some(CanonicalMuscle::Quads)
        }

        "hamstrings" | "hamstring" | "hams" | "biceps femoris" | "semitendinosus"
        | "semimembranosus" | "back of thighs" | "posterior chain" => {
            Some(CanonicalMuscle::Hamstrings)
        }

        "calves" | "calf" | "gastrocnemius" | "gastrocs" | "soleus" | "tibialis anterior"
        | "lower legs" | "shins" => Some(CanonicalMuscle::Calves),

        "cardio" | "cardiovascular" | "cardiovascular system" | "full body" | "whole body"
        | "total body" | "conditioning" | "heart" => Some(CanonicalMuscle::Cardio),

        _ => None,
    }
}

fn sub_muscle(name: &str) -> Option<SubMuscle> {
    match name {
        "lats" | "lat" | "latissimus" | "latissimus dorsi" => Some(SubMuscle::Lats),
        "upper back" => Some(SubMuscle::UpperBack),
        "traps" | "trap" | "trapezius" | "upper traps" | "middle traps" | "mid traps"
        | "lower traps" => Some(SubMuscle::Traps),
        "mid back" | "middle back" => Some(SubMuscle::MidBack),
        "rhomboids" | "rhomboid" | "rhomboid major" | "rhomboid minor" => {
            Some(SubMuscle::Rhomboids)
        }
        "lower back" | "erector spinae" | "erectors" | "spinal erectors" => {
            Some(SubMuscle::LowerBack)
        }
        "rear delts" | "rear delt" | "rear deltoid" | "posterior deltoid" | "posterior delts" => {
            Some(SubMuscle::RearDelts)
        }
        "biceps long head" | "long head biceps" | "long head of biceps" => {
            Some(SubMuscle::BicepsLongHead)
        }
        "biceps short head" | "short head biceps" | "short head of biceps" => {
            Some(SubMuscle::BicepsShortHead)
        }
        "brachialis" => Some(SubMuscle::Brachialis),
        "triceps long head" | "long head triceps" | "long head of triceps" => {
            Some(SubMuscle::TricepsLongHead)
        }
        "triceps lateral head" | "lateral head triceps" | "lateral head of triceps" => {
            Some(SubMuscle::TricepsLateralHead)
        }
        "triceps medial head" | "medial head triceps" | "medial head of triceps" => {
            Some(SubMuscle::TricepsMedialHead)
        }
        _ => None,
    }
}
