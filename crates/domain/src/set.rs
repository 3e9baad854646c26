use serde::{Deserialize, Serialize};

/// A set as logged by the user.
///
/// Cardio sets carry a `duration` in seconds, resistance and bodyweight sets
/// carry `reps`. Whether a set counts towards training volume is derived by
/// [`LoggedSet::is_completed`] and never stored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggedSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<Reps>,
}

impl LoggedSet {
    #[must_use]
    pub fn marked_completed() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_duration(seconds: f64) -> Self {
        Self {
            duration: Some(seconds),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reps(reps: impl Into<Reps>) -> Self {
        Self {
            reps: Some(reps.into()),
            ..Self::default()
        }
    }

    /// An explicit completion flag always counts. Otherwise a present
    /// duration decides, and only then the number of reps.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        if self.completed == Some(true) {
            return true;
        }
        if let Some(duration) = self.duration {
            return duration > 0.0;
        }
        self.reps
            .as_ref()
            .and_then(Reps::parse)
            .is_some_and(|reps| reps > 0)
    }
}

/// Number of sets which count towards training volume.
#[must_use]
pub fn completed_set_count(sets: &[LoggedSet]) -> u32 {
    u32::try_from(sets.iter().filter(|s| s.is_completed()).count()).unwrap_or(u32::MAX)
}

/// Rep count as entered, either numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Number(f64),
    Text(String),
}

impl Reps {
    /// Integer value of the rep count.
    ///
    /// Text is read up to the first character that is not part of a leading
    /// (optionally signed) integer, so "8", " 12 reps" and "10.5" yield 8, 12
    /// and 10. Numbers are read like their textual form: they are truncated
    /// towards zero, except for very small and very large magnitudes, which
    /// are written in exponent notation ("1e-7", "2e21") and therefore yield
    /// their leading mantissa digits. Returns `None` if no integer can be
    /// read.
    #[must_use]
    pub fn parse(&self) -> Option<i64> {
        match self {
            Reps::Number(value) => {
                if !value.is_finite() {
                    None
                } else if *value != 0.0 && !(1e-6..1e21).contains(&value.abs()) {
                    parse_leading_integer(&format!("{value:e}"))
                } else {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(value.trunc() as i64)
                }
            }
            Reps::Text(text) => parse_leading_integer(text),
        }
    }
}

impl From<i32> for Reps {
    fn from(value: i32) -> Self {
        Reps::Number(f64::from(value))
    }
}

impl From<f64> for Reps {
    fn from(value: f64) -> Self {
        Reps::Number(value)
    }
}

impl From<&str> for Reps {
    fn from(value: &str) -> Self {
        Reps::Text(value.to_string())
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::completed(LoggedSet::marked_completed(), true)]
    #[case::completed_with_zero_reps(
        LoggedSet { completed: Some(true), duration: None, reps: Some(Reps::Number(0.0)) },
        true
    )]
    #[case::completed_with_zero_duration(
        LoggedSet { completed: Some(true), duration: Some(0.0), reps: None },
        true
    )]
    #[case::not_completed_with_reps(
        LoggedSet { completed: Some(false), duration: None, reps: Some(Reps::Number(8.0)) },
        true
    )]
    #[case::duration(LoggedSet::with_duration(30.0), true)]
    #[case::zero_duration(LoggedSet::with_duration(0.0), false)]
    #[case::duration_takes_precedence(
        LoggedSet { completed: None, duration: Some(0.0), reps: Some(Reps::Number(8.0)) },
        false
    )]
    #[case::numeric_reps(LoggedSet::with_reps(8), true)]
    #[case::zero_reps(LoggedSet::with_reps(0), false)]
    #[case::fractional_reps(LoggedSet::with_reps(0.5), false)]
    #[case::tiny_reps(LoggedSet::with_reps(1e-7), true)]
    #[case::text_reps(LoggedSet::with_reps("12"), true)]
    #[case::text_reps_with_suffix(LoggedSet::with_reps("5 reps"), true)]
    #[case::negative_text_reps(LoggedSet::with_reps("-3"), false)]
    #[case::empty_text_reps(LoggedSet::with_reps(""), false)]
    #[case::unparsable_text_reps(LoggedSet::with_reps("many"), false)]
    #[case::nan_reps(LoggedSet::with_reps(f64::NAN), false)]
    #[case::no_signal(LoggedSet::default(), false)]
    fn test_logged_set_is_completed(#[case] set: LoggedSet, #[case] expected: bool) {
        assert_eq!(set.is_completed(), expected);
    }

    #[rstest]
    #[case(LoggedSet::default())]
    #[case(LoggedSet::with_duration(0.0))]
    #[case(LoggedSet::with_duration(45.0))]
    #[case(LoggedSet::with_reps(0))]
    #[case(LoggedSet::with_reps("abc"))]
    #[case(LoggedSet::with_reps(10))]
    fn test_logged_set_is_completed_monotonic(#[case] set: LoggedSet) {
        let before = LoggedSet {
            completed: Some(false),
            ..set.clone()
        };
        let after = LoggedSet {
            completed: Some(true),
            ..set
        };
        assert!(!before.is_completed() || after.is_completed());
        assert!(after.is_completed());
    }

    #[test]
    fn test_completed_set_count() {
        assert_eq!(completed_set_count(&[]), 0);
        assert_eq!(
            completed_set_count(&[
                LoggedSet::with_reps(8),
                LoggedSet::with_reps(0),
                LoggedSet::marked_completed(),
                LoggedSet::default(),
                LoggedSet::with_duration(20.0),
            ]),
            3
        );
    }

    #[rstest]
    #[case(Reps::Number(7.9), Some(7))]
    #[case(Reps::Number(-2.0), Some(-2))]
    #[case(Reps::Number(f64::INFINITY), None)]
    #[case(Reps::Number(0.0), Some(0))]
    #[case(Reps::Number(0.000_001), Some(0))]
    #[case(Reps::Number(1e-7), Some(1))]
    #[case(Reps::Number(2.5e-8), Some(2))]
    #[case(Reps::Number(-1e-7), Some(-1))]
    #[case(Reps::Number(3e21), Some(3))]
    #[case(Reps::Text("  10".into()), Some(10))]
    #[case(Reps::Text("+4".into()), Some(4))]
    #[case(Reps::Text("10.5".into()), Some(10))]
    #[case(Reps::Text("x10".into()), None)]
    #[case(Reps::Text("-".into()), None)]
    fn test_reps_parse(#[case] reps: Reps, #[case] expected: Option<i64>) {
        assert_eq!(reps.parse(), expected);
    }

    #[test]
    fn test_logged_set_deserialize() {
        let sets: Vec<LoggedSet> = serde_json::from_str(
            r#"[{"completed": true}, {"duration": 60}, {"reps": 8}, {"reps": "10"}, {"reps": null}]"#,
        )
        .unwrap();

        assert_eq!(
            sets,
            vec![
                LoggedSet::marked_completed(),
                LoggedSet::with_duration(60.0),
                LoggedSet::with_reps(8),
                LoggedSet::with_reps("10"),
                LoggedSet::default(),
            ]
        );
    }
}
