#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BreakdownError {
    #[error("sets logged for exercise {index}, but only {len} exercises exist")]
    ExerciseIndexOutOfRange { index: usize, len: usize },
    #[error("weight must be finite and not negative ({0})")]
    InvalidWeight(f32),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_breakdown_error_display() {
        assert_eq!(
            BreakdownError::ExerciseIndexOutOfRange { index: 3, len: 2 }.to_string(),
            "sets logged for exercise 3, but only 2 exercises exist"
        );
        assert_eq!(
            BreakdownError::InvalidWeight(-0.5).to_string(),
            "weight must be finite and not negative (-0.5)"
        );
    }
}
