//! Whole-vector boosts and penalties applied after the weighted sum.

use serde::{Deserialize, Serialize};

use crate::core::quiz::{FriendRole, PressureResponse, Pride, QuizAnswer, Superpower, Vacation};

/// Answers that signal a drive to help others
pub const HELPING_ANSWERS: [QuizAnswer; 2] = [
    QuizAnswer::Vacation(Vacation::Volunteer),
    QuizAnswer::Pride(Pride::PositiveDifference),
];

/// Answers that signal a creative or unconventional streak
pub const CREATIVE_ANSWERS: [QuizAnswer; 4] = [
    QuizAnswer::Superpower(Superpower::ExcitingPeople),
    QuizAnswer::FriendRole(FriendRole::InterestingIdeas),
    QuizAnswer::Vacation(Vacation::Backpacking),
    QuizAnswer::Pride(Pride::ComplexProblem),
];

pub const HELPING_BOOST: f64 = 1.10;
pub const CREATIVE_BOOST: f64 = 1.05;
pub const PRESSURE_CONFLICT_PENALTY: f64 = 0.95;

/// Whether any answer in the vector, at any position, is a member of `set`
pub fn contains_any<S: AsRef<str>>(answers: &[S], set: &[QuizAnswer]) -> bool {
    answers
        .iter()
        .any(|text| set.iter().any(|member| member.matches_text(text.as_ref())))
}

/// A team rallier paired with someone who needs quiet time
pub fn pressure_conflict(a: Option<PressureResponse>, b: Option<PressureResponse>) -> bool {
    matches!(
        (a, b),
        (Some(PressureResponse::RallyTeam), Some(PressureResponse::QuietTime))
            | (Some(PressureResponse::QuietTime), Some(PressureResponse::RallyTeam))
    )
}

/// Which global adjustments apply to a pair of answer vectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    pub helping_boost: bool,
    pub creative_boost: bool,
    pub pressure_penalty: bool,
}

impl Adjustments {
    pub fn evaluate<A: AsRef<str>, B: AsRef<str>>(
        first: &[A],
        second: &[B],
        first_pressure: Option<PressureResponse>,
        second_pressure: Option<PressureResponse>,
    ) -> Self {
        Self {
            helping_boost: contains_any(first, &HELPING_ANSWERS)
                && contains_any(second, &HELPING_ANSWERS),
            creative_boost: contains_any(first, &CREATIVE_ANSWERS)
                && contains_any(second, &CREATIVE_ANSWERS),
            pressure_penalty: pressure_conflict(first_pressure, second_pressure),
        }
    }

    /// Apply the multipliers in order: helping, creative, pressure conflict
    pub fn apply(&self, weighted: f64) -> f64 {
        let mut score = weighted;
        if self.helping_boost {
            score *= HELPING_BOOST;
        }
        if self.creative_boost {
            score *= CREATIVE_BOOST;
        }
        if self.pressure_penalty {
            score *= PRESSURE_CONFLICT_PENALTY;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_ignores_position() {
        let answers = ["Somewhere you can help locals or volunteer", "x", "y"];
        assert!(contains_any(&answers, &HELPING_ANSWERS));
        assert!(!contains_any(&answers, &CREATIVE_ANSWERS));
    }

    #[test]
    fn test_boost_requires_both_sides() {
        let helper = ["Making a positive difference in someone's life"];
        let other = ["Seeing patterns others miss"];

        let one_sided = Adjustments::evaluate(&helper, &other, None, None);
        assert!(!one_sided.helping_boost);

        let both = Adjustments::evaluate(&helper, &helper, None, None);
        assert!(both.helping_boost);
    }

    #[test]
    fn test_pressure_conflict_either_order() {
        use PressureResponse::*;
        assert!(pressure_conflict(Some(RallyTeam), Some(QuietTime)));
        assert!(pressure_conflict(Some(QuietTime), Some(RallyTeam)));
        assert!(!pressure_conflict(Some(RallyTeam), Some(RallyTeam)));
        assert!(!pressure_conflict(None, Some(QuietTime)));
    }

    #[test]
    fn test_apply_order() {
        let all = Adjustments {
            helping_boost: true,
            creative_boost: true,
            pressure_penalty: true,
        };
        let expected = 80.0 * HELPING_BOOST * CREATIVE_BOOST * PRESSURE_CONFLICT_PENALTY;
        assert_eq!(all.apply(80.0), expected);
        assert_eq!(Adjustments::default().apply(80.0), 80.0);
    }
}
