use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::adjustments::Adjustments;
use crate::core::comparators::subscores;
use crate::core::quiz::{ParsedAnswers, QUESTION_COUNT};

/// Highest score a pair can receive
pub const MAX_SCORE: f64 = 100.0;

/// Raw per-question weights, in answer-vector order
///
/// Q1 social energy, Q2 adventure/planning, Q3 decision making, Q4 core values,
/// Q5 pressure response, Q6 work environment, Q7 pride, Q8 strength style.
pub const RAW_WEIGHTS: [f64; QUESTION_COUNT] = [0.20, 0.10, 0.15, 0.30, 0.25, 0.15, 0.15, 0.10];

const RAW_WEIGHT_TOTAL: f64 = RAW_WEIGHTS[0]
    + RAW_WEIGHTS[1]
    + RAW_WEIGHTS[2]
    + RAW_WEIGHTS[3]
    + RAW_WEIGHTS[4]
    + RAW_WEIGHTS[5]
    + RAW_WEIGHTS[6]
    + RAW_WEIGHTS[7];

/// [`RAW_WEIGHTS`] scaled to sum to 1
pub const NORMALIZED_WEIGHTS: [f64; QUESTION_COUNT] = [
    RAW_WEIGHTS[0] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[1] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[2] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[3] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[4] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[5] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[6] / RAW_WEIGHT_TOTAL,
    RAW_WEIGHTS[7] / RAW_WEIGHT_TOTAL,
];

/// An answer vector did not contain exactly one answer per question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} answers, got {found}")]
pub struct InvalidInputError {
    pub expected: usize,
    pub found: usize,
}

impl InvalidInputError {
    pub fn wrong_length(found: usize) -> Self {
        Self {
            expected: QUESTION_COUNT,
            found,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight for question {index} is negative or not finite: {value}")]
    Invalid { index: usize, value: f64 },

    #[error("question weights must have a positive sum")]
    ZeroTotal,
}

/// Normalized per-question weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionWeights([f64; QUESTION_COUNT]);

impl QuestionWeights {
    pub const DEFAULT: Self = Self(NORMALIZED_WEIGHTS);

    /// Normalize raw weights so they sum to 1
    pub fn from_raw(raw: [f64; QUESTION_COUNT]) -> Result<Self, WeightsError> {
        if let Some((index, value)) = raw
            .iter()
            .copied()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(WeightsError::Invalid { index, value });
        }

        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(WeightsError::ZeroTotal);
        }

        Ok(Self(raw.map(|w| w / total)))
    }

    pub fn as_array(&self) -> &[f64; QUESTION_COUNT] {
        &self.0
    }
}

impl Default for QuestionWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a pair score was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Comparator output per question
    pub subscores: [u8; QUESTION_COUNT],
    /// Weighted sum before adjustments
    pub weighted: f64,
    pub adjustments: Adjustments,
    /// Final clamped and rounded score
    pub score: f64,
}

/// Rule-based compatibility scorer for two answer vectors
///
/// # Scoring
/// 1. Each question's comparator maps the answer pair to a curated sub-score
/// 2. Sub-scores are combined with the normalized question weights
/// 3. Helping (x1.10), creative (x1.05) and pressure-conflict (x0.95)
///    adjustments are applied in that order
/// 4. The result is capped at 100 and rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer {
    weights: QuestionWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: QuestionWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &QuestionWeights {
        &self.weights
    }

    /// Score two answer vectors
    ///
    /// Unrecognized answer text never fails; it falls through to each
    /// comparator's default sub-score. The only error is a vector whose
    /// length is not [`QUESTION_COUNT`].
    pub fn score<A, B>(&self, first: &[A], second: &[B]) -> Result<f64, InvalidInputError>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        self.explain(first, second).map(|breakdown| breakdown.score)
    }

    /// Score two answer vectors and report every intermediate step
    pub fn explain<A, B>(&self, first: &[A], second: &[B]) -> Result<ScoreBreakdown, InvalidInputError>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let first_answers = <&[A; QUESTION_COUNT]>::try_from(first)
            .map_err(|_| InvalidInputError::wrong_length(first.len()))?;
        let second_answers = <&[B; QUESTION_COUNT]>::try_from(second)
            .map_err(|_| InvalidInputError::wrong_length(second.len()))?;

        let a = ParsedAnswers::parse(first_answers);
        let b = ParsedAnswers::parse(second_answers);

        let subscores = subscores(&a, &b);
        let weighted = subscores
            .iter()
            .zip(self.weights.as_array())
            .fold(0.0, |acc, (subscore, weight)| acc + f64::from(*subscore) * weight);

        let adjustments = Adjustments::evaluate(first, second, a.pressure, b.pressure);
        let score = round_score(adjustments.apply(weighted).min(MAX_SCORE));

        Ok(ScoreBreakdown {
            subscores,
            weighted,
            adjustments,
            score,
        })
    }
}

/// Score two answer vectors with the default question weights
pub fn score<A, B>(first: &[A], second: &[B]) -> Result<f64, InvalidInputError>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    CompatibilityScorer::with_default_weights().score(first, second)
}

/// Round to 2 decimal places, ties to even
#[inline]
fn round_score(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
