// Core algorithm exports
pub mod adjustments;
pub mod comparators;
pub mod embedding;
pub mod matcher;
pub mod quiz;
pub mod scoring;

pub use adjustments::Adjustments;
pub use embedding::{cosine_similarity, embed_answers, EMBEDDING_DIM};
pub use matcher::{Matcher, MatchResult};
pub use quiz::{ParsedAnswers, Question, QUESTIONS, QUESTION_COUNT};
pub use scoring::{score, CompatibilityScorer, InvalidInputError, QuestionWeights, ScoreBreakdown, WeightsError};
