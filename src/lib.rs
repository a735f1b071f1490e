//! Quizmatch - compatibility scoring service for quiz-based matchmaking
//!
//! Users answer an 8-question personality quiz. The core of this library is
//! a deterministic, rule-based scorer that turns two answer vectors into a
//! compatibility score in [0, 100], plus a matcher that ranks candidates by it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score, CompatibilityScorer, InvalidInputError, Matcher, QuestionWeights, ScoreBreakdown};
pub use crate::error::ApiError;
pub use crate::models::{AnswerSet, FindMatchesRequest, FindMatchesResponse, ScoredMatch};
