use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::QUESTION_COUNT;

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn default_true() -> bool { true }

/// A user's stored quiz answers with the embedding generated from them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub user_id: Uuid,
    pub answers: Vec<String>,
    #[serde(default)]
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AnswerSet {
    /// Whether there is exactly one answer per question
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }
}

/// Scored match result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub user_id: Uuid,
    /// Pair score in [0, 100]
    pub score: f64,
    /// Cosine similarity of the two answer embeddings
    pub similarity: f32,
}
