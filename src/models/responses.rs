use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ScoreBreakdown;
use crate::models::domain::ScoredMatch;

/// Response for the pair score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairScoreResponse {
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub user_id: Uuid,
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Response for answer submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersResponse {
    pub user_id: Uuid,
    /// Indexes of answers that are not known quiz options
    pub unrecognized: Vec<usize>,
    pub embedding_dim: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub items: Vec<T>,
}

impl<T> PageResponse<T> {
    pub fn new(page: u32, size: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            page,
            size,
            total,
            has_next: u64::from(page) * u64::from(size) < total,
            has_prev: page > 1,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_flags() {
        let first: PageResponse<u8> = PageResponse::new(1, 10, 25, vec![]);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last: PageResponse<u8> = PageResponse::new(3, 10, 25, vec![]);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = PageResponse::new(1, 10, 0, Vec::<u8>::new());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["total"], 0);
    }
}
