use crate::core::embedding::cosine_similarity;
use crate::core::scoring::{CompatibilityScorer, InvalidInputError};
use crate::models::{AnswerSet, ScoredMatch};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
    /// Candidates dropped because their answer set was incomplete
    pub skipped: usize,
}

/// Ranks candidate answer sets against a subject
///
/// # Pipeline Stages
/// 1. Drop the subject and incomplete answer sets
/// 2. Score every remaining pair
/// 3. Drop pairs below the minimum score
/// 4. Order by score, then embedding similarity, then user id
#[derive(Debug, Clone)]
pub struct Matcher {
    scorer: CompatibilityScorer,
    min_score: f64,
}

impl Matcher {
    pub fn new(scorer: CompatibilityScorer, min_score: f64) -> Self {
        Self { scorer, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self::new(CompatibilityScorer::with_default_weights(), 0.0)
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    /// Find the best matches for `subject` among `candidates`
    ///
    /// Fails only when the subject's own answer set is incomplete.
    pub fn find_matches(
        &self,
        subject: &AnswerSet,
        candidates: Vec<AnswerSet>,
        limit: usize,
    ) -> Result<MatchResult, InvalidInputError> {
        if !subject.is_complete() {
            return Err(InvalidInputError::wrong_length(subject.answers.len()));
        }

        let total_candidates = candidates.len();
        let mut skipped = 0;

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != subject.user_id)
            .filter_map(|candidate| {
                let score = match self.scorer.score(&subject.answers, &candidate.answers) {
                    Ok(score) => score,
                    Err(e) => {
                        tracing::debug!("Skipping candidate {}: {}", candidate.user_id, e);
                        skipped += 1;
                        return None;
                    }
                };

                if score < self.min_score {
                    return None;
                }

                Some(ScoredMatch {
                    user_id: candidate.user_id,
                    score,
                    similarity: cosine_similarity(&subject.embedding, &candidate.embedding),
                })
            })
            .collect();

        // Sort by score (descending), then similarity (descending), then id for stability
        scored_matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.similarity
                        .partial_cmp(&a.similarity)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        scored_matches.truncate(limit);

        Ok(MatchResult {
            matches: scored_matches,
            total_candidates,
            skipped,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
