//! Local answer embeddings and vector similarity.
//!
//! The local embedder is a feature-hashing bag of words: each answer is
//! embedded on its own, L2-normalized, and the eight answer vectors are
//! averaged into one profile vector.

use crate::core::quiz::QUESTION_COUNT;
use crate::core::scoring::InvalidInputError;

/// Dimension of locally generated embeddings
pub const EMBEDDING_DIM: usize = 384;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME))
}

/// Embed a single piece of text into [`EMBEDDING_DIM`] signed hash buckets
pub fn embed_text(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; EMBEDDING_DIM];

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let hash = fnv1a(token.to_lowercase().as_bytes());
        let bucket = (hash % EMBEDDING_DIM as u64) as usize;
        let sign = if hash >> 63 == 1 { -1.0 } else { 1.0 };
        vector[bucket] += sign;
    }

    normalize(&mut vector);
    vector
}

/// Embed a full answer vector
pub fn embed_answers<S: AsRef<str>>(answers: &[S]) -> Result<Vec<f32>, InvalidInputError> {
    if answers.len() != QUESTION_COUNT {
        return Err(InvalidInputError::wrong_length(answers.len()));
    }

    let vectors: Vec<Vec<f32>> = answers.iter().map(|a| embed_text(a.as_ref())).collect();
    Ok(mean_pool(&vectors))
}

/// Element-wise mean of equally sized vectors
pub fn mean_pool(vectors: &[Vec<f32>]) -> Vec<f32> {
    let Some(first) = vectors.first() else {
        return Vec::new();
    };

    let mut pooled = vec![0.0f32; first.len()];
    for vector in vectors {
        for (acc, value) in pooled.iter_mut().zip(vector) {
            *acc += value;
        }
    }

    let count = vectors.len() as f32;
    pooled.iter_mut().for_each(|v| *v /= count);
    pooled
}

/// Cosine similarity over the common prefix of two vectors, 0 when either is zero
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f32, 0.0f32, 0.0f32);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
}
