// Service exports
pub mod cache;
pub mod embedding;
pub mod postgres;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use embedding::{EmbeddingError, EmbeddingProvider, RemoteEmbedder};
pub use postgres::{PostgresClient, PostgresError};
