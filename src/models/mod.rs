// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnswerSet, ScoredMatch, UserAccount};
pub use requests::{FindMatchesRequest, PageQuery, RegisterUserRequest, SubmitAnswersRequest, UpdateUserRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, PageResponse, PairScoreResponse,
    SubmitAnswersResponse,
};
