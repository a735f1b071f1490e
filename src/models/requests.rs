use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Request to register a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 120))]
    #[serde(default, alias = "full_name", rename = "fullName")]
    pub full_name: Option<String>,
}

/// Request to submit quiz answers
/// Partial update of a user; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 120))]
    #[serde(default, alias = "full_name", rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default, alias = "is_active", rename = "isActive")]
    pub is_active: Option<bool>,
}

fn validate_has_changes(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    if req.full_name.is_none() && req.is_active.is_none() {
        let mut err = ValidationError::new("empty_update");
        err.message = Some("At least one of fullName or isActive is required".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
    #[validate(length(equal = 8, message = "Exactly 8 answers are required"))]
    pub answers: Vec<String>,
}

/// Request to find matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Page selection for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_size")]
    pub size: u32,
}

impl PageQuery {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_answers_requires_eight() {
        let request: SubmitAnswersRequest = serde_json::from_value(serde_json::json!({
            "userId": Uuid::nil(),
            "answers": ["a", "b", "c"],
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Exactly 8 answers are required"));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let request = RegisterUserRequest {
            email: "not-an-email".to_string(),
            full_name: None,
        };
        assert!(request.validate().is_err());

        let request = RegisterUserRequest {
            email: "ana@example.com".to_string(),
            full_name: Some("Ana".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_user_validation() {
        let request: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "fullName": "Ana Maria",
            "isActive": false,
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let request: UpdateUserRequest = serde_json::from_str(r#"{"isActive": true}"#).unwrap();
        assert!(request.validate().is_ok());

        let request = UpdateUserRequest {
            full_name: Some(String::new()),
            is_active: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_user_requires_a_change() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("At least one of fullName or isActive is required"));
    }

    #[test]
    fn test_page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 10);
        assert_eq!(query.offset(), 0);

        let query = PageQuery { page: 3, size: 20 };
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_find_matches_limit_range() {
        let request = FindMatchesRequest {
            user_id: Uuid::nil(),
            limit: Some(0),
        };
        assert!(request.validate().is_err());

        let request = FindMatchesRequest {
            user_id: Uuid::nil(),
            limit: None,
        };
        assert!(request.validate().is_ok());
    }
}
