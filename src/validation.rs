//! Input contracts for the RPC calls.
//!
//! Shape and typing are already enforced at the JSON boundary by serde
//! (missing required fields, non-numeric ids and unknown status values
//! never make it past the extractor). The rules here are the semantic
//! ones serde cannot express, and they run before any store access.

use crate::error::AppError;
use crate::models::{CreateTaskRequest, UpdateTaskRequest};

pub fn validate_create(req: &CreateTaskRequest) -> Result<(), AppError> {
    if req.description.is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }
    Ok(())
}

pub fn validate_update(req: &UpdateTaskRequest) -> Result<(), AppError> {
    if let Some(description) = &req.description {
        if description.is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn create_rejects_empty_description() {
        let req = CreateTaskRequest {
            description: String::new(),
        };
        assert!(matches!(
            validate_create(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn create_accepts_non_empty_description() {
        let req = CreateTaskRequest {
            description: "Buy milk".to_string(),
        };
        assert!(validate_create(&req).is_ok());
    }

    #[test]
    fn update_rejects_empty_description() {
        let req = UpdateTaskRequest {
            id: 1,
            description: Some(String::new()),
            status: None,
        };
        assert!(matches!(
            validate_update(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn update_allows_absent_fields() {
        let req = UpdateTaskRequest {
            id: 1,
            description: None,
            status: None,
        };
        assert!(validate_update(&req).is_ok());
    }

    #[test]
    fn update_allows_status_only() {
        let req = UpdateTaskRequest {
            id: 1,
            description: None,
            status: Some(TaskStatus::Completed),
        };
        assert!(validate_update(&req).is_ok());
    }
}
