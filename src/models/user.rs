use serde::{Deserialize, Serialize};

use super::Entity;
use crate::error::{AppError, AppResult};

/// User profile, looked up by `id`.
///
/// Missing JSON fields deserialize to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub age: i32,
    pub email_id: String,
}

impl Entity for User {
    const RESOURCE: &'static str = "user";
    const LABEL: &'static str = "User";
    const EMPTY_KEY_MESSAGE: &'static str = "Invalid user id. User id can't be empty";

    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> AppResult<()> {
        if self.age < 0 {
            return Err(AppError::internal("Age can't be less than 0"));
        }

        if self.email_id.trim().is_empty() {
            return Err(AppError::internal("Email id can't be blank"));
        }

        Ok(())
    }
}
