use serde::{Deserialize, Serialize};

use super::Entity;
use crate::error::{AppError, AppResult};

/// Video metadata, looked up by `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub language: String,
    pub storage_link: String,
}

impl Entity for Video {
    const RESOURCE: &'static str = "video";
    const LABEL: &'static str = "Video";
    const EMPTY_KEY_MESSAGE: &'static str = "Title can't be empty";

    fn key(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::internal("Title can't be blank"));
        }

        Ok(())
    }
}
