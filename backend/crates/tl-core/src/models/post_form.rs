use std::collections::BTreeMap;

use serde::Deserialize;

pub const MIN_POST_LENGTH: usize = 3;
pub const MAX_POST_LENGTH: usize = 10;

const FORBIDDEN_POST: &str = "bad";

/// Field name -> message for every field that failed validation.
pub type FieldErrors = BTreeMap<String, String>;

/// Values submitted by the add-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub post: String,
}

impl PostForm {
    pub fn new(post: impl Into<String>) -> Self {
        Self { post: post.into() }
    }

    /// Validate the form. An empty map means the form is acceptable.
    ///
    /// Length is measured in characters, not bytes.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let length = self.post.chars().count();

        if length < MIN_POST_LENGTH {
            errors.insert("post".to_string(), "too short".to_string());
        }

        if length > MAX_POST_LENGTH {
            errors.insert("post".to_string(), "too long".to_string());
        }

        if self.post == FORBIDDEN_POST {
            errors.insert("post".to_string(), "bad not allowed".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
