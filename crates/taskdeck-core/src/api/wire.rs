//! Wire DTOs for the backend's JSON, normalized into the crate's models at
//! this boundary so the legacy field names never leak further in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Task, UserProfile};

#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileUpdateRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
}

/// Task as the backend sends it. Older records carry the title under `text`
/// and the completion flag under either `isCompleted` or `completed`.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteTask {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "isCompleted", default)]
    is_completed: Option<bool>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(rename = "imageUrl", default)]
    image_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<DateTime<Utc>>,
}

impl RemoteTask {
    pub(crate) fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title.or(self.text).unwrap_or_default(),
            description: self.description.filter(|d| !d.is_empty()),
            completed: self.is_completed.or(self.completed).unwrap_or(false),
            image_url: self.image_url.filter(|url| !url.is_empty()),
            // Records without a timestamp sort as ancient rather than fresh
            created_at: self.created_at.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteUser {
    #[serde(rename = "_id", alias = "id", default)]
    id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl RemoteUser {
    pub(crate) fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Login and signup both answer with a token plus the profile.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthWire {
    pub token: String,
    pub user: RemoteUser,
}

/// Profile update answers with the profile wrapped in a `user` key and no
/// fresh token.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileWire {
    pub user: RemoteUser,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Best human-readable message for a failed response body.
pub(crate) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error).filter(|m| !m.is_empty()) {
            return message;
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
