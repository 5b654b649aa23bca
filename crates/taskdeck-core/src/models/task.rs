use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single to-do entry owned by the current session. The id is assigned by
/// the backend and immutable; the completion flag is already normalized from
/// the wire's legacy field names by the time a `Task` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// Payload for creating a task. Goes out as multipart form data so the
/// optional image bytes can travel alongside the text fields.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<ImageAttachment>,
}

/// Image file content captured at draft time.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Read an attachment from a local path, deriving the mime type from the
    /// file extension.
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        Ok(Self {
            file_name,
            mime: mime_for_extension(&extension).to_string(),
            bytes,
        })
    }
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Partial update sent to PUT /api/todos/:id. Only the fields present are
/// serialized; the completion flag goes out under the backend's canonical
/// `isCompleted` name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isCompleted", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Single-field patch flipping the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch rewriting title and description.
    pub fn fields(title: String, description: Option<String>) -> Self {
        Self {
            title: Some(title),
            description: Some(description.unwrap_or_default()),
            completed: None,
        }
    }
}
