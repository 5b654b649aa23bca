//! HTTP gateway to the todo backend. One request/response round trip per
//! operation, no retries, no caching; the bearer token set on the client is
//! attached to every request that has one.

mod error;
mod wire;

pub use error::ApiError;

use reqwest::multipart;
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::models::{Task, TaskDraft, TaskPatch, UserProfile};
use wire::{
    AuthWire, LoginRequest, ProfileUpdateRequest, ProfileWire, RemoteTask, RemoteUser,
    SignupRequest,
};

/// Token plus profile handed back by login and signup.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message: wire::error_message(&body, status),
        })
    }

    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let request = SignupRequest {
            username,
            email,
            password,
        };
        let response = self
            .http
            .post(self.url("/api/auth/signup"))
            .json(&request)
            .send()
            .await?;
        let auth = Self::check(response).await?.json::<AuthWire>().await?;
        Ok(AuthSession {
            token: auth.token,
            profile: auth.user.into_profile(),
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let request = LoginRequest { email, password };
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;
        let auth = Self::check(response).await?.json::<AuthWire>().await?;
        Ok(AuthSession {
            token: auth.token,
            profile: auth.user.into_profile(),
        })
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/api/auth/user")))
            .send()
            .await?;
        let user = Self::check(response).await?.json::<RemoteUser>().await?;
        Ok(user.into_profile())
    }

    /// Update username/email and optionally the password. The backend does
    /// not reissue a token for this.
    pub async fn update_profile(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
    ) -> Result<UserProfile, ApiError> {
        let request = ProfileUpdateRequest {
            username,
            email,
            password,
        };
        let response = self
            .authorize(self.http.put(self.url("/api/auth/update")))
            .json(&request)
            .send()
            .await?;
        let wire = Self::check(response).await?.json::<ProfileWire>().await?;
        Ok(wire.user.into_profile())
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/api/todos/")))
            .send()
            .await?;
        let remote = Self::check(response)
            .await?
            .json::<Vec<RemoteTask>>()
            .await?;
        Ok(remote.into_iter().map(RemoteTask::into_task).collect())
    }

    /// Create a task. Multipart so the optional image bytes can ride along
    /// with the text fields.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let mut form = multipart::Form::new().text("title", draft.title.clone());
        if let Some(description) = &draft.description {
            form = form.text("description", description.clone());
        }
        if let Some(image) = &draft.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime)?;
            form = form.part("image", part);
        }
        let response = self
            .authorize(self.http.post(self.url("/api/todos/")))
            .multipart(form)
            .send()
            .await?;
        let remote = Self::check(response).await?.json::<RemoteTask>().await?;
        Ok(remote.into_task())
    }

    /// Partial update. The backend answers with the full task, which callers
    /// are expected to adopt wholesale.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/api/todos/{}", id))))
            .json(patch)
            .send()
            .await?;
        let remote = Self::check(response).await?.json::<RemoteTask>().await?;
        Ok(remote.into_task())
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/api/todos/{}", id))))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = ApiClient::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/api/todos/"), "http://localhost:5000/api/todos/");
    }

    #[test]
    fn test_token_lifecycle() {
        let mut api = ApiClient::new("http://localhost:5000");
        assert!(!api.has_token());
        api.set_token("abc");
        assert!(api.has_token());
        api.clear_token();
        assert!(!api.has_token());
    }
}
