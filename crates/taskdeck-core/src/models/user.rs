/// Profile of the authenticated user. A degraded session restored from the
/// token alone may carry empty fields for anything the claims did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl UserProfile {
    /// Best name to show for this user.
    pub fn display_name(&self) -> &str {
        if !self.username.is_empty() {
            &self.username
        } else if !self.email.is_empty() {
            &self.email
        } else {
            "user"
        }
    }
}
