//! Client-side form validation. A failed check means no request is issued;
//! the message is surfaced to the user as-is.

/// Characters accepted as the required password special character.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

pub const PASSWORD_MIN_LEN: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("all fields are required")]
    MissingFields,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least 5 characters long")]
    PasswordTooShort,

    #[error("password must contain at least one number")]
    PasswordNeedsDigit,

    #[error("password must contain at least one special character (!@#$%^&*)")]
    PasswordNeedsSpecial,
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNeedsDigit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(ValidationError::PasswordNeedsSpecial);
    }
    Ok(())
}

pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_password(password)
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Profile updates may leave the password empty to keep the current one.
pub fn validate_profile_update(
    username: &str,
    email: &str,
    new_password: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() || email.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if new_password.is_empty() {
        return Ok(());
    }
    validate_password(new_password)
}

pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules() {
        assert_eq!(
            validate_password("a1!"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("abcde!"),
            Err(ValidationError::PasswordNeedsDigit)
        );
        assert_eq!(
            validate_password("abcde1"),
            Err(ValidationError::PasswordNeedsSpecial)
        );
        assert_eq!(validate_password("abc1!"), Ok(()));
        assert_eq!(validate_password("p4ss^word"), Ok(()));
    }

    #[test]
    fn test_signup_checks_mismatch_before_strength() {
        // Mismatched confirmation wins over the weak password
        assert_eq!(
            validate_signup("sam", "s@x.io", "a", "b"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_signup("sam", "s@x.io", "a", "a"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_signup("sam", "s@x.io", "abc1!", "abc1!"), Ok(()));
    }

    #[test]
    fn test_signup_requires_all_fields() {
        assert_eq!(
            validate_signup("", "s@x.io", "abc1!", "abc1!"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_signup("sam", "  ", "abc1!", "abc1!"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_login("", "pw"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(validate_login("s@x.io", "pw"), Ok(()));
    }

    #[test]
    fn test_profile_update_password_optional() {
        assert_eq!(validate_profile_update("sam", "s@x.io", ""), Ok(()));
        assert_eq!(
            validate_profile_update("sam", "s@x.io", "weak"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_profile_update("sam", "s@x.io", "abc1!"), Ok(()));
    }

    #[test]
    fn test_task_title_not_blank() {
        assert_eq!(validate_task_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_task_title("Buy milk"), Ok(()));
    }
}
