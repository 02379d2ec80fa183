//! Registration form and its submit-time validator.

use crate::domain::errors::ValidationError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Loose shape check: non-space, '@', non-space, '.', non-space.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        Self::Username,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// User-facing message for a field failure.
pub fn error_message(field: FormField, error: ValidationError) -> String {
    match (field, error) {
        (FormField::ConfirmPassword, ValidationError::Mismatch) => {
            "Passwords do not match".to_string()
        }
        (FormField::Email, ValidationError::InvalidFormat) => {
            "Please enter a valid email".to_string()
        }
        (field, ValidationError::Required) => format!("{} is required", field.label()),
        (field, ValidationError::TooShort { min }) => {
            format!("{} must be at least {} characters", field.label(), min)
        }
        (field, err) => format!("{} {}", field.label(), err),
    }
}

pub type FieldErrors = BTreeMap<FormField, ValidationError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }
}

/// Validate the whole form. An empty map means the form may be submitted.
///
/// Username and email are checked for blankness after trimming, but their length and
/// shape checks see the raw value. The confirmation is compared even when the
/// password itself is invalid.
pub fn validate(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.username.trim().is_empty() {
        errors.insert(FormField::Username, ValidationError::Required);
    } else if form.username.chars().count() < USERNAME_MIN_CHARS {
        errors.insert(
            FormField::Username,
            ValidationError::TooShort {
                min: USERNAME_MIN_CHARS,
            },
        );
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, ValidationError::Required);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(FormField::Email, ValidationError::InvalidFormat);
    }

    if form.password.is_empty() {
        errors.insert(FormField::Password, ValidationError::Required);
    } else if form.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert(
            FormField::Password,
            ValidationError::TooShort {
                min: PASSWORD_MIN_CHARS,
            },
        );
    }

    if form.password != form.confirm_password {
        errors.insert(FormField::ConfirmPassword, ValidationError::Mismatch);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_all_four_fields_fail() {
        let errors = validate(&form("ab", "bad", "123", "456"));
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[&FormField::Username],
            ValidationError::TooShort { min: 3 }
        );
        assert_eq!(errors[&FormField::Email], ValidationError::InvalidFormat);
        assert_eq!(
            errors[&FormField::Password],
            ValidationError::TooShort { min: 6 }
        );
        assert_eq!(
            errors[&FormField::ConfirmPassword],
            ValidationError::Mismatch
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&form("alice", "a@b.com", "secret1", "secret1")).is_empty());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let errors = validate(&form("   ", " ", "", ""));
        assert_eq!(errors[&FormField::Username], ValidationError::Required);
        assert_eq!(errors[&FormField::Email], ValidationError::Required);
        assert_eq!(errors[&FormField::Password], ValidationError::Required);
        // "" == "" so the confirmation matches.
        assert!(!errors.contains_key(&FormField::ConfirmPassword));
    }

    #[test]
    fn test_password_of_spaces_is_not_blank() {
        let errors = validate(&form("alice", "a@b.com", "      ", "      "));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_pattern_is_loose() {
        for ok in ["a@b.c", "x y@b.com", "first.last@mail.example.org"] {
            assert!(
                !validate(&form("alice", ok, "secret1", "secret1"))
                    .contains_key(&FormField::Email),
                "{ok}"
            );
        }
        for bad in ["a@b", "@.", "a b@c d", "plain"] {
            assert_eq!(
                validate(&form("alice", bad, "secret1", "secret1")).get(&FormField::Email),
                Some(&ValidationError::InvalidFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            error_message(FormField::Username, ValidationError::Required),
            "Username is required"
        );
        assert_eq!(
            error_message(FormField::Password, ValidationError::TooShort { min: 6 }),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            error_message(FormField::Email, ValidationError::InvalidFormat),
            "Please enter a valid email"
        );
        assert_eq!(
            error_message(FormField::ConfirmPassword, ValidationError::Mismatch),
            "Passwords do not match"
        );
    }
}
