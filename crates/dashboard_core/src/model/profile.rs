//! Account profile document and password-change validation.
//!
//! The profile is a single JSON object, not a list, so it is persisted through
//! `Preference` rather than `EntityStore`. Passwords are validated only and
//! never written to the medium.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const PROFILE_KEY: &str = "profileData";
pub const EMAIL_NOTIFICATIONS_KEY: &str = "emailNotifications";

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub username: String,
    pub account_created: String,
    pub account_status: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: "Elon Musk".to_string(),
            email: "wiseway@gmail.com".to_string(),
            phone: "+91 9876543210".to_string(),
            location: "Ahmedabad, Gujarat".to_string(),
            bio: "Experienced product manager with a passion for building innovative solutions."
                .to_string(),
            username: "product_manager".to_string(),
            account_created: "January 31, 2026".to_string(),
            account_status: "Active".to_string(),
        }
    }
}

impl Profile {
    /// Replaces one profile field from form input. Returns `false` for an
    /// unknown or read-only field name.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "location" => &mut self.location,
            "bio" => &mut self.bio,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    Mismatch,
    TooShort { min_chars: usize },
}

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch => write!(f, "passwords do not match"),
            Self::TooShort { min_chars } => {
                write!(f, "password must be at least {min_chars} characters long")
            }
        }
    }
}

impl Error for PasswordError {}

/// Transient password-change form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// Checks confirmation before length, matching the order users see errors in.
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.new_password != self.confirm_password {
            return Err(PasswordError::Mismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(PasswordError::TooShort {
                min_chars: MIN_PASSWORD_CHARS,
            });
        }
        Ok(())
    }
}
