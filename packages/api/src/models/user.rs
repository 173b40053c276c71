//! # Users and authentication payloads
//!
//! [`UserInfo`] is the profile the server returns from `/api/auth/me` and
//! inside every [`AuthResponse`]. It never includes credentials.
//!
//! Request bodies:
//!
//! - [`LoginRequest`]: `identifier` is an email address or phone number.
//! - [`SignupRequest`]: email and phone are both optional but at least one is
//!   required (checked client-side before sending). Empty strings are left out
//!   of the JSON so the server's phone pattern never sees `""`.
//! - [`ForgotPasswordRequest`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email_verified: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub phone_verified: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub account_locked: bool,
}

impl UserInfo {
    /// Get display name, falling back to email, then phone.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }
        self.email
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or_default()
    }

    /// Uppercased first letter of every word in the name ("ada lovelace" → "AL").
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Body returned by login and signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub password_confirm: String,
}

impl SignupRequest {
    /// Build a request from raw form values, trimming text fields and dropping
    /// blank contact details. Passwords are sent exactly as typed.
    pub fn from_form(
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
        password_confirm: &str,
    ) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            name: name.trim().to_string(),
            email: non_blank(email),
            phone: non_blank(phone),
            password: password.to_string(),
            password_confirm: password_confirm.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("ada lovelace").initials(), "AL");
        assert_eq!(user("Grace Brewster Hopper").initials(), "GBH");
        assert_eq!(user("Cher").initials(), "C");
        assert_eq!(user("").initials(), "");
        // Double spaces produce empty words, which contribute nothing.
        assert_eq!(user("Jo  Ann").initials(), "JA");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut u = user("");
        u.phone = Some("+15551234567".to_string());
        assert_eq!(u.display_name(), "+15551234567");
        u.email = Some("a@b.co".to_string());
        assert_eq!(u.display_name(), "a@b.co");
        u.name = "Ada".to_string();
        assert_eq!(u.display_name(), "Ada");
    }

    #[test]
    fn test_decode_server_user() {
        let json = r#"{
            "id": "42",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": null,
            "emailVerified": true,
            "phoneVerified": false,
            "createdAt": "2024-03-01T09:30:00.123456",
            "lastLoginAt": null,
            "accountLocked": false
        }"#;
        let u: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(u.id, "42");
        assert!(u.email_verified);
        assert!(u.created_at.is_some());
        assert!(u.last_login_at.is_none());
    }

    #[test]
    fn test_signup_request_omits_blank_contact() {
        let req = SignupRequest::from_form(" Ada ", "ada@example.com", "   ", "Secret1!", "Secret1!");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("phone").is_none());
        assert_eq!(json["passwordConfirm"], "Secret1!");
    }
}
