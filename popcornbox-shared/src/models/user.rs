//! The signed-in user's profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RecordFields;

/// Profile of the signed-in user.
///
/// The shape is owned by the sign-in form, so the record is kept as-is.
/// `name` and `email` are read when they happen to be strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    /// Every profile field.
    pub fields: RecordFields,
}

impl UserProfile {
    /// A profile carrying only an email address.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self::default().with_field("email", email.into())
    }

    /// Builder-style setter for a profile field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The `name` field, if it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// The `email` field, if it is a string.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    /// Name to greet the user with: the display name, else the local part of
    /// the email address.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name().filter(|name| !name.is_empty()).or_else(|| {
            self.email()
                .and_then(|email| email.split('@').next())
                .filter(|local| !local.is_empty())
        })
    }
}
