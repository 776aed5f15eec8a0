//! Session and remembered-credential records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RecordFields, timestamp};

/// Field stamped on every session at save time.
pub const SIGNED_AT_FIELD: &str = "signedAt";
/// Field stamped on remembered credentials at remember time.
pub const REMEMBER_AT_FIELD: &str = "rememberAt";
/// Optional auto-login flag on remembered credentials.
pub const AUTO_LOGIN_FIELD: &str = "autoLogin";

/// The session marker. Its mere presence means "signed in".
///
/// Whatever was stored is kept verbatim; a `signedAt` this code did not
/// write still round-trips, it just may not read as a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Caller-supplied session fields.
    #[serde(flatten)]
    pub fields: RecordFields,

    #[serde(rename = "signedAt", default, skip_serializing_if = "Option::is_none")]
    signed_at: Option<Value>,
}

impl Session {
    /// Build a session from caller fields, discarding any `signedAt` they
    /// carry.
    #[must_use]
    pub fn new(mut fields: RecordFields, signed_at: DateTime<Utc>) -> Self {
        fields.remove(SIGNED_AT_FIELD);
        Self {
            fields,
            signed_at: Some(timestamp::to_value(&signed_at)),
        }
    }

    /// When the session was saved, if the stored stamp is readable.
    #[must_use]
    pub fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at.as_ref().and_then(timestamp::parse)
    }

    /// A string field of the session, e.g. `token` or `email`.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Credentials kept for auto-login on the next visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RememberedUser {
    /// Caller-supplied credential fields.
    #[serde(flatten)]
    pub credentials: RecordFields,

    #[serde(rename = "rememberAt", default, skip_serializing_if = "Option::is_none")]
    remember_at: Option<Value>,

    #[serde(rename = "autoLogin", default, skip_serializing_if = "Option::is_none")]
    auto_login: Option<Value>,
}

impl RememberedUser {
    /// Build a record from caller fields.
    ///
    /// A boolean `autoLogin` among the fields is kept; any other `autoLogin`
    /// value and any `rememberAt` are dropped.
    #[must_use]
    pub fn new(mut credentials: RecordFields, remember_at: DateTime<Utc>) -> Self {
        credentials.remove(REMEMBER_AT_FIELD);
        let auto_login = credentials
            .remove(AUTO_LOGIN_FIELD)
            .filter(Value::is_boolean);
        Self {
            credentials,
            remember_at: Some(timestamp::to_value(&remember_at)),
            auto_login,
        }
    }

    /// When the credentials were remembered, if the stored stamp is readable.
    #[must_use]
    pub fn remember_at(&self) -> Option<DateTime<Utc>> {
        self.remember_at.as_ref().and_then(timestamp::parse)
    }

    /// The `autoLogin` flag, if it is a boolean.
    #[must_use]
    pub fn auto_login(&self) -> Option<bool> {
        self.auto_login.as_ref().and_then(Value::as_bool)
    }

    /// Set the `autoLogin` flag, leaving every other field alone.
    pub fn set_auto_login(&mut self, enabled: bool) {
        self.auto_login = Some(Value::Bool(enabled));
    }

    /// Whether auto-login is allowed for this record. Only an explicit
    /// `false` opts out.
    #[must_use]
    pub fn auto_login_enabled(&self) -> bool {
        self.auto_login() != Some(false)
    }

    /// A string credential field, e.g. `email`.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.credentials.get(name).and_then(Value::as_str)
    }
}
