//! Wishlist entries and their ids.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::RecordFields;

/// Identity of a wishlist entry.
///
/// Usually a numeric movie id or an opaque string, but any JSON value is
/// accepted so one odd entry never makes the whole list unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id, as handed out by the movie catalogue.
    Number(Number),
    /// String id.
    Text(String),
    /// Boolean id.
    Flag(bool),
    /// Anything else, compared by value.
    Other(Value),
}

impl ItemId {
    /// `0`, `""` and `false` do not identify anything.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(id) => id.as_f64().is_some_and(|id| id == 0.0),
            Self::Text(id) => id.is_empty(),
            Self::Flag(id) => !id,
            Self::Other(id) => id.is_null(),
        }
    }
}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Number(id) => id.hash(state),
            Self::Text(id) => id.hash(state),
            Self::Flag(id) => id.hash(state),
            Self::Other(id) => id.to_string().hash(state),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
            Self::Flag(id) => write!(f, "{id}"),
            Self::Other(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A liked movie. Only `id` matters to the wishlist; the rest is whatever
/// the card that liked it wanted to keep (title, poster path, rating...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Identity used for membership. Missing on malformed input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    /// Every other field.
    #[serde(flatten)]
    pub details: RecordFields,
}

impl WishlistItem {
    /// An item with just an id.
    #[must_use]
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: Some(id.into()),
            details: RecordFields::new(),
        }
    }

    /// Builder-style setter for a detail field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(name.into(), value.into());
        self
    }

    /// The id, unless it is missing or blank.
    #[must_use]
    pub fn identity(&self) -> Option<&ItemId> {
        self.id.as_ref().filter(|id| !id.is_blank())
    }

    /// The `title` detail, if it is a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }
}
