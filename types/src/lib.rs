use serde::{Deserialize, Serialize};

/// Identifier assigned by the backing store.
///
/// Stores key writers either by number or by string; both are passed
/// through to clients in their original JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WriterId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for WriterId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for WriterId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for WriterId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl std::fmt::Display for WriterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single record of the writers collection.
///
/// The `id` is assigned by the backing store and never changes. Any
/// attribute the store keeps beyond `id` and `name` is carried in `extra`
/// and serialized alongside them, so the API returns records exactly as
/// the store holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Writer {
    pub id: WriterId,

    pub name: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Writer {
    pub fn new(id: impl Into<WriterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}
