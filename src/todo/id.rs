use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a todo, generated server-side when the todo is created.
///
/// The nil UUID is the "default" identifier a client sends when it has none.
/// It is never a valid reference for read or write operations; see
/// [`TodoId::is_valid_reference`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        TodoId(Uuid::new_v4())
    }

    /// The nil sentinel.
    pub fn nil() -> Self {
        TodoId(Uuid::nil())
    }

    /// Whether this id may address an existing todo. False for the nil sentinel.
    pub fn is_valid_reference(&self) -> bool {
        !self.0.is_nil()
    }
}

impl Default for TodoId {
    fn default() -> Self {
        TodoId::nil()
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        TodoId(uuid)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(TodoId)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
