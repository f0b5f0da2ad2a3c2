//! `anki://` entity references.
//!
//! Decks and note types are addressed as `anki://decks/<id>` and
//! `anki://models/<id>`, where `<id>` is Anki's own numeric identifier.
//! Ids are owned by Anki, so a URI only stays valid as long as Anki keeps
//! the id.

use std::fmt;
use std::str::FromStr;

use super::error::ResourceError;

/// URI scheme for every resource this server exposes.
pub const SCHEME: &str = "anki";

/// The kind of Anki entity a URI points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Deck,
    Model,
}

impl EntityKind {
    /// The URI path segment for this kind.
    pub fn category(self) -> &'static str {
        match self {
            Self::Deck => "decks",
            Self::Model => "models",
        }
    }

    fn from_category(category: &str) -> Option<Self> {
        match category {
            "decks" => Some(Self::Deck),
            "models" => Some(Self::Model),
            _ => None,
        }
    }
}

/// A parsed `anki://<category>/<id>` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: u64,
}

impl EntityRef {
    pub fn deck(id: u64) -> Self {
        Self {
            kind: EntityKind::Deck,
            id,
        }
    }

    pub fn model(id: u64) -> Self {
        Self {
            kind: EntityKind::Model,
            id,
        }
    }

    /// The canonical URI string.
    pub fn uri(&self) -> String {
        self.to_string()
    }

    /// Parse a resource URI.
    ///
    /// The scheme may be omitted (`decks/42`). A foreign scheme or unknown
    /// category is `NotFound`; a known category with a missing or
    /// non-numeric id is `InvalidUri`.
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let path = match uri.split_once("://") {
            Some((scheme, rest)) if scheme == SCHEME => rest,
            Some(_) => return Err(ResourceError::not_found(uri)),
            None => uri,
        };

        let (category, id) = path.split_once('/').unwrap_or((path, ""));
        let kind = EntityKind::from_category(category).ok_or_else(|| ResourceError::not_found(uri))?;

        let id = canonical_id(id).ok_or_else(|| {
            ResourceError::invalid_uri(format!(
                "{uri}: expected a numeric {} id after '{category}/'",
                match kind {
                    EntityKind::Deck => "deck",
                    EntityKind::Model => "model",
                }
            ))
        })?;

        Ok(Self { kind, id })
    }
}

/// Digits only, no sign and no leading zeros, so the URI round-trips.
fn canonical_id(id: &str) -> Option<u64> {
    let digits = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
    if !digits || (id.len() > 1 && id.starts_with('0')) {
        return None;
    }
    id.parse().ok()
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", SCHEME, self.kind.category(), self.id)
    }
}

impl FromStr for EntityRef {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
