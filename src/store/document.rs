//! Raw document representation shared by all collections.

use serde_json::{Map, Value};
use uuid::Uuid;

/// Untyped document as held by the remote store.
///
/// The body is always a JSON object; readers apply schema-on-read decoding
/// with deterministic defaults rather than trusting the stored shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: Uuid,
    body: Map<String, Value>,
}

impl Document {
    /// Creates a document from an identifier and a JSON object body.
    #[must_use]
    pub const fn new(id: Uuid, body: Map<String, Value>) -> Self {
        Self { id, body }
    }

    /// Returns the document identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the document body.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns a single field of the body, when present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Merges the given fields into the body, last writer wins per field.
    pub(crate) fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            self.body.insert(key, value);
        }
    }
}

/// Entities that carry a stable document identifier.
///
/// Used by the client-side mirror to diff consecutive snapshots by identity
/// rather than by value.
pub trait Identified {
    /// Returns the entity's document identifier.
    fn ident(&self) -> Uuid;
}
