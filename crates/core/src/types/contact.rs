//! Contact form submission records.
//!
//! Like orders, contacts are externally defined; only `id` is interpreted
//! here and every other field passes through a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ContactId;

/// A contact submission as stored in `data/contacts.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique ID within the contact document.
    pub id: ContactId,
    /// Externally defined fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input for recording a new contact. The ID is assigned by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// Externally defined fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewContact {
    /// Attach an ID, producing a full contact record.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            extra: self.extra,
        }
    }
}

/// Input for updating a contact; keys are shallow-merged over the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    /// Fields to overlay.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactPatch {
    /// Shallow-merge the provided fields over an existing record.
    pub fn apply(self, contact: &mut Contact) {
        for (key, value) in self.extra {
            contact.extra.insert(key, value);
        }
    }
}
