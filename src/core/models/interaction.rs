use serde::{Deserialize, Serialize};

use crate::core::errors::{LearnlogError, Result};

/// A recorded learner/item interaction, as returned by the persistence
/// layer. Read-only snapshot: never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLog {
    /// Unique identifier assigned by the persistence layer.
    pub id: i64,
    /// The learner who performed the interaction.
    pub learner_id: i64,
    /// The item interacted with.
    pub item_id: i64,
    /// Free-form tag classifying the interaction (e.g. "attempt").
    /// Empty and arbitrarily long values are both valid here; length and
    /// format limits are the persistence layer's concern.
    pub kind: String,
}

impl InteractionLog {
    pub fn new(id: i64, learner_id: i64, item_id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }

    /// Build a record from untyped JSON data.
    ///
    /// Fails with [`LearnlogError::InvalidInteraction`] when a required
    /// field is missing or of the wrong type. Field values themselves are
    /// never rejected, and unknown extra fields are ignored.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LearnlogError::InvalidInteraction {
            detail: e.to_string(),
        })
    }
}

/// The write model for a new interaction: everything an [`InteractionLog`]
/// carries except the `id`, which the persistence layer assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLogCreate {
    pub learner_id: i64,
    pub item_id: i64,
    pub kind: String,
}

impl InteractionLogCreate {
    pub fn new(learner_id: i64, item_id: i64, kind: impl Into<String>) -> Self {
        Self {
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }

    /// Build a write model from untyped JSON data.
    ///
    /// Same validation contract as [`InteractionLog::from_json_value`]:
    /// presence and type are checked, content is not.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LearnlogError::InvalidInteraction {
            detail: e.to_string(),
        })
    }

    /// Materialize into a read model with the id the persistence layer
    /// assigned.
    pub fn into_log(self, id: i64) -> InteractionLog {
        InteractionLog {
            id,
            learner_id: self.learner_id,
            item_id: self.item_id,
            kind: self.kind,
        }
    }
}
