use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user spoke an utterance that resolved to an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Progress of a multi-turn dialog, if the intent has a dialog model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<DialogState>,
    /// The resolved intent.
    pub intent: Intent,
}

impl IntentRequest {
    /// Returns the value of the named slot, if it was filled.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.intent.slot_value(slot)
    }
}

/// A resolved intent with its slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Intent name, e.g. `AMAZON.HelpIntent`.
    pub name: String,
    /// Whether the user confirmed the intent.
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    /// Slots keyed by slot name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: BTreeMap<String, Slot>,
}

impl Intent {
    /// Creates an intent without slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a filled slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.slots.insert(
            name.clone(),
            Slot {
                name,
                value: Some(value.into()),
                confirmation_status: ConfirmationStatus::None,
            },
        );
        self
    }

    /// Returns the value of the named slot, if it was filled.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.value.as_deref())
    }
}

/// A slot of an [`Intent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Slot name.
    pub name: String,
    /// Spoken value; absent when the user did not fill the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the user confirmed the value.
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

/// Confirmation state of an intent or slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    /// Not asked yet.
    #[default]
    None,
    /// The user said yes.
    Confirmed,
    /// The user said no.
    Denied,
}

/// Progress of a multi-turn dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    /// First turn of the dialog.
    Started,
    /// Dialog under way.
    InProgress,
    /// All required slots are filled and confirmed.
    Completed,
}
