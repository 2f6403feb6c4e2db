//! Session state carried on the request envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session attribute map, as carried on the wire.
pub type Attributes = Map<String, Value>;

/// The conversation a request belongs to.
///
/// A session is tied to exactly one dispatch call. Attributes are read from
/// the incoming envelope and, unless the session ends, handed back to the
/// platform on the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// `true` when this request opens the session.
    #[serde(default)]
    pub new: bool,
    /// Platform-assigned session identifier.
    pub session_id: String,
    /// The skill the session belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    /// Attributes persisted across turns of this session.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Attributes,
    /// The user talking to the skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    /// Creates a session with the given id and no attributes.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }

    /// Marks the session as newly started.
    pub fn started(mut self) -> Self {
        self.new = true;
        self
    }

    /// Sets a single attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the user.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// Identifies the skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// The skill (application) id.
    pub application_id: String,
}

/// The account linked to the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Platform user id, stable per skill enablement.
    pub user_id: String,
    /// Account-linking token, if the user linked an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Consent granted by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

impl User {
    /// Creates a user with only an id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

/// Permissions the user granted to the skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    /// Token for permission-scoped APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_token: Option<String>,
}
