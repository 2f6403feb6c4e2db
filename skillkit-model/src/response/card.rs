use serde::{Deserialize, Serialize};

/// A card rendered in the companion app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Card {
    /// Title and plain content.
    Simple {
        /// Card title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Card body.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Title, text and an optional image.
    Standard {
        /// Card title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Card body.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        /// Card image.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<Image>,
    },
    /// Prompts the user to link an account.
    LinkAccount,
    /// Prompts the user to grant the listed permissions.
    AskForPermissionsConsent {
        /// Permission scopes, e.g. `read::alexa:device:all:address`.
        permissions: Vec<String>,
    },
}

/// Image for a [`Card::Standard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image URL for small screens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    /// Image URL for large screens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}
