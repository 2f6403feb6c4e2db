//! Household list management.

use super::{
    base::{BaseServiceClient, ServiceError},
    client::HttpMethod,
};
use serde::{Deserialize, Serialize};

/// Whether a list is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListState {
    /// In use.
    Active,
    /// Archived by the user.
    Archived,
}

/// Whether an item is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemStatus {
    /// Not done yet.
    Active,
    /// Checked off.
    Completed,
}

impl ListItemStatus {
    fn as_path(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Summary of one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    /// List id.
    pub list_id: String,
    /// Display name.
    pub name: String,
    /// Whether the list is in use.
    pub state: ListState,
    /// Revision counter.
    pub version: u64,
}

/// Response of [`ListManagementServiceClient::lists_metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsMetadata {
    /// Every list of the household.
    #[serde(default)]
    pub lists: Vec<ListMetadata>,
}

/// One list with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdList {
    /// List id.
    pub list_id: String,
    /// Display name.
    pub name: String,
    /// Whether the list is in use.
    pub state: ListState,
    /// Revision counter.
    pub version: u64,
    /// Items with the requested status.
    #[serde(default)]
    pub items: Vec<ListItem>,
}

/// An entry on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Item id.
    pub id: String,
    /// Text of the item.
    pub value: String,
    /// Open or checked off.
    pub status: ListItemStatus,
    /// Revision counter.
    pub version: u64,
}

/// Request body for [`ListManagementServiceClient::create_list_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateListItemRequest {
    /// Text of the item.
    pub value: String,
    /// Initial status.
    pub status: ListItemStatus,
}

/// Client for `/v2/householdlists`.
#[derive(Clone)]
pub struct ListManagementServiceClient {
    base: BaseServiceClient,
}

impl ListManagementServiceClient {
    /// Create a client on top of `base`.
    pub fn new(base: BaseServiceClient) -> Self {
        Self { base }
    }

    /// Every list of the household, without items.
    pub async fn lists_metadata(&self) -> Result<ListsMetadata, ServiceError> {
        self.base.call(HttpMethod::Get, "/v2/householdlists/").await
    }

    /// One list with its items of the given status.
    pub async fn get_list(
        &self,
        list_id: &str,
        status: ListItemStatus,
    ) -> Result<HouseholdList, ServiceError> {
        let path = format!("/v2/householdlists/{list_id}/{}", status.as_path());
        self.base.call(HttpMethod::Get, &path).await
    }

    /// Adds an item to a list.
    pub async fn create_list_item(
        &self,
        list_id: &str,
        request: &CreateListItemRequest,
    ) -> Result<ListItem, ServiceError> {
        let path = format!("/v2/householdlists/{list_id}/items");
        self.base
            .call_with_body(HttpMethod::Post, &path, request)
            .await
    }

    /// Removes an item from a list.
    pub async fn delete_list_item(&self, list_id: &str, item_id: &str) -> Result<(), ServiceError> {
        let path = format!("/v2/householdlists/{list_id}/items/{item_id}");
        self.base.call(HttpMethod::Delete, &path).await
    }
}
