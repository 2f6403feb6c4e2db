//! Device address lookup.

use super::{
    base::{BaseServiceClient, ServiceError},
    client::HttpMethod,
};
use serde::{Deserialize, Serialize};

/// A device's full address. Every field may be absent.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_or_county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Country and postal code only.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Client for `/v1/devices/{deviceId}/settings/address`.
#[derive(Clone)]
pub struct DeviceAddressServiceClient {
    base: BaseServiceClient,
}

impl DeviceAddressServiceClient {
    /// Create a client on top of `base`.
    pub fn new(base: BaseServiceClient) -> Self {
        Self { base }
    }

    /// The full address of `device_id`. Requires the user's address consent.
    pub async fn full_address(&self, device_id: &str) -> Result<Address, ServiceError> {
        let path = format!("/v1/devices/{device_id}/settings/address");
        self.base.call(HttpMethod::Get, &path).await
    }

    /// Country and postal code of `device_id`.
    pub async fn country_and_postal_code(
        &self,
        device_id: &str,
    ) -> Result<ShortAddress, ServiceError> {
        let path = format!("/v1/devices/{device_id}/settings/address/countryAndPostalCode");
        self.base.call(HttpMethod::Get, &path).await
    }
}
