//! Construction of service clients for the current request.

use super::{
    base::{BaseServiceClient, ServiceError},
    client::ApiClient,
    device_address::DeviceAddressServiceClient,
    directive::DirectiveServiceClient,
    list_management::ListManagementServiceClient,
};
use skillkit_model::RequestEnvelope;
use std::sync::Arc;

/// Builds service clients from the envelope's `context.System` endpoint and
/// token.
#[derive(Clone)]
pub struct ServiceClientFactory {
    api_client: Arc<dyn ApiClient>,
    api_endpoint: Option<String>,
    api_access_token: Option<String>,
}

impl ServiceClientFactory {
    /// Create a factory for one request envelope.
    pub fn new(api_client: Arc<dyn ApiClient>, envelope: &RequestEnvelope) -> Self {
        let system = envelope.context.as_ref().map(|context| &context.system);
        Self {
            api_client,
            api_endpoint: system.and_then(|s| s.api_endpoint.clone()),
            api_access_token: system.and_then(|s| s.api_access_token.clone()),
        }
    }

    fn base(&self) -> Result<BaseServiceClient, ServiceError> {
        match (&self.api_endpoint, &self.api_access_token) {
            (Some(endpoint), Some(token)) => Ok(BaseServiceClient::new(
                self.api_client.clone(),
                endpoint.as_str(),
                token.as_str(),
            )),
            _ => Err(ServiceError::MissingContext),
        }
    }

    /// Client for progressive responses.
    pub fn directive_service(&self) -> Result<DirectiveServiceClient, ServiceError> {
        self.base().map(DirectiveServiceClient::new)
    }

    /// Client for device address lookups.
    pub fn device_address_service(&self) -> Result<DeviceAddressServiceClient, ServiceError> {
        self.base().map(DeviceAddressServiceClient::new)
    }

    /// Client for household lists.
    pub fn list_management_service(&self) -> Result<ListManagementServiceClient, ServiceError> {
        self.base().map(ListManagementServiceClient::new)
    }
}
