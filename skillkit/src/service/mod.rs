//! # Platform Services
//!
//! Clients for the platform's outbound HTTP APIs.
//!
//! [`ApiClient`] is the transport seam ([`ReqwestApiClient`] by default);
//! [`BaseServiceClient`] adds bearer auth and JSON handling on top; the typed
//! clients wrap one API each. Handlers get them from
//! [`HandlerInput::service_client_factory`](crate::HandlerInput::service_client_factory).
//!
//! Any 2xx status is success. Everything else is [`ServiceError::Service`]
//! carrying the status and body.

mod base;
mod client;
mod device_address;
mod directive;
mod factory;
mod list_management;

pub use base::{BaseServiceClient, ServiceError};
pub use client::{
    API_TIMEOUT_ENV, ApiClient, ApiClientRequest, ApiClientResponse, DEFAULT_API_TIMEOUT_SECS,
    HttpMethod, ReqwestApiClient,
};
pub use device_address::{Address, DeviceAddressServiceClient, ShortAddress};
pub use directive::{DirectiveHeader, DirectiveServiceClient, ProgressiveDirective, SendDirectiveRequest};
pub use factory::ServiceClientFactory;
pub use list_management::{
    CreateListItemRequest, HouseholdList, ListItem, ListItemStatus, ListManagementServiceClient,
    ListMetadata, ListState, ListsMetadata,
};
