//! Typed client for the Adverity REST API

pub mod catalog;
pub mod client;
pub mod common;
pub mod config;
pub mod connection;
pub mod crud;
pub mod datastream;
pub mod destination;
pub mod destination_mapping;
pub mod error;
pub mod parameters;
pub mod path;
pub mod resource;
pub mod workspace;

#[cfg(test)]
pub mod test_helpers;

pub use catalog::{AuthorizationType, ConnectionType, DatastreamType, DestinationType};
pub use client::{Client, ALLOWED_METHODS, EXPECTED_STATUS_CODES};
pub use common::{Page, QueryParams};
pub use config::ClientConfig;
pub use connection::{
    AuthorizationConfig, AuthorizationResponse, Connection, ConnectionConfig, ConnectionResponse,
};
pub use datastream::{
    Datastream, DatastreamCreateConfig, DatastreamResponse, DatastreamScheduleConfig,
    DatastreamUpdateConfig, Schedule,
};
pub use destination::{Destination, DestinationConfig, DestinationResponse};
pub use destination_mapping::{
    DestinationMapping, DestinationMappingConfig, DestinationMappingResponse,
};
pub use error::ApiError;
pub use parameters::{flattened_marshal, Parameter, RequestBody};
pub use path::ApiPath;
pub use resource::ApiResource;
pub use reqwest::Method;
pub use workspace::{Workspace, WorkspaceConfig, WorkspaceResponse};
