//! Client library for the Adverity marketing data platform.
//!
//! ```no_run
//! # async fn run() -> Result<(), adverity::ApiError> {
//! use adverity::{Client, ClientConfig, Parameter, WorkspaceConfig};
//!
//! let client = Client::with_config(ClientConfig::from_env()?)?;
//! let workspace = client
//!     .create_workspace(&WorkspaceConfig {
//!         name: Some("Acme".to_string()),
//!         datalake_id: Some(12),
//!         parameters: Some(vec![Parameter::new("region", "eu")]),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use api::{ApiError, Client, ClientConfig, Parameter, RequestBody};
pub use api::{
    AuthorizationConfig, ConnectionConfig, DatastreamCreateConfig, DatastreamScheduleConfig,
    DatastreamUpdateConfig, DestinationConfig, DestinationMappingConfig, Schedule,
    WorkspaceConfig,
};
