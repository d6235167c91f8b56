//! Connections to data sources, and their authorizations

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::parameters::{Parameter, RequestBody};
use super::path::ApiPath;
use super::resource::ApiResource;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "stack", skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<i64>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
}

impl RequestBody for ConnectionConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub id: i64,
    pub name: String,
    pub metadata_slack: i64,
    #[serde(rename = "stack")]
    pub stack_id: i64,
    pub app: i64,
    pub user: i64,
    pub is_authorized: bool,
}

/// An authorization is a connection whose credentials are managed by the
/// platform; the API serves both from the same collection.
pub type AuthorizationConfig = ConnectionConfig;
pub type AuthorizationResponse = ConnectionResponse;

/// `connection-types/{typeId}/connections/`
pub struct Connection;

impl ApiResource for Connection {
    type CreateRequest = ConnectionConfig;
    type UpdateRequest = ConnectionConfig;
    type Response = ConnectionResponse;
    type Parent = i64;
    type Id = i64;

    fn collection_path(connection_type_id: &i64) -> ApiPath {
        ApiPath::root("connection-types")
            .segment(connection_type_id)
            .segment("connections")
    }
}

impl Client {
    pub async fn create_connection(
        &self,
        connection_type_id: i64,
        request: &ConnectionConfig,
    ) -> Result<Option<ConnectionResponse>, ApiError> {
        self.create_resource::<Connection>(&connection_type_id, request)
            .await
    }

    pub async fn read_connection(
        &self,
        connection_type_id: i64,
        connection_id: i64,
    ) -> Result<Option<ConnectionResponse>, ApiError> {
        self.read_resource::<Connection>(&connection_type_id, &connection_id)
            .await
    }

    pub async fn update_connection(
        &self,
        connection_type_id: i64,
        connection_id: i64,
        request: &ConnectionConfig,
    ) -> Result<Option<ConnectionResponse>, ApiError> {
        self.update_resource::<Connection>(&connection_type_id, &connection_id, request)
            .await
    }

    pub async fn delete_connection(
        &self,
        connection_type_id: i64,
        connection_id: i64,
    ) -> Result<Option<ConnectionResponse>, ApiError> {
        self.delete_resource::<Connection>(&connection_type_id, &connection_id)
            .await
    }

    pub async fn create_authorization(
        &self,
        connection_type_id: i64,
        request: &AuthorizationConfig,
    ) -> Result<Option<AuthorizationResponse>, ApiError> {
        self.create_connection(connection_type_id, request).await
    }

    pub async fn read_authorization(
        &self,
        connection_type_id: i64,
        connection_id: i64,
    ) -> Result<Option<AuthorizationResponse>, ApiError> {
        self.read_connection(connection_type_id, connection_id)
            .await
    }

    pub async fn update_authorization(
        &self,
        connection_type_id: i64,
        connection_id: i64,
        request: &AuthorizationConfig,
    ) -> Result<Option<AuthorizationResponse>, ApiError> {
        self.update_connection(connection_type_id, connection_id, request)
            .await
    }

    pub async fn delete_authorization(
        &self,
        connection_type_id: i64,
        connection_id: i64,
    ) -> Result<Option<AuthorizationResponse>, ApiError> {
        self.delete_connection(connection_type_id, connection_id)
            .await
    }
}
