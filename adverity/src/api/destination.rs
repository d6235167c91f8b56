//! Destinations, called targets by the API

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::error::ApiError;
use super::parameters::{Parameter, RequestBody};
use super::path::ApiPath;
use super::resource::ApiResource;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestinationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "stack", skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<i64>,
    #[serde(rename = "auth", skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_mapping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_string: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_headers: Option<bool>,
    #[serde(
        rename = "column_names_to_lowercase",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_names_to_lower_case: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers_formatting: Option<i64>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
}

impl RequestBody for DestinationConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    pub is_schema_mapping_required: bool,
    pub name: String,
    pub schema_mapping: bool,
    pub force_string: bool,
    pub format_headers: bool,
    #[serde(rename = "column_names_to_lowercase")]
    pub column_names_to_lower_case: bool,
    /// Only set for warehouse destinations.
    #[serde(deserialize_with = "null_as_default")]
    pub project: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dataset: String,
    pub headers_formatting: i64,
    #[serde(rename = "stack")]
    pub stack_id: i64,
    #[serde(rename = "auth")]
    pub auth_id: i64,
}

/// `target-types/{typeId}/targets/`
pub struct Destination;

impl ApiResource for Destination {
    type CreateRequest = DestinationConfig;
    type UpdateRequest = DestinationConfig;
    type Response = DestinationResponse;
    type Parent = i64;
    type Id = i64;

    fn collection_path(destination_type_id: &i64) -> ApiPath {
        ApiPath::root("target-types")
            .segment(destination_type_id)
            .segment("targets")
    }
}

impl Client {
    pub async fn create_destination(
        &self,
        destination_type_id: i64,
        request: &DestinationConfig,
    ) -> Result<Option<DestinationResponse>, ApiError> {
        self.create_resource::<Destination>(&destination_type_id, request)
            .await
    }

    pub async fn read_destination(
        &self,
        destination_type_id: i64,
        destination_id: i64,
    ) -> Result<Option<DestinationResponse>, ApiError> {
        self.read_resource::<Destination>(&destination_type_id, &destination_id)
            .await
    }

    pub async fn update_destination(
        &self,
        destination_type_id: i64,
        destination_id: i64,
        request: &DestinationConfig,
    ) -> Result<Option<DestinationResponse>, ApiError> {
        self.update_resource::<Destination>(&destination_type_id, &destination_id, request)
            .await
    }

    pub async fn delete_destination(
        &self,
        destination_type_id: i64,
        destination_id: i64,
    ) -> Result<Option<DestinationResponse>, ApiError> {
        self.delete_resource::<Destination>(&destination_type_id, &destination_id)
            .await
    }
}
