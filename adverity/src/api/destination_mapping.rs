//! Mappings from a datastream's output to a table in a destination

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::parameters::{Parameter, RequestBody};
use super::path::ApiPath;
use super::resource::ApiResource;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestinationMappingConfig {
    #[serde(rename = "datastream", skip_serializing_if = "Option::is_none")]
    pub datastream_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
}

impl RequestBody for DestinationMappingConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationMappingResponse {
    pub id: i64,
    #[serde(rename = "target")]
    pub destination_id: i64,
    #[serde(rename = "datastream")]
    pub datastream_id: i64,
    pub enabled: bool,
    pub table_name: String,
}

/// `target-types/{typeId}/targets/{destinationId}/mappings/`
pub struct DestinationMapping;

impl ApiResource for DestinationMapping {
    type CreateRequest = DestinationMappingConfig;
    type UpdateRequest = DestinationMappingConfig;
    type Response = DestinationMappingResponse;
    /// (destination type id, destination id)
    type Parent = (i64, i64);
    type Id = i64;

    fn collection_path(&(destination_type_id, destination_id): &(i64, i64)) -> ApiPath {
        ApiPath::root("target-types")
            .segment(destination_type_id)
            .segment("targets")
            .segment(destination_id)
            .segment("mappings")
    }
}

impl Client {
    pub async fn create_destination_mapping(
        &self,
        destination_type_id: i64,
        destination_id: i64,
        request: &DestinationMappingConfig,
    ) -> Result<Option<DestinationMappingResponse>, ApiError> {
        self.create_resource::<DestinationMapping>(
            &(destination_type_id, destination_id),
            request,
        )
        .await
    }

    pub async fn read_destination_mapping(
        &self,
        destination_type_id: i64,
        destination_id: i64,
        mapping_id: i64,
    ) -> Result<Option<DestinationMappingResponse>, ApiError> {
        self.read_resource::<DestinationMapping>(
            &(destination_type_id, destination_id),
            &mapping_id,
        )
        .await
    }

    pub async fn update_destination_mapping(
        &self,
        destination_type_id: i64,
        destination_id: i64,
        mapping_id: i64,
        request: &DestinationMappingConfig,
    ) -> Result<Option<DestinationMappingResponse>, ApiError> {
        self.update_resource::<DestinationMapping>(
            &(destination_type_id, destination_id),
            &mapping_id,
            request,
        )
        .await
    }

    pub async fn delete_destination_mapping(
        &self,
        destination_type_id: i64,
        destination_id: i64,
        mapping_id: i64,
    ) -> Result<Option<DestinationMappingResponse>, ApiError> {
        self.delete_resource::<DestinationMapping>(
            &(destination_type_id, destination_id),
            &mapping_id,
        )
        .await
    }
}
