//! Datastreams: scheduled extractions from a connection

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::error::ApiError;
use super::parameters::{Parameter, RequestBody};
use super::path::ApiPath;
use super::resource::ApiResource;
use super::Client;

/// One fetch schedule. Which fields apply depends on `cron_type` and the
/// chosen time range preset; everything unset is left to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_interval_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_start_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_preset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_interval_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_start_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before_time: Option<String>,
}

/// Body of the schedule-only update, sent to `datastreams/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatastreamScheduleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<Schedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "datatype", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl RequestBody for DatastreamScheduleConfig {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatastreamUpdateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "stack", skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<i64>,
    #[serde(rename = "auth", skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_key_columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_datastream: Option<bool>,
    #[serde(rename = "overwrite_filename", skip_serializing_if = "Option::is_none")]
    pub overwrite_file_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_insights_mediaplan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_extract_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_name_keys: Option<String>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
}

impl RequestBody for DatastreamUpdateConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatastreamCreateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "stack", skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<i64>,
    #[serde(rename = "auth", skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<i64>,
    #[serde(rename = "datatype", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_key_columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_datastream: Option<bool>,
    #[serde(rename = "overwrite_filename", skip_serializing_if = "Option::is_none")]
    pub overwrite_file_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_insights_mediaplan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_extract_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_name_keys: Option<String>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<Schedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RequestBody for DatastreamCreateConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastreamResponse {
    pub id: i64,
    #[serde(rename = "datatype")]
    pub data_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    pub datastream_type_id: i64,
    pub absolute_url: String,
    pub created: String,
    pub updated: String,
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub enabled: bool,
    #[serde(rename = "auth")]
    pub auth_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: String,
    /// Empty until the first fetch has run.
    #[serde(deserialize_with = "null_as_default")]
    pub last_fetch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub next_run: String,
    pub overview_url: String,
    pub stack_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub schedules: Vec<Schedule>,
    pub retention_type: i64,
    pub retention_number: i64,
    pub overwrite_key_columns: bool,
    pub overwrite_datastream: bool,
    #[serde(rename = "overwrite_filename")]
    pub overwrite_file_name: bool,
    pub is_insights_mediaplan: bool,
    pub manage_extract_names: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub extract_name_keys: String,
}

/// `datastream-types/{typeId}/datastreams/`
pub struct Datastream;

impl ApiResource for Datastream {
    type CreateRequest = DatastreamCreateConfig;
    type UpdateRequest = DatastreamUpdateConfig;
    type Response = DatastreamResponse;
    type Parent = i64;
    type Id = i64;

    fn collection_path(datastream_type_id: &i64) -> ApiPath {
        ApiPath::root("datastream-types")
            .segment(datastream_type_id)
            .segment("datastreams")
    }
}

impl Client {
    pub async fn create_datastream(
        &self,
        datastream_type_id: i64,
        request: &DatastreamCreateConfig,
    ) -> Result<Option<DatastreamResponse>, ApiError> {
        self.create_resource::<Datastream>(&datastream_type_id, request)
            .await
    }

    pub async fn read_datastream(
        &self,
        datastream_type_id: i64,
        datastream_id: i64,
    ) -> Result<Option<DatastreamResponse>, ApiError> {
        self.read_resource::<Datastream>(&datastream_type_id, &datastream_id)
            .await
    }

    pub async fn update_datastream(
        &self,
        datastream_type_id: i64,
        datastream_id: i64,
        request: &DatastreamUpdateConfig,
    ) -> Result<Option<DatastreamResponse>, ApiError> {
        self.update_resource::<Datastream>(&datastream_type_id, &datastream_id, request)
            .await
    }

    pub async fn delete_datastream(
        &self,
        datastream_type_id: i64,
        datastream_id: i64,
    ) -> Result<Option<DatastreamResponse>, ApiError> {
        self.delete_resource::<Datastream>(&datastream_type_id, &datastream_id)
            .await
    }

    /// PATCH datastreams/{id}/ with scheduling fields only.
    pub async fn update_datastream_schedule(
        &self,
        datastream_id: i64,
        request: &DatastreamScheduleConfig,
    ) -> Result<Option<DatastreamResponse>, ApiError> {
        let path = ApiPath::root("datastreams").segment(datastream_id);
        self.update(&path, request, None).await
    }
}
