//! Workspaces, called stacks by the API

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::error::ApiError;
use super::parameters::{Parameter, RequestBody};
use super::path::ApiPath;
use super::resource::ApiResource;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datalake_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip)]
    pub parameters: Option<Vec<Parameter>>,
}

impl RequestBody for WorkspaceConfig {
    fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    pub add_connection_url: String,
    pub add_datastream_url: String,
    pub change_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datalake: String,
    pub destination: serde_json::Value,
    pub extracts_url: String,
    pub issues_url: String,
    pub id: i64,
    pub name: String,
    pub overview_url: String,
    /// Empty for a root workspace.
    #[serde(deserialize_with = "null_as_default")]
    pub parent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_id: i64,
    pub slug: String,
    pub url: String,
    pub counts: WorkspaceCounts,
    pub permissions: WorkspacePermissions,
    #[serde(rename = "default_manage_extract_names")]
    pub manage_extract_names: bool,
    pub updated: String,
    pub created: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCounts {
    pub connections: i64,
    pub datastreams: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePermissions {
    pub is_creator: bool,
    pub is_datastream_manager: bool,
    pub is_viewer: bool,
}

/// `stacks/`, addressed by slug.
pub struct Workspace;

impl ApiResource for Workspace {
    type CreateRequest = WorkspaceConfig;
    type UpdateRequest = WorkspaceConfig;
    type Response = WorkspaceResponse;
    type Parent = ();
    type Id = str;

    fn collection_path(_: &()) -> ApiPath {
        ApiPath::root("stacks")
    }
}

impl Client {
    /// POST stacks/
    pub async fn create_workspace(
        &self,
        request: &WorkspaceConfig,
    ) -> Result<Option<WorkspaceResponse>, ApiError> {
        self.create_resource::<Workspace>(&(), request).await
    }

    /// GET stacks/{slug}/
    pub async fn read_workspace(
        &self,
        slug: &str,
    ) -> Result<Option<WorkspaceResponse>, ApiError> {
        self.read_resource::<Workspace>(&(), slug).await
    }

    /// PATCH stacks/{slug}/
    pub async fn update_workspace(
        &self,
        slug: &str,
        request: &WorkspaceConfig,
    ) -> Result<Option<WorkspaceResponse>, ApiError> {
        self.update_resource::<Workspace>(&(), slug, request).await
    }

    /// DELETE stacks/{slug}/
    pub async fn delete_workspace(
        &self,
        slug: &str,
    ) -> Result<Option<WorkspaceResponse>, ApiError> {
        self.delete_resource::<Workspace>(&(), slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_helpers::{create_test_client, TEST_TOKEN};
    use mockito::Server;
    use serde_json::json;

    fn workspace_json() -> serde_json::Value {
        json!({
            "add_connection_url": "https://acme.example.com/core/acme/connections/add/",
            "add_datastream_url": "https://acme.example.com/core/acme/datastreams/add/",
            "change_url": "https://acme.example.com/core/acme/change/",
            "datalake": "default",
            "destination": null,
            "extracts_url": "https://acme.example.com/core/acme/extracts/",
            "issues_url": "https://acme.example.com/core/acme/issues/",
            "id": 7,
            "name": "Acme",
            "overview_url": "https://acme.example.com/core/acme/",
            "parent": null,
            "parent_id": null,
            "slug": "acme",
            "url": "https://acme.example.com/api/stacks/acme/",
            "counts": {"connections": 3, "datastreams": 5},
            "permissions": {"isCreator": true, "isDatastreamManager": false, "isViewer": true},
            "default_manage_extract_names": false,
            "updated": "2025-05-01T10:00:00Z",
            "created": "2025-04-01T10:00:00Z"
        })
    }

    #[test]
    fn response_parses_nested_objects_and_null_parent() {
        let workspace: WorkspaceResponse = serde_json::from_value(workspace_json()).unwrap();

        assert_eq!(workspace.id, 7);
        assert_eq!(workspace.parent, "");
        assert_eq!(workspace.parent_id, 0);
        assert_eq!(workspace.counts.datastreams, 5);
        assert!(workspace.permissions.is_creator);
        assert!(!workspace.manage_extract_names);

        let encoded = serde_json::to_string(&workspace).unwrap();
        let decoded: WorkspaceResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, workspace);
    }

    #[tokio::test]
    async fn create_workspace_sends_flattened_parameters() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/stacks/")
            .match_header("authorization", format!("Token {}", TEST_TOKEN).as_str())
            .match_body(r#"{"name":"Acme","datalake_id":12,"region":"eu"}"#)
            .with_status(201)
            .with_body(workspace_json().to_string())
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let request = WorkspaceConfig {
            name: Some("Acme".to_string()),
            datalake_id: Some(12),
            parameters: Some(vec![Parameter::new("region", "eu")]),
            ..Default::default()
        };

        let workspace = client.create_workspace(&request).await.unwrap().unwrap();
        assert_eq!(workspace.slug, "acme");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn name_parameter_overrides_name_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/stacks/")
            .match_body(r#"{"name":"Override","datalake_id":12}"#)
            .with_status(201)
            .with_body(workspace_json().to_string())
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let request = WorkspaceConfig {
            name: Some("Acme".to_string()),
            datalake_id: Some(12),
            parameters: Some(vec![Parameter::new("name", "Override")]),
            ..Default::default()
        };

        client.create_workspace(&request).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn workspace_lifecycle_targets_slug_path() {
        let mut server = Server::new_async().await;
        let read = server
            .mock("GET", "/api/stacks/acme/")
            .with_status(200)
            .with_body(workspace_json().to_string())
            .create_async()
            .await;
        let update = server
            .mock("PATCH", "/api/stacks/acme/")
            .match_body(r#"{"parent_id":3}"#)
            .with_status(200)
            .with_body(workspace_json().to_string())
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/stacks/acme/")
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());

        let workspace = client.read_workspace("acme").await.unwrap().unwrap();
        assert_eq!(workspace.name, "Acme");

        let request = WorkspaceConfig {
            parent_id: Some(3),
            ..Default::default()
        };
        client.update_workspace("acme", &request).await.unwrap();

        let deleted = client.delete_workspace("acme").await.unwrap();
        assert!(deleted.is_none());

        read.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }
}
