//! Shared shape of the vendor's nested REST collections

use serde::de::DeserializeOwned;
use std::fmt::Display;

use super::error::ApiError;
use super::parameters::RequestBody;
use super::path::ApiPath;
use super::Client;

/// A resource living in a REST collection.
///
/// `Parent` holds the identifiers of the enclosing collection, e.g. the
/// connection type id for connections, or `()` for top-level collections.
pub trait ApiResource {
    type CreateRequest: RequestBody;
    type UpdateRequest: RequestBody;
    type Response: DeserializeOwned;
    type Parent: ?Sized;
    type Id: Display + ?Sized;

    fn collection_path(parent: &Self::Parent) -> ApiPath;

    fn resource_path(parent: &Self::Parent, id: &Self::Id) -> ApiPath {
        Self::collection_path(parent).segment(id)
    }
}

impl Client {
    pub async fn create_resource<R: ApiResource>(
        &self,
        parent: &R::Parent,
        request: &R::CreateRequest,
    ) -> Result<Option<R::Response>, ApiError> {
        self.create(&R::collection_path(parent), request, None)
            .await
    }

    pub async fn read_resource<R: ApiResource>(
        &self,
        parent: &R::Parent,
        id: &R::Id,
    ) -> Result<Option<R::Response>, ApiError> {
        self.read(&R::resource_path(parent, id), None).await
    }

    pub async fn update_resource<R: ApiResource>(
        &self,
        parent: &R::Parent,
        id: &R::Id,
        request: &R::UpdateRequest,
    ) -> Result<Option<R::Response>, ApiError> {
        self.update(&R::resource_path(parent, id), request, None)
            .await
    }

    pub async fn delete_resource<R: ApiResource>(
        &self,
        parent: &R::Parent,
        id: &R::Id,
    ) -> Result<Option<R::Response>, ApiError> {
        self.delete(&R::resource_path(parent, id), None).await
    }
}
