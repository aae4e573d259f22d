//! Per-entity CRUD API
//!
//! [`EntityClient`] is the network implementation; screens depend on the
//! [`EntityApi`] trait so they can be driven by a fake in tests.

use crate::{ApiResult, HttpClient};
use async_trait::async_trait;
use shared::{EntityId, Resource};
use std::marker::PhantomData;

/// CRUD operations for one entity kind.
///
/// All four calls are one-shot: no retries, no cancellation. Failures
/// surface as a single [`crate::ApiError`] with a display-ready message.
#[async_trait]
pub trait EntityApi<R: Resource>: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> ApiResult<Vec<R>>;

    /// Create a new entity; the backend assigns the identifier.
    async fn create(&self, draft: &R::Draft) -> ApiResult<R>;

    /// Update the entity addressed by `id`.
    async fn update(&self, id: EntityId, draft: &R::Draft) -> ApiResult<R>;

    /// Delete the entity addressed by `id`.
    async fn delete(&self, id: EntityId) -> ApiResult<()>;
}

/// HTTP-backed [`EntityApi`] for the resource `R`
#[derive(Debug, Clone)]
pub struct EntityClient<R: Resource> {
    http: HttpClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> EntityClient<R> {
    /// Create an entity client over a shared HTTP transport
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> EntityApi<R> for EntityClient<R> {
    async fn list(&self) -> ApiResult<Vec<R>> {
        self.http.get(&format!("{}/get", R::SEGMENT)).await
    }

    async fn create(&self, draft: &R::Draft) -> ApiResult<R> {
        self.http.post(&format!("{}/add", R::SEGMENT), draft).await
    }

    async fn update(&self, id: EntityId, draft: &R::Draft) -> ApiResult<R> {
        self.http
            .put(&format!("{}/{}", R::SEGMENT, id), draft)
            .await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.http.delete(&format!("{}/{}", R::SEGMENT, id)).await
    }
}
