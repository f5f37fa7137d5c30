//! HTTP Backend
//!
//! `ItemBackend` over the item service REST endpoints.
//! On wasm32 reqwest issues the requests through `fetch`.

use async_trait::async_trait;
use reqwest::Client;

use crate::backend::ItemBackend;
use crate::config::ApiConfig;
use crate::error::SyncResult;
use crate::model::{Item, ItemId, NewItem};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl ItemBackend for HttpBackend {
    async fn list_items(&self) -> SyncResult<Vec<Item>> {
        let items: Vec<Item> = self
            .http
            .get(self.config.items_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(items)
    }

    async fn create_item(&self, item: &NewItem) -> SyncResult<Item> {
        let created: Item = self
            .http
            .post(self.config.items_url())
            .json(item)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }

    async fn delete_item(&self, id: ItemId) -> SyncResult<()> {
        self.http
            .delete(self.config.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get},
        Json, Router,
    };
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct ServiceState {
        items: Arc<Mutex<Vec<Item>>>,
        next_id: Arc<Mutex<ItemId>>,
    }

    async fn list(State(state): State<ServiceState>) -> Json<Vec<Item>> {
        Json(state.items.lock().unwrap().clone())
    }

    async fn create(State(state): State<ServiceState>, Json(body): Json<NewItem>) -> Json<Item> {
        let mut next_id = state.next_id.lock().unwrap();
        *next_id += 1;
        let item = Item { id: *next_id, name: body.name, price: body.price };
        state.items.lock().unwrap().push(item.clone());
        Json(item)
    }

    async fn remove(State(state): State<ServiceState>, Path(id): Path<ItemId>) -> StatusCode {
        let mut items = state.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() < before { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND }
    }

    async fn spawn_service(seed: Vec<Item>) -> (HttpBackend, ServiceState) {
        let state = ServiceState::default();
        *state.next_id.lock().unwrap() = seed.iter().map(|item| item.id).max().unwrap_or(0);
        *state.items.lock().unwrap() = seed;

        let app = Router::new()
            .route("/items", get(list).post(create))
            .route("/items/:id", delete(remove))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        (HttpBackend::new(ApiConfig::new(format!("http://{addr}/"))), state)
    }

    fn apple() -> Item {
        Item { id: 1, name: "Apple".to_string(), price: 1.5 }
    }

    #[tokio::test]
    async fn test_list_items() {
        let (backend, _) = spawn_service(vec![apple()]).await;
        let items = backend.list_items().await.expect("List failed");
        assert_eq!(items, vec![apple()]);
    }

    #[tokio::test]
    async fn test_create_item_returns_assigned_id() {
        let (backend, state) = spawn_service(vec![apple()]).await;
        let created = backend
            .create_item(&NewItem { name: "Pear".to_string(), price: 2.25 })
            .await
            .expect("Create failed");

        assert_eq!(created, Item { id: 2, name: "Pear".to_string(), price: 2.25 });
        assert_eq!(state.items.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_item() {
        let (backend, state) = spawn_service(vec![apple()]).await;
        backend.delete_item(1).await.expect("Delete failed");
        assert!(state.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (backend, _) = spawn_service(Vec::new()).await;
        let err = backend.delete_item(42).await.unwrap_err();
        match err {
            SyncError::Http(e) => assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(ApiConfig::new(format!("http://{addr}")));
        assert!(matches!(backend.list_items().await, Err(SyncError::Http(_))));
    }
}
