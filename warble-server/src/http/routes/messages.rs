//! Message endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warble_core::{Message, NewMessage};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create message request
#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
    pub author_id: Uuid,
}

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            content: m.content,
            author_id: m.author_id,
        }
    }
}

/// GET /messages - list all messages
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.messages.find_all().await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// POST /messages - create a message
async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let message = state
        .messages
        .create(NewMessage {
            content: req.content,
            author_id: req.author_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// GET /messages/{id} - get message by id
async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.messages.find_by_id(id).await?.ok_or(ApiError::NotFound {
        resource: "message",
        id: id.to_string(),
    })?;

    Ok(Json(message.into()))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/{id}", get(get_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemStore, Store};
    use warble_core::{DomainError, NewAccount};

    fn state() -> State<Arc<AppState>> {
        let store: Arc<dyn Store> = Arc::new(MemStore::new());
        State(Arc::new(AppState::new(store)))
    }

    async fn stored_author(state: &State<Arc<AppState>>) -> Uuid {
        state
            .accounts
            .create(NewAccount {
                username: "foo".to_owned(),
                email: "jd@mail.com".to_owned(),
                display_name: None,
            })
            .await
            .expect("create author")
            .id
    }

    #[tokio::test]
    async fn create_returns_201_and_lists_one_message() {
        let state = state();
        let author_id = stored_author(&state).await;

        let (status, Json(body)) = create_message(
            state.clone(),
            Json(CreateMessageRequest {
                content: "Hello World".to_owned(),
                author_id,
            }),
        )
        .await
        .expect("create");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.content, "Hello World");
        assert_eq!(body.author_id, author_id);

        let Json(all) = list_messages(state).await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "Hello World");
    }

    #[tokio::test]
    async fn unknown_author_maps_to_validation_error() {
        let state = state();

        let err = create_message(
            state.clone(),
            Json(CreateMessageRequest {
                content: "orphan".to_owned(),
                author_id: Uuid::new_v4(),
            }),
        )
        .await
        .expect_err("invalid author");

        assert!(matches!(
            err,
            ApiError::Validation(DomainError::InvalidAuthor)
        ));

        let Json(all) = list_messages(state).await.expect("list");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn unknown_message_is_404() {
        let state = state();
        let err = get_message(state, Path(Uuid::new_v4()))
            .await
            .expect_err("missing message");
        assert!(matches!(err, ApiError::NotFound { resource: "message", .. }));
    }

    #[tokio::test]
    async fn get_after_create_round_trips() {
        let state = state();
        let author_id = stored_author(&state).await;
        let (_, Json(created)) = create_message(
            state.clone(),
            Json(CreateMessageRequest {
                content: "ping".to_owned(),
                author_id,
            }),
        )
        .await
        .expect("create");

        let Json(found) = get_message(state, Path(created.id)).await.expect("get");
        assert_eq!(found.id, created.id);
        assert_eq!(found.content, "ping");
    }
}
