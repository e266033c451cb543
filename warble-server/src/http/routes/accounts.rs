//! Account endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warble_core::{Account, NewAccount};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create account request
#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Account response
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            username: a.username,
            email: a.email,
            display_name: a.display_name,
        }
    }
}

/// GET /accounts - list all accounts
async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.accounts.find_all().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// POST /accounts - create an account
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .accounts
        .create(NewAccount {
            username: req.username,
            email: req.email,
            display_name: req.display_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// GET /accounts/{id} - get account by id
async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.accounts.find_by_id(id).await?.ok_or(ApiError::NotFound {
        resource: "account",
        id: id.to_string(),
    })?;

    Ok(Json(account.into()))
}

/// Account routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
}
