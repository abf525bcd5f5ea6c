use crate::{api::models::users::UserResponse, errors::Error, AppState};
use axum::{extract::State, response::Json};

// GET /users - List users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, Error> {
    let users = state.store.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
