use axum::{extract::State, Json};

use crate::{
    transactions::{models::home_feed::HomeFeed, service},
    AppState,
};

use super::models::api_error::ApiError;

pub async fn get_root(State(state): State<AppState>) -> Result<Json<HomeFeed>, ApiError> {
    match service::get_home_feed(&state.pool).await {
        Ok(home_feed) => Ok(Json(home_feed)),
        Err(e) => Err(e),
    }
}
