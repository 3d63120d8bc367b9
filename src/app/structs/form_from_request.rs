use crate::app::models::api_error::ApiError;
use axum::Form;
use axum_macros::FromRequest;

#[derive(FromRequest)]
#[from_request(via(Form), rejection(ApiError))]
pub struct FormFromRequest<T>(pub T);
