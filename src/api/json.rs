use crate::errors::Error;
use axum::extract::FromRequest;

/// `axum::Json`, but rejections become [`Error::MalformedBody`] so a body that is not
/// a readable receipt gets the same 422 error shape as a receipt that fails
/// validation.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
