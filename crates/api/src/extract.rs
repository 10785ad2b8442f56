//! Request extractors shared by the API handlers.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that reports malformed payloads as 400.
///
/// Axum's stock `Json` rejects undeserializable bodies (unknown question
/// type strings, missing fields, bad syntax) with 422; the API contract
/// maps every validation failure to 400, so handlers take `AppJson`
/// instead and the rejection is converted to [`AppError::BadRequest`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
