//! Request extractors that reject with [`AppError`].
//!
//! axum's own `Json` and `Query` answer malformed input with a plain-text
//! body. These wrappers run the same extraction but turn the rejection into
//! the usual JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
