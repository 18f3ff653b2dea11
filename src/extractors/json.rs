//! JSON request body extractor that answers 400, not 422, when the payload does not fit the type.

use crate::error::Failure;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, except a body that parses but does not fit the target type
/// (e.g. `{"name": 5}`) is a 400 instead of a 422.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "rejected request body");
                Err(rejection_failure(rejection))
            }
        }
    }
}

fn rejection_failure(rejection: JsonRejection) -> Failure {
    let status = match rejection.status() {
        StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
        other => other,
    };
    Failure::Message {
        status,
        body: rejection.body_text(),
    }
}
