//! Request extractors whose rejections use the [`AppError`] JSON shape.

use axum::extract::{FromRequest, Request};
use axum::Json;
use kortex_core::error::{CoreError, FieldErrors};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Field key used when the body as a whole has the wrong shape.
const BODY_FIELD: &str = "body";

/// JSON body extractor.
///
/// Behaves like [`axum::Json`], but a body that fails to parse or does not
/// match `T` is rejected with a 422 `VALIDATION_ERROR` body instead of axum's
/// plain-text rejection. Type mismatches are reported against the offending
/// field path in `details`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Content type and syntax are checked by axum; the shape is checked here.
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;
        let payload = serde_path_to_error::deserialize(value).map_err(field_error)?;
        Ok(Self(payload))
    }
}

fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let path = err.path().to_string();
    let field = if path == "." { BODY_FIELD.to_string() } else { path };

    let mut fields = FieldErrors::new();
    fields.add(field, err.into_inner().to_string());
    AppError::Core(CoreError::InvalidFields(fields))
}
