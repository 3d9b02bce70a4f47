use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::Method,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::schema::Validate;

/// Validated procedure input.
///
/// Queries (`GET`) read their input from the query string, mutations from a
/// JSON body. Decoding and validation both complete before the handler runs,
/// so handlers only ever see well-formed input.
#[derive(Debug)]
pub struct Input<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Input<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if req.method() == Method::GET {
            let (mut parts, _body) = req.into_parts();
            let Query(value) = Query::<T>::from_request_parts(&mut parts, state)
                .await
                .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;
            value
        };

        value.validate()?;
        Ok(Input(value))
    }
}
