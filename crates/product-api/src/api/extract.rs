//! Request extractors that turn malformed input into 422 responses.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

use super::error::ApiError;
use crate::model::{FromBody, ProductId, Validate, ValidationErrors};

const PRODUCT_ID_LOC: &[&str] = &["path", "product_id"];

/// A positive product id taken from the `{product_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdParam(pub ProductId);

impl<S> FromRequestParts<S> for ProductIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationErrors::single(PRODUCT_ID_LOC, "missing", e.body_text()))?;
        Ok(Self(parse_product_id(&raw)?))
    }
}

/// Parses a path segment as a product id: an integer greater than zero.
///
/// Ids are minted by a counter that starts at 1, so a positive integer past `u64::MAX`
/// names no record; it is clamped to `u64::MAX` and the lookup reports it as not found.
pub fn parse_product_id(raw: &str) -> Result<ProductId, ValidationErrors> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationErrors::single(
            PRODUCT_ID_LOC,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        ));
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(ValidationErrors::single(
            PRODUCT_ID_LOC,
            "greater_than",
            "Input should be greater than 0",
        ));
    }
    // Only overflow can fail here
    Ok(ProductId(digits.parse::<u64>().unwrap_or(u64::MAX)))
}

/// A JSON body that has been read into its payload type and then passed its [`Validate`]
/// checks.
///
/// Syntax errors and a missing JSON content type are reported at `["body"]`. Missing and
/// mistyped fields are reported at `["body", <field>]` by [`FromBody`].
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: FromBody + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        let payload = T::from_body(&body)?;
        payload.validate()?;
        Ok(Self(payload))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let kind = match &rejection {
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "missing_content_type",
        _ => "body_error",
    };
    ApiError::Validation(ValidationErrors::single(&["body"], kind, rejection.body_text()))
}
