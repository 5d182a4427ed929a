use std::collections::BTreeMap;

use actix_multipart::Multipart;
use actix_web::{web, HttpMessage, HttpRequest};
use futures_util::StreamExt;

use crate::{
    api_errors::ApiError,
    entities::profile::{FileHandle, RawProfileInput, RawValue},
};

/// Size caps applied while reading a submission body.
#[derive(Debug, Clone, Copy)]
pub struct FormLimits {
    pub max_text_field_bytes: usize,
    pub max_request_bytes: usize,
}

/// Decodes a submission body into a raw form snapshot.
///
/// Accepts `multipart/form-data` (browser `FormData`) and `application/json`.
pub async fn read_submission(
    req: &HttpRequest,
    payload: web::Payload,
    limits: FormLimits,
) -> Result<RawProfileInput, ApiError> {
    let content_type = req.content_type().to_ascii_lowercase();

    match content_type.as_str() {
        "multipart/form-data" => read_multipart(Multipart::new(req.headers(), payload), limits).await,
        "application/json" => read_json(payload, limits).await,
        other => Err(ApiError::InvalidContentType(format!(
            "expected multipart/form-data or application/json, got '{}'",
            other
        ))),
    }
}

/// Reads every part of a multipart body.
///
/// - parts with a filename become [`RawValue::File`]; the bytes are counted, not kept
/// - an empty filename with no bytes (no file chosen) is skipped
/// - everything else must be UTF-8 text
/// - a repeated name keeps the last value
pub async fn read_multipart(mut multipart: Multipart, limits: FormLimits) -> Result<RawProfileInput, ApiError> {
    let mut raw = RawProfileInput::new();
    let mut total_bytes = 0usize;

    while let Some(item) = multipart.next().await {
        let mut field = item?;

        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_owned),
                cd.get_filename().map(str::to_owned),
            ),
            None => (None, None),
        };
        let Some(name) = name else {
            return Err(ApiError::BadRequest("Form part without a field name".to_string()));
        };
        let content_type = field.content_type().map(|mime| mime.to_string());

        match file_name {
            Some(file_name) => {
                let mut size_bytes = 0u64;
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    total_bytes += chunk.len();
                    check_total(total_bytes, limits)?;
                    size_bytes += chunk.len() as u64;
                }

                if file_name.is_empty() && size_bytes == 0 {
                    tracing::debug!(field = %name, "Skipping empty file part");
                    continue;
                }

                let handle = FileHandle::new(Some(file_name), content_type.unwrap_or_default(), size_bytes);
                raw.insert(name, handle);
            }
            None => {
                let mut buf = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    if buf.len() + chunk.len() > limits.max_text_field_bytes {
                        return Err(ApiError::PayloadTooLarge(format!(
                            "field '{}' exceeds {} bytes",
                            name, limits.max_text_field_bytes
                        )));
                    }
                    total_bytes += chunk.len();
                    check_total(total_bytes, limits)?;
                    buf.extend_from_slice(&chunk);
                }

                let text = String::from_utf8(buf)
                    .map_err(|_| ApiError::BadRequest(format!("field '{}' is not valid UTF-8", name)))?;
                raw.insert(name, text);
            }
        }
    }

    Ok(raw)
}

/// Reads a JSON object of field name → string | file metadata. `null` means absent.
pub async fn read_json(mut payload: web::Payload, limits: FormLimits) -> Result<RawProfileInput, ApiError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        check_total(body.len() + chunk.len(), limits)?;
        body.extend_from_slice(&chunk);
    }

    let fields: BTreeMap<String, Option<RawValue>> = serde_json::from_slice(&body)?;
    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect())
}

fn check_total(total_bytes: usize, limits: FormLimits) -> Result<(), ApiError> {
    if total_bytes > limits.max_request_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "request exceeds {} bytes",
            limits.max_request_bytes
        )));
    }
    Ok(())
}
