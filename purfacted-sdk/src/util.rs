use reqwest::Response;

use crate::Envelope;
use crate::errors::{Error, RequestError, Result};

/// Decode a response body as an [`Envelope`], regardless of the HTTP status.
///
/// The API reports failures through the envelope, often together with a 4xx/5xx
/// status, so the status is only consulted when the body is not valid JSON:
/// non-2xx statuses become `RequestError::Server` carrying the raw body, 2xx
/// statuses become `RequestError::DecodeJson`.
pub(crate) async fn decode_envelope(response: Response) -> Result<Envelope> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<Envelope>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => {
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown Error")
                    .to_string()
            } else {
                body
            };
            Err(Error::from(RequestError::Server { status, message }))
        }
        Err(err) => Err(err.into()),
    }
}
