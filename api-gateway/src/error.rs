use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

// Everything a request handler can fail with. Upstream transport and
// decode failures both surface as a 502; the only 400 in the system is
// the missing search parameter.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Parâmetro '{0}' é obrigatório")]
    MissingParam(&'static str),

    // Status kept as a bare u16: reqwest and axum link different
    // versions of the http crate, so their StatusCode types differ.
    #[error("{provider} returned status {status}")]
    Upstream { provider: &'static str, status: u16 },

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingParam(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { .. } | GatewayError::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
