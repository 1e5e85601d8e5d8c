//! HTTP 로그인 엔드포인트 백엔드.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::application::config::BackendConfig;
use crate::application::ports::AuthBackend;
use crate::domain::login::LoginError;
use crate::infrastructure::config::resolve_backend_token;

pub struct HttpAuthBackend {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl HttpAuthBackend {
    pub fn from_config(cfg: &BackendConfig, timeout_ms: u64) -> Result<Self> {
        let api_base = cfg
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .context("backend.api_base is required for the http backend")?
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base,
            token: resolve_backend_token(cfg).token,
        })
    }

    fn login_endpoint(&self, connection: &str) -> String {
        // 연결 이름은 경로 세그먼트이므로 URL 인코딩한다.
        format!(
            "{}/enterprise/{}/login",
            self.api_base,
            utf8_percent_encode(connection, NON_ALPHANUMERIC)
        )
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, connection: &str, email: Option<&str>) -> Result<(), LoginError> {
        let mut request = self
            .client
            .post(self.login_endpoint(connection))
            .json(&json!({ "email": email }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| LoginError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LoginError::Network(format!("failed to read login response: {err}")))?;

        if status.is_success() {
            return Ok(());
        }
        Err(classify_failure(status, &body))
    }
}

/// 실패 응답을 LoginError로 분류한다.
fn classify_failure(status: StatusCode, body: &str) -> LoginError {
    let payload: Option<Value> = serde_json::from_str(body).ok();
    let code = payload
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str);

    if matches!(code, Some("cancelled" | "login_cancelled")) {
        return LoginError::Cancelled;
    }

    let description = payload
        .as_ref()
        .and_then(|v| {
            ["error_description", "message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str))
        })
        .unwrap_or(body)
        .trim();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN if !description.is_empty() => {
            LoginError::Rejected(description.to_string())
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LoginError::Rejected(status.to_string())
        }
        _ if description.is_empty() => LoginError::Backend(status.to_string()),
        _ => LoginError::Backend(format!("{status}: {description}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_connection_name() {
        let backend = HttpAuthBackend::from_config(
            &BackendConfig {
                api_base: Some("https://auth.example.com/".into()),
                ..Default::default()
            },
            1000,
        )
        .unwrap();

        assert_eq!(
            backend.login_endpoint("acme corp/eu"),
            "https://auth.example.com/enterprise/acme%20corp%2Feu/login"
        );
    }

    #[test]
    fn missing_api_base_is_a_config_error() {
        let err = HttpAuthBackend::from_config(&BackendConfig::default(), 1000)
            .err()
            .unwrap();
        assert!(err.to_string().contains("backend.api_base"));
    }

    #[test]
    fn unauthorized_maps_to_rejected_with_description() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"invalid_grant","error_description":"Wrong email or password."}"#,
        );
        assert_eq!(err, LoginError::Rejected("Wrong email or password.".into()));
    }

    #[test]
    fn cancelled_payload_maps_to_cancelled() {
        let err = classify_failure(StatusCode::BAD_REQUEST, r#"{"error":"cancelled"}"#);
        assert_eq!(err, LoginError::Cancelled);
    }

    #[test]
    fn other_failures_keep_status_and_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(
            err,
            LoginError::Backend("502 Bad Gateway: upstream down".into())
        );

        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err, LoginError::Backend("500 Internal Server Error".into()));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let backend = HttpAuthBackend::from_config(
            &BackendConfig {
                api_base: Some("http://127.0.0.1:9".into()),
                ..Default::default()
            },
            500,
        )
        .unwrap();

        let err = backend.login("acme", Some("bob@acme.com")).await.unwrap_err();
        assert!(matches!(err, LoginError::Network(_)));
    }
}
