//! 브라우저 redirect 로그인 백엔드.
//! `/authorize` URL을 만들어 로컬 URL 열기 명령으로 실행한다.

use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use url::Url;

use crate::application::config::BackendConfig;
use crate::application::ports::AuthBackend;
use crate::domain::login::LoginError;
use crate::infrastructure::config::effective_browser_command;

pub struct BrowserAuthBackend {
    authorize_endpoint: Url,
    client_id: String,
    redirect_uri: Option<String>,
    scope: String,
    command: Vec<String>,
}

impl BrowserAuthBackend {
    pub fn from_config(cfg: &BackendConfig) -> Result<Self> {
        let domain = non_empty(cfg.domain.as_deref()).context("backend.domain is required")?;
        let client_id =
            non_empty(cfg.client_id.as_deref()).context("backend.client_id is required")?;

        let base = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", domain.trim_end_matches('/'))
        };
        let authorize_endpoint = Url::parse(&format!("{base}/authorize"))
            .with_context(|| format!("invalid backend.domain: {domain}"))?;

        let command = effective_browser_command(cfg.browser_command.as_deref());

        Ok(Self {
            authorize_endpoint,
            client_id: client_id.to_string(),
            redirect_uri: non_empty(cfg.redirect_uri.as_deref()).map(ToString::to_string),
            scope: cfg.scope().to_string(),
            command,
        })
    }

    /// 연결/이메일 힌트를 포함한 authorize URL.
    pub fn authorize_url(&self, connection: &str, email: Option<&str>) -> Url {
        let mut url = self.authorize_endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.client_id)
                .append_pair("response_type", "code")
                .append_pair("scope", &self.scope)
                .append_pair("connection", connection);
            if let Some(redirect_uri) = &self.redirect_uri {
                query.append_pair("redirect_uri", redirect_uri);
            }
            if let Some(email) = email {
                query.append_pair("login_hint", email);
            }
        }
        url
    }

    async fn open(&self, url: &Url) -> Result<(), LoginError> {
        let program = &self.command[0];
        let status = Command::new(program)
            .args(&self.command[1..])
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|err| {
                LoginError::Backend(format!("failed to launch browser command '{program}': {err}"))
            })?;

        if !status.success() {
            return Err(LoginError::Backend(format!(
                "browser command '{program}' exited with {status}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for BrowserAuthBackend {
    async fn login(&self, connection: &str, email: Option<&str>) -> Result<(), LoginError> {
        let url = self.authorize_url(connection, email);
        tracing::debug!(url = %url, "opening enterprise authorize url");
        self.open(&url).await
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domain: &str) -> BackendConfig {
        BackendConfig {
            domain: Some(domain.to_string()),
            client_id: Some("client-1".to_string()),
            redirect_uri: Some("http://localhost:3000/callback".to_string()),
            browser_command: Some(vec!["true".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn authorize_url_carries_connection_and_login_hint() {
        let backend = BrowserAuthBackend::from_config(&config("tenant.example.com/")).unwrap();
        let url = backend.authorize_url("acme", Some("bob+sso@acme.com"));

        assert_eq!(url.host_str(), Some("tenant.example.com"));
        assert_eq!(url.path(), "/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("connection".into(), "acme".into())));
        assert!(pairs.contains(&("login_hint".into(), "bob+sso@acme.com".into())));
        assert!(pairs.contains(&("scope".into(), "openid".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "http://localhost:3000/callback".into()
        )));
        assert!(url.as_str().contains("bob%2Bsso%40acme.com"));
    }

    #[test]
    fn login_hint_is_omitted_without_email() {
        let backend = BrowserAuthBackend::from_config(&config("https://auth.local")).unwrap();
        let url = backend.authorize_url("acme", None);
        assert_eq!(url.scheme(), "https");
        assert!(!url.query_pairs().any(|(k, _)| k == "login_hint"));
    }

    #[test]
    fn missing_client_id_is_a_config_error() {
        let cfg = BackendConfig {
            domain: Some("tenant.example.com".into()),
            ..Default::default()
        };
        let err = BrowserAuthBackend::from_config(&cfg).err().unwrap();
        assert!(err.to_string().contains("backend.client_id"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_browser_command_is_a_backend_error() {
        let mut cfg = config("tenant.example.com");
        cfg.browser_command = Some(vec!["false".to_string()]);
        let backend = BrowserAuthBackend::from_config(&cfg).unwrap();

        let err = backend.login("acme", None).await.unwrap_err();
        assert!(matches!(err, LoginError::Backend(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_browser_command_launches() {
        let backend = BrowserAuthBackend::from_config(&config("tenant.example.com")).unwrap();
        assert_eq!(backend.login("acme", Some("bob@acme.com")).await, Ok(()));
    }
}
