//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_backend_token;
use super::utils::{command_exists, effective_browser_command};
use crate::application::config::{BackendKind, Config, DefaultsConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub login_timeout_ms: u64,
    pub connections: Vec<ConnectionInspection>,
    pub backend: BackendInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionInspection {
    pub name: String,
    pub domains: Vec<String>,
    pub active_auth: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackendInspection {
    pub kind: String,
    pub ready: bool,
    /// 준비되지 않았을 때 빠진 설정 키
    pub missing: Vec<String>,
    pub browser_command: Option<Vec<String>>,
    pub browser_command_available: Option<bool>,
    pub token_source: Option<String>,
    pub token_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let active = config.active_auth_set();
        let connections = config
            .connections
            .iter()
            .map(|c| ConnectionInspection {
                name: c.name.clone(),
                domains: c.domains.clone(),
                active_auth: active.contains(c.name.trim()),
            })
            .collect();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            login_timeout_ms: config.login_timeout_ms(),
            connections,
            backend: BackendInspection::from_config(config),
        }
    }
}

impl BackendInspection {
    fn from_config(config: &Config) -> Self {
        let cfg = &config.backend;
        let kind = config.backend_kind();
        let token = resolve_backend_token(cfg);

        let required: Vec<(&str, &Option<String>)> = match kind {
            BackendKind::Browser => vec![
                ("backend.domain", &cfg.domain),
                ("backend.client_id", &cfg.client_id),
            ],
            BackendKind::Http => vec![("backend.api_base", &cfg.api_base)],
        };
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(key, _)| key.to_string())
            .collect();

        let (browser_command, browser_command_available) = match kind {
            BackendKind::Browser => {
                let command = effective_browser_command(cfg.browser_command.as_deref());
                let available = command_exists(&command[0]);
                (Some(command), Some(available))
            }
            BackendKind::Http => (None, None),
        };

        Self {
            kind: kind.code().to_string(),
            ready: missing.is_empty() && browser_command_available.unwrap_or(true),
            missing,
            browser_command,
            browser_command_available,
            token_source: token.source,
            token_resolved: token.token.is_some(),
        }
    }
}
