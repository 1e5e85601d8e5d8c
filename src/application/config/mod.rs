//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::connection::{
    ActiveAuthSet, ConnectionError, ConnectionStyle, EnterpriseConnection,
};

pub const DEFAULT_LOGIN_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_SCOPE: &str = "openid";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 엔터프라이즈 연결 목록(설정 순서가 매칭 순서)
    #[serde(default)]
    pub connections: Vec<ConnectionConfig>,
    /// 연결 이름별 버튼 스타일 override
    #[serde(default)]
    pub custom_styles: HashMap<String, ConnectionStyle>,
    /// 인증 백엔드 설정
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 자격증명 입력(active auth) 화면으로 넘길 연결 이름
    pub active_auth_connections: Option<Vec<String>>,
    /// 로그인 요청 타임아웃(ms)
    pub login_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    pub name: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub style: ConnectionStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// 브라우저 redirect(/authorize) 흐름
    #[default]
    Browser,
    /// HTTP 로그인 엔드포인트 호출
    Http,
}

impl BackendKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Http => "http",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BackendConfig {
    pub kind: Option<BackendKind>,
    /// 인증 서버 도메인(예: tenant.example.com)
    pub domain: Option<String>,
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub scope: Option<String>,
    /// authorize URL을 여는 명령(예: ["xdg-open"])
    pub browser_command: Option<Vec<String>>,
    /// HTTP 백엔드 base URL
    pub api_base: Option<String>,
    /// 고정 토큰(민감정보: 권장하지 않음)
    pub token: Option<String>,
    /// 토큰을 읽을 환경변수 이름
    pub token_env: Option<String>,
}

impl Config {
    /// 설정된 연결을 도메인 엔티티로 변환한다. 이름 중복/빈 도메인은 오류.
    pub fn enterprise_connections(&self) -> Result<Vec<EnterpriseConnection>, ConnectionError> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.connections.len());
        for cfg in &self.connections {
            let connection =
                EnterpriseConnection::new(&cfg.name, cfg.domains.clone(), cfg.style.clone())?;
            if !seen.insert(connection.name().to_string()) {
                return Err(ConnectionError::Duplicate(connection.name().to_string()));
            }
            out.push(connection);
        }
        Ok(out)
    }

    pub fn active_auth_set(&self) -> ActiveAuthSet {
        self.defaults
            .active_auth_connections
            .iter()
            .flatten()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn login_timeout_ms(&self) -> u64 {
        self.defaults
            .login_timeout_ms
            .unwrap_or(DEFAULT_LOGIN_TIMEOUT_MS)
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind.unwrap_or_default()
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);

        // 같은 이름은 나중 정의로 교체하고, 최초 등장 순서는 유지한다.
        for incoming in other.connections {
            if let Some(existing) = self
                .connections
                .iter_mut()
                .find(|c| c.name.trim() == incoming.name.trim())
            {
                *existing = incoming;
            } else {
                self.connections.push(incoming);
            }
        }

        self.custom_styles.extend(other.custom_styles);
        self.backend.merge_from(other.backend);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.active_auth_connections.is_some() {
            self.active_auth_connections = other.active_auth_connections;
        }
        if other.login_timeout_ms.is_some() {
            self.login_timeout_ms = other.login_timeout_ms;
        }
    }
}

impl BackendConfig {
    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }

    pub fn merge_from(&mut self, other: BackendConfig) {
        if other.kind.is_some() {
            self.kind = other.kind;
        }
        if other.domain.is_some() {
            self.domain = other.domain;
        }
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.redirect_uri.is_some() {
            self.redirect_uri = other.redirect_uri;
        }
        if other.scope.is_some() {
            self.scope = other.scope;
        }
        if other.browser_command.is_some() {
            self.browser_command = other.browser_command;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Config {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn later_file_overrides_fields_and_connections_by_name() {
        let mut base = parse(
            r#"{
                "defaults": { "active_auth_connections": ["acme"], "login_timeout_ms": 1000 },
                "connections": [
                    { "name": "acme", "domains": ["acme.com"] },
                    { "name": "globex", "domains": ["globex.com"] }
                ],
                "backend": { "kind": "browser", "domain": "tenant.example.com", "client_id": "abc" }
            }"#,
        );
        let overlay = parse(
            r#"{
                "defaults": { "login_timeout_ms": 5000 },
                "connections": [
                    { "name": "acme", "domains": ["acme.io"] },
                    { "name": "initech", "domains": ["initech.com"] }
                ],
                "backend": { "kind": "http", "api_base": "https://auth.example.com" }
            }"#,
        );

        base.merge_from(overlay);

        assert_eq!(base.login_timeout_ms(), 5000);
        assert!(base.active_auth_set().contains("acme"));
        let names: Vec<&str> = base.connections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["acme", "globex", "initech"]);
        assert_eq!(base.connections[0].domains, ["acme.io"]);
        assert_eq!(base.backend_kind(), BackendKind::Http);
        assert_eq!(base.backend.client_id.as_deref(), Some("abc"));
        assert_eq!(
            base.backend.api_base.as_deref(),
            Some("https://auth.example.com")
        );
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.login_timeout_ms(), DEFAULT_LOGIN_TIMEOUT_MS);
        assert_eq!(cfg.backend_kind(), BackendKind::Browser);
        assert_eq!(cfg.backend.scope(), "openid");
        assert!(cfg.active_auth_set().is_empty());
    }

    #[test]
    fn enterprise_connections_rejects_duplicates_and_empty_domains() {
        let cfg = parse(
            r#"{ "connections": [
                { "name": "acme", "domains": ["acme.com"] },
                { "name": "acme", "domains": ["acme.io"] }
            ] }"#,
        );
        assert_eq!(
            cfg.enterprise_connections(),
            Err(ConnectionError::Duplicate("acme".into()))
        );

        let cfg = parse(r#"{ "connections": [ { "name": "acme" } ] }"#);
        assert_eq!(
            cfg.enterprise_connections(),
            Err(ConnectionError::NoDomains("acme".into()))
        );
    }

    #[test]
    fn style_title_drives_button_title_and_custom_style_wins() {
        let cfg = parse(
            r#"{
                "connections": [ { "name": "acme", "domains": ["acme.com"], "style": { "title": "Acme" } } ],
                "custom_styles": { "acme": { "title": "ACME Corp" } }
            }"#,
        );
        let connections = cfg.enterprise_connections().unwrap();

        assert_eq!(connections[0].button_title(&cfg.custom_styles, true), "ACME CORP");
        assert_eq!(connections[0].button_title(&HashMap::new(), true), "ACME");
        assert_eq!(
            connections[0].button_title(&cfg.custom_styles, false),
            "SIGN UP WITH ACME.COM"
        );
    }
}
