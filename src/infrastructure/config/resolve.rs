//! 설정 값(token/env)을 실제 런타임 값으로 해석하는 유틸리티.

use std::env;

use crate::application::config::BackendConfig;

/// 백엔드 토큰 해석 결과.
#[derive(Debug, Clone, Default)]
pub struct TokenResolution {
    pub token: Option<String>,
    pub source: Option<String>,
}

/// inline 토큰 > 환경변수 순으로 HTTP 백엔드 토큰을 해석한다.
pub fn resolve_backend_token(cfg: &BackendConfig) -> TokenResolution {
    if let Some(token) = cfg.token.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return TokenResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let Some(env_name) = cfg.token_env.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
        return TokenResolution::default();
    };

    match env::var(env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => TokenResolution {
            token: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => TokenResolution {
            token: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}
