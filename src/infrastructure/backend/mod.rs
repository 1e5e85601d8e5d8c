//! 인증 백엔드 구현 모음.
//! 브라우저 redirect(/authorize) 흐름과 HTTP 로그인 엔드포인트를 지원한다.

pub mod browser;
pub mod http;

use anyhow::Result;

use crate::application::config::{BackendKind, Config};
use crate::application::ports::AuthBackend;

pub use browser::BrowserAuthBackend;
pub use http::HttpAuthBackend;

/// 설정된 종류의 백엔드를 생성한다. 필수 값이 빠지면 오류.
pub fn build_backend(config: &Config) -> Result<Box<dyn AuthBackend>> {
    match config.backend_kind() {
        BackendKind::Browser => Ok(Box::new(BrowserAuthBackend::from_config(&config.backend)?)),
        BackendKind::Http => Ok(Box::new(HttpAuthBackend::from_config(
            &config.backend,
            config.login_timeout_ms(),
        )?)),
    }
}
