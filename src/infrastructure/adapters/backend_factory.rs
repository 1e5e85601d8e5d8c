//! 인증 백엔드 팩토리 포트 구현 어댑터.

use anyhow::{Context, Result};

use crate::application::config::Config;
use crate::application::ports::{AuthBackend, BackendFactory};
use crate::infrastructure::backend;

/// 설정의 `backend.kind`에 맞는 백엔드를 생성한다.
pub struct BackendFactoryAdapter;

impl BackendFactory for BackendFactoryAdapter {
    fn build(&self, config: &Config) -> Result<Box<dyn AuthBackend>> {
        backend::build_backend(config).with_context(|| {
            format!(
                "failed to configure {} authentication backend",
                config.backend_kind().code()
            )
        })
    }
}
